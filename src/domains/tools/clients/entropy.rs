//! Public randomness source backed by a drand beacon.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Default drand beacon endpoint.
pub const DEFAULT_ENTROPY_URL: &str = "https://drand.cloudflare.com/public/latest";

/// Errors raised while obtaining remote randomness.
#[derive(Debug, Error)]
pub enum EntropyError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("malformed randomness: {0}")]
    Malformed(String),

    #[error("entropy source unavailable: {0}")]
    Unavailable(String),
}

/// A source of hex-encoded randomness.
#[async_trait]
pub trait EntropySource: Send + Sync {
    /// Fetch a fresh hex string of random bytes.
    async fn randomness(&self) -> Result<String, EntropyError>;
}

/// Latest beacon as published by drand. Only the fields we read.
#[derive(Debug, Deserialize)]
struct Beacon {
    round: u64,
    randomness: String,
}

/// drand HTTP client.
#[derive(Debug, Clone)]
pub struct DrandClient {
    client: reqwest::Client,
    endpoint: String,
}

impl DrandClient {
    pub fn new(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl EntropySource for DrandClient {
    async fn randomness(&self) -> Result<String, EntropyError> {
        let beacon: Beacon = self
            .client
            .get(&self.endpoint)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        debug!(round = beacon.round, "Fetched drand beacon");

        if beacon.randomness.is_empty() || !beacon.randomness.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(EntropyError::Malformed(format!(
                "round {} randomness is not a hex string",
                beacon.round
            )));
        }

        Ok(beacon.randomness)
    }
}
