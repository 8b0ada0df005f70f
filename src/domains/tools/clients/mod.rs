//! Outbound collaborators used by the tools.
//!
//! - `entropy`: remote public randomness (drand)
//! - `page`: single-shot page retrieval
//! - `article`: readability extraction and markdown rendering

pub mod article;
pub mod entropy;
pub mod page;

#[cfg(test)]
pub(crate) mod testing;

use std::sync::Arc;

pub use article::{Article, ArticleError, extract_article};
pub use entropy::{DEFAULT_ENTROPY_URL, DrandClient, EntropyError, EntropySource};
pub use page::{FetchError, FetchedPage, HttpPageFetcher, PageFetcher};

use crate::core::config::ToolsConfig;

/// Collaborators injected into the tools that perform I/O.
#[derive(Clone)]
pub struct ToolServices {
    pub entropy: Arc<dyn EntropySource>,
    pub fetcher: Arc<dyn PageFetcher>,
}

impl ToolServices {
    pub fn new(entropy: Arc<dyn EntropySource>, fetcher: Arc<dyn PageFetcher>) -> Self {
        Self { entropy, fetcher }
    }

    /// Build the reqwest-backed services described by `config`.
    pub fn from_config(config: &ToolsConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            entropy: Arc::new(DrandClient::new(client.clone(), config.entropy_url.clone())),
            fetcher: Arc::new(HttpPageFetcher::new(client)),
        })
    }
}

impl std::fmt::Debug for ToolServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolServices").finish_non_exhaustive()
    }
}
