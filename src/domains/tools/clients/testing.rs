//! Test doubles for the outbound collaborators.

use async_trait::async_trait;
use reqwest::Url;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{
    EntropyError, EntropySource, FetchError, FetchedPage, PageFetcher, ToolServices,
};

/// Entropy source returning a canned answer.
pub(crate) struct StubEntropy {
    randomness: Option<String>,
    calls: AtomicUsize,
}

impl StubEntropy {
    pub(crate) fn returning(randomness: impl Into<String>) -> Self {
        Self {
            randomness: Some(randomness.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            randomness: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EntropySource for StubEntropy {
    async fn randomness(&self) -> Result<String, EntropyError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.randomness
            .clone()
            .ok_or_else(|| EntropyError::Unavailable("stubbed outage".to_string()))
    }
}

/// Page fetcher returning a canned page or failure.
pub(crate) struct StubFetcher {
    page: Option<FetchedPage>,
    calls: AtomicUsize,
}

impl StubFetcher {
    pub(crate) fn page(status: u16, body: impl Into<String>) -> Self {
        Self {
            page: Some(FetchedPage {
                status,
                body: body.into(),
            }),
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn unreachable() -> Self {
        Self {
            page: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PageFetcher for StubFetcher {
    async fn fetch(&self, _url: &Url) -> Result<FetchedPage, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.page
            .clone()
            .ok_or_else(|| FetchError::Unreachable("connection refused".to_string()))
    }
}

/// Services that never touch the network.
pub(crate) fn offline_services() -> ToolServices {
    ToolServices::new(
        Arc::new(StubEntropy::failing()),
        Arc::new(StubFetcher::unreachable()),
    )
}
