//! URL reading tool.
//!
//! Fetches a page, extracts its main article and returns it as markdown
//! prefixed by the article title.

use reqwest::Url;
use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::Deserialize;
use std::borrow::Cow;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::domains::tools::ToolResult;
use crate::domains::tools::clients::{PageFetcher, extract_article};

pub const NO_READABLE_CONTENT: &str = "Error: Unable to extract readable content from the page.";

/// An absolute URL, validated on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct WebUrl(Url);

impl WebUrl {
    pub fn as_url(&self) -> &Url {
        &self.0
    }
}

impl TryFrom<String> for WebUrl {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Url::parse(&value)
            .map(Self)
            .map_err(|e| format!("invalid URL {:?}: {}", value, e))
    }
}

impl JsonSchema for WebUrl {
    fn schema_name() -> Cow<'static, str> {
        "WebUrl".into()
    }

    fn inline_schema() -> bool {
        true
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "string",
            "format": "uri"
        })
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct FetchUrlParams {
    #[schemars(description = "The URL to fetch content from")]
    pub url: WebUrl,
}

pub struct FetchUrlTool;

impl FetchUrlTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "fetch_url";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Fetch content from a specified URL and return its main article as markdown, preceded by the article title";

    #[instrument(skip_all, fields(url = %params.url.as_url()))]
    pub async fn execute(params: FetchUrlParams, fetcher: Arc<dyn PageFetcher>) -> ToolResult {
        let url = params.url.as_url();

        let page = match fetcher.fetch(url).await {
            Ok(page) => page,
            Err(e) => {
                warn!("Fetch failed: {}", e);
                return ToolResult::failure(format!("Error: Failed to fetch URL: {}", e));
            }
        };

        if !page.is_success() {
            warn!("Fetch returned HTTP {}", page.status);
            return ToolResult::failure(format!("Error: HTTP error! Status: {}", page.status));
        }

        match extract_article(&page.body, url.as_str()) {
            Ok(Some(article)) => {
                info!(
                    title = %article.title,
                    chars = article.markdown.len(),
                    "Extracted article"
                );
                ToolResult::success(format!("{}\n\n{}", article.title, article.markdown))
            }
            Ok(None) => ToolResult::failure(NO_READABLE_CONTENT),
            Err(e) => {
                warn!("Article extraction failed: {}", e);
                ToolResult::failure(format!("Error: Failed to fetch URL: {}", e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::clients::article::tests::ARTICLE_HTML;
    use crate::domains::tools::clients::testing::StubFetcher;

    fn params(url: &str) -> FetchUrlParams {
        serde_json::from_value(serde_json::json!({ "url": url })).unwrap()
    }

    #[test]
    fn test_params_reject_invalid_url() {
        let result: Result<FetchUrlParams, _> =
            serde_json::from_value(serde_json::json!({ "url": "not a url" }));
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_non_success_status() {
        let fetcher = Arc::new(StubFetcher::page(404, ""));
        let result = FetchUrlTool::execute(params("https://example.com/missing"), fetcher.clone()).await;
        assert_eq!(result, ToolResult::failure("Error: HTTP error! Status: 404"));
        assert_eq!(fetcher.calls(), 1);
    }

    #[tokio::test]
    async fn test_unreadable_page() {
        let fetcher = Arc::new(StubFetcher::page(200, "<html><head></head><body></body></html>"));
        let result = FetchUrlTool::execute(params("https://example.com/empty"), fetcher).await;
        assert_eq!(result, ToolResult::failure(NO_READABLE_CONTENT));
    }

    #[tokio::test]
    async fn test_unreachable_host() {
        let fetcher = Arc::new(StubFetcher::unreachable());
        let result = FetchUrlTool::execute(params("https://example.invalid/"), fetcher).await;
        assert!(result.is_failure());
        assert_eq!(result.text(), "Error: Failed to fetch URL: connection refused");
    }

    #[tokio::test]
    async fn test_article_is_rendered() {
        let fetcher = Arc::new(StubFetcher::page(200, ARTICLE_HTML));
        let result = FetchUrlTool::execute(params("https://example.com/ownership"), fetcher).await;
        assert!(result.is_success(), "unexpected failure: {}", result.text());

        let text = result.text();
        assert!(text.starts_with("Rust Ownership Explained\n\n"));
        let body = &text["Rust Ownership Explained\n\n".len()..];
        assert!(!body.trim().is_empty());
        assert!(body.contains("borrow"));
    }
}
