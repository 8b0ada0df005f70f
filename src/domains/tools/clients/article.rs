//! Readable article extraction and markdown rendering.
//!
//! `dom_smoothie` parses the page and runs the readability heuristics;
//! `html2text` renders the extracted article HTML as markdown-style text.

use dom_smoothie::Readability;
use thiserror::Error;
use tracing::debug;

/// Line width used when rendering markdown.
const MARKDOWN_WIDTH: usize = 120;

/// Errors raised while turning a page into an article.
#[derive(Debug, Error)]
pub enum ArticleError {
    #[error("failed to parse document: {0}")]
    Parse(String),

    #[error("failed to render markdown: {0}")]
    Render(String),
}

/// A readable article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    pub markdown: String,
}

/// Extract the main article of `html` and render it as markdown.
///
/// Returns `Ok(None)` when the page has no usable article content.
pub fn extract_article(html: &str, document_url: &str) -> Result<Option<Article>, ArticleError> {
    let mut readability = Readability::new(html, Some(document_url), None)
        .map_err(|e| ArticleError::Parse(e.to_string()))?;

    let article = match readability.parse() {
        Ok(article) => article,
        Err(e) => {
            debug!("Readability found no article: {}", e);
            return Ok(None);
        }
    };

    let content = article.content.to_string();
    if content.trim().is_empty() || article.text_content.to_string().trim().is_empty() {
        return Ok(None);
    }

    let markdown = html2text::from_read(content.as_bytes(), MARKDOWN_WIDTH)
        .map_err(|e| ArticleError::Render(e.to_string()))?;
    let markdown = markdown.trim().to_string();
    if markdown.is_empty() {
        return Ok(None);
    }

    Ok(Some(Article {
        title: article.title.trim().to_string(),
        markdown,
    }))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// A page with enough prose for readability to accept it.
    pub(crate) const ARTICLE_HTML: &str = r#"<!DOCTYPE html>
<html>
<head><title>Rust Ownership Explained</title></head>
<body>
  <nav><a href="/">Home</a> | <a href="/blog">Blog</a></nav>
  <article>
    <h1>Rust Ownership Explained</h1>
    <p>Every value in Rust has a single owner. When the owner goes out of scope the value is dropped,
       and the memory it used is returned without any garbage collector being involved at all.</p>
    <p>Values can be moved from one owner to another. After a move the previous binding can no longer
       be used, which the compiler checks statically so that use-after-free bugs never reach production.</p>
    <p>Borrowing lets code read or modify a value without taking ownership. Shared references allow many
       readers, while a mutable reference grants exclusive access, and the borrow checker enforces this.</p>
    <p>Lifetimes describe how long references stay valid. Most of the time they are inferred, but function
       signatures sometimes need explicit annotations to relate the lifetimes of inputs and outputs.</p>
  </article>
  <footer>Copyright 2024</footer>
</body>
</html>"#;

    #[test]
    fn test_extracts_article() {
        let article = extract_article(ARTICLE_HTML, "https://example.com/ownership")
            .unwrap()
            .expect("article should be extracted");
        assert_eq!(article.title, "Rust Ownership Explained");
        assert!(article.markdown.contains("owner"));
        assert!(article.markdown.contains("Lifetimes"));
    }

    #[test]
    fn test_empty_page_has_no_article() {
        let html = "<html><head></head><body></body></html>";
        let article = extract_article(html, "https://example.com/empty").unwrap();
        assert!(article.is_none());
    }
}
