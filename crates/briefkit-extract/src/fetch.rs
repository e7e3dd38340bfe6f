//! HTTP fetching for URL sources.
//!
//! Fetch failures never propagate past this module as errors on the source
//! itself: a failed source still yields an [`ExtractedContent`] whose
//! diagnostic text records what went wrong, so one dead URL cannot sink a
//! multi-source run.

use std::time::Duration;

use reqwest::Client;
use url::Url;

use briefkit_core::{AppConfig, ExtractedContent, SourceKind};

use crate::error::ExtractError;
use crate::{html, text};

/// One source's extraction outcome. `error` is set when the fetch or parse
/// degraded the record; the reconciler skips errored sources.
#[derive(Debug, Clone)]
pub struct SourceExtraction {
    pub content: ExtractedContent,
    pub error: Option<String>,
}

impl SourceExtraction {
    fn ok(content: ExtractedContent) -> Self {
        Self { content, error: None }
    }

    fn failed(content: ExtractedContent, error: String) -> Self {
        Self { content, error: Some(error) }
    }
}

/// HTTP client for fetching marketing pages.
///
/// Applies the configured timeout and `User-Agent` to every request and
/// treats non-2xx statuses as typed errors.
pub struct FetchClient {
    client: Client,
    raw_text_max: usize,
}

impl FetchClient {
    /// Creates a `FetchClient` from the application config.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(config: &AppConfig) -> Result<Self, ExtractError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.fetch_timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self {
            client,
            raw_text_max: config.raw_text_max_chars,
        })
    }

    /// Fetches one page and extracts structured content from it.
    ///
    /// Failures (bad URL, transport error, non-2xx status) produce a record
    /// whose structured fields are empty and whose `raw_text` describes the
    /// error; they are reported through [`SourceExtraction::error`], not as
    /// a `Result` error.
    pub async fn extract_url(&self, raw_url: &str) -> SourceExtraction {
        let url = normalize_url(raw_url);
        match self.fetch_page(&url).await {
            Ok(body) => {
                tracing::info!(url = %url, bytes = body.len(), "fetched source page");
                SourceExtraction::ok(html::extract(&body, &url, self.raw_text_max))
            }
            Err(err) => {
                tracing::warn!(url = %url, error = %err, "source fetch failed");
                let mut record = ExtractedContent::new(&url, SourceKind::Url);
                record.raw_text = format!("Error fetching URL: {err}");
                SourceExtraction::failed(record, err.to_string())
            }
        }
    }

    /// Runs the text extractors over an already-extracted document.
    ///
    /// Infallible counterpart to [`extract_url`](Self::extract_url): the
    /// text pipeline has no transport to fail on.
    #[must_use]
    pub fn extract_text(&self, text_body: &str, filename: &str) -> SourceExtraction {
        SourceExtraction::ok(text::extract(text_body, filename, self.raw_text_max))
    }

    async fn fetch_page(&self, url: &str) -> Result<String, ExtractError> {
        Url::parse(url).map_err(|e| ExtractError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ExtractError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response.text().await?)
    }
}

/// Prepends `https://` to scheme-less URLs so users can paste bare domains.
#[must_use]
pub fn normalize_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_adds_https_to_bare_domains() {
        assert_eq!(normalize_url("acme.example.com"), "https://acme.example.com");
        assert_eq!(normalize_url("  acme.example.com "), "https://acme.example.com");
    }

    #[test]
    fn normalize_keeps_explicit_schemes() {
        assert_eq!(normalize_url("http://acme.example.com"), "http://acme.example.com");
        assert_eq!(normalize_url("https://acme.example.com/x"), "https://acme.example.com/x");
    }
}
