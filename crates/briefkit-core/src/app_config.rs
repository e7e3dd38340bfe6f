//! Application configuration resolved from environment variables.

/// Runtime configuration shared across the extraction pipeline.
///
/// All fields have defaults; no variable is required. See [`crate::config`]
/// for the env-var names and parsing.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Default log filter when `RUST_LOG` is unset.
    pub log_level: String,

    /// Per-request timeout for URL source fetches, in seconds.
    pub fetch_timeout_secs: u64,

    /// `User-Agent` sent when fetching URL sources. Defaults to a browser
    /// profile; many marketing sites block obvious bot agents.
    pub user_agent: String,

    /// Cap on the diagnostic `raw_text` field of each extraction record.
    pub raw_text_max_chars: usize,
}
