use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("invalid source URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Reconciliation received zero extraction records. Distinct from a
    /// record whose fields are all empty — that is a successful extraction.
    #[error("no content extracted from any source")]
    NoContent,
}
