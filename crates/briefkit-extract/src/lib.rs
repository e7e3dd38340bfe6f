//! Extraction and normalization of marketing source material.
//!
//! Two parallel extractor families share one output schema
//! ([`briefkit_core::ExtractedContent`]): [`html`] walks a parsed document
//! tree, [`text`] runs line and regex heuristics over PDF-derived plain
//! text. [`merge`] reconciles the per-source records into one canonical
//! record with first-wins precedence for scalars and bounded deduplicated
//! concatenation for lists.
//!
//! Extraction is best-effort by contract: a failed fetch or a degenerate
//! document degrades the affected source to an empty or approximate record,
//! it never fails the run.

pub mod error;
pub mod fetch;
pub mod html;
pub mod merge;
pub mod patterns;
pub mod text;

pub use error::ExtractError;
pub use fetch::{FetchClient, SourceExtraction};
pub use merge::merge_sources;
