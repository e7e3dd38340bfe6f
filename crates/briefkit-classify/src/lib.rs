//! Rule-based classifiers over reconciled content.
//!
//! [`brand`] derives voice, visual identity, and messaging guidance;
//! [`audience`] proposes 1–3 audience segments for a journey type. Both are
//! pure functions over [`briefkit_core::ExtractedContent`] driven by static
//! lookup tables, so identical input always classifies identically.

pub mod audience;
pub mod brand;
mod segments;

pub use audience::suggest_audiences;
pub use brand::analyze_brand;
