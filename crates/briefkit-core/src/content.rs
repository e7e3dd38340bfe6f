//! Canonical extraction schema.
//!
//! One [`ExtractedContent`] is produced per user-supplied source (a URL or a
//! text document) and reconciled downstream into a single record. Fields
//! default to empty rather than null; every list carries an extraction-time
//! cap so adversarial input cannot blow up the record.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Origin kind of an extraction source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Scraped from a web page.
    Url,
    /// Extracted from raw text (typically PDF-derived).
    Text,
}

/// Core value messaging: the page's main promise and supporting benefits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueProposition {
    /// Main promise or tagline, roughly one headline's worth of text.
    pub headline: String,
    /// Supporting statement, truncated to ~200 chars at extraction time.
    pub subheadline: String,
    /// Top benefits, each 10–150 chars, capped at 5.
    pub key_benefits: Vec<String>,
}

/// Product or service details.
///
/// `features` and `outcomes` are mutually exclusive per source: an item is an
/// outcome iff it starts with an outcome verb (get/achieve/save/...), and a
/// feature otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductInfo {
    pub name: String,
    /// First substantial description found, 50–500 chars when present.
    pub description: String,
    /// What the product does. Capped at 8 per source, 10 after reconciliation.
    pub features: Vec<String>,
    /// What the customer gets. Capped at 5.
    pub outcomes: Vec<String>,
}

/// Trust elements: quotes, numeric claims, and certifications.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialProof {
    /// Customer quotes, 20–500 chars, deduplicated by exact text, capped at 3.
    pub testimonials: Vec<String>,
    /// Numeric claims like "10,000+ customers", deduplicated, capped at 5.
    pub stats: Vec<String>,
    /// Certifications and awards, capped at 5.
    pub trust_badges: Vec<String>,
}

/// Call-to-action elements.
///
/// At most one primary and one secondary CTA are recorded per source; the
/// first match in document order wins. `urls` maps CTA label to an absolute
/// URL (`BTreeMap` keeps serialization deterministic).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ctas {
    pub primary: String,
    pub secondary: String,
    pub urls: BTreeMap<String, String>,
}

/// Brand identity signals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandElements {
    pub name: String,
    /// 6-digit uppercase hex colors, near-white/near-black filtered out,
    /// deduplicated in first-seen order, capped at 6.
    pub colors: Vec<String>,
    /// Detected tone labels; defaults to `["professional"]` when nothing hits.
    pub tone_keywords: Vec<String>,
    /// Detected vertical; defaults to `"general business"`.
    pub industry: String,
}

/// Media assets discovered in the source. All URLs are absolute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assets {
    /// Capped at 5.
    pub pdfs: Vec<String>,
    /// Capped at 3.
    pub videos: Vec<String>,
    /// Capped at 10; icon/logo/pixel images excluded.
    pub images: Vec<String>,
}

/// Complete extraction result for one source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedContent {
    /// Origin identifier: the URL or the document filename.
    pub source: String,
    pub source_kind: SourceKind,
    pub value_proposition: ValueProposition,
    pub product: ProductInfo,
    pub social_proof: SocialProof,
    pub ctas: Ctas,
    pub brand: BrandElements,
    pub assets: Assets,
    /// First ~5000 chars of the source text. Diagnostic only; on a failed
    /// fetch this carries the error description instead.
    pub raw_text: String,
}

impl ExtractedContent {
    /// Creates an empty record for the given source.
    #[must_use]
    pub fn new(source: impl Into<String>, source_kind: SourceKind) -> Self {
        Self {
            source: source.into(),
            source_kind,
            value_proposition: ValueProposition::default(),
            product: ProductInfo::default(),
            social_proof: SocialProof::default(),
            ctas: Ctas::default(),
            brand: BrandElements::default(),
            assets: Assets::default(),
            raw_text: String::new(),
        }
    }

    /// True when no structured field carries any data. A record can be empty
    /// and still be a *successful* extraction — emptiness is not failure.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value_proposition == ValueProposition::default()
            && self.product == ProductInfo::default()
            && self.social_proof == SocialProof::default()
            && self.ctas == Ctas::default()
            && self.brand == BrandElements::default()
            && self.assets == Assets::default()
    }
}
