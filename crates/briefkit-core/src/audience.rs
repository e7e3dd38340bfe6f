//! Audience segmentation model.
//!
//! A suggestion holds 1–3 [`AudienceSegment`]s; the first is the primary
//! segment and segment order is meaningful downstream.

use serde::{Deserialize, Serialize};

/// Whether a journey targets businesses or consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JourneyType {
    B2B,
    B2C,
}

impl Default for JourneyType {
    fn default() -> Self {
        Self::B2C
    }
}

impl JourneyType {
    /// Parses the loose strings accepted at the boundary ("b2b", "B2C", ...).
    /// Anything unrecognized falls back to B2C.
    #[must_use]
    pub fn parse_lenient(s: &str) -> Self {
        if s.eq_ignore_ascii_case("b2b") {
            Self::B2B
        } else {
            Self::B2C
        }
    }
}

/// How aware the segment is of its problem and of solutions to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AwarenessLevel {
    Unaware,
    ProblemAware,
    SolutionAware,
    ProductAware,
}

impl Default for AwarenessLevel {
    fn default() -> Self {
        Self::ProblemAware
    }
}

/// Where the segment sits in the purchase funnel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuyingStage {
    Awareness,
    Consideration,
    Decision,
}

impl Default for BuyingStage {
    fn default() -> Self {
        Self::Consideration
    }
}

/// A named audience sub-population.
///
/// Demographic fields apply to B2C segments, firmographic fields to B2B;
/// unused fields stay empty rather than absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudienceSegment {
    pub name: String,
    #[serde(rename = "type")]
    pub segment_type: JourneyType,
    pub description: String,

    // Demographics (B2C).
    pub age_range: String,
    pub location: String,
    pub occupation: String,
    pub income_level: String,

    // Firmographics (B2B).
    pub company_size: String,
    pub job_titles: Vec<String>,
    pub industry: String,

    // Psychographics.
    pub pain_points: Vec<String>,
    pub goals: Vec<String>,
    pub motivations: Vec<String>,
    pub objections: Vec<String>,

    // Journey relevance.
    pub awareness_level: AwarenessLevel,
    pub buying_stage: BuyingStage,
}

impl AudienceSegment {
    /// Creates a segment with the given name and type, everything else empty.
    #[must_use]
    pub fn new(name: impl Into<String>, segment_type: JourneyType) -> Self {
        Self {
            name: name.into(),
            segment_type,
            description: String::new(),
            age_range: String::new(),
            location: String::new(),
            occupation: String::new(),
            income_level: String::new(),
            company_size: String::new(),
            job_titles: Vec::new(),
            industry: String::new(),
            pain_points: Vec::new(),
            goals: Vec::new(),
            motivations: Vec::new(),
            objections: Vec::new(),
            awareness_level: AwarenessLevel::default(),
            buying_stage: BuyingStage::default(),
        }
    }
}

/// User-supplied audience data; becomes the primary segment when present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudienceInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub age_range: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub occupation: Option<String>,
    #[serde(default)]
    pub company_size: Option<String>,
    #[serde(default)]
    pub job_titles: Vec<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub pain_points: Vec<String>,
    #[serde(default)]
    pub goals: Vec<String>,
}

/// Complete audience suggestion: 1–3 segments, first is primary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudienceSuggestion {
    pub journey_type: JourneyType,
    pub segments: Vec<AudienceSegment>,
    /// Always `min(segments.len(), 3)`.
    pub recommended_paths: usize,
    /// Question used downstream to route users between segments.
    pub segmentation_question: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn journey_type_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&JourneyType::B2B).unwrap(), "\"B2B\"");
        assert_eq!(serde_json::to_string(&JourneyType::B2C).unwrap(), "\"B2C\"");
    }

    #[test]
    fn parse_lenient_accepts_case_variants() {
        assert_eq!(JourneyType::parse_lenient("b2b"), JourneyType::B2B);
        assert_eq!(JourneyType::parse_lenient("B2B"), JourneyType::B2B);
        assert_eq!(JourneyType::parse_lenient("b2c"), JourneyType::B2C);
    }

    #[test]
    fn parse_lenient_defaults_to_b2c() {
        assert_eq!(JourneyType::parse_lenient("consumer"), JourneyType::B2C);
    }

    #[test]
    fn awareness_level_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_string(&AwarenessLevel::ProblemAware).unwrap(),
            "\"problem-aware\""
        );
        assert_eq!(
            serde_json::to_string(&AwarenessLevel::SolutionAware).unwrap(),
            "\"solution-aware\""
        );
    }

    #[test]
    fn segment_type_serializes_under_type_key() {
        let segment = AudienceSegment::new("First-Time Savers", JourneyType::B2C);
        let json = serde_json::to_value(&segment).unwrap();
        assert_eq!(json["type"], "B2C");
    }

    #[test]
    fn audience_input_tolerates_sparse_payloads() {
        let input: AudienceInput =
            serde_json::from_str("{\"name\": \"Founders\", \"goals\": [\"Grow\"]}").unwrap();
        assert_eq!(input.name.as_deref(), Some("Founders"));
        assert_eq!(input.goals, vec!["Grow".to_string()]);
        assert!(input.pain_points.is_empty());
    }
}
