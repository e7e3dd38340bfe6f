//! Brand analysis model: voice, visual identity, and messaging guidance
//! derived from one reconciled [`crate::ExtractedContent`].

use serde::{Deserialize, Serialize};

/// Default primary color when extraction finds none.
pub const DEFAULT_PRIMARY_COLOR: &str = "#1e3a5f";
/// Default accent color when extraction finds fewer than two colors.
pub const DEFAULT_ACCENT_COLOR: &str = "#e67e22";
/// Default background color when extraction finds fewer than three colors.
pub const DEFAULT_BACKGROUND_COLOR: &str = "#f5f7fa";

/// How formal generated copy should read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Formality {
    Casual,
    Professional,
    Formal,
}

impl Default for Formality {
    fn default() -> Self {
        Self::Professional
    }
}

/// Recommended emoji density for generated copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmojiUsage {
    None,
    Minimal,
    Moderate,
    Frequent,
}

impl Default for EmojiUsage {
    fn default() -> Self {
        Self::Minimal
    }
}

/// Complete brand analysis result.
///
/// Created once per pipeline run; user preferences may overwrite any field
/// after derivation (overlay always wins).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandAnalysis {
    pub company_name: String,
    pub industry: String,

    // Voice characteristics.
    pub tone: Vec<String>,
    pub formality_level: Formality,
    /// Deduplicated, capped at 5.
    pub personality_traits: Vec<String>,

    // Visual identity.
    pub primary_color: String,
    pub accent_color: String,
    pub background_color: String,

    // Messaging guidance.
    pub key_phrases: Vec<String>,
    pub words_to_avoid: Vec<String>,
    pub emoji_recommendation: EmojiUsage,

    // Positioning.
    pub value_statement: String,
    pub differentiators: Vec<String>,
    /// Primary emotion to evoke: "trust", "security", "excitement", ...
    pub target_emotion: String,
}

impl Default for BrandAnalysis {
    fn default() -> Self {
        Self {
            company_name: String::new(),
            industry: String::new(),
            tone: Vec::new(),
            formality_level: Formality::default(),
            personality_traits: Vec::new(),
            primary_color: DEFAULT_PRIMARY_COLOR.to_string(),
            accent_color: DEFAULT_ACCENT_COLOR.to_string(),
            background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
            key_phrases: Vec::new(),
            words_to_avoid: Vec::new(),
            emoji_recommendation: EmojiUsage::default(),
            value_statement: String::new(),
            differentiators: Vec::new(),
            target_emotion: String::new(),
        }
    }
}

/// Tone supplied by the user: accepted either as a single label or a list,
/// matching the loose shapes seen in real preference payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ToneInput {
    One(String),
    Many(Vec<String>),
}

impl ToneInput {
    /// Normalizes to a list regardless of input shape.
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Self::One(tone) => vec![tone],
            Self::Many(tones) => tones,
        }
    }
}

/// Optional user overrides for the brand classifier. Any field present here
/// replaces the derived value wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandPreferences {
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub tone: Option<ToneInput>,
    #[serde(default)]
    pub primary_color: Option<String>,
    #[serde(default)]
    pub accent_color: Option<String>,
    /// `Some(true)` maps to moderate emoji use, `Some(false)` to none.
    #[serde(default)]
    pub use_emojis: Option<bool>,
    /// Replaces derived key phrases entirely when present.
    #[serde(default)]
    pub brand_phrases: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_colors_match_fixed_palette() {
        let analysis = BrandAnalysis::default();
        assert_eq!(analysis.primary_color, "#1e3a5f");
        assert_eq!(analysis.accent_color, "#e67e22");
        assert_eq!(analysis.background_color, "#f5f7fa");
    }

    #[test]
    fn formality_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Formality::Professional).unwrap(),
            "\"professional\""
        );
    }

    #[test]
    fn tone_input_accepts_single_string() {
        let tone: ToneInput = serde_json::from_str("\"friendly\"").unwrap();
        assert_eq!(tone.into_vec(), vec!["friendly".to_string()]);
    }

    #[test]
    fn tone_input_accepts_list() {
        let tone: ToneInput = serde_json::from_str("[\"friendly\", \"premium\"]").unwrap();
        assert_eq!(tone.into_vec().len(), 2);
    }

    #[test]
    fn preferences_deserialize_with_missing_fields() {
        let prefs: BrandPreferences =
            serde_json::from_str("{\"company_name\": \"Acme\"}").unwrap();
        assert_eq!(prefs.company_name.as_deref(), Some("Acme"));
        assert!(prefs.use_emojis.is_none());
    }
}
