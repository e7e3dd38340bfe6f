//! Shared data model and configuration for briefkit.
//!
//! All records here are plain in-memory value objects for the duration of
//! one pipeline run. Serialization is a lossless field-for-field mapping so
//! results can be shipped to a UI as JSON without a separate wire schema.

pub mod analysis;
pub mod app_config;
pub mod audience;
pub mod config;
pub mod content;

pub use analysis::{BrandAnalysis, BrandPreferences, EmojiUsage, Formality, ToneInput};
pub use app_config::AppConfig;
pub use audience::{
    AudienceInput, AudienceSegment, AudienceSuggestion, AwarenessLevel, BuyingStage, JourneyType,
};
pub use config::{load_app_config, load_app_config_from_env, ConfigError};
pub use content::{
    Assets, BrandElements, Ctas, ExtractedContent, ProductInfo, SocialProof, SourceKind,
    ValueProposition,
};

/// Truncates a string to at most `max` characters, respecting char boundaries.
///
/// Used for the ~200-char subheadline/value-statement bounds and the ~5000-char
/// diagnostic `raw_text` cap. Byte-index slicing would panic mid-codepoint on
/// multi-byte text, so this walks chars.
#[must_use]
pub fn truncate_chars(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    s.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::truncate_chars;

    #[test]
    fn truncate_chars_short_string_unchanged() {
        assert_eq!(truncate_chars("hello", 10), "hello");
    }

    #[test]
    fn truncate_chars_cuts_at_limit() {
        assert_eq!(truncate_chars("hello world", 5), "hello");
    }

    #[test]
    fn truncate_chars_multibyte_safe() {
        assert_eq!(truncate_chars("désolé", 3), "dés");
    }
}
