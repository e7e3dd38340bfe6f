//! CTA detection in raw text.
//!
//! Unlike the HTML variant there are no buttons to read, so primary and
//! secondary labels come from action-phrase regexes with fixed fallbacks,
//! and URLs are pulled from the text and bucketed by keyword.

use std::sync::LazyLock;

use regex::Regex;

use briefkit_core::Ctas;

use super::URL_RE;

pub const DEFAULT_PRIMARY_CTA: &str = "Get Started";
pub const DEFAULT_SECONDARY_CTA: &str = "Learn More";

static PRIMARY_PHRASE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:apply\s+(?:now|today|online)|sign\s+up(?:\s+(?:free|now|today))?|get\s+started(?:\s+(?:free|today))?|book\s+(?:a\s+)?(?:demo|call|consultation)|start\s+(?:your\s+)?(?:free\s+)?trial|buy\s+now|try\s+(?:it\s+)?free)\b",
    )
    .expect("valid regex")
});
static SECONDARY_PHRASE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:learn\s+more|find\s+out\s+more|discover\s+how|see\s+how(?:\s+it\s+works)?|explore\s+(?:our|the)\s+\w+)\b",
    )
    .expect("valid regex")
});

const PRIMARY_URL_KEYWORDS: &[&str] =
    &["apply", "signup", "sign-up", "register", "start", "demo", "trial", "buy"];
const SECONDARY_URL_KEYWORDS: &[&str] = &["learn", "about", "blog", "resources", "info"];

pub(super) fn extract(text: &str) -> Ctas {
    let mut ctas = Ctas::default();

    ctas.primary = PRIMARY_PHRASE_RE
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| DEFAULT_PRIMARY_CTA.to_string());
    ctas.secondary = SECONDARY_PHRASE_RE
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| DEFAULT_SECONDARY_CTA.to_string());

    for m in URL_RE.find_iter(text) {
        let url = m.as_str().trim_end_matches(['.', ',', ';']).to_string();
        let lower = url.to_lowercase();
        let label = if PRIMARY_URL_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
            ctas.primary.clone()
        } else if SECONDARY_URL_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
            ctas.secondary.clone()
        } else {
            "Main Link".to_string()
        };
        ctas.urls.entry(label).or_insert(url);
    }

    ctas
}
