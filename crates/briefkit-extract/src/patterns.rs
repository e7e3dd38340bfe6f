//! Static keyword tables and shared pattern rules.
//!
//! Ordering is load-bearing throughout this module: several extraction rules
//! are "first match wins" (CTA classification, industry detection, product
//! name patterns), so tables are ordered slices, never maps. Thresholds that
//! differ between the HTML and text extractors live here as named consts so
//! they form one configuration surface.

use std::sync::LazyLock;

use regex::Regex;

/// Verb prefixes that classify a list item as an *outcome* rather than a
/// feature. The two classes are mutually exclusive per source.
pub const OUTCOME_VERBS: &[&str] = &[
    "get", "achieve", "save", "earn", "receive", "enjoy", "access", "gain", "unlock", "discover",
];

/// CTA classification keyword lists, checked as lowercase substring matches
/// in order. First matching element per class wins.
pub const PRIMARY_CTA_KEYWORDS: &[&str] =
    &["apply", "sign up", "get started", "book", "buy", "start", "try"];
pub const SECONDARY_CTA_KEYWORDS: &[&str] =
    &["learn more", "find out", "discover", "see how", "explore"];

/// `img[alt]` keywords that mark a trust badge.
pub const BADGE_KEYWORDS: &[&str] = &["certified", "award", "trusted", "accredited", "member of"];

/// Tone keyword sets for the HTML extractor. A tone label is assigned when
/// at least [`HTML_TONE_MIN_HITS`] of its keywords appear in the page text.
pub const HTML_TONE_SETS: &[(&str, &[&str])] = &[
    (
        "professional",
        &["professional", "expert", "trusted", "reliable", "established"],
    ),
    ("friendly", &["friendly", "easy", "simple", "fun", "enjoy"]),
    (
        "innovative",
        &["innovative", "cutting-edge", "modern", "advanced", "smart"],
    ),
    ("caring", &["caring", "support", "help", "understand", "family"]),
    (
        "premium",
        &["premium", "luxury", "exclusive", "elite", "bespoke"],
    ),
];

/// Tone keyword sets for the text extractor: the HTML sets with widened
/// innovative/caring vocabularies plus two extra labels. PDF-derived text is
/// noisier than markup, so labels require [`TEXT_TONE_MIN_HITS`] distinct
/// keyword hits instead of one.
pub const TEXT_TONE_SETS: &[(&str, &[&str])] = &[
    (
        "professional",
        &["professional", "expert", "trusted", "reliable", "established"],
    ),
    ("friendly", &["friendly", "easy", "simple", "fun", "enjoy"]),
    (
        "innovative",
        &[
            "innovative",
            "cutting-edge",
            "modern",
            "advanced",
            "smart",
            "transform",
            "revolutionary",
            "pioneering",
        ],
    ),
    (
        "caring",
        &[
            "caring",
            "support",
            "help",
            "understand",
            "family",
            "community",
            "empower",
            "wellbeing",
        ],
    ),
    (
        "premium",
        &["premium", "luxury", "exclusive", "elite", "bespoke"],
    ),
    (
        "secure",
        &["secure", "security", "protected", "compliant", "encrypted"],
    ),
    (
        "supportive",
        &["guidance", "dedicated", "partner", "responsive", "hands-on"],
    ),
];

pub const HTML_TONE_MIN_HITS: usize = 1;
pub const TEXT_TONE_MIN_HITS: usize = 2;

/// Industry keyword sets for the HTML extractor, checked in order; the first
/// industry reaching [`HTML_INDUSTRY_MIN_HITS`] wins.
pub const HTML_INDUSTRY_SETS: &[(&str, &[&str])] = &[
    (
        "financial services",
        &["isa", "savings", "investment", "pension", "mortgage", "insurance", "bank"],
    ),
    (
        "e-commerce",
        &["shop", "cart", "checkout", "delivery", "shipping", "buy now"],
    ),
    (
        "saas",
        &["software", "platform", "dashboard", "integration", "api", "automate"],
    ),
    (
        "healthcare",
        &["health", "medical", "doctor", "patient", "clinic", "treatment"],
    ),
    (
        "education",
        &["learn", "course", "training", "certificate", "student", "education"],
    ),
    (
        "real estate",
        &["property", "home", "house", "rent", "buy", "estate"],
    ),
];

/// Extended industry table for the text extractor. Niche verticals that the
/// HTML table lacks come first so they outrank the broad ones on ties.
pub const TEXT_INDUSTRY_SETS: &[(&str, &[&str])] = &[
    (
        "grant management",
        &["grant", "grants", "funding", "funder", "nonprofit", "charity", "foundation"],
    ),
    (
        "recruitment",
        &["recruitment", "hiring", "candidates", "talent", "vacancies", "applicants"],
    ),
    (
        "travel",
        &["travel", "booking", "destination", "flights", "hotel", "itinerary"],
    ),
    (
        "marketing automation",
        &["campaign", "outreach", "whatsapp", "messaging", "marketing automation", "journeys"],
    ),
    (
        "financial services",
        &["isa", "savings", "investment", "pension", "mortgage", "insurance", "bank"],
    ),
    (
        "e-commerce",
        &["shop", "cart", "checkout", "delivery", "shipping", "buy now"],
    ),
    (
        "saas",
        &["software", "platform", "dashboard", "integration", "api", "automate"],
    ),
    (
        "healthcare",
        &["health", "medical", "doctor", "patient", "clinic", "treatment"],
    ),
    (
        "education",
        &["learn", "course", "training", "certificate", "student", "education"],
    ),
    (
        "real estate",
        &["property", "home", "house", "rent", "estate", "landlord"],
    ),
];

/// Industries whose keywords are distinctive enough to qualify from a single
/// hit in the text extractor. The broad industries still need
/// [`TEXT_INDUSTRY_MIN_HITS`].
pub const TEXT_SPECIFIC_INDUSTRIES: &[&str] =
    &["grant management", "recruitment", "travel", "marketing automation"];

pub const HTML_INDUSTRY_MIN_HITS: usize = 2;
pub const TEXT_INDUSTRY_MIN_HITS: usize = 2;
pub const TEXT_SPECIFIC_INDUSTRY_MIN_HITS: usize = 1;

/// Ordered numeric-claim patterns for the HTML extractor. Each pattern
/// contributes at most two matches.
pub static HTML_STAT_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)\d+[,\d]*\+?\s*(?:customers?|users?|clients?|members?)",
        r"(?i)\d+%\s*(?:increase|growth|improvement|savings?)",
        r"(?i)[£$]?\d+[,\d]*(?:k|m|bn?)?\s*(?:saved|earned|raised)",
        r"(?i)\d+\+?\s*(?:years?|countries|locations)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid stat regex"))
    .collect()
});

/// Text-variant stat patterns: the HTML set plus rating claims.
pub static TEXT_STAT_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)\d+[,\d]*\+?\s*(?:customers?|users?|clients?|members?)",
        r"(?i)\d+%\s*(?:increase|growth|improvement|savings?)",
        r"(?i)[£$]?\d+[,\d]*(?:k|m|bn?)?\s*(?:saved|earned|raised)",
        r"(?i)\d+\+?\s*(?:years?|countries|locations)",
        r"(?i)rated\s+\d+(?:\.\d+)?\s*(?:/|out\s+of)\s*\d+",
        r"(?i)\d+(?:\.\d+)?\s*stars?\b",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid stat regex"))
    .collect()
});

/// 3- or 6-digit hex color literal. The trailing `\b` stops a 6-digit match
/// from swallowing the prefix of a longer hex run.
static HEX_COLOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#([0-9A-Fa-f]{6}|[0-9A-Fa-f]{3})\b").expect("valid hex regex"));

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid tag regex"));

/// Extracts brand color candidates from raw markup or text.
///
/// Normalizes 3-digit literals to 6-digit uppercase, filters out near-white
/// (all channels > 240) and near-black (all channels < 15) values, and
/// returns at most 6 colors deduplicated in first-seen order.
#[must_use]
pub fn extract_colors(raw: &str) -> Vec<String> {
    let mut colors: Vec<String> = Vec::new();
    for caps in HEX_COLOR_RE.captures_iter(raw) {
        let digits = &caps[1];
        let expanded = if digits.len() == 3 {
            let mut s = String::with_capacity(6);
            for c in digits.chars() {
                s.push(c);
                s.push(c);
            }
            s
        } else {
            digits.to_string()
        };
        let color = format!("#{}", expanded.to_uppercase());

        let Some((r, g, b)) = parse_rgb(&color) else {
            continue;
        };
        if r > 240 && g > 240 && b > 240 {
            continue; // Too white.
        }
        if r < 15 && g < 15 && b < 15 {
            continue; // Too black.
        }

        push_unique(&mut colors, color);
        if colors.len() >= 6 {
            break;
        }
    }
    colors
}

fn parse_rgb(color: &str) -> Option<(u8, u8, u8)> {
    let r = u8::from_str_radix(color.get(1..3)?, 16).ok()?;
    let g = u8::from_str_radix(color.get(3..5)?, 16).ok()?;
    let b = u8::from_str_radix(color.get(5..7)?, 16).ok()?;
    Some((r, g, b))
}

/// True when the item starts with an outcome verb as its first word.
#[must_use]
pub fn is_outcome(item: &str) -> bool {
    let lower = item.to_lowercase();
    let Some(first_word) = lower.split_whitespace().next() else {
        return false;
    };
    let first_word = first_word.trim_matches(|c: char| !c.is_alphanumeric());
    OUTCOME_VERBS.contains(&first_word)
}

/// Regex fallback used when tree parsing yields nothing usable: strips tags
/// and collapses whitespace.
#[must_use]
pub fn strip_tags(html: &str) -> String {
    let stripped = TAG_RE.replace_all(html, " ");
    collapse_ws(&stripped)
}

/// Collapses all whitespace runs to single spaces and trims.
#[must_use]
pub fn collapse_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Appends `item` only if it is not already present (exact-value test).
pub fn push_unique(list: &mut Vec<String>, item: String) {
    if !list.contains(&item) {
        list.push(item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -----------------------------------------------------------------------
    // extract_colors
    // -----------------------------------------------------------------------

    #[test]
    fn colors_filter_near_white_and_near_black() {
        let markup = "color: #FFFFFF; background: #000000; accent: #3366CC;";
        assert_eq!(extract_colors(markup), vec!["#3366CC".to_string()]);
    }

    #[test]
    fn colors_expand_three_digit_literals() {
        assert_eq!(extract_colors("border: #abc"), vec!["#AABBCC".to_string()]);
    }

    #[test]
    fn colors_deduplicate_preserving_order() {
        let markup = "#336699 #CC3300 #336699";
        assert_eq!(
            extract_colors(markup),
            vec!["#336699".to_string(), "#CC3300".to_string()]
        );
    }

    #[test]
    fn colors_capped_at_six() {
        let markup = "#111111 #222222 #333333 #444444 #555555 #666666 #777777";
        assert_eq!(extract_colors(markup).len(), 6);
    }

    #[test]
    fn colors_skip_longer_hex_runs() {
        // An 8-digit hex (e.g. with alpha) must not contribute its prefix.
        assert!(extract_colors("#336699FF").is_empty());
    }

    #[test]
    fn near_black_boundary_is_inclusive() {
        // #0F0F0F has all channels == 15, which is not < 15, so it stays.
        assert_eq!(extract_colors("#0F0F0F"), vec!["#0F0F0F".to_string()]);
        assert!(extract_colors("#0E0E0E").is_empty());
    }

    // -----------------------------------------------------------------------
    // is_outcome
    // -----------------------------------------------------------------------

    #[test]
    fn outcome_verbs_match_first_word() {
        assert!(is_outcome("Get instant access to reports"));
        assert!(is_outcome("Save time on admin"));
        assert!(is_outcome("Unlock premium features"));
    }

    #[test]
    fn outcome_match_is_case_insensitive() {
        assert!(is_outcome("ACHIEVE more every day"));
    }

    #[test]
    fn non_outcome_items_are_features() {
        assert!(!is_outcome("Real-time dashboard for your team"));
        assert!(!is_outcome("Getting started guide included"));
    }

    #[test]
    fn empty_string_is_not_outcome() {
        assert!(!is_outcome(""));
    }

    // -----------------------------------------------------------------------
    // strip_tags
    // -----------------------------------------------------------------------

    #[test]
    fn strip_tags_removes_markup() {
        assert_eq!(
            strip_tags("<h1>Save 20%</h1><p>Limited time</p>"),
            "Save 20% Limited time"
        );
    }

    #[test]
    fn strip_tags_on_plain_text_is_identity_modulo_ws() {
        assert_eq!(strip_tags("plain  text"), "plain text");
    }

    // -----------------------------------------------------------------------
    // push_unique
    // -----------------------------------------------------------------------

    #[test]
    fn push_unique_skips_duplicates() {
        let mut list = vec!["a".to_string()];
        push_unique(&mut list, "a".to_string());
        push_unique(&mut list, "b".to_string());
        assert_eq!(list, vec!["a".to_string(), "b".to_string()]);
    }
}
