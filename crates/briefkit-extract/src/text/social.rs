//! Social proof from raw text: quoted testimonials, numeric claims, badges.

use std::sync::LazyLock;

use regex::Regex;

use briefkit_core::SocialProof;

use crate::patterns::{push_unique, TEXT_STAT_RES};

static STRAIGHT_QUOTE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"\n]{20,500})""#).expect("valid regex"));
static CURLY_QUOTE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"“([^”\n]{20,500})”").expect("valid regex"));
/// Unquoted lines attributed like `great product — Jane Smith`.
static ATTRIBUTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^([^\n—–]{20,300}?)\s+[—–]\s+[A-Z][A-Za-z.]+(?:\s+[A-Z][A-Za-z.]+){0,2}\s*$")
        .expect("valid regex")
});
static BADGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:certified|accredited|award[\s-]?winning|member of|regulated by|authori[sz]ed by)\b",
    )
    .expect("valid regex")
});
/// Certification acronyms matched case-sensitively to avoid ordinary words.
static BADGE_ACRONYM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:ISO(?:\s?\d{4,5})?|FCA|PRA|GDPR|SOC\s?2?)\b").expect("valid regex")
});

pub(super) fn extract(text: &str, lines: &[&str]) -> SocialProof {
    let mut proof = SocialProof::default();

    for re in [&*STRAIGHT_QUOTE_RE, &*CURLY_QUOTE_RE, &*ATTRIBUTION_RE] {
        for caps in re.captures_iter(text) {
            push_unique(&mut proof.testimonials, caps[1].trim().to_string());
        }
    }
    proof.testimonials.truncate(3);

    for re in TEXT_STAT_RES.iter() {
        for m in re.find_iter(text).take(2) {
            push_unique(&mut proof.stats, m.as_str().trim().to_string());
        }
    }
    proof.stats.truncate(5);

    for line in lines {
        if line.len() <= 100 && (BADGE_RE.is_match(line) || BADGE_ACRONYM_RE.is_match(line)) {
            push_unique(&mut proof.trust_badges, (*line).to_string());
            if proof.trust_badges.len() >= 5 {
                break;
            }
        }
    }

    proof
}
