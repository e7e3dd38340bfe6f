//! Brand signal extraction from raw text.

use std::sync::LazyLock;

use regex::Regex;

use briefkit_core::BrandElements;

use crate::patterns::{
    extract_colors, TEXT_INDUSTRY_MIN_HITS, TEXT_INDUSTRY_SETS, TEXT_SPECIFIC_INDUSTRIES,
    TEXT_SPECIFIC_INDUSTRY_MIN_HITS, TEXT_TONE_MIN_HITS, TEXT_TONE_SETS,
};

use super::{cleaned_filename, NAME_STOP_WORDS};

static COPYRIGHT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:©|\(c\)|[Cc]opyright)\s*(?:\d{4})?\s*([A-Z][A-Za-z0-9&' -]{2,40})")
        .expect("valid regex")
});
static LEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Z][A-Za-z0-9&' ]{2,40}?)\s+is\s+a\s+leading").expect("valid regex")
});
static ABOUT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i:about)\s+([A-Z][A-Za-z0-9&'\-]+(?:\s+[A-Z][A-Za-z0-9&'\-]+){0,2})")
        .expect("valid regex")
});

pub(super) fn extract(text: &str, lines: &[&str], filename: &str) -> BrandElements {
    let mut brand = BrandElements::default();

    brand.name = extract_name(text, lines).unwrap_or_else(|| cleaned_filename(filename));
    brand.colors = extract_colors(text);

    let lower = text.to_lowercase();
    for (label, keywords) in TEXT_TONE_SETS {
        let hits = keywords.iter().filter(|kw| lower.contains(*kw)).count();
        if hits >= TEXT_TONE_MIN_HITS {
            brand.tone_keywords.push((*label).to_string());
        }
    }
    if brand.tone_keywords.is_empty() {
        brand.tone_keywords.push("professional".to_string());
    }

    brand.industry = detect_industry(&lower);
    brand
}

fn extract_name(text: &str, lines: &[&str]) -> Option<String> {
    for re in [&*COPYRIGHT_RE, &*LEADING_RE, &*ABOUT_RE] {
        if let Some(caps) = re.captures(text) {
            let name = caps[1].trim().trim_end_matches('.').to_string();
            if !NAME_STOP_WORDS.contains(&name.as_str()) {
                return Some(name);
            }
        }
    }
    // A short standalone title-cased line near the top reads as a brand name.
    lines
        .iter()
        .take(5)
        .find(|line| {
            (2..=40).contains(&line.len())
                && line.chars().next().is_some_and(char::is_uppercase)
                && !line.contains(['.', '!', '?', ':'])
                && line.split_whitespace().count() <= 4
        })
        .map(|line| (*line).to_string())
}

fn detect_industry(lower: &str) -> String {
    for (industry, keywords) in TEXT_INDUSTRY_SETS {
        let min_hits = if TEXT_SPECIFIC_INDUSTRIES.contains(industry) {
            TEXT_SPECIFIC_INDUSTRY_MIN_HITS
        } else {
            TEXT_INDUSTRY_MIN_HITS
        };
        let hits = keywords.iter().filter(|kw| lower.contains(*kw)).count();
        if hits >= min_hits {
            return (*industry).to_string();
        }
    }
    "general business".to_string()
}
