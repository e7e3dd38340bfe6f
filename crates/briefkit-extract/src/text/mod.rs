//! Structured extraction from unstructured text (typically PDF-derived).
//!
//! Where the HTML extractors walk a document tree, these work over trimmed
//! non-empty lines plus regex searches on the full text. Output schema is
//! identical so both families feed the same reconciler.

mod assets;
mod brand;
mod ctas;
mod social;

use std::sync::LazyLock;

use regex::Regex;

use briefkit_core::{truncate_chars, ExtractedContent, ProductInfo, SourceKind, ValueProposition};

use crate::patterns::{collapse_ws, is_outcome, push_unique};

/// Explicit value-proposition phrasings. A match here beats the line
/// heuristic for the headline.
static VALUE_PROP_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)revolutioni[sz]ing\s+[^.\n]{5,100}",
        r"(?i)(?:the|our|a)\s+(?:platform|solution|service|software|system)\s+(?:that|to|for)\s+[^.\n]{10,100}",
        r"(?i)helps?\s+(?:you|your team|businesses|teams|companies)\s+[^.\n]{10,100}",
    ]
    .iter()
    .map(|src| Regex::new(src).expect("valid regex"))
    .collect()
});

static BULLET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[•\-\*✓✔→►]\s*").expect("valid regex"));
static NUMBERED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+[.):]\s+").expect("valid regex"));
static PAGE_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:page\s+)?\d+(?:\s*(?:of|/)\s*\d+)?$").expect("valid regex"));
static BENEFIT_LABEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:key\s+)?(?:benefit|advantage|feature)s?\s*:\s*(.+)$").expect("valid regex")
});
static ACTION_VERB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:save|reduce|streamline|automate|simplify|track|manage)\b")
        .expect("valid regex")
});
static FEATURE_HINT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:features?|includes|offers|provides|enables)\b").expect("valid regex")
});
static PRODUCT_NAME_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?:(?i:introducing)|(?i:welcome\s+to))\s+([A-Z][A-Za-z0-9&'\-]+(?:\s+[A-Z][A-Za-z0-9&'\-]+){0,3})",
        r"(?i:about)\s+([A-Z][A-Za-z0-9&'\-]+(?:\s+[A-Z][A-Za-z0-9&'\-]+){0,3})",
        r"(?:[Tt]he|[Oo]ur)\s+([A-Z][A-Za-z0-9&'\-]+(?:\s+[A-Z][A-Za-z0-9&'\-]+){0,2})\s+(?:platform|solution|is|offers|provides)",
    ]
    .iter()
    .map(|src| Regex::new(src).expect("valid regex"))
    .collect()
});

/// Bare URL matcher shared by the CTA and asset extractors.
pub(super) static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"https?://[^\s<>"')\]]+"#).expect("valid regex"));

/// Capture-group words that are grammar, not names.
const NAME_STOP_WORDS: &[&str] = &["Us", "We", "Our", "The", "This", "You", "Your"];

/// Extracts structured content from raw text.
///
/// `filename` identifies the source and seeds name fallbacks once pattern
/// matching comes up empty.
#[must_use]
pub fn extract(text: &str, filename: &str, raw_text_max: usize) -> ExtractedContent {
    let lines = split_lines(text);

    let mut record = ExtractedContent::new(filename, SourceKind::Text);
    record.value_proposition = extract_value_prop(text, &lines);
    record.product = extract_product(text, &lines, filename);
    record.social_proof = social::extract(text, &lines);
    record.ctas = ctas::extract(text);
    record.brand = brand::extract(text, &lines, filename);
    record.assets = assets::extract(text);
    record.raw_text = truncate_chars(text, raw_text_max);
    record
}

/// Splits into trimmed non-empty lines.
pub(super) fn split_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Strips the extension and separator characters from a source filename.
pub(super) fn cleaned_filename(filename: &str) -> String {
    let stem = filename.rsplit_once('.').map_or(filename, |(stem, _)| stem);
    let spaced = stem.replace(['_', '-'], " ");
    truncate_chars(collapse_ws(&spaced).trim(), 50)
}

pub(super) fn strip_bullet(line: &str) -> Option<&str> {
    if let Some(m) = BULLET_RE.find(line) {
        return Some(line[m.end()..].trim());
    }
    if let Some(m) = NUMBERED_RE.find(line) {
        return Some(line[m.end()..].trim());
    }
    None
}

/// Lines that look like headings but carry no message: bare page numbers,
/// table-of-contents rows, shouted section banners.
fn is_heading_noise(line: &str) -> bool {
    if PAGE_NUMBER_RE.is_match(line) || line.contains("....") {
        return true;
    }
    let lower = line.to_lowercase();
    if lower == "table of contents" || lower == "contents" {
        return true;
    }
    line.len() > 40
        && line.chars().any(|c| c.is_uppercase())
        && !line.chars().any(|c| c.is_lowercase())
}

fn headline_line_index(lines: &[&str]) -> Option<usize> {
    lines.iter().take(10).position(|line| {
        line.len() > 10
            && line.len() < 150
            && strip_bullet(line).is_none()
            && !is_heading_noise(line)
    })
}

fn extract_value_prop(text: &str, lines: &[&str]) -> ValueProposition {
    let mut vp = ValueProposition::default();

    let headline_idx = headline_line_index(lines);

    // Explicit value-prop phrasings win over the positional heuristic.
    let pattern_headline = VALUE_PROP_RES
        .iter()
        .find_map(|re| re.find(text))
        .map(|m| collapse_ws(m.as_str()));
    vp.headline = match pattern_headline {
        Some(h) => h,
        None => headline_idx.map(|i| lines[i].to_string()).unwrap_or_default(),
    };

    if let Some(idx) = headline_idx {
        vp.subheadline = lines
            .iter()
            .skip(idx + 1)
            .find(|line| {
                (20..=300).contains(&line.len())
                    && strip_bullet(line).is_none()
                    && !is_heading_noise(line)
            })
            .map(|line| truncate_chars(line, 300))
            .unwrap_or_default();
    }

    // Benefits are a union of bullet lines, labeled lines, action-verb
    // lines, and numbered lines; exact-text dedup, cap 5.
    for line in lines {
        if vp.key_benefits.len() >= 5 {
            break;
        }
        let candidate = if let Some(stripped) = strip_bullet(line) {
            Some(stripped.to_string())
        } else if let Some(caps) = BENEFIT_LABEL_RE.captures(line) {
            Some(caps[1].trim().to_string())
        } else if line.len() > 10 && line.len() < 150 && ACTION_VERB_RE.is_match(line) {
            Some((*line).to_string())
        } else {
            None
        };
        if let Some(candidate) = candidate {
            if candidate.len() >= 3 && candidate.len() <= 200 {
                push_unique(&mut vp.key_benefits, candidate);
            }
        }
    }
    vp.key_benefits.truncate(5);

    vp
}

fn extract_product(text: &str, lines: &[&str], filename: &str) -> ProductInfo {
    let mut product = ProductInfo::default();

    product.name = PRODUCT_NAME_RES
        .iter()
        .find_map(|re| re.captures(text))
        .map(|caps| caps[1].trim().to_string())
        .filter(|name| !NAME_STOP_WORDS.contains(&name.as_str()))
        .unwrap_or_else(|| cleaned_filename(filename));

    product.description = lines
        .iter()
        .find(|line| {
            line.len() > 50 && line.len() < 500 && strip_bullet(line).is_none()
        })
        .map(|line| (*line).to_string())
        .unwrap_or_default();

    // Bullet lines and feature-hint lines, split feature vs. outcome by the
    // leading-verb rule. The two lists are mutually exclusive.
    for line in lines {
        let candidate = match strip_bullet(line) {
            Some(stripped) => stripped,
            None if line.len() > 10 && line.len() < 150 && FEATURE_HINT_RE.is_match(line) => *line,
            None => continue,
        };
        if candidate.len() < 3 || candidate.len() > 200 {
            continue;
        }
        if is_outcome(candidate) {
            if product.outcomes.len() < 5 {
                push_unique(&mut product.outcomes, candidate.to_string());
            }
        } else if product.features.len() < 8 {
            push_unique(&mut product.features, candidate.to_string());
        }
    }

    product
}

// --------------------------------------------------------------------------
// Tests
// --------------------------------------------------------------------------
