//! Social-proof extraction: testimonials, stats, and trust badges.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};

use briefkit_core::SocialProof;

use crate::patterns::{push_unique, BADGE_KEYWORDS, HTML_STAT_RES};

use super::{element_text, sel, within_chars};

static QUOTES: LazyLock<Selector> = LazyLock::new(|| sel("blockquote, q"));
static CLASSED: LazyLock<Selector> = LazyLock::new(|| sel("[class]"));
static IMG: LazyLock<Selector> = LazyLock::new(|| sel("img"));

static TESTIMONIAL_CLASS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)testimonial|review|quote|customer-say").expect("valid regex"));

pub(super) fn extract(document: &Html, page_text: &str) -> SocialProof {
    let mut sp = SocialProof::default();

    // Quote elements first, then anything whose class looks testimonial-like.
    for quote in document.select(&QUOTES) {
        let text = element_text(quote);
        if within_chars(&text, 20, 500) {
            push_unique(&mut sp.testimonials, text);
        }
    }
    for el in document.select(&CLASSED) {
        let Some(class) = el.value().attr("class") else {
            continue;
        };
        if !TESTIMONIAL_CLASS_RE.is_match(class) {
            continue;
        }
        let text = element_text(el);
        if within_chars(&text, 20, 500) {
            push_unique(&mut sp.testimonials, text);
        }
    }
    sp.testimonials.truncate(3);

    // Numeric claims: each pattern contributes at most 2 matches, final list
    // deduplicated in pattern order and capped at 5.
    for re in HTML_STAT_RES.iter() {
        for m in re.find_iter(page_text).take(2) {
            push_unique(&mut sp.stats, m.as_str().to_string());
        }
    }
    sp.stats.truncate(5);

    for img in document.select(&IMG) {
        let Some(alt) = img.value().attr("alt") else {
            continue;
        };
        let alt_lower = alt.to_lowercase();
        if BADGE_KEYWORDS.iter().any(|kw| alt_lower.contains(kw)) {
            sp.trust_badges.push(alt.to_string());
            if sp.trust_badges.len() >= 5 {
                break;
            }
        }
    }

    sp
}

#[cfg(test)]
mod tests {
    use super::super::document_text;
    use super::*;

    fn run(html: &str) -> SocialProof {
        let document = Html::parse_document(html);
        let page_text = document_text(&document);
        extract(&document, &page_text)
    }

    #[test]
    fn blockquotes_become_testimonials() {
        let sp = run(
            "<blockquote>This service changed how our team works, highly recommended.</blockquote>",
        );
        assert_eq!(sp.testimonials.len(), 1);
    }

    #[test]
    fn testimonial_classes_are_picked_up() {
        let sp = run(
            r#"<div class="customer-review">Brilliant support and a product that simply works.</div>"#,
        );
        assert_eq!(sp.testimonials.len(), 1);
    }

    #[test]
    fn duplicate_testimonials_collapse() {
        let quote = "Brilliant support and a product that simply works.";
        let html =
            format!(r#"<blockquote>{quote}</blockquote><div class="testimonial">{quote}</div>"#);
        let sp = run(&html);
        assert_eq!(sp.testimonials.len(), 1);
    }

    #[test]
    fn testimonials_capped_at_three() {
        let html: String = (0..6)
            .map(|i| format!("<blockquote>Customer number {i} said something rather nice about us.</blockquote>"))
            .collect();
        let sp = run(&html);
        assert_eq!(sp.testimonials.len(), 3);
    }

    #[test]
    fn too_short_quotes_are_dropped() {
        let sp = run("<blockquote>Great!</blockquote>");
        assert!(sp.testimonials.is_empty());
    }

    #[test]
    fn stats_match_customer_counts_and_percentages() {
        let sp = run("<p>Trusted by 10,000+ customers with a 40% increase in savings.</p>");
        assert!(sp.stats.iter().any(|s| s.contains("10,000+")));
        assert!(sp.stats.iter().any(|s| s.contains("40%")));
    }

    #[test]
    fn stats_capped_at_five() {
        let html = "<p>1,000+ customers 2,000+ users 3,000+ clients 50% increase 60% growth \
                    $1m saved 10 years 20 countries</p>";
        let sp = run(html);
        assert!(sp.stats.len() <= 5);
    }

    #[test]
    fn badge_alt_text_collected() {
        let sp = run(r#"<img alt="FCA Certified" src="/badge.png"><img alt="hero shot" src="/h.png">"#);
        assert_eq!(sp.trust_badges, vec!["FCA Certified".to_string()]);
    }
}
