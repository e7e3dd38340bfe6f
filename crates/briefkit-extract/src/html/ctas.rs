//! Call-to-action extraction.
//!
//! Elements are scanned in document order; the keyword lists classify each
//! one as primary or secondary, and the first match of each class wins.

use std::sync::LazyLock;

use scraper::{Html, Selector};

use briefkit_core::Ctas;

use crate::patterns::{PRIMARY_CTA_KEYWORDS, SECONDARY_CTA_KEYWORDS};

use super::{element_text, resolve_url, sel};

static BUTTONS_AND_LINKS: LazyLock<Selector> = LazyLock::new(|| sel("button, a"));

pub(super) fn extract(document: &Html, base_url: &str) -> Ctas {
    let mut ctas = Ctas::default();

    for el in document.select(&BUTTONS_AND_LINKS) {
        let text = element_text(el);
        if text.is_empty() {
            continue;
        }
        let text_lower = text.to_lowercase();
        let href = el
            .value()
            .attr("href")
            .map(|href| resolve_url(base_url, href))
            .filter(|href| !href.is_empty());

        if ctas.primary.is_empty()
            && PRIMARY_CTA_KEYWORDS.iter().any(|kw| text_lower.contains(kw))
        {
            ctas.primary = text.clone();
            if let Some(href) = href.clone() {
                ctas.urls.insert(text.clone(), href);
            }
            continue;
        }

        if ctas.secondary.is_empty()
            && SECONDARY_CTA_KEYWORDS
                .iter()
                .any(|kw| text_lower.contains(kw))
        {
            ctas.secondary = text.clone();
            if let Some(href) = href {
                ctas.urls.insert(text, href);
            }
        }

        if !ctas.primary.is_empty() && !ctas.secondary.is_empty() {
            break;
        }
    }

    ctas
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(html: &str) -> Ctas {
        let document = Html::parse_document(html);
        extract(&document, "https://example.com")
    }

    #[test]
    fn first_primary_match_wins() {
        let ctas = run(r#"<a href="/apply">Apply Now</a><a href="/start">Get Started</a>"#);
        assert_eq!(ctas.primary, "Apply Now");
        assert_eq!(
            ctas.urls.get("Apply Now").map(String::as_str),
            Some("https://example.com/apply")
        );
    }

    #[test]
    fn secondary_detected_independently() {
        let ctas = run(r#"<a href="/how">See How It Works</a><button>Sign Up</button>"#);
        assert_eq!(ctas.secondary, "See How It Works");
        assert_eq!(ctas.primary, "Sign Up");
    }

    #[test]
    fn buttons_without_href_still_classify() {
        let ctas = run("<button>Start your free trial</button>");
        assert_eq!(ctas.primary, "Start your free trial");
        assert!(ctas.urls.is_empty());
    }

    #[test]
    fn at_most_one_cta_per_class() {
        let ctas = run(
            r#"<a href="/a">Learn More</a><a href="/b">Discover Options</a>
               <a href="/c">Buy Now</a><a href="/d">Book a Demo</a>"#,
        );
        assert_eq!(ctas.secondary, "Learn More");
        assert_eq!(ctas.primary, "Buy Now");
        assert_eq!(ctas.urls.len(), 2);
    }

    #[test]
    fn unmatched_text_leaves_ctas_empty() {
        let ctas = run(r#"<a href="/about">About our company</a>"#);
        assert!(ctas.primary.is_empty());
        assert!(ctas.secondary.is_empty());
    }
}
