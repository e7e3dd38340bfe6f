//! Brand-element extraction: name, colors, tone keywords, and industry.

use std::sync::LazyLock;

use scraper::{Html, Selector};

use briefkit_core::BrandElements;

use crate::patterns::{
    extract_colors, HTML_INDUSTRY_MIN_HITS, HTML_INDUSTRY_SETS, HTML_TONE_MIN_HITS,
    HTML_TONE_SETS,
};

use super::{element_text, meta_content, sel, split_title};

static META_OG_SITE_NAME: LazyLock<Selector> =
    LazyLock::new(|| sel(r#"meta[property="og:site_name"]"#));
static TITLE: LazyLock<Selector> = LazyLock::new(|| sel("title"));

pub(super) fn extract(document: &Html, html_src: &str, page_text: &str) -> BrandElements {
    let mut brand = BrandElements::default();

    // og:site_name is authoritative; otherwise the company name usually sits
    // after the separator in the <title>, falling back to the whole title.
    if let Some(site_name) = meta_content(document, &META_OG_SITE_NAME) {
        brand.name = site_name;
    } else if let Some(title) = document.select(&TITLE).next() {
        let (before, after) = split_title(&element_text(title));
        brand.name = if after.is_empty() { before } else { after };
    }

    // Colors come from the raw markup, not the tree: hex literals mostly live
    // in inline styles and embedded CSS.
    brand.colors = extract_colors(html_src);

    let text_lower = page_text.to_lowercase();

    for (tone, keywords) in HTML_TONE_SETS {
        let hits = keywords.iter().filter(|kw| text_lower.contains(*kw)).count();
        if hits >= HTML_TONE_MIN_HITS {
            brand.tone_keywords.push((*tone).to_string());
        }
    }
    if brand.tone_keywords.is_empty() {
        brand.tone_keywords.push("professional".to_string());
    }

    for (industry, keywords) in HTML_INDUSTRY_SETS {
        let hits = keywords.iter().filter(|kw| text_lower.contains(*kw)).count();
        if hits >= HTML_INDUSTRY_MIN_HITS {
            brand.industry = (*industry).to_string();
            break;
        }
    }
    if brand.industry.is_empty() {
        brand.industry = "general business".to_string();
    }

    brand
}

#[cfg(test)]
mod tests {
    use super::super::document_text;
    use super::*;

    fn run(html: &str) -> BrandElements {
        let document = Html::parse_document(html);
        let page_text = document_text(&document);
        extract(&document, html, &page_text)
    }

    #[test]
    fn og_site_name_preferred_over_title() {
        let brand = run(
            r#"<head><meta property="og:site_name" content="Acme"><title>Offer | Other</title></head>"#,
        );
        assert_eq!(brand.name, "Acme");
    }

    #[test]
    fn name_from_title_tail_when_no_og_tag() {
        let brand = run("<head><title>Flexible ISA | Acme Savings</title></head>");
        assert_eq!(brand.name, "Acme Savings");
    }

    #[test]
    fn name_from_whole_title_without_separator() {
        let brand = run("<head><title>Acme</title></head>");
        assert_eq!(brand.name, "Acme");
    }

    #[test]
    fn tone_defaults_to_professional() {
        let brand = run("<body><p>Something wholly neutral.</p></body>");
        assert_eq!(brand.tone_keywords, vec!["professional".to_string()]);
    }

    #[test]
    fn tone_sets_accumulate() {
        let brand = run("<body><p>A friendly team with innovative, cutting-edge tools. Easy.</p></body>");
        assert!(brand.tone_keywords.contains(&"friendly".to_string()));
        assert!(brand.tone_keywords.contains(&"innovative".to_string()));
    }

    #[test]
    fn industry_requires_two_keyword_hits() {
        // "savings" alone must not classify as financial services.
        let brand = run("<body><p>Build your savings with us.</p></body>");
        assert_eq!(brand.industry, "general business");

        let brand = run("<body><p>An ISA for your savings and pension.</p></body>");
        assert_eq!(brand.industry, "financial services");
    }

    #[test]
    fn first_qualifying_industry_wins() {
        // Qualifies both financial services and saas; table order decides.
        let brand = run(
            "<body><p>Investment platform software with ISA savings, dashboard and api.</p></body>",
        );
        assert_eq!(brand.industry, "financial services");
    }

    #[test]
    fn colors_come_from_raw_markup() {
        let brand = run(r#"<body style="color: #3366CC">text</body>"#);
        assert_eq!(brand.colors, vec!["#3366CC".to_string()]);
    }
}
