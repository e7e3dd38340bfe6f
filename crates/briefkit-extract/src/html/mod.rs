//! Structured extraction from HTML documents.
//!
//! Each field group is extracted by a pure function over the parsed tree;
//! [`extract`] composes them into one [`ExtractedContent`]. If the tree
//! yields neither text nor any structured field while the raw markup is
//! non-empty, extraction falls back to regex tag-stripping and returns a
//! degraded record with a marker headline instead of failing the source.
//! A page with no visible text but extractable markup (assets, colors,
//! hrefs) is a normal extraction, not a degraded one.

mod assets;
mod brand;
mod ctas;
mod social;

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use briefkit_core::{truncate_chars, ExtractedContent, ProductInfo, SourceKind, ValueProposition};

use crate::patterns::{collapse_ws, is_outcome, strip_tags};

/// Marker headline for records produced via the tag-strip fallback.
pub const DEGRADED_HEADLINE: &str = "Content extraction limited";

static H1: LazyLock<Selector> = LazyLock::new(|| sel("h1"));
static TITLE: LazyLock<Selector> = LazyLock::new(|| sel("title"));
static META_DESCRIPTION: LazyLock<Selector> = LazyLock::new(|| sel(r#"meta[name="description"]"#));
static META_OG_DESCRIPTION: LazyLock<Selector> =
    LazyLock::new(|| sel(r#"meta[property="og:description"]"#));
static UL: LazyLock<Selector> = LazyLock::new(|| sel("ul"));
static LI: LazyLock<Selector> = LazyLock::new(|| sel("li"));
static P: LazyLock<Selector> = LazyLock::new(|| sel("p"));

fn sel(src: &str) -> Selector {
    Selector::parse(src).expect("valid selector")
}

/// Extracts structured content from an HTML page.
///
/// `base_url` doubles as the source identifier and the base for resolving
/// relative hrefs. `raw_text_max` bounds the diagnostic `raw_text` field.
#[must_use]
pub fn extract(html_src: &str, base_url: &str, raw_text_max: usize) -> ExtractedContent {
    let document = Html::parse_document(html_src);
    let page_text = document_text(&document);

    let mut record = ExtractedContent::new(base_url, SourceKind::Url);
    record.value_proposition = extract_value_prop(&document);
    record.product = extract_product(&document);
    record.social_proof = social::extract(&document, &page_text);
    record.ctas = ctas::extract(&document, base_url);
    record.brand = brand::extract(&document, html_src, &page_text);
    record.assets = assets::extract(&document, base_url);
    record.raw_text = truncate_chars(&page_text, raw_text_max);

    // Only when the tree recovered neither text nor a single structured
    // field from non-empty markup did parsing fail in any meaningful sense.
    if page_text.is_empty() && record.is_empty() && !html_src.trim().is_empty() {
        tracing::warn!(source = %base_url, "document tree yielded nothing; using tag-strip fallback");
        return degraded(html_src, base_url, raw_text_max);
    }

    record
}

/// Builds the degraded record used when tree parsing yields nothing usable.
#[must_use]
pub fn degraded(html_src: &str, base_url: &str, raw_text_max: usize) -> ExtractedContent {
    let mut record = ExtractedContent::new(base_url, SourceKind::Url);
    record.raw_text = truncate_chars(&strip_tags(html_src), raw_text_max);
    record.value_proposition.headline = DEGRADED_HEADLINE.to_string();
    record
}

fn extract_value_prop(document: &Html) -> ValueProposition {
    let mut vp = ValueProposition::default();

    if let Some(h1) = document.select(&H1).next() {
        vp.headline = element_text(h1);
    }

    // Meta description first, og:description as fallback, both capped.
    let description = meta_content(document, &META_DESCRIPTION)
        .or_else(|| meta_content(document, &META_OG_DESCRIPTION));
    if let Some(description) = description {
        vp.subheadline = truncate_chars(&description, 200);
    }

    // Benefit candidates come from bullet lists near the top of the page:
    // first 5 lists, first 5 items each.
    'lists: for ul in document.select(&UL).take(5) {
        for li in ul.select(&LI).take(5) {
            let text = element_text(li);
            if within_chars(&text, 10, 150) {
                vp.key_benefits.push(text);
                if vp.key_benefits.len() >= 5 {
                    break 'lists;
                }
            }
        }
    }

    vp
}

fn extract_product(document: &Html) -> ProductInfo {
    let mut product = ProductInfo::default();

    // Titles usually read "Product Name | Company" or "Product Name - Company".
    if let Some(title) = document.select(&TITLE).next() {
        let title_text = element_text(title);
        product.name = split_title(&title_text).0;
    }

    for p in document.select(&P).take(10) {
        let text = element_text(p);
        if within_chars(&text, 50, 500) {
            product.description = text;
            break;
        }
    }

    for li in document.select(&LI) {
        let text = element_text(li);
        if !within_chars(&text, 10, 150) {
            continue;
        }
        if is_outcome(&text) {
            if product.outcomes.len() < 5 {
                product.outcomes.push(text);
            }
        } else if product.features.len() < 8 {
            product.features.push(text);
        }
    }

    product
}

/// Splits a `<title>` on the first separator char, returning
/// `(before, after)` both trimmed. `after` is empty when no separator exists.
pub(super) fn split_title(title: &str) -> (String, String) {
    const SEPARATORS: &[char] = &['|', '-', '\u{2013}', '\u{2014}'];
    match title.find(SEPARATORS) {
        Some(idx) => {
            let (before, after) = title.split_at(idx);
            let after: &str = &after[after
                .char_indices()
                .nth(1)
                .map_or(after.len(), |(i, _)| i)..];
            (before.trim().to_string(), after.trim().to_string())
        }
        None => (title.trim().to_string(), String::new()),
    }
}

/// Concatenated, whitespace-collapsed text of an element's subtree.
pub(super) fn element_text(el: ElementRef<'_>) -> String {
    let joined = el
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    collapse_ws(&joined)
}

/// Whole-document visible text.
pub(super) fn document_text(document: &Html) -> String {
    element_text(document.root_element())
}

pub(super) fn meta_content(document: &Html, selector: &Selector) -> Option<String> {
    document
        .select(selector)
        .next()
        .and_then(|el| el.value().attr("content"))
        .map(|content| content.trim().to_string())
        .filter(|content| !content.is_empty())
}

/// Exclusive character-count bounds check, `min < len < max`.
pub(super) fn within_chars(text: &str, min: usize, max: usize) -> bool {
    let len = text.chars().count();
    len > min && len < max
}

/// Resolves an href against the base URL. Absolute URLs and non-navigational
/// schemes (mailto, tel, fragments, javascript) pass through unchanged;
/// anything else is joined against the base.
pub(super) fn resolve_url(base_url: &str, href: &str) -> String {
    let trimmed = href.trim();
    if trimmed.starts_with("http://")
        || trimmed.starts_with("https://")
        || trimmed.starts_with("mailto:")
        || trimmed.starts_with("tel:")
        || trimmed.starts_with('#')
        || trimmed.starts_with("javascript:")
    {
        return trimmed.to_string();
    }
    match url::Url::parse(base_url).and_then(|base| base.join(trimmed)) {
        Ok(joined) => joined.to_string(),
        Err(_) => trimmed.to_string(),
    }
}
