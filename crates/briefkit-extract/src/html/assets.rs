//! Media asset extraction: PDFs, videos, and content images.

use std::sync::LazyLock;

use scraper::{Html, Selector};

use briefkit_core::Assets;

use super::{resolve_url, sel};

static PDF_LINKS: LazyLock<Selector> = LazyLock::new(|| sel("a[href]"));
static VIDEO: LazyLock<Selector> = LazyLock::new(|| sel("video"));
static VIDEO_SOURCE: LazyLock<Selector> = LazyLock::new(|| sel("source"));
static IFRAME: LazyLock<Selector> = LazyLock::new(|| sel("iframe"));
static IMG: LazyLock<Selector> = LazyLock::new(|| sel("img"));

/// Alt-text fragments that mark an image as decoration rather than content.
const SKIP_ALT: &[&str] = &["icon", "logo", "arrow", "button"];
/// Src fragments that mark tracking pixels and chrome.
const SKIP_SRC: &[&str] = &["icon", "logo", "1x1", "pixel"];

pub(super) fn extract(document: &Html, base_url: &str) -> Assets {
    let mut assets = Assets::default();

    for a in document.select(&PDF_LINKS) {
        let Some(href) = a.value().attr("href") else {
            continue;
        };
        if href.to_lowercase().ends_with(".pdf") {
            assets.pdfs.push(resolve_url(base_url, href));
            if assets.pdfs.len() >= 5 {
                break;
            }
        }
    }

    for video in document.select(&VIDEO) {
        let src = video
            .value()
            .attr("src")
            .map(str::to_string)
            .or_else(|| {
                video
                    .select(&VIDEO_SOURCE)
                    .next()
                    .and_then(|source| source.value().attr("src"))
                    .map(str::to_string)
            });
        if let Some(src) = src {
            assets.videos.push(resolve_url(base_url, &src));
        }
    }
    for iframe in document.select(&IFRAME) {
        let Some(src) = iframe.value().attr("src") else {
            continue;
        };
        if src.contains("youtube") || src.contains("vimeo") {
            assets.videos.push(src.to_string());
        }
    }
    assets.videos.truncate(3);

    for img in document.select(&IMG).take(20) {
        let Some(src) = img.value().attr("src") else {
            continue;
        };
        if src.is_empty() {
            continue;
        }
        let alt_lower = img.value().attr("alt").unwrap_or("").to_lowercase();
        if SKIP_ALT.iter().any(|kw| alt_lower.contains(kw)) {
            continue;
        }
        let src_lower = src.to_lowercase();
        if SKIP_SRC.iter().any(|kw| src_lower.contains(kw)) {
            continue;
        }
        assets.images.push(resolve_url(base_url, src));
        if assets.images.len() >= 10 {
            break;
        }
    }

    assets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(html: &str) -> Assets {
        let document = Html::parse_document(html);
        extract(&document, "https://example.com")
    }

    #[test]
    fn pdf_links_resolved_to_absolute() {
        let assets = run(r#"<a href="/docs/brochure.pdf">Brochure</a>"#);
        assert_eq!(
            assets.pdfs,
            vec!["https://example.com/docs/brochure.pdf".to_string()]
        );
    }

    #[test]
    fn video_src_and_nested_source_both_work() {
        let assets = run(
            r#"<video src="/a.mp4"></video><video><source src="/b.mp4"></video>"#,
        );
        assert_eq!(assets.videos.len(), 2);
        assert!(assets.videos[0].ends_with("/a.mp4"));
        assert!(assets.videos[1].ends_with("/b.mp4"));
    }

    #[test]
    fn youtube_iframes_count_as_videos() {
        let assets = run(r#"<iframe src="https://www.youtube.com/embed/abc123"></iframe>"#);
        assert_eq!(assets.videos.len(), 1);
    }

    #[test]
    fn non_video_iframes_ignored() {
        let assets = run(r#"<iframe src="https://maps.example.com/embed"></iframe>"#);
        assert!(assets.videos.is_empty());
    }

    #[test]
    fn decorative_images_skipped() {
        let assets = run(
            r#"<img src="/logo.png" alt="company logo">
               <img src="/hero.jpg" alt="product in use">
               <img src="/pixel.gif" alt="">"#,
        );
        assert_eq!(assets.images, vec!["https://example.com/hero.jpg".to_string()]);
    }

    #[test]
    fn images_capped_at_ten() {
        let imgs: String = (0..15)
            .map(|i| format!(r#"<img src="/photo-{i}.jpg" alt="photo {i}">"#))
            .collect();
        let assets = run(&imgs);
        assert_eq!(assets.images.len(), 10);
    }
}
