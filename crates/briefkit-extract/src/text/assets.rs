//! Asset references in raw text: bare URLs bucketed by extension, plus
//! explicit attachment mentions.

use std::sync::LazyLock;

use regex::Regex;

use briefkit_core::Assets;

use super::URL_RE;

static ATTACHMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:see|download|attached)[:\s]\s*([\w. -]+\.pdf)\b").expect("valid regex")
});

const IMAGE_EXTS: &[&str] = &[".png", ".jpg", ".jpeg", ".gif", ".webp"];
const VIDEO_EXTS: &[&str] = &[".mp4", ".mov", ".webm"];

pub(super) fn extract(text: &str) -> Assets {
    let mut assets = Assets::default();

    for m in URL_RE.find_iter(text) {
        let url = m.as_str().trim_end_matches(['.', ',', ';']).to_string();
        let lower = url.to_lowercase();
        if lower.ends_with(".pdf") {
            assets.pdfs.push(url);
        } else if lower.contains("youtube") || lower.contains("vimeo")
            || VIDEO_EXTS.iter().any(|ext| lower.ends_with(ext))
        {
            assets.videos.push(url);
        } else if IMAGE_EXTS.iter().any(|ext| lower.ends_with(ext)) {
            assets.images.push(url);
        }
    }

    for caps in ATTACHMENT_RE.captures_iter(text) {
        assets.pdfs.push(caps[1].trim().to_string());
    }

    assets.pdfs.truncate(5);
    assets.videos.truncate(3);
    assets.images.truncate(10);
    assets
}
