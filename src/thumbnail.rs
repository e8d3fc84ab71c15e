//! Candidate construction and thumbnail image fetching.

use eframe::egui::ColorImage;

use crate::model::{ThumbnailCandidate, ThumbnailQuality};

/// Builds the full candidate set for a video id: exactly five entries, one
/// per quality tier, highest resolution first. Pure string templating
/// against the fixed tier table; no network access here.
pub fn build_candidates(video_id: &str) -> Vec<ThumbnailCandidate> {
    ThumbnailQuality::all()
        .iter()
        .map(|&quality| ThumbnailCandidate {
            quality,
            url: format!(
                "https://img.youtube.com/vi/{}/{}.jpg",
                video_id,
                quality.file_segment()
            ),
            filename: format!(
                "youtube-thumbnail-{}-{}.jpg",
                video_id,
                quality.filename_tag()
            ),
        })
        .collect()
}

/// Fetches a thumbnail image and decodes it for display.
/// Performs a blocking HTTP GET, returning None on any error.
pub fn fetch_image(client: &reqwest::blocking::Client, url: &str) -> Option<ColorImage> {
    let resp = client.get(url).send().ok()?;
    if !resp.status().is_success() {
        return None;
    }
    let bytes = resp.bytes().ok()?;
    // Load image data into an image::DynamicImage and convert to RGBA8
    let img = image::load_from_memory(&bytes).ok()?.to_rgba8();
    let size = [img.width() as usize, img.height() as usize];
    // Create a ColorImage from the raw RGBA bytes without premultiplying alpha
    Some(ColorImage::from_rgba_unmultiplied(size, &img))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_candidate_count_and_order() {
        let candidates = build_candidates("dQw4w9WgXcQ");
        assert_eq!(candidates.len(), 5);

        let tiers: Vec<ThumbnailQuality> = candidates.iter().map(|c| c.quality).collect();
        assert_eq!(
            tiers,
            vec![
                ThumbnailQuality::MaxRes,
                ThumbnailQuality::High,
                ThumbnailQuality::Standard,
                ThumbnailQuality::Medium,
                ThumbnailQuality::Default,
            ]
        );
    }

    #[test]
    fn test_first_candidate_is_maxres() {
        let candidates = build_candidates("dQw4w9WgXcQ");
        assert_eq!(
            candidates[0].url,
            "https://img.youtube.com/vi/dQw4w9WgXcQ/maxresdefault.jpg"
        );
    }

    #[test]
    fn test_urls_contain_id_exactly_once() {
        let candidates = build_candidates("abc_DEF-123");
        for c in &candidates {
            assert_eq!(c.url.matches("abc_DEF-123").count(), 1, "url: {}", c.url);
        }
    }

    #[test]
    fn test_filenames_unique() {
        let candidates = build_candidates("dQw4w9WgXcQ");
        let names: HashSet<&str> = candidates.iter().map(|c| c.filename.as_str()).collect();
        assert_eq!(names.len(), 5);
    }

    #[test]
    fn test_filename_embeds_id_and_tag() {
        let candidates = build_candidates("dQw4w9WgXcQ");
        assert_eq!(
            candidates[0].filename,
            "youtube-thumbnail-dQw4w9WgXcQ-maxres.jpg"
        );
        assert_eq!(
            candidates[4].filename,
            "youtube-thumbnail-dQw4w9WgXcQ-default.jpg"
        );
    }

    #[test]
    fn test_candidates_deterministic() {
        assert_eq!(build_candidates("xyz"), build_candidates("xyz"));
    }
}
