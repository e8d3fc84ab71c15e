//! Video-id extraction from user-supplied YouTube URLs.

use once_cell::sync::Lazy;
use regex::Regex;

/// One extraction rule: a tag for diagnostics plus the pattern whose first
/// capture group is the video id. Rules are tried in order; the first rule
/// with a non-empty capture wins.
struct ExtractionRule {
    tag: &'static str,
    pattern: Lazy<Regex>,
}

/// Ordered rule list. The capture excludes `&`, `?` and `#` so trailing
/// query or fragment segments fall off the id naturally.
static RULES: [ExtractionRule; 3] = [
    ExtractionRule {
        tag: "watch",
        pattern: Lazy::new(|| {
            Regex::new(r"(?:youtube\.com/watch\?v=|youtu\.be/|youtube\.com/embed/)([^&?#]+)")
                .expect("Failed to compile watch pattern")
        }),
    },
    ExtractionRule {
        tag: "watch-extra-params",
        pattern: Lazy::new(|| {
            Regex::new(r"youtube\.com/watch\?.*v=([^&?#]+)")
                .expect("Failed to compile watch-extra-params pattern")
        }),
    },
    ExtractionRule {
        tag: "short-link",
        pattern: Lazy::new(|| {
            Regex::new(r"youtu\.be/([^&?#]+)").expect("Failed to compile short-link pattern")
        }),
    },
];

/// Extracts the video id from a YouTube URL, or `None` when no rule matches.
/// The capture is returned as-is: no trimming, decoding or normalization.
pub fn extract_video_id(url: &str) -> Option<String> {
    for rule in RULES.iter() {
        if let Some(caps) = rule.pattern.captures(url) {
            if let Some(m) = caps.get(1) {
                if !m.as_str().is_empty() {
                    return Some(m.as_str().to_string());
                }
            }
        }
    }
    None
}

/// A URL is considered valid exactly when extraction succeeds.
pub fn is_valid_youtube_url(url: &str) -> bool {
    extract_video_id(url).is_some()
}

/// Tag of the first rule that matches, for console diagnostics.
#[allow(dead_code)]
pub fn matching_rule(url: &str) -> Option<&'static str> {
    RULES
        .iter()
        .find(|rule| {
            rule.pattern
                .captures(url)
                .and_then(|caps| caps.get(1))
                .map(|m| !m.as_str().is_empty())
                .unwrap_or(false)
        })
        .map(|rule| rule.tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_watch_url() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_extract_strips_trailing_query_params() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=30s"),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(
            extract_video_id("https://youtu.be/dQw4w9WgXcQ?si=abc123"),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(
            extract_video_id("https://www.youtube.com/embed/dQw4w9WgXcQ#start"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_extract_short_link() {
        assert_eq!(
            extract_video_id("https://youtu.be/abc_DEF-123"),
            Some("abc_DEF-123".to_string())
        );
    }

    #[test]
    fn test_extract_embed_url() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/embed/abc_DEF-123"),
            Some("abc_DEF-123".to_string())
        );
    }

    #[test]
    fn test_extract_v_not_first_param() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?list=PL123&v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_extract_rejects_unrecognized_urls() {
        assert_eq!(extract_video_id(""), None);
        assert_eq!(extract_video_id("https://example.com/watch?v=abc"), None);
        assert_eq!(extract_video_id("https://vimeo.com/12345"), None);
        assert_eq!(extract_video_id("not a url at all"), None);
    }

    #[test]
    fn test_extract_rejects_empty_capture() {
        assert_eq!(extract_video_id("https://youtu.be/?t=1"), None);
        assert_eq!(extract_video_id("https://www.youtube.com/watch?v=&x=1"), None);
    }

    #[test]
    fn test_validity_mirrors_extraction() {
        assert!(is_valid_youtube_url("https://youtu.be/dQw4w9WgXcQ"));
        assert!(!is_valid_youtube_url("https://example.com/"));
    }

    #[test]
    fn test_matching_rule_precedence() {
        assert_eq!(
            matching_rule("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("watch")
        );
        assert_eq!(
            matching_rule("https://www.youtube.com/watch?list=PL123&v=dQw4w9WgXcQ"),
            Some("watch-extra-params")
        );
    }
}
