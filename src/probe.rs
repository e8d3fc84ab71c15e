//! Header-only existence probes against candidate thumbnail locations.

use reqwest::StatusCode;

/// Availability is defined strictly as HTTP 200; every other status counts
/// as missing (the image host answers 404 with a real placeholder body for
/// unknown tiers, so `is_success` alone would be too loose anyway).
pub fn is_available(status: StatusCode) -> bool {
    status == StatusCode::OK
}

/// Probes a candidate location with a single HEAD request.
/// Any transport error maps to "not available"; this never propagates an
/// error past the boundary. No retry, no caching, default timeouts only.
pub fn probe(client: &reqwest::blocking::Client, url: &str) -> bool {
    match client.head(url).send() {
        Ok(resp) => is_available(resp.status()),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_200_is_available() {
        assert!(is_available(StatusCode::OK));
        assert!(!is_available(StatusCode::NO_CONTENT));
        assert!(!is_available(StatusCode::MOVED_PERMANENTLY));
        assert!(!is_available(StatusCode::NOT_FOUND));
        assert!(!is_available(StatusCode::INTERNAL_SERVER_ERROR));
    }
}
