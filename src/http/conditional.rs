//! Conditional request module
//!
//! `Last-Modified` formatting and `If-Modified-Since` evaluation.

use chrono::{DateTime, Utc};
use std::time::SystemTime;

/// Format a timestamp as an IMF-fixdate, e.g. `Sun, 06 Nov 1994 08:49:37 GMT`
pub fn format_http_date(time: SystemTime) -> String {
    DateTime::<Utc>::from(time)
        .format("%a, %d %b %Y %H:%M:%S GMT")
        .to_string()
}

/// Parse an HTTP date header value
///
/// Returns `None` for anything that is not RFC 2822 compatible, which makes
/// the caller ignore the header.
pub fn parse_http_date(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc2822(value.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Check whether a `304 Not Modified` should be returned
///
/// `If-None-Match` takes precedence over `If-Modified-Since`; since no
/// entity tags are produced, its presence disables the date check.
///
/// # Arguments
/// * `if_modified_since` - Client-sent If-Modified-Since header
/// * `has_if_none_match` - Whether the client sent If-None-Match
/// * `modified` - File modification time
pub fn is_not_modified(
    if_modified_since: Option<&str>,
    has_if_none_match: bool,
    modified: SystemTime,
) -> bool {
    if has_if_none_match {
        return false;
    }
    let Some(since) = if_modified_since.and_then(parse_http_date) else {
        return false;
    };
    // Header dates have second precision
    DateTime::<Utc>::from(modified).timestamp() <= since.timestamp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, UNIX_EPOCH};

    fn at(secs: u64) -> SystemTime {
        UNIX_EPOCH + Duration::from_secs(secs)
    }

    #[test]
    fn test_format_http_date() {
        assert_eq!(format_http_date(at(784_111_777)), "Sun, 06 Nov 1994 08:49:37 GMT");
    }

    #[test]
    fn test_parse_http_date() {
        let parsed = parse_http_date("Sun, 06 Nov 1994 08:49:37 GMT").unwrap();
        assert_eq!(parsed.timestamp(), 784_111_777);
        assert!(parse_http_date("yesterday").is_none());
    }

    #[test]
    fn test_not_modified() {
        let header = Some("Sun, 06 Nov 1994 08:49:37 GMT");
        assert!(is_not_modified(header, false, at(784_111_777)));
        assert!(is_not_modified(header, false, at(784_111_000)));
        // sub-second precision is ignored
        assert!(is_not_modified(
            header,
            false,
            at(784_111_777) + Duration::from_millis(400)
        ));
        assert!(!is_not_modified(header, false, at(784_111_778)));
    }

    #[test]
    fn test_ignored_headers() {
        assert!(!is_not_modified(None, false, at(0)));
        assert!(!is_not_modified(Some("garbage"), false, at(0)));
        assert!(!is_not_modified(
            Some("Sun, 06 Nov 1994 08:49:37 GMT"),
            true,
            at(0)
        ));
    }
}
