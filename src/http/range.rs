//! HTTP Range request parsing module
//!
//! Single `bytes` ranges only (RFC 9110 section 14). Multi-range requests are
//! answered with the full body.

/// Inclusive byte span within a file of known length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    pub start: u64,
    pub end: u64,
}

impl ByteRange {
    pub const fn length(self) -> u64 {
        self.end - self.start + 1
    }

    /// `Content-Range` header value for this span
    pub fn content_range(self, total: u64) -> String {
        format!("bytes {}-{}/{total}", self.start, self.end)
    }
}

/// Outcome of evaluating a Range header against a file length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeRequest {
    /// No usable Range header: send the whole file
    Full,
    /// Send 206 with this span
    Partial(ByteRange),
    /// Send 416
    Unsatisfiable,
}

/// Evaluate a Range header
///
/// Supported forms: `bytes=start-end`, `bytes=start-`, `bytes=-suffix`.
/// Anything malformed is ignored rather than rejected.
///
/// # Examples
/// ```
/// use outserve::http::range::{parse_range, ByteRange, RangeRequest};
///
/// assert_eq!(
///     parse_range(Some("bytes=0-99"), 1000),
///     RangeRequest::Partial(ByteRange { start: 0, end: 99 })
/// );
/// assert_eq!(parse_range(None, 1000), RangeRequest::Full);
/// ```
pub fn parse_range(header: Option<&str>, total: u64) -> RangeRequest {
    let Some(spec) = header.and_then(|h| h.trim().strip_prefix("bytes=")) else {
        return RangeRequest::Full;
    };
    if spec.contains(',') {
        return RangeRequest::Full;
    }
    let Some((first, last)) = spec.split_once('-') else {
        return RangeRequest::Full;
    };
    let (first, last) = (first.trim(), last.trim());

    if first.is_empty() {
        return suffix_range(last, total);
    }

    let Ok(start) = first.parse::<u64>() else {
        return RangeRequest::Full;
    };
    let end = if last.is_empty() {
        None
    } else {
        match last.parse::<u64>() {
            Ok(e) if e >= start => Some(e),
            _ => return RangeRequest::Full,
        }
    };

    if start >= total {
        return RangeRequest::Unsatisfiable;
    }
    let last_byte = total - 1;
    RangeRequest::Partial(ByteRange {
        start,
        end: end.map_or(last_byte, |e| e.min(last_byte)),
    })
}

fn suffix_range(suffix: &str, total: u64) -> RangeRequest {
    let Ok(suffix) = suffix.parse::<u64>() else {
        return RangeRequest::Full;
    };
    if suffix == 0 || total == 0 {
        return RangeRequest::Unsatisfiable;
    }
    RangeRequest::Partial(ByteRange {
        start: total.saturating_sub(suffix),
        end: total - 1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn partial(start: u64, end: u64) -> RangeRequest {
        RangeRequest::Partial(ByteRange { start, end })
    }

    #[test]
    fn test_bounded_range() {
        assert_eq!(parse_range(Some("bytes=0-9"), 100), partial(0, 9));
        assert_eq!(ByteRange { start: 0, end: 9 }.length(), 10);
    }

    #[test]
    fn test_open_range() {
        assert_eq!(parse_range(Some("bytes=50-"), 100), partial(50, 99));
    }

    #[test]
    fn test_end_clamped_to_length() {
        assert_eq!(parse_range(Some("bytes=90-500"), 100), partial(90, 99));
    }

    #[test]
    fn test_suffix_range() {
        assert_eq!(parse_range(Some("bytes=-20"), 100), partial(80, 99));
        assert_eq!(parse_range(Some("bytes=-500"), 100), partial(0, 99));
    }

    #[test]
    fn test_unsatisfiable() {
        assert_eq!(
            parse_range(Some("bytes=200-"), 100),
            RangeRequest::Unsatisfiable
        );
        assert_eq!(parse_range(Some("bytes=-0"), 100), RangeRequest::Unsatisfiable);
        assert_eq!(parse_range(Some("bytes=0-"), 0), RangeRequest::Unsatisfiable);
    }

    #[test]
    fn test_ignored_headers() {
        assert_eq!(parse_range(Some("bytes=a-b"), 100), RangeRequest::Full);
        assert_eq!(parse_range(Some("bytes=0-9,20-29"), 100), RangeRequest::Full);
        assert_eq!(parse_range(Some("items=0-9"), 100), RangeRequest::Full);
        assert_eq!(parse_range(Some("bytes=9-0"), 100), RangeRequest::Full);
    }

    #[test]
    fn test_content_range() {
        assert_eq!(
            ByteRange { start: 5, end: 9 }.content_range(10),
            "bytes 5-9/10"
        );
    }
}
