//! MIME type detection module
//!
//! Returns the corresponding Content-Type based on file extension.

use mime_guess::mime;
use std::path::Path;

/// Get the Content-Type header value for a file path
///
/// Text types are labelled UTF-8; anything unknown is served as
/// `application/octet-stream`.
///
/// # Examples
/// ```
/// use outserve::http::mime::content_type_for;
/// use std::path::Path;
///
/// assert_eq!(content_type_for(Path::new("index.html")), "text/html; charset=utf-8");
/// assert_eq!(content_type_for(Path::new("photo.png")), "image/png");
/// ```
pub fn content_type_for(path: &Path) -> String {
    let guess = mime_guess::from_path(path).first_or_octet_stream();
    if guess.type_() == mime::TEXT && guess.get_param(mime::CHARSET).is_none() {
        format!("{guess}; charset=utf-8")
    } else {
        guess.to_string()
    }
}
