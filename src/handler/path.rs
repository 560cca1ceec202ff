//! URL path to filesystem path translation

use percent_encoding::percent_decode_str;
use std::path::{Path, PathBuf};

/// A request path mapped under the serving root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatedPath {
    pub fs_path: PathBuf,
    /// Percent-decoded request path, used for listing titles
    pub display: String,
    pub trailing_slash: bool,
}

/// Map a URL path onto `root`
///
/// Segments that are empty, `.` or `..`, or that contain a backslash, are
/// dropped, so the result always stays beneath `root`.
pub fn translate_path(root: &Path, uri_path: &str) -> TranslatedPath {
    let display = percent_decode_str(uri_path).decode_utf8_lossy().into_owned();
    let trailing_slash = display.ends_with('/');

    let mut fs_path = root.to_path_buf();
    for segment in display.split('/') {
        if segment.is_empty() || segment == "." || segment == ".." || segment.contains('\\') {
            continue;
        }
        fs_path.push(segment);
    }

    TranslatedPath {
        fs_path,
        display,
        trailing_slash,
    }
}
