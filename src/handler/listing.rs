//! Directory listing module
//!
//! Renders the HTML index shown for directories without an index file.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::fmt::Write;
use std::io;
use std::path::Path;
use tokio::fs;

/// Characters left unescaped in listing links (RFC 3986 unreserved plus `/`)
const LINK_SAFE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'/');

#[derive(Debug, Clone, PartialEq, Eq)]
struct ListingEntry {
    display: String,
    link: String,
}

/// Read `dir` and render its listing page
///
/// `display_path` is the decoded request path, shown in the title.
pub async fn render_listing(dir: &Path, display_path: &str) -> io::Result<String> {
    let mut names = Vec::new();
    let mut read_dir = fs::read_dir(dir).await?;
    while let Some(entry) = read_dir.next_entry().await? {
        let name = entry.file_name().to_string_lossy().into_owned();
        let file_type = entry.file_type().await?;

        let entry = if file_type.is_symlink() {
            // follow the link only to decide whether it points at a directory
            let to_dir = fs::metadata(entry.path())
                .await
                .is_ok_and(|m| m.is_dir());
            ListingEntry {
                display: format!("{name}@"),
                link: if to_dir { format!("{name}/") } else { name },
            }
        } else if file_type.is_dir() {
            ListingEntry {
                display: format!("{name}/"),
                link: format!("{name}/"),
            }
        } else {
            ListingEntry {
                display: name.clone(),
                link: name,
            }
        };
        names.push(entry);
    }
    names.sort_by_key(|e| e.display.to_lowercase());

    Ok(listing_html(display_path, &names))
}

fn listing_html(display_path: &str, entries: &[ListingEntry]) -> String {
    let title = format!("Directory listing for {}", escape_html(display_path));
    let mut html = String::new();
    html.push_str("<!DOCTYPE HTML>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    let _ = writeln!(html, "<title>{title}</title>");
    html.push_str("</head>\n<body>\n");
    let _ = writeln!(html, "<h1>{title}</h1>");
    html.push_str("<hr>\n<ul>\n");
    for entry in entries {
        let _ = writeln!(
            html,
            "<li><a href=\"{}\">{}</a></li>",
            utf8_percent_encode(&entry.link, LINK_SAFE),
            escape_html(&entry.display),
        );
    }
    html.push_str("</ul>\n<hr>\n</body>\n</html>\n");
    html
}

/// Escape text for inclusion in HTML element content or attribute values
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
