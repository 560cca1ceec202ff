//! Static file serving module
//!
//! Maps a request onto the serving root: files, index files, listings and
//! the directory trailing-slash redirect.

use crate::config::AppState;
use crate::handler::listing;
use crate::handler::path::translate_path;
use crate::handler::router::RequestContext;
use crate::http::conditional::{format_http_date, is_not_modified};
use crate::http::mime::content_type_for;
use crate::http::range::{parse_range, RangeRequest};
use crate::http::{self, HttpResponse};
use crate::logger;
use hyper::body::Bytes;
use hyper::StatusCode;
use std::io;
use std::path::Path;
use std::time::SystemTime;
use tokio::fs;

/// Serve whatever the request path points at under the serving root
pub async fn serve(ctx: &RequestContext, state: &AppState) -> HttpResponse {
    let target = translate_path(state.root(), &ctx.path);

    let metadata = match fs::metadata(&target.fs_path).await {
        Ok(m) => m,
        Err(e) => return io_error_response(&e, &target.fs_path, ctx.is_head),
    };

    if !metadata.is_dir() {
        if target.trailing_slash {
            return not_found(ctx.is_head);
        }
        return serve_file(ctx, &target.fs_path).await;
    }

    if !target.trailing_slash {
        let location = match &ctx.query {
            Some(q) => format!("{}/?{q}", ctx.path),
            None => format!("{}/", ctx.path),
        };
        return http::build_301_response(&location);
    }

    for index in &state.config.http.index_files {
        let candidate = target.fs_path.join(index);
        if fs::metadata(&candidate).await.is_ok_and(|m| m.is_file()) {
            return serve_file(ctx, &candidate).await;
        }
    }

    match listing::render_listing(&target.fs_path, &target.display).await {
        Ok(html) => http::build_html_response(html, ctx.is_head),
        Err(e) => listing_error_response(&e, &target.fs_path, ctx.is_head),
    }
}

/// Map a failed directory read to 403, or 404 for anything else
fn listing_error_response(error: &io::Error, dir: &Path, is_head: bool) -> HttpResponse {
    logger::log_warning(&format!("Cannot list '{}': {error}", dir.display()));
    if error.kind() == io::ErrorKind::PermissionDenied {
        http::build_error_response(
            StatusCode::FORBIDDEN,
            "No permission to list directory",
            is_head,
        )
    } else {
        not_found(is_head)
    }
}

/// Serve a single regular file, honoring If-Modified-Since and Range
async fn serve_file(ctx: &RequestContext, path: &Path) -> HttpResponse {
    let data = match fs::read(path).await {
        Ok(d) => Bytes::from(d),
        Err(e) => return io_error_response(&e, path, ctx.is_head),
    };

    let modified = fs::metadata(path)
        .await
        .and_then(|m| m.modified())
        .unwrap_or_else(|_| SystemTime::now());
    let last_modified = format_http_date(modified);

    if is_not_modified(
        ctx.if_modified_since.as_deref(),
        ctx.has_if_none_match,
        modified,
    ) {
        return http::build_304_response(&last_modified);
    }

    let content_type = content_type_for(path);
    let total = u64::try_from(data.len()).unwrap_or(u64::MAX);

    match parse_range(ctx.range.as_deref(), total) {
        RangeRequest::Full => {
            http::build_file_response(data, &content_type, &last_modified, ctx.is_head)
        }
        RangeRequest::Partial(range) => {
            let (Ok(start), Ok(end)) = (usize::try_from(range.start), usize::try_from(range.end))
            else {
                return http::build_416_response(total, ctx.is_head);
            };
            http::build_partial_response(
                data.slice(start..=end),
                &content_type,
                &last_modified,
                range,
                total,
                ctx.is_head,
            )
        }
        RangeRequest::Unsatisfiable => http::build_416_response(total, ctx.is_head),
    }
}

fn not_found(is_head: bool) -> HttpResponse {
    http::build_error_response(StatusCode::NOT_FOUND, "File not found", is_head)
}

/// Map a filesystem error to 404, 403 or 500
fn io_error_response(error: &io::Error, path: &Path, is_head: bool) -> HttpResponse {
    match error.kind() {
        io::ErrorKind::NotFound | io::ErrorKind::NotADirectory | io::ErrorKind::InvalidInput => {
            logger::log_debug(&format!("Not found: {}", path.display()));
            not_found(is_head)
        }
        io::ErrorKind::PermissionDenied => {
            logger::log_warning(&format!("Permission denied: {}", path.display()));
            http::build_error_response(StatusCode::FORBIDDEN, "Forbidden", is_head)
        }
        _ => {
            logger::log_error(&format!("Failed to read '{}': {error}", path.display()));
            http::build_error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error",
                is_head,
            )
        }
    }
}
