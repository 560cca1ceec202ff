//! HTTP response building module
//!
//! Builders for every status the file server produces.

use crate::http::range::ByteRange;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{
    ACCEPT_RANGES, CONTENT_LENGTH, CONTENT_RANGE, CONTENT_TYPE, LAST_MODIFIED, LOCATION,
};
use hyper::http::response::Builder;
use hyper::{Response, StatusCode};

pub type HttpResponse = Response<Full<Bytes>>;

const HTML_UTF8: &str = "text/html; charset=utf-8";

/// Build 200 response carrying a whole file
pub fn build_file_response(
    data: Bytes,
    content_type: &str,
    last_modified: &str,
    is_head: bool,
) -> HttpResponse {
    let content_length = data.len();
    let body = if is_head { Bytes::new() } else { data };

    finish(
        Response::builder()
            .status(StatusCode::OK)
            .header(CONTENT_TYPE, content_type)
            .header(CONTENT_LENGTH, content_length)
            .header(LAST_MODIFIED, last_modified)
            .header(ACCEPT_RANGES, "bytes"),
        body,
        "200",
    )
}

/// Build 206 Partial Content response
///
/// `data` must already be the bytes of `range`.
pub fn build_partial_response(
    data: Bytes,
    content_type: &str,
    last_modified: &str,
    range: ByteRange,
    total_size: u64,
    is_head: bool,
) -> HttpResponse {
    let body = if is_head { Bytes::new() } else { data };

    finish(
        Response::builder()
            .status(StatusCode::PARTIAL_CONTENT)
            .header(CONTENT_TYPE, content_type)
            .header(CONTENT_LENGTH, range.length())
            .header(CONTENT_RANGE, range.content_range(total_size))
            .header(LAST_MODIFIED, last_modified)
            .header(ACCEPT_RANGES, "bytes"),
        body,
        "206",
    )
}

/// Build 304 Not Modified response
pub fn build_304_response(last_modified: &str) -> HttpResponse {
    finish(
        Response::builder()
            .status(StatusCode::NOT_MODIFIED)
            .header(LAST_MODIFIED, last_modified),
        Bytes::new(),
        "304",
    )
}

/// Build 301 redirect, used to add the trailing slash to directory URLs
pub fn build_301_response(location: &str) -> HttpResponse {
    finish(
        Response::builder()
            .status(StatusCode::MOVED_PERMANENTLY)
            .header(LOCATION, location)
            .header(CONTENT_LENGTH, 0),
        Bytes::new(),
        "301",
    )
}

/// Build 200 response for generated HTML (directory listings)
pub fn build_html_response(content: String, is_head: bool) -> HttpResponse {
    let content_length = content.len();
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(content)
    };

    finish(
        Response::builder()
            .status(StatusCode::OK)
            .header(CONTENT_TYPE, HTML_UTF8)
            .header(CONTENT_LENGTH, content_length),
        body,
        "HTML",
    )
}

/// Build 416 Range Not Satisfiable response
pub fn build_416_response(file_size: u64, is_head: bool) -> HttpResponse {
    let mut response = build_error_response(
        StatusCode::RANGE_NOT_SATISFIABLE,
        "Requested range not satisfiable",
        is_head,
    );
    if let Ok(value) = format!("bytes */{file_size}").parse() {
        response.headers_mut().insert(CONTENT_RANGE, value);
    }
    response
}

/// Build an error response with a small HTML explanation page
pub fn build_error_response(status: StatusCode, message: &str, is_head: bool) -> HttpResponse {
    let page = error_page(status, message);
    let content_length = page.len();
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(page)
    };

    finish(
        Response::builder()
            .status(status)
            .header(CONTENT_TYPE, HTML_UTF8)
            .header(CONTENT_LENGTH, content_length),
        body,
        status.as_str(),
    )
}

fn error_page(status: StatusCode, message: &str) -> String {
    format!(
        "<!DOCTYPE HTML>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>Error response</title>\n\
         </head>\n\
         <body>\n\
         <h1>Error response</h1>\n\
         <p>Error code: {}</p>\n\
         <p>Message: {}.</p>\n\
         </body>\n\
         </html>\n",
        status.as_u16(),
        crate::handler::listing::escape_html(message),
    )
}

fn finish(builder: Builder, body: Bytes, label: &str) -> HttpResponse {
    builder.body(Full::new(body)).unwrap_or_else(|e| {
        logger::log_error(&format!("Failed to build {label} response: {e}"));
        Response::new(Full::new(Bytes::new()))
    })
}
