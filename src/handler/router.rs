//! Request dispatch module
//!
//! Entry point for HTTP request processing: method check, static file
//! dispatch, common headers and access logging.

use crate::config::AppState;
use crate::handler::static_files;
use crate::http::{self, HttpResponse};
use crate::logger::{self, AccessLogEntry};
use hyper::body::Incoming;
use hyper::header::{
    HeaderName, HeaderValue, CONTENT_LENGTH, IF_MODIFIED_SINCE, IF_NONE_MATCH, RANGE, REFERER, SERVER,
    USER_AGENT,
};
use hyper::http::request::Parts;
use hyper::{Method, Request, StatusCode};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Request information needed by the file handlers
///
/// Owned so no borrow of the request is held across filesystem awaits.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub path: String,
    pub query: Option<String>,
    pub is_head: bool,
    pub if_modified_since: Option<String>,
    pub has_if_none_match: bool,
    pub range: Option<String>,
}

impl RequestContext {
    pub fn from_parts(parts: &Parts) -> Self {
        let header = |name: HeaderName| {
            parts
                .headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(ToString::to_string)
        };

        Self {
            path: parts.uri.path().to_string(),
            query: parts.uri.query().map(ToString::to_string),
            is_head: parts.method == Method::HEAD,
            if_modified_since: header(IF_MODIFIED_SINCE),
            has_if_none_match: parts.headers.contains_key(IF_NONE_MATCH),
            range: header(RANGE),
        }
    }
}

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<Incoming>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<HttpResponse, Infallible> {
    let started = Instant::now();
    let (parts, _body) = req.into_parts();
    let ctx = RequestContext::from_parts(&parts);

    let mut response = match parts.method {
        Method::GET | Method::HEAD => static_files::serve(&ctx, &state).await,
        ref other => {
            logger::log_warning(&format!("Unsupported method: {other}"));
            http::build_error_response(
                StatusCode::NOT_IMPLEMENTED,
                &format!("Unsupported method ('{other}')"),
                false,
            )
        }
    };

    if let Ok(server) = HeaderValue::from_str(&state.config.http.server_name) {
        response.headers_mut().insert(SERVER, server);
    }

    if let Some(format) = state.access_log() {
        let mut entry = AccessLogEntry::new(
            peer_addr.ip().to_string(),
            parts.method.to_string(),
            ctx.path.clone(),
        );
        entry.query = ctx.query.clone();
        entry.http_version = format!("{:?}", parts.version);
        entry.status = response.status().as_u16();
        entry.body_bytes = if ctx.is_head {
            0
        } else {
            content_length(&response)
        };
        entry.referer = parts
            .headers
            .get(REFERER)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string);
        entry.user_agent = parts
            .headers
            .get(USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string);
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, format);
    }

    Ok(response)
}

fn content_length(response: &HttpResponse) -> u64 {
    response
        .headers()
        .get(CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts_for(builder: hyper::http::request::Builder) -> Parts {
        builder.body(()).unwrap().into_parts().0
    }

    #[test]
    fn test_context_from_parts() {
        let parts = parts_for(
            Request::builder()
                .method(Method::HEAD)
                .uri("/renders/final.png?v=3")
                .header("Range", "bytes=0-9")
                .header("If-None-Match", "\"abc\""),
        );
        let ctx = RequestContext::from_parts(&parts);
        assert_eq!(ctx.path, "/renders/final.png");
        assert_eq!(ctx.query.as_deref(), Some("v=3"));
        assert!(ctx.is_head);
        assert!(ctx.has_if_none_match);
        assert_eq!(ctx.range.as_deref(), Some("bytes=0-9"));
        assert_eq!(ctx.if_modified_since, None);
    }
}
