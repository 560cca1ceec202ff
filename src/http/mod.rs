//! HTTP protocol layer module
//!
//! Response builders, content types, dates and Range parsing, kept apart
//! from the file-serving logic.

pub mod conditional;
pub mod mime;
pub mod range;
pub mod response;

pub use response::{
    build_301_response, build_304_response, build_416_response, build_error_response,
    build_file_response, build_html_response, build_partial_response, HttpResponse,
};
