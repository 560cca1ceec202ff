//! Request handler module
//!
//! Request dispatch, URL-to-path translation, static file serving and
//! directory listings.

pub mod listing;
pub mod path;
pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::handle_request;
