//! tinyweb - minimal static file server
//!
//! Serves files below a single document root over HTTP/1.1, one request per
//! connection.

pub mod config;
pub mod http;
pub mod server;
