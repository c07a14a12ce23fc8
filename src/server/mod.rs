//! HTTP server adapters
//!
//! Translates between HTTP frameworks and the HTTP-agnostic API layer.
//!
//! Currently supported:
//! - `tiny_http` - Lightweight HTTP server for CLI use

mod tiny_http;

pub use tiny_http::serve;
