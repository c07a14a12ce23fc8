//! taskflow - A CLI task and project manager with urgency classification and
//! smart notifications
//!
//! This library provides the core functionality for classifying tasks into
//! urgency buckets, deriving dashboard statistics, and synthesizing
//! notifications from task lifecycle events.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(feature = "api")]
pub mod api;
pub mod config;
pub mod core;
pub mod output;
pub mod paths;
#[cfg(feature = "api")]
pub mod server;
pub mod storage;
