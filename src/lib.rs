//! Sahara DocuHub - document portal backend
//!
//! Core library providing the upload service, static retrieval of stored
//! files, and configuration for the document portal.

pub mod config;
pub mod core;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
