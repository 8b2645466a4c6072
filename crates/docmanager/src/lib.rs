//! `docmanager` - An in-memory document record service
//!
//! This library provides the record store for document records, their JSON and
//! plain-text projections, and the HTTP API that exposes create, read,
//! update-summary, delete, and download operations.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod http;
pub mod logging;
pub mod store;

pub use config::Config;
pub use document::Document;
pub use error::{Error, Result};
pub use http::{build_router, AppState};
pub use logging::init_logging;
pub use store::DocumentStore;
