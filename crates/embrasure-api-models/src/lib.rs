#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::multiple_crate_versions)]
//! Shared HTTP DTOs for the Embrasure directory console.
//!
//! The console talks to the directory REST service with camelCase JSON. The
//! types here mirror that wire shape so the UI crate never hand-builds
//! payloads, and keep the request defaults (base path, headers, context id)
//! in one place.

pub mod config;
pub mod error;
pub mod problem;
pub mod user;

pub use config::{CONTEXT_ID, FT_BASE_URL, RequestConfig, default_headers};
pub use error::{ModelError, ModelResult};
pub use problem::{ErrorDetail, FailureResponse, HttpFailure, MISSING_DETAIL, ProblemDetails};
pub use user::{Address, UserRecord, new_user};
