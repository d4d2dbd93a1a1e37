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
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Logging setup shared by the Recipebox native binaries.
//!
//! The browser build logs through the console directly; everything that runs
//! on a host installs a `tracing-subscriber` through [`init_logging`].

mod init;

pub use init::{
    DEFAULT_LOG_LEVEL, LogFormat, LoggingConfig, TelemetryError, command_span, init_logging,
};
