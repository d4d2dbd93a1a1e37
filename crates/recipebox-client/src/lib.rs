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
#![allow(clippy::module_name_repetitions)]

//! REST client for the Recipebox API.
//!
//! Layout:
//! - `client.rs`: one method per recipe operation plus shared response decoding
//! - `transport.rs`: the HTTP seam implemented by browser and native transports
//! - `cancel.rs`: explicit cancellation token honoured by transports
//! - `config.rs`: validated client configuration
//! - `error.rs`: error taxonomy surfaced to callers
//! - `reqwest_transport.rs`: native transport (behind the `reqwest` feature)

pub mod cancel;
pub mod client;
pub mod config;
pub mod error;
#[cfg(feature = "reqwest")]
pub mod reqwest_transport;
pub mod transport;

pub use cancel::{CancelToken, Cancelled};
pub use client::{RecipeClient, decode_response};
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::{ApiError, ConfigError, TransportError};
#[cfg(feature = "reqwest")]
pub use reqwest_transport::ReqwestTransport;
pub use transport::{CONTENT_TYPE_JSON, HttpRequest, HttpResponse, Method, Transport};
