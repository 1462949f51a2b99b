//! Transport layer
//!
//! [`HttpClient`] abstracts the transport; [`NetworkHttpClient`] talks
//! to a server over reqwest, [`OneshotHttpClient`] drives an axum router
//! in-process.

pub mod http;
#[cfg(feature = "in-process")]
pub mod http_oneshot;

pub use http::{HttpClient, NetworkHttpClient};
#[cfg(feature = "in-process")]
pub use http_oneshot::OneshotHttpClient;
