//! Core module - configuration, errors and the HTTP server
//!
//! - [`Config`] - gateway configuration
//! - [`Server`] - HTTP server
//! - [`GatewayError`] - proxy failures

pub mod config;
pub mod error;
pub mod server;

pub use config::Config;
pub use error::{GatewayError, Result};
pub use server::{Server, build_router};
