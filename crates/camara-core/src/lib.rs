//! # Camara Core
//!
//! Core types shared across the Camara gateway crates:
//! - Error types and status-code mapping
//! - Response building helpers

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub mod error;
pub mod response;

pub use error::{Error, Result};
pub use response::{Body, ResponseBuilder};

// Re-export commonly used HTTP types
pub use bytes::Bytes;
pub use http::{Method, Request, Response, StatusCode};
