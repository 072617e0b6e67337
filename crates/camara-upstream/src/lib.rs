//! # Camara Upstream Client
//!
//! HTTP client for the `dadosabertos.camara.leg.br` open-data API.
//! Issues JSON `GET` requests against a fixed base URL and decodes the
//! responses, mapping transport and status failures onto the gateway
//! error taxonomy.

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub mod client;

pub use client::UpstreamClient;
