//! # Camara Router
//!
//! Static catalog of the republished Camara dos Deputados endpoints and the
//! machinery to interpret local requests against it:
//! - Route definitions with declared path and query parameters
//! - Trie-based path matching with `{param}` capture
//! - Marshaling of a matched request into an upstream [`ForwardPlan`]

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

mod catalog;
pub mod marshal;
pub mod route;
pub mod trie;

pub use marshal::{plan, ForwardPlan};
pub use route::{ParamKind, PathParam, QueryParam, Route};
pub use trie::{RouteMatch, RouteTrie};

use camara_core::{Error, Result};

/// Every route in the catalog, in category order
pub fn catalog() -> &'static [&'static Route] {
    catalog::all()
}

/// Router over the static route catalog
#[derive(Debug)]
pub struct Router {
    trie: RouteTrie,
}

impl Router {
    /// Build a router over the full catalog, validating every entry
    pub fn new() -> Result<Self> {
        Self::with_routes(catalog::all().iter().copied())
    }

    fn with_routes<I>(routes: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'static Route>,
    {
        let mut trie = RouteTrie::new();

        for route in routes {
            route.validate()?;
            trie.insert(route)?;
        }

        tracing::debug!(routes = trie.len(), "Route table compiled");

        Ok(Self { trie })
    }

    /// Match a request path against the catalog
    pub fn find(&self, path: &str) -> Result<RouteMatch> {
        self.trie
            .match_path(path)
            .ok_or_else(|| Error::RouteNotFound(path.to_string()))
    }

    /// Number of routes in the table
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }
}
