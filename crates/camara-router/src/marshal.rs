//! Translation of a matched request into an upstream call.
//!
//! Everything here runs before any network traffic, so malformed
//! parameters are rejected while the request is still local.

use crate::route::{ParamKind, Route};
use crate::trie::RouteMatch;
use camara_core::{Error, Result};
use url::form_urlencoded;

/// The upstream call derived from a matched request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwardPlan {
    /// Upstream path, relative to the API base URL
    pub endpoint: String,

    /// Query pairs to append, in declaration order
    pub query: Vec<(String, String)>,
}

/// Build the upstream call for a matched route.
///
/// Path parameters are coerced according to their declared shape; declared
/// query parameters are collected from `raw_query` (or filled from their
/// default), and everything else in the query string is dropped. A scalar
/// parameter supplied more than once resolves to its last value.
pub fn plan(matched: &RouteMatch, raw_query: Option<&str>) -> Result<ForwardPlan> {
    Ok(ForwardPlan {
        endpoint: expand_endpoint(matched)?,
        query: collect_query(matched.route, raw_query)?,
    })
}

fn expand_endpoint(matched: &RouteMatch) -> Result<String> {
    let route = matched.route;
    let mut endpoint = route.upstream_path.to_string();

    for (param, value) in route.path_params.iter().zip(&matched.values) {
        let value = coerce(param.kind, param.name, value)?;
        endpoint = endpoint.replacen(&format!("{{{}}}", param.name), &value, 1);
    }

    Ok(endpoint)
}

fn collect_query(route: &Route, raw_query: Option<&str>) -> Result<Vec<(String, String)>> {
    let received: Vec<(String, String)> = match raw_query {
        Some(raw) => form_urlencoded::parse(raw.as_bytes()).into_owned().collect(),
        None => Vec::new(),
    };

    let mut query = Vec::new();

    for param in route.query_params {
        let occurrences: Vec<&str> = received
            .iter()
            .filter(|(name, _)| name.as_str() == param.name)
            .map(|(_, value)| value.as_str())
            .collect();

        match occurrences.as_slice() {
            [] => {
                if let Some(default) = param.default {
                    query.push((param.name.to_string(), default.to_string()));
                }
            }
            values if param.repeated => {
                for value in values {
                    query.push((param.name.to_string(), coerce(param.kind, param.name, value)?));
                }
            }
            [.., last] => {
                query.push((param.name.to_string(), coerce(param.kind, param.name, last)?));
            }
        }
    }

    Ok(query)
}

fn coerce(kind: ParamKind, name: &str, value: &str) -> Result<String> {
    match kind {
        ParamKind::Int => match value.parse::<i64>() {
            Ok(parsed) => Ok(parsed.to_string()),
            Err(_) => Err(Error::BadRequest(format!(
                "parameter '{name}' must be an integer, got '{value}'"
            ))),
        },
        ParamKind::Text => Ok(value.to_string()),
    }
}
