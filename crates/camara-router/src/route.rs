//! Catalog route definitions

use camara_core::{Error, Result};

/// Shape of a declared parameter value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// Must parse as a 64-bit integer; the value is canonicalized before forwarding
    Int,
    /// Opaque value, forwarded as received
    Text,
}

/// A query parameter a route accepts and forwards
#[derive(Debug, Clone, Copy)]
pub struct QueryParam {
    /// Parameter name, identical locally and upstream
    pub name: &'static str,

    /// Value shape
    pub kind: ParamKind,

    /// Literal sent upstream when the caller omits the parameter
    pub default: Option<&'static str>,

    /// Whether the parameter may occur multiple times
    pub repeated: bool,
}

impl QueryParam {
    /// Declare an integer-valued query parameter
    pub const fn int(name: &'static str) -> Self {
        Self {
            name,
            kind: ParamKind::Int,
            default: None,
            repeated: false,
        }
    }

    /// Declare a text-valued query parameter
    pub const fn text(name: &'static str) -> Self {
        Self {
            name,
            kind: ParamKind::Text,
            default: None,
            repeated: false,
        }
    }

    /// Send `default` upstream when the caller omits this parameter
    pub const fn with_default(mut self, default: &'static str) -> Self {
        self.default = Some(default);
        self
    }

    /// Forward every occurrence instead of only the first
    pub const fn repeated(mut self) -> Self {
        self.repeated = true;
        self
    }
}

/// A path parameter captured from the local route pattern
#[derive(Debug, Clone, Copy)]
pub struct PathParam {
    /// Parameter name as it appears between braces in the pattern
    pub name: &'static str,

    /// Value shape
    pub kind: ParamKind,
}

impl PathParam {
    /// Declare an integer-valued path parameter
    pub const fn int(name: &'static str) -> Self {
        Self {
            name,
            kind: ParamKind::Int,
        }
    }

    /// Declare a text-valued path parameter
    pub const fn text(name: &'static str) -> Self {
        Self {
            name,
            kind: ParamKind::Text,
        }
    }
}

/// One catalog entry: a local GET route republishing one upstream endpoint
#[derive(Debug)]
pub struct Route {
    /// Local path pattern (e.g., `/deputados/{id}`)
    pub path: &'static str,

    /// Upstream path template, relative to the API base URL
    pub upstream_path: &'static str,

    /// Upstream category the endpoint belongs to
    pub category: &'static str,

    /// One-line description of the endpoint
    pub description: &'static str,

    /// Declared path parameters, in pattern order
    pub path_params: &'static [PathParam],

    /// Declared query parameters; anything else in the query string is ignored
    pub query_params: &'static [QueryParam],
}

impl Route {
    /// Names of the `{param}` segments in the local pattern, in order
    pub fn pattern_params(&self) -> impl Iterator<Item = &'static str> {
        self.path
            .split('/')
            .filter_map(|segment| segment.strip_prefix('{')?.strip_suffix('}'))
    }

    /// Check the internal consistency of this entry
    pub(crate) fn validate(&self) -> Result<()> {
        if !self.path.starts_with('/') {
            return Err(Error::Config(format!(
                "route path must start with '/': {}",
                self.path
            )));
        }

        let pattern: Vec<&str> = self.pattern_params().collect();
        if pattern.len() != self.path_params.len() {
            return Err(Error::Config(format!(
                "route {} declares {} path parameters but the pattern has {}",
                self.path,
                self.path_params.len(),
                pattern.len()
            )));
        }

        for (declared, in_pattern) in self.path_params.iter().zip(&pattern) {
            if declared.name != *in_pattern {
                return Err(Error::Config(format!(
                    "route {} declares path parameter '{}' but the pattern has '{{{}}}'",
                    self.path, declared.name, in_pattern
                )));
            }

            let placeholder = format!("{{{}}}", declared.name);
            if self.upstream_path.matches(placeholder.as_str()).count() != 1 {
                return Err(Error::Config(format!(
                    "route {}: upstream template '{}' must reference '{}' exactly once",
                    self.path, self.upstream_path, placeholder
                )));
            }
        }

        for (index, param) in self.query_params.iter().enumerate() {
            if self.query_params[..index].iter().any(|p| p.name == param.name) {
                return Err(Error::Config(format!(
                    "route {} declares query parameter '{}' twice",
                    self.path, param.name
                )));
            }
        }

        Ok(())
    }
}
