//! Trie-based route storage for path lookups

use crate::route::Route;
use camara_core::{Error, Result};
use std::collections::HashMap;

/// Node in the route trie
#[derive(Debug, Default)]
struct TrieNode {
    /// Static children (exact segment match)
    children: HashMap<&'static str, TrieNode>,

    /// Parameter child (a `{param}` segment)
    param_child: Option<Box<TrieNode>>,

    /// Route at this node (if terminal)
    route: Option<&'static Route>,
}

/// A matched route together with the raw values captured for its path
/// parameters, in declaration order
#[derive(Debug)]
pub struct RouteMatch {
    /// The catalog entry that matched
    pub route: &'static Route,

    /// Raw path segment captured for each declared path parameter
    pub values: Vec<String>,
}

/// Trie for storing and matching catalog routes
#[derive(Debug, Default)]
pub struct RouteTrie {
    root: TrieNode,
    count: usize,
}

impl RouteTrie {
    /// Create an empty trie
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a route into the trie
    pub fn insert(&mut self, route: &'static Route) -> Result<()> {
        let mut current = &mut self.root;

        for segment in route.path.split('/').filter(|s| !s.is_empty()) {
            if segment.starts_with('{') {
                current = current.param_child.get_or_insert_with(Box::default);
            } else {
                current = current.children.entry(segment).or_default();
            }
        }

        if current.route.is_some() {
            return Err(Error::Config(format!(
                "route already exists: {}",
                route.path
            )));
        }

        current.route = Some(route);
        self.count += 1;

        Ok(())
    }

    /// Match a request path against the trie, capturing parameter segments
    pub fn match_path(&self, path: &str) -> Option<RouteMatch> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let mut values = Vec::new();
        let route = Self::match_recursive(&self.root, &segments, &mut values)?;

        Some(RouteMatch {
            route,
            values: values.into_iter().map(str::to_string).collect(),
        })
    }

    fn match_recursive<'p>(
        node: &TrieNode,
        segments: &[&'p str],
        values: &mut Vec<&'p str>,
    ) -> Option<&'static Route> {
        let (segment, rest) = match segments.split_first() {
            Some((segment, rest)) => (*segment, rest),
            None => return node.route,
        };

        // Static segments win over parameter captures
        if let Some(child) = node.children.get(segment) {
            if let Some(route) = Self::match_recursive(child, rest, values) {
                return Some(route);
            }
        }

        if let Some(child) = &node.param_child {
            values.push(segment);
            if let Some(route) = Self::match_recursive(child, rest, values) {
                return Some(route);
            }
            values.pop();
        }

        None
    }

    /// Number of routes in the trie
    pub fn len(&self) -> usize {
        self.count
    }

    /// Check if the trie is empty
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::PathParam;

    static PARTIDOS: Route = Route {
        path: "/partidos",
        upstream_path: "partidos",
        category: "Partidos",
        description: "",
        path_params: &[],
        query_params: &[],
    };

    static PARTIDO: Route = Route {
        path: "/partidos/{id}",
        upstream_path: "partidos/{id}",
        category: "Partidos",
        description: "",
        path_params: &[PathParam::int("id")],
        query_params: &[],
    };

    static PARTIDO_MEMBROS: Route = Route {
        path: "/partidos/{id}/membros",
        upstream_path: "partidos/{id}/membros",
        category: "Partidos",
        description: "",
        path_params: &[PathParam::int("id")],
        query_params: &[],
    };

    static SIGLA_TIPO: Route = Route {
        path: "/referencias/proposicoes/siglaTipo",
        upstream_path: "referencias/proposicoes/siglaTipo",
        category: "Referências",
        description: "",
        path_params: &[],
        query_params: &[],
    };

    fn sample_trie() -> RouteTrie {
        let mut trie = RouteTrie::new();
        trie.insert(&PARTIDOS).unwrap();
        trie.insert(&PARTIDO).unwrap();
        trie.insert(&PARTIDO_MEMBROS).unwrap();
        trie.insert(&SIGLA_TIPO).unwrap();
        trie
    }

    #[test]
    fn test_insert_and_match_static() {
        let trie = sample_trie();
        assert_eq!(trie.len(), 4);

        let matched = trie.match_path("/partidos").unwrap();
        assert_eq!(matched.route.path, "/partidos");
        assert!(matched.values.is_empty());
    }

    #[test]
    fn test_match_captures_param_segment() {
        let trie = sample_trie();

        let matched = trie.match_path("/partidos/36844").unwrap();
        assert_eq!(matched.route.path, "/partidos/{id}");
        assert_eq!(matched.values, vec!["36844".to_string()]);

        let matched = trie.match_path("/partidos/36844/membros").unwrap();
        assert_eq!(matched.route.path, "/partidos/{id}/membros");
        assert_eq!(matched.values, vec!["36844".to_string()]);
    }

    #[test]
    fn test_nested_static_route() {
        let trie = sample_trie();

        let matched = trie.match_path("/referencias/proposicoes/siglaTipo").unwrap();
        assert_eq!(matched.route.path, "/referencias/proposicoes/siglaTipo");
    }

    #[test]
    fn test_no_match() {
        let trie = sample_trie();

        assert!(trie.match_path("/senadores").is_none());
        assert!(trie.match_path("/partidos/36844/lideres").is_none());
        assert!(trie.match_path("/").is_none());
    }

    #[test]
    fn test_trailing_slash_is_ignored() {
        let trie = sample_trie();

        let matched = trie.match_path("/partidos/").unwrap();
        assert_eq!(matched.route.path, "/partidos");
    }

    #[test]
    fn test_duplicate_insert_fails() {
        let mut trie = sample_trie();
        assert!(trie.insert(&PARTIDOS).is_err());
    }

    #[test]
    fn test_backtracks_from_static_to_param() {
        static ESTATICO: Route = Route {
            path: "/a/b",
            upstream_path: "a/b",
            category: "Teste",
            description: "",
            path_params: &[],
            query_params: &[],
        };
        static PARAMETRICO: Route = Route {
            path: "/a/{x}/c",
            upstream_path: "a/{x}/c",
            category: "Teste",
            description: "",
            path_params: &[PathParam::text("x")],
            query_params: &[],
        };

        let mut trie = RouteTrie::new();
        trie.insert(&ESTATICO).unwrap();
        trie.insert(&PARAMETRICO).unwrap();

        // "/a/b/c" dead-ends under the static "b" child and must fall back
        // to capturing "b" as {x}
        let matched = trie.match_path("/a/b/c").unwrap();
        assert_eq!(matched.route.path, "/a/{x}/c");
        assert_eq!(matched.values, vec!["b".to_string()]);
    }
}
