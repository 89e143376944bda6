//! Service specifier parsing
//!
//! A specifier names a graph and optionally one of its tags (variants):
//! `"my-graph"` or `"my-graph@staging"`.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A graph identifier paired with an optional tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServiceSpecifier {
    /// Everything before the first `@`
    pub graph_id: String,
    /// Everything after the first `@`, if there was one
    pub tag: Option<String>,
}

impl ServiceSpecifier {
    /// Build a specifier from its parts.
    pub fn new(graph_id: impl Into<String>, tag: Option<String>) -> Self {
        Self {
            graph_id: graph_id.into(),
            tag,
        }
    }
}

/// Split a specifier on its first `@`.
///
/// Any string is accepted; neither part is validated.
///
/// # Example
///
/// ```
/// use graph_config::parse_service_specifier;
///
/// let spec = parse_service_specifier("my-service@master");
/// assert_eq!(spec.graph_id, "my-service");
/// assert_eq!(spec.tag.as_deref(), Some("master"));
///
/// let spec = parse_service_specifier("my-service");
/// assert_eq!(spec.tag, None);
/// ```
pub fn parse_service_specifier(specifier: &str) -> ServiceSpecifier {
    match specifier.split_once('@') {
        Some((graph_id, tag)) => ServiceSpecifier::new(graph_id, Some(tag.to_string())),
        None => ServiceSpecifier::new(specifier, None),
    }
}

impl FromStr for ServiceSpecifier {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(parse_service_specifier(s))
    }
}

impl fmt::Display for ServiceSpecifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.tag {
            Some(tag) => write!(f, "{}@{}", self.graph_id, tag),
            None => write!(f, "{}", self.graph_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_first_at_only() {
        let spec = parse_service_specifier("graph@tag@extra");
        assert_eq!(spec.graph_id, "graph");
        assert_eq!(spec.tag.as_deref(), Some("tag@extra"));
    }

    #[test]
    fn test_trailing_at_gives_empty_tag() {
        let spec = parse_service_specifier("graph@");
        assert_eq!(spec.graph_id, "graph");
        assert_eq!(spec.tag.as_deref(), Some(""));
    }

    #[test]
    fn test_from_str_matches_parse() {
        let spec: ServiceSpecifier = "a@b".parse().unwrap();
        assert_eq!(spec, parse_service_specifier("a@b"));
    }

    #[test]
    fn test_display() {
        assert_eq!(parse_service_specifier("a@b").to_string(), "a@b");
        assert_eq!(parse_service_specifier("a").to_string(), "a");
    }
}
