//! API key inspection
//!
//! Keys have the form `kind:graphId:secret`. Only `service` keys identify a
//! graph; user keys and anything malformed yield nothing.

/// Key kind whose second segment is a graph identifier
pub const SERVICE_KEY_KIND: &str = "service";

/// Extract the graph identifier from a `service:<graphId>:<secret>` key.
///
/// Returns `None` for a missing key, a key that does not split into exactly
/// three `:`-separated segments, or a key of another kind.
///
/// # Example
///
/// ```
/// use graph_config::graph_id_from_key;
///
/// assert_eq!(graph_id_from_key(Some("service:bob-123:489fhseo4")), Some("bob-123"));
/// assert_eq!(graph_id_from_key(Some("user:bob-123:489fhseo4")), None);
/// assert_eq!(graph_id_from_key(None), None);
/// ```
pub fn graph_id_from_key(key: Option<&str>) -> Option<&str> {
    let key = key?;
    let parts: Vec<&str> = key.split(':').collect();

    if parts.len() != 3 {
        tracing::trace!(segments = parts.len(), "API key does not have three segments");
        return None;
    }
    if parts[0] != SERVICE_KEY_KIND {
        tracing::trace!(kind = parts[0], "API key is not a service key");
        return None;
    }

    Some(parts[1])
}
