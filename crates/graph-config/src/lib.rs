//! Project configuration resolution for GraphQL tooling
//!
//! Turns a loosely structured, user-authored project config into a single
//! classified [`ResolvedConfig`]:
//!
//! - **Specifier parsing**: `"graph@tag"` into a graph id and optional tag
//! - **Key parsing**: the graph id embedded in a `service:<graph>:<secret>` API key
//! - **Classification**: client vs service config, local vs remote schema,
//!   with uniform access to the graph id and tag
//!
//! Loading config files, reading the environment and fetching schemas are
//! left to the caller, which hands this crate an already-parsed value.
//!
//! # Example
//!
//! ```
//! use graph_config::{RawConfig, classify, is_service_config};
//! use serde_json::json;
//!
//! let raw = RawConfig::from_value(json!({ "service": { "name": "my-service@staging" } }))?;
//! let config = classify(raw);
//!
//! assert!(is_service_config(&config));
//! assert_eq!(config.graph_id(), Some("my-service"));
//! assert_eq!(config.variant(), "staging");
//! # Ok::<(), graph_config::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod key;
pub mod logging;
pub mod specifier;

pub use config::{
    ConfigKind, GraphInfo, RawConfig, ResolveOptions, ResolvedConfig, classify, classify_with,
    graph_info, is_client_config, is_local_service_config, is_service_config,
};
pub use error::{Error, Result};
pub use key::graph_id_from_key;
pub use specifier::{ServiceSpecifier, parse_service_specifier};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_not_an_object_displays_kind() {
        let error = Error::NotAnObject { found: "an array" };

        let display = format!("{}", error);
        assert!(
            display.contains("an array"),
            "Error display should name what was found, got: {}",
            display
        );
    }
}
