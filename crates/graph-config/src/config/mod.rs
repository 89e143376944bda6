//! Project configuration classification
//!
//! A project config arrives as a [`RawConfig`] with an optional `client`
//! section, an optional `service` section and an optional `engine` section.
//! Classification decides which of the two kinds it is and pulls out the graph
//! it refers to.
//!
//! # Recognised shapes
//!
//! ```text
//! { client: "graph@tag" }                                   client, specifier
//! { client: { service: "graph@tag" } }                      client, specifier
//! { client: { service: { name: "graph@tag", url: ... } } }  client, named remote
//! { client: { service: { localSchemaFile: [...] } } }       client, local files
//! { service: { name: "graph@tag", endpoint: ... } }         service
//! { }                                                       configurable, client by default
//! ```
//!
//! `client` takes precedence when both sections are set.
//!
//! # Example
//!
//! ```
//! use graph_config::config::{ConfigKind, RawConfig, ResolveOptions, classify_with};
//! use serde_json::json;
//!
//! let raw = RawConfig::from_value(json!({
//!     "service": { "name": "reviews" },
//!     "engine": { "apiKey": "service:reviews:abc123" }
//! })).unwrap();
//!
//! let config = classify_with(raw, &ResolveOptions::new());
//! assert_eq!(config.kind(), ConfigKind::Service);
//! assert_eq!(config.graph_id(), Some("reviews"));
//! assert_eq!(config.variant(), "current");
//! ```

pub mod defaults;
mod options;
mod raw;
mod resolved;
mod shape;

pub use defaults::DEFAULT_VARIANT;
pub use options::ResolveOptions;
pub use raw::{
    ClientConfig, ClientObject, ClientServiceConfig, EndpointConfig, EngineConfig,
    LocalSchemaFile, LocalServiceConfig, RawConfig, RemoteServiceConfig, ServiceConfig,
};
pub use resolved::{
    ConfigKind, GraphIdSource, GraphInfo, ResolvedConfig, classify, classify_with, graph_info,
    is_client_config, is_local_service_config, is_service_config,
};
pub use shape::ConfigShape;
