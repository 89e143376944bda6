//! Error types for graph-config
//!
//! Classification itself never fails. These errors only come from the input
//! boundary, where an arbitrary value is turned into a [`RawConfig`].
//!
//! [`RawConfig`]: crate::config::RawConfig

/// Result type for graph-config operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while accepting a raw configuration value
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The top-level value was not an object
    #[error("Project configuration must be an object, found {found}")]
    NotAnObject { found: &'static str },

    /// The value could not be read as a config
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
