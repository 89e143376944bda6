//! Classifier settings supplied by the host

use std::fmt;

use super::resolved::ConfigKind;

/// Options for classification
#[derive(Clone, Default)]
pub struct ResolveOptions {
    /// Kind reported for a config with neither `client` nor `service`.
    pub empty_kind: ConfigKind,

    /// API key used when the config's `engine` section has none, e.g. one the
    /// host read from its environment.
    pub api_key: Option<String>,
}

impl ResolveOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the kind reported for configs with no `client` or `service`.
    pub fn with_empty_kind(mut self, kind: ConfigKind) -> Self {
        self.empty_kind = kind;
        self
    }

    /// Set the fallback API key.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }
}

impl fmt::Debug for ResolveOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolveOptions")
            .field("empty_kind", &self.empty_kind)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
