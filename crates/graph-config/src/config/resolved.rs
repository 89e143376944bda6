//! Classification of raw configs into a [`ResolvedConfig`]
//!
//! Classification is total: missing or malformed identifying data yields
//! `None` fields, never an error.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::defaults::DEFAULT_VARIANT;
use super::options::ResolveOptions;
use super::raw::{
    ClientConfig, ClientServiceConfig, EngineConfig, LocalSchemaFile, RawConfig, ServiceConfig,
};
use super::shape::ConfigShape;
use crate::key::graph_id_from_key;
use crate::specifier::{ServiceSpecifier, parse_service_specifier};

/// Whether a config describes a client application or a service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigKind {
    #[default]
    Client,
    Service,
}

impl fmt::Display for ConfigKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigKind::Client => write!(f, "client"),
            ConfigKind::Service => write!(f, "service"),
        }
    }
}

/// Where a resolved graph id came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GraphIdSource {
    /// A specifier in the `client` or `service` section
    Config,
    /// The second segment of a service API key
    ApiKey,
}

/// Graph id and tag named by a config
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphInfo {
    pub graph_id: Option<String>,
    pub tag: Option<String>,
}

impl From<ServiceSpecifier> for GraphInfo {
    /// Empty parts become `None`.
    fn from(spec: ServiceSpecifier) -> Self {
        Self {
            graph_id: Some(spec.graph_id).filter(|id| !id.is_empty()),
            tag: spec.tag.filter(|tag| !tag.is_empty()),
        }
    }
}

impl ConfigShape<'_> {
    fn graph_info(&self) -> GraphInfo {
        match self {
            ConfigShape::ClientStringSpecifier(specifier)
            | ConfigShape::ClientObjectSpecifier(specifier)
            | ConfigShape::ClientLocalFiles {
                name: Some(specifier),
                ..
            } => parse_service_specifier(specifier).into(),
            ConfigShape::ServiceDescriptor(service) => service
                .name
                .as_deref()
                .map(|name| GraphInfo::from(parse_service_specifier(name)))
                .unwrap_or_default(),
            ConfigShape::ClientLocalFiles { name: None, .. }
            | ConfigShape::ClientUnidentified
            | ConfigShape::Empty => GraphInfo::default(),
        }
    }
}

/// Read the graph id and tag a raw config names, without consulting any key.
pub fn graph_info(raw: &RawConfig) -> GraphInfo {
    raw.shape().graph_info()
}

/// A classified project configuration
///
/// Built once by [`classify`] or [`classify_with`] and never modified.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedConfig {
    kind: ConfigKind,
    graph_id: Option<String>,
    graph_id_source: Option<GraphIdSource>,
    tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    local_schema_file: Option<LocalSchemaFile>,
    #[serde(skip)]
    api_key: Option<String>,
    #[serde(skip)]
    raw: RawConfig,
}

impl ResolvedConfig {
    pub fn kind(&self) -> ConfigKind {
        self.kind
    }

    pub fn is_client(&self) -> bool {
        self.kind == ConfigKind::Client
    }

    pub fn is_service(&self) -> bool {
        self.kind == ConfigKind::Service
    }

    /// The graph this config refers to, from the config itself or else from
    /// a service API key.
    pub fn graph_id(&self) -> Option<&str> {
        self.graph_id.as_deref()
    }

    pub fn graph_id_source(&self) -> Option<GraphIdSource> {
        self.graph_id_source
    }

    /// The pinned tag; `None` means the default variant.
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// The pinned tag, or [`DEFAULT_VARIANT`].
    pub fn variant(&self) -> &str {
        self.tag().unwrap_or(DEFAULT_VARIANT)
    }

    /// Graph id and tag together.
    pub fn graph_info(&self) -> GraphInfo {
        GraphInfo {
            graph_id: self.graph_id.clone(),
            tag: self.tag.clone(),
        }
    }

    /// Schema files of a local client config.
    pub fn local_schema_files(&self) -> Option<&LocalSchemaFile> {
        self.local_schema_file.as_ref()
    }

    pub fn is_local(&self) -> bool {
        self.local_schema_file.is_some()
    }

    /// The effective API key: `engine.apiKey`, else the one from the options.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn engine(&self) -> Option<&EngineConfig> {
        self.raw.engine.as_ref()
    }

    pub fn client(&self) -> Option<&ClientConfig> {
        self.raw.client.as_ref()
    }

    pub fn service(&self) -> Option<&ServiceConfig> {
        self.raw.service.as_ref()
    }

    /// The config this was classified from.
    pub fn raw(&self) -> &RawConfig {
        &self.raw
    }

    pub fn into_raw(self) -> RawConfig {
        self.raw
    }
}

/// Classify a raw config with default [`ResolveOptions`].
///
/// # Example
///
/// ```
/// use graph_config::{RawConfig, classify, is_client_config};
/// use serde_json::json;
///
/// let raw = RawConfig::from_value(json!({ "client": { "service": "my-service@master" } })).unwrap();
/// let config = classify(raw);
///
/// assert!(is_client_config(&config));
/// assert_eq!(config.graph_id(), Some("my-service"));
/// assert_eq!(config.tag(), Some("master"));
/// ```
pub fn classify(raw: RawConfig) -> ResolvedConfig {
    classify_with(raw, &ResolveOptions::default())
}

/// Classify a raw config.
///
/// `client` takes precedence over `service`; a config with neither is
/// reported as `options.empty_kind`. When the config names no graph, the id
/// is taken from a service API key if one is available.
pub fn classify_with(raw: RawConfig, options: &ResolveOptions) -> ResolvedConfig {
    let (kind, info, local_schema_file) = {
        let shape = raw.shape();
        let kind = match shape {
            ConfigShape::ServiceDescriptor(_) => ConfigKind::Service,
            ConfigShape::Empty => options.empty_kind,
            _ => ConfigKind::Client,
        };
        let local = match shape {
            ConfigShape::ClientLocalFiles { files, .. } => Some(files.clone()),
            _ => None,
        };
        (kind, shape.graph_info(), local)
    };

    let api_key = raw
        .engine
        .as_ref()
        .and_then(|engine| engine.api_key.clone())
        .filter(|key| !key.is_empty())
        .or_else(|| options.api_key.clone());

    let (graph_id, graph_id_source) = match info.graph_id {
        Some(id) => (Some(id), Some(GraphIdSource::Config)),
        None => match graph_id_from_key(api_key.as_deref()) {
            Some(id) if !id.is_empty() => (Some(id.to_string()), Some(GraphIdSource::ApiKey)),
            _ => (None, None),
        },
    };

    tracing::debug!(
        %kind,
        graph_id = graph_id.as_deref(),
        ?graph_id_source,
        tag = info.tag.as_deref(),
        local = local_schema_file.is_some(),
        "Classified project config"
    );

    ResolvedConfig {
        kind,
        graph_id,
        graph_id_source,
        tag: info.tag,
        local_schema_file,
        api_key,
        raw,
    }
}

/// True for configs classified as clients.
pub fn is_client_config(config: &ResolvedConfig) -> bool {
    config.is_client()
}

/// True for configs classified as services.
pub fn is_service_config(config: &ResolvedConfig) -> bool {
    config.is_service()
}

/// True if a client's service description points at a non-empty
/// `localSchemaFile`.
pub fn is_local_service_config(service: &ClientServiceConfig) -> bool {
    matches!(service, ClientServiceConfig::Local(local) if !local.local_schema_file.is_empty())
}
