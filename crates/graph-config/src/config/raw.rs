//! Raw project configuration as handed over by a config loader
//!
//! User-authored configs are loosely structured: `client` may be a bare
//! specifier string or an object, and a client's `service` may be a
//! specifier, a named remote graph, or a set of local schema files.
//!
//! Loading is lenient. Objects are read field by field, and a setting with
//! the wrong type falls back to its default without disturbing the fields
//! that identify the graph. Only maps are read as objects; any other shape
//! is carried along as an opaque `Other` value.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, Deserializer, DeserializeOwned};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::defaults;
use crate::{Error, Result};

/// Top-level project configuration, before classification
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RawConfig {
    /// Frontend application consuming a graph
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<ClientConfig>,

    /// Graph defining its own schema
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<ServiceConfig>,

    /// Registry access settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<EngineConfig>,
}

impl RawConfig {
    /// Accept an already-parsed value as a raw config.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotAnObject`] if `value` is not an object. Mistyped
    /// sections and settings inside an object never fail.
    pub fn from_value(value: Value) -> Result<Self> {
        if !value.is_object() {
            return Err(Error::NotAnObject {
                found: value_kind(&value),
            });
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Config with only a client section.
    pub fn client(client: ClientConfig) -> Self {
        Self {
            client: Some(client),
            ..Self::default()
        }
    }

    /// Config with only a service section.
    pub fn service(service: ServiceConfig) -> Self {
        Self {
            service: Some(service),
            ..Self::default()
        }
    }
}

impl<'de> Deserialize<'de> for RawConfig {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let fields = Fields::deserialize(deserializer)?;

        // A truthy `service` that is not an object still marks a service config
        let service = match fields.value("service") {
            Some(Value::Object(map)) => Some(ServiceConfig::from_fields(&Fields(map.clone()))),
            Some(value) if is_truthy(value) => Some(ServiceConfig::default()),
            _ => None,
        };

        Ok(Self {
            client: fields.get("client"),
            service,
            engine: fields.get("engine"),
        })
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// The members of a config object, read one at a time.
///
/// Deserializes from maps only, so a struct can never be filled in
/// positionally from an array.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
struct Fields(Map<String, Value>);

impl Fields {
    fn value(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|value| !value.is_null())
    }

    /// Typed member, or `None` if it is missing, null or of the wrong type.
    fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.value(key)?;
        match T::deserialize(value) {
            Ok(parsed) => Some(parsed),
            Err(_) => {
                tracing::debug!(field = key, "Ignoring config setting with unexpected type");
                None
            }
        }
    }

    /// String-valued entries of an object member; other entries are dropped.
    fn string_map(&self, key: &str) -> BTreeMap<String, String> {
        match self.value(key) {
            Some(Value::Object(map)) => map
                .iter()
                .filter_map(|(name, value)| {
                    value.as_str().map(|value| (name.clone(), value.to_string()))
                })
                .collect(),
            _ => BTreeMap::new(),
        }
    }
}

/// The `client` section
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ClientConfig {
    /// `client: "graph@tag"`
    Specifier(String),
    /// `client: { service: ..., includes: [...] }`
    Object(ClientObject),
    /// Anything else
    Other(Value),
}

impl ClientConfig {
    /// Whether the section counts as set.
    ///
    /// Empty strings and falsy scalars (`false`, `0`, `null`) are treated as
    /// if the section were missing.
    pub fn is_present(&self) -> bool {
        match self {
            ClientConfig::Specifier(s) => !s.is_empty(),
            ClientConfig::Object(_) => true,
            ClientConfig::Other(value) => is_truthy(value),
        }
    }
}

impl<'de> Deserialize<'de> for ClientConfig {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(specifier) => ClientConfig::Specifier(specifier),
            Value::Object(map) => ClientConfig::Object(ClientObject::from_fields(&Fields(map))),
            other => ClientConfig::Other(other),
        })
    }
}

/// Object form of the `client` section
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientObject {
    /// Where the client's schema comes from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<ClientServiceConfig>,

    /// Schema files given directly on the client
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_schema_file: Option<LocalSchemaFile>,

    /// Client application name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "referenceID", skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,

    /// Client application version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Globs of source files holding operations
    pub includes: Vec<String>,

    pub excludes: Vec<String>,

    /// Template literal tag marking operations
    pub tag_name: String,

    pub add_typename: bool,

    /// Directives stripped before operations are sent to the server
    pub client_only_directives: Vec<String>,

    /// Directives marking client-side schema extensions
    pub client_schema_directives: Vec<String>,
}

impl Default for ClientObject {
    fn default() -> Self {
        Self {
            service: None,
            local_schema_file: None,
            name: None,
            reference_id: None,
            version: None,
            includes: defaults::includes(),
            excludes: defaults::excludes(),
            tag_name: defaults::tag_name(),
            add_typename: defaults::add_typename(),
            client_only_directives: defaults::client_only_directives(),
            client_schema_directives: defaults::client_schema_directives(),
        }
    }
}

impl ClientObject {
    /// Client object pointing at the given service description.
    pub fn with_service(service: ClientServiceConfig) -> Self {
        Self {
            service: Some(service),
            ..Self::default()
        }
    }

    fn from_fields(fields: &Fields) -> Self {
        Self {
            service: fields.get("service"),
            local_schema_file: fields.get("localSchemaFile"),
            name: fields.get("name"),
            reference_id: fields.get("referenceID"),
            version: fields.get("version"),
            includes: fields.get("includes").unwrap_or_else(defaults::includes),
            excludes: fields.get("excludes").unwrap_or_else(defaults::excludes),
            tag_name: fields.get("tagName").unwrap_or_else(defaults::tag_name),
            add_typename: fields.get("addTypename").unwrap_or_else(defaults::add_typename),
            client_only_directives: fields
                .get("clientOnlyDirectives")
                .unwrap_or_else(defaults::client_only_directives),
            client_schema_directives: fields
                .get("clientSchemaDirectives")
                .unwrap_or_else(defaults::client_schema_directives),
        }
    }
}

/// The client's description of the graph it consumes
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ClientServiceConfig {
    /// `service: "graph@tag"`
    Specifier(String),
    /// `service: { localSchemaFile: ... }`
    Local(LocalServiceConfig),
    /// `service: { name: "graph@tag", url: ... }`
    Remote(RemoteServiceConfig),
    /// Anything else
    Other(Value),
}

impl<'de> Deserialize<'de> for ClientServiceConfig {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(specifier) => ClientServiceConfig::Specifier(specifier),
            Value::Object(map) => {
                let fields = Fields(map);
                if let Some(local) = LocalServiceConfig::from_fields(&fields) {
                    ClientServiceConfig::Local(local)
                } else if let Some(remote) = RemoteServiceConfig::from_fields(&fields) {
                    ClientServiceConfig::Remote(remote)
                } else {
                    ClientServiceConfig::Other(Value::Object(fields.0))
                }
            }
            other => ClientServiceConfig::Other(other),
        })
    }
}

/// Service description backed by schema files on disk
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalServiceConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub local_schema_file: LocalSchemaFile,
}

impl LocalServiceConfig {
    fn from_fields(fields: &Fields) -> Option<Self> {
        Some(Self {
            name: fields.get("name"),
            local_schema_file: fields.get("localSchemaFile")?,
        })
    }
}

impl<'de> Deserialize<'de> for LocalServiceConfig {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let fields = Fields::deserialize(deserializer)?;
        Self::from_fields(&fields)
            .ok_or_else(|| de::Error::custom("local service config needs `localSchemaFile`"))
    }
}

/// Service description naming a remote graph
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteServiceConfig {
    /// Specifier of the graph
    pub name: String,

    /// Endpoint to introspect instead of the registry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,

    #[serde(rename = "skipSSLValidation")]
    pub skip_ssl_validation: bool,
}

impl RemoteServiceConfig {
    fn from_fields(fields: &Fields) -> Option<Self> {
        Some(Self {
            name: fields.get("name")?,
            url: fields.get("url"),
            headers: fields.string_map("headers"),
            skip_ssl_validation: fields.get("skipSSLValidation").unwrap_or_default(),
        })
    }
}

impl<'de> Deserialize<'de> for RemoteServiceConfig {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let fields = Fields::deserialize(deserializer)?;
        Self::from_fields(&fields)
            .ok_or_else(|| de::Error::custom("remote service config needs a string `name`"))
    }
}

/// One schema file or an ordered list of them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocalSchemaFile {
    Single(String),
    Many(Vec<String>),
}

impl LocalSchemaFile {
    /// The file paths, in order.
    pub fn paths(&self) -> Vec<&str> {
        match self {
            LocalSchemaFile::Single(path) => vec![path.as_str()],
            LocalSchemaFile::Many(paths) => paths.iter().map(String::as_str).collect(),
        }
    }

    /// True for an empty path or an empty list.
    pub fn is_empty(&self) -> bool {
        match self {
            LocalSchemaFile::Single(path) => path.is_empty(),
            LocalSchemaFile::Many(paths) => paths.is_empty(),
        }
    }
}

/// The `service` section
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceConfig {
    /// Specifier of the graph this service defines
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Running server to introspect
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<EndpointConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_schema_file: Option<LocalSchemaFile>,

    pub includes: Vec<String>,

    pub excludes: Vec<String>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: None,
            endpoint: None,
            local_schema_file: None,
            includes: defaults::includes(),
            excludes: defaults::excludes(),
        }
    }
}

impl ServiceConfig {
    /// Service section with just a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    fn from_fields(fields: &Fields) -> Self {
        Self {
            name: fields.get("name"),
            endpoint: fields.get("endpoint"),
            local_schema_file: fields.get("localSchemaFile"),
            includes: fields.get("includes").unwrap_or_else(defaults::includes),
            excludes: fields.get("excludes").unwrap_or_else(defaults::excludes),
        }
    }
}

impl<'de> Deserialize<'de> for ServiceConfig {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Self::from_fields(&Fields::deserialize(deserializer)?))
    }
}

/// A service's introspection endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointConfig {
    pub url: String,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,

    #[serde(rename = "skipSSLValidation")]
    pub skip_ssl_validation: bool,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: defaults::service_url(),
            headers: BTreeMap::new(),
            skip_ssl_validation: false,
        }
    }
}

impl<'de> Deserialize<'de> for EndpointConfig {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let fields = Fields::deserialize(deserializer)?;
        Ok(Self {
            url: fields.get("url").unwrap_or_else(defaults::service_url),
            headers: fields.string_map("headers"),
            skip_ssl_validation: fields.get("skipSSLValidation").unwrap_or_default(),
        })
    }
}

/// The `engine` section
#[derive(Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineConfig {
    /// `kind:graphId:secret`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Registry API endpoint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Registry UI base URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frontend: Option<String>,
}

impl<'de> Deserialize<'de> for EngineConfig {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let fields = Fields::deserialize(deserializer)?;
        Ok(Self {
            api_key: fields.get("apiKey"),
            endpoint: fields.get("endpoint"),
            frontend: fields.get("frontend"),
        })
    }
}

impl fmt::Debug for EngineConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EngineConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("endpoint", &self.endpoint)
            .field("frontend", &self.frontend)
            .finish()
    }
}
