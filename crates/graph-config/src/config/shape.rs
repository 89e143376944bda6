//! Projection of a raw config onto the shapes the classifier distinguishes

use super::raw::{ClientConfig, ClientServiceConfig, LocalSchemaFile, RawConfig, ServiceConfig};

/// Which of the recognised input shapes a raw config has.
///
/// Borrowed from the [`RawConfig`] it was projected from. `client` wins over
/// `service` when both are present.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigShape<'a> {
    /// `client: "graph@tag"` or `client: { service: "graph@tag" }`
    ClientStringSpecifier(&'a str),
    /// `client: { service: { name: "graph@tag" } }`
    ClientObjectSpecifier(&'a str),
    /// Client whose schema comes from local files, optionally also naming a graph
    ClientLocalFiles {
        name: Option<&'a str>,
        files: &'a LocalSchemaFile,
    },
    /// Client with nothing that identifies a graph
    ClientUnidentified,
    /// `service: { name: "graph@tag", ... }`
    ServiceDescriptor(&'a ServiceConfig),
    /// Neither section present
    Empty,
}

impl RawConfig {
    /// Project this config onto its [`ConfigShape`].
    pub fn shape(&self) -> ConfigShape<'_> {
        match (&self.client, &self.service) {
            (Some(client), _) if client.is_present() => client_shape(client),
            (_, Some(service)) => ConfigShape::ServiceDescriptor(service),
            _ => ConfigShape::Empty,
        }
    }
}

fn client_shape(client: &ClientConfig) -> ConfigShape<'_> {
    let object = match client {
        ClientConfig::Specifier(specifier) => return ConfigShape::ClientStringSpecifier(specifier),
        ClientConfig::Object(object) => object,
        ClientConfig::Other(_) => return ConfigShape::ClientUnidentified,
    };

    match &object.service {
        Some(ClientServiceConfig::Specifier(specifier)) => {
            return ConfigShape::ClientStringSpecifier(specifier);
        }
        Some(ClientServiceConfig::Remote(remote)) => {
            return ConfigShape::ClientObjectSpecifier(&remote.name);
        }
        Some(ClientServiceConfig::Local(local)) if !local.local_schema_file.is_empty() => {
            return ConfigShape::ClientLocalFiles {
                name: local.name.as_deref(),
                files: &local.local_schema_file,
            };
        }
        Some(ClientServiceConfig::Local(local)) => {
            if let Some(name) = &local.name {
                return ConfigShape::ClientObjectSpecifier(name);
            }
        }
        Some(ClientServiceConfig::Other(_)) | None => {}
    }

    // Schema files may also sit directly on the client
    match &object.local_schema_file {
        Some(files) if !files.is_empty() => ConfigShape::ClientLocalFiles { name: None, files },
        _ => ConfigShape::ClientUnidentified,
    }
}
