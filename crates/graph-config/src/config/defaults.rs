//! Default values for settings a user config may omit

/// Variant name reported when a config does not pin a tag
pub const DEFAULT_VARIANT: &str = "current";

/// Schema endpoint assumed for a service that declares none
pub const DEFAULT_SERVICE_URL: &str = "http://localhost:4000/graphql";

/// Template literal tag used to find operations in source files
pub const DEFAULT_TAG_NAME: &str = "gql";

pub(crate) fn includes() -> Vec<String> {
    vec!["src/**/*.{ts,tsx,js,jsx,graphql,gql}".to_string()]
}

pub(crate) fn excludes() -> Vec<String> {
    vec!["**/node_modules".to_string(), "**/__tests__".to_string()]
}

pub(crate) fn tag_name() -> String {
    DEFAULT_TAG_NAME.to_string()
}

pub(crate) fn add_typename() -> bool {
    true
}

pub(crate) fn client_only_directives() -> Vec<String> {
    vec!["connection".to_string(), "type".to_string()]
}

pub(crate) fn client_schema_directives() -> Vec<String> {
    vec!["client".to_string(), "rest".to_string()]
}

pub(crate) fn service_url() -> String {
    DEFAULT_SERVICE_URL.to_string()
}
