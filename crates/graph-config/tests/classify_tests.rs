//! Tests for project config classification

use graph_config::config::{
    ClientServiceConfig, ConfigKind, ConfigShape, GraphIdSource, GraphInfo, LocalSchemaFile,
    RawConfig, ResolveOptions, ServiceConfig, classify, classify_with, graph_info,
    is_client_config, is_local_service_config, is_service_config,
};
use rstest::rstest;
use serde_json::{Value, json};

fn raw(value: Value) -> RawConfig {
    RawConfig::from_value(value).expect("fixture should be a valid raw config")
}

mod graph_id_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_client_service_string() {
        let config = classify(raw(json!({ "client": { "service": "my-service" } })));
        assert_eq!(config.graph_id(), Some("my-service"));
        assert_eq!(config.tag(), None);
    }

    #[test]
    fn test_client_service_string_with_tag() {
        let config = classify(raw(json!({ "client": { "service": "my-service@master" } })));
        assert_eq!(config.graph_id(), Some("my-service"));
        assert_eq!(config.tag(), Some("master"));
    }

    #[test]
    fn test_client_service_object() {
        let config = classify(raw(json!({ "client": { "service": { "name": "my-service" } } })));
        assert_eq!(config.graph_id(), Some("my-service"));
        assert_eq!(config.graph_id_source(), Some(GraphIdSource::Config));
    }

    #[test]
    fn test_client_string_specifier() {
        let config = classify(raw(json!({ "client": "my-service@beta" })));
        assert!(config.is_client());
        assert_eq!(config.graph_id(), Some("my-service"));
        assert_eq!(config.variant(), "beta");
    }

    #[test]
    fn test_service_config() {
        let config = classify(raw(json!({ "service": { "name": "my-service" } })));
        assert_eq!(config.graph_id(), Some("my-service"));
        assert!(is_service_config(&config));
    }

    #[test]
    fn test_service_config_with_tag() {
        let config = classify(RawConfig::service(ServiceConfig::named("my-service@prod")));
        assert_eq!(
            config.graph_info(),
            GraphInfo {
                graph_id: Some("my-service".to_string()),
                tag: Some("prod".to_string()),
            }
        );
    }

    #[rstest]
    #[case(json!({ "client": { "service": "" } }))]
    #[case(json!({ "client": { "service": { "url": "http://localhost:4000" } } }))]
    #[case(json!({ "client": { "service": 12 } }))]
    #[case(json!({ "client": {} }))]
    #[case(json!({ "service": {} }))]
    #[case(json!({}))]
    fn test_no_identity(#[case] value: Value) {
        let config = classify(raw(value));
        assert_eq!(config.graph_id(), None);
        assert_eq!(config.tag(), None);
        assert_eq!(config.graph_id_source(), None);
    }
}

mod loose_input_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_mistyped_includes_keep_client_identity() {
        let config = classify(raw(json!({
            "client": { "service": "my-service@prod", "includes": "src/**/*.ts" }
        })));
        assert_eq!(config.graph_id(), Some("my-service"));
        assert_eq!(config.tag(), Some("prod"));
    }

    #[test]
    fn test_mistyped_version_keeps_client_identity() {
        let config = classify(raw(json!({ "client": { "service": "my-service", "version": 2 } })));
        assert_eq!(config.graph_id(), Some("my-service"));
    }

    #[test]
    fn test_mistyped_header_keeps_remote_identity() {
        let config = classify(raw(json!({
            "client": { "service": { "name": "my-service", "headers": { "x-n": 1 } } }
        })));
        assert_eq!(config.graph_id(), Some("my-service"));
    }

    #[test]
    fn test_mistyped_service_settings_still_classify() {
        let config = classify(raw(json!({
            "service": { "name": "my-service", "includes": "schema/*.graphql" }
        })));
        assert!(config.is_service());
        assert_eq!(config.graph_id(), Some("my-service"));
    }

    #[test]
    fn test_non_object_service_has_no_identity() {
        let config = classify(raw(json!({ "service": "my-service" })));
        assert!(config.is_service());
        assert_eq!(config.graph_id(), None);
    }

    #[rstest]
    #[case(json!({ "client": ["my-service@prod"] }))]
    #[case(json!({ "client": { "service": ["my-service"] } }))]
    #[case(json!({ "client": { "service": [{ "name": "my-service" }] } }))]
    fn test_arrays_carry_no_identity(#[case] value: Value) {
        let config = classify(raw(value));
        assert!(config.is_client());
        assert_eq!(config.graph_id(), None);
        assert_eq!(config.tag(), None);
    }
}

mod kind_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_is_client_config() {
        let config = classify(raw(json!({ "client": { "service": "hello" } })));
        assert!(is_client_config(&config));
        assert!(!is_service_config(&config));
        assert_eq!(config.kind(), ConfigKind::Client);
    }

    #[test]
    fn test_is_service_config() {
        let config = classify(raw(json!({ "service": { "name": "hello" } })));
        assert!(is_service_config(&config));
        assert!(!is_client_config(&config));
    }

    #[test]
    fn test_client_takes_precedence() {
        let config = classify(raw(json!({
            "client": { "service": "from-client" },
            "service": { "name": "from-service" }
        })));
        assert!(config.is_client());
        assert_eq!(config.graph_id(), Some("from-client"));
    }

    #[test]
    fn test_falsy_client_is_ignored() {
        let config = classify(raw(json!({
            "client": false,
            "service": { "name": "from-service" }
        })));
        assert!(config.is_service());
        assert_eq!(config.graph_id(), Some("from-service"));
    }

    // Neither section set: reported as a client with no graph unless configured
    #[test]
    fn test_empty_config_defaults_to_client() {
        let config = classify(RawConfig::default());
        assert_eq!(config.kind(), ConfigKind::Client);
        assert_eq!(config.graph_id(), None);
        assert!(!config.is_local());
    }

    #[test]
    fn test_empty_config_kind_is_configurable() {
        let options = ResolveOptions::new().with_empty_kind(ConfigKind::Service);
        let config = classify_with(RawConfig::default(), &options);
        assert_eq!(config.kind(), ConfigKind::Service);

        // Only affects configs with neither section
        let config = classify_with(raw(json!({ "client": "graph" })), &options);
        assert_eq!(config.kind(), ConfigKind::Client);
    }
}

mod local_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn client_service(value: Value) -> ClientServiceConfig {
        serde_json::from_value(value).expect("fixture should deserialize")
    }

    #[rstest]
    #[case(json!({ "localSchemaFile": "okay" }), true)]
    #[case(json!({ "localSchemaFile": ["a.graphql", "b.graphql"] }), true)]
    #[case(json!({ "name": "graph", "localSchemaFile": "schema.graphql" }), true)]
    #[case(json!({ "localSchemaFile": "" }), false)]
    #[case(json!({ "localSchemaFile": [] }), false)]
    #[case(json!({}), false)]
    #[case(json!({ "name": "graph" }), false)]
    #[case(json!("graph@tag"), false)]
    fn test_is_local_service_config(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(is_local_service_config(&client_service(value)), expected);
    }

    #[test]
    fn test_local_client_has_no_identity() {
        let config = classify(raw(json!({
            "client": { "service": { "localSchemaFile": ["a.graphql", "b.graphql"] } }
        })));
        assert!(config.is_client());
        assert!(config.is_local());
        assert_eq!(config.graph_id(), None);
        assert_eq!(config.tag(), None);
        assert_eq!(
            config.local_schema_files().map(LocalSchemaFile::paths),
            Some(vec!["a.graphql", "b.graphql"])
        );
    }

    #[test]
    fn test_local_client_keeps_declared_name() {
        let config = classify(raw(json!({
            "client": { "service": { "name": "graph@dev", "localSchemaFile": "schema.graphql" } }
        })));
        assert!(config.is_local());
        assert_eq!(config.graph_id(), Some("graph"));
        assert_eq!(config.tag(), Some("dev"));
    }

    #[test]
    fn test_schema_file_on_client_object() {
        let config = classify(raw(json!({ "client": { "localSchemaFile": "schema.graphql" } })));
        assert!(config.is_local());
        assert_eq!(config.graph_id(), None);
    }

    #[test]
    fn test_service_schema_file_is_not_local_client() {
        let config = classify(raw(json!({
            "service": { "name": "graph", "localSchemaFile": "schema.graphql" }
        })));
        assert!(config.is_service());
        assert!(!config.is_local());
    }
}

mod api_key_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_graph_id_from_engine_key() {
        let config = classify(raw(json!({
            "client": { "includes": ["src/**/*.ts"] },
            "engine": { "apiKey": "service:keyed-graph:secret" }
        })));
        assert_eq!(config.graph_id(), Some("keyed-graph"));
        assert_eq!(config.graph_id_source(), Some(GraphIdSource::ApiKey));
        assert_eq!(config.api_key(), Some("service:keyed-graph:secret"));
    }

    #[test]
    fn test_config_name_beats_key() {
        let config = classify(raw(json!({
            "client": { "service": "named@v1" },
            "engine": { "apiKey": "service:keyed-graph:secret" }
        })));
        assert_eq!(config.graph_id(), Some("named"));
        assert_eq!(config.graph_id_source(), Some(GraphIdSource::Config));
    }

    #[test]
    fn test_tag_kept_with_key_graph() {
        let config = classify(raw(json!({
            "service": { "name": "@staging" },
            "engine": { "apiKey": "service:keyed-graph:secret" }
        })));
        assert_eq!(config.graph_id(), Some("keyed-graph"));
        assert_eq!(config.tag(), Some("staging"));
    }

    #[test]
    fn test_option_key_used_when_engine_has_none() {
        let options = ResolveOptions::new().with_api_key("service:env-graph:secret");
        let config = classify_with(raw(json!({ "client": {} })), &options);
        assert_eq!(config.graph_id(), Some("env-graph"));
    }

    #[test]
    fn test_engine_key_beats_option_key() {
        let options = ResolveOptions::new().with_api_key("service:env-graph:secret");
        let config = classify_with(
            raw(json!({ "engine": { "apiKey": "service:file-graph:secret" } })),
            &options,
        );
        assert_eq!(config.graph_id(), Some("file-graph"));
    }

    #[rstest]
    #[case("user:someone:secret")]
    #[case("service/graph:secret")]
    fn test_non_service_keys_give_nothing(#[case] key: &str) {
        let config = classify(raw(json!({ "engine": { "apiKey": key } })));
        assert_eq!(config.graph_id(), None);
        assert_eq!(config.api_key(), Some(key));
    }

    #[test]
    fn test_options_debug_redacts_key() {
        let options = ResolveOptions::new().with_api_key("service:graph:topsecret");
        assert!(!format!("{:?}", options).contains("topsecret"));
    }
}

mod resolved_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[rstest]
    #[case(json!({ "client": { "service": "my-service@master" } }))]
    #[case(json!({ "client": { "service": { "name": "my-service", "url": "http://x" } } }))]
    #[case(json!({ "client": { "service": { "localSchemaFile": "schema.graphql" } } }))]
    #[case(json!({ "service": { "name": "my-service" }, "engine": { "apiKey": "service:a:b" } }))]
    #[case(json!({ "client": { "service": 12, "tagName": ["not", "a", "string"] } }))]
    #[case(json!({ "client": true }))]
    #[case(json!({ "service": "not-an-object" }))]
    #[case(json!({}))]
    fn test_serialized_raw_classifies_identically(#[case] value: Value) {
        let resolved = classify(raw(value));

        let serialized = serde_json::to_value(resolved.raw()).unwrap();
        let again = classify(raw(serialized));
        assert_eq!(again, resolved);
    }

    #[test]
    fn test_serialized_form() {
        let config = classify(raw(json!({ "client": { "service": "my-service@master" } })));
        assert_eq!(
            serde_json::to_value(&config).unwrap(),
            json!({
                "kind": "client",
                "graphId": "my-service",
                "graphIdSource": "config",
                "tag": "master"
            })
        );
    }

    #[test]
    fn test_raw_graph_info_ignores_key() {
        let raw = raw(json!({
            "client": {},
            "engine": { "apiKey": "service:keyed-graph:secret" }
        }));
        assert_eq!(graph_info(&raw), GraphInfo::default());
        assert_eq!(classify(raw).graph_id(), Some("keyed-graph"));
    }

    #[test]
    fn test_shape_matches_classification() {
        let raw = raw(json!({ "client": { "service": { "name": "my-service" } } }));
        assert_eq!(raw.shape(), ConfigShape::ClientObjectSpecifier("my-service"));
    }

    #[test]
    fn test_client_settings_have_defaults() {
        let config = classify(raw(json!({ "client": { "service": "graph", "tagName": "graphql" } })));
        let Some(graph_config::config::ClientConfig::Object(client)) = config.client() else {
            panic!("expected client object, got {:?}", config.client());
        };
        assert_eq!(client.tag_name, "graphql");
        assert!(client.add_typename);
        assert_eq!(client.client_only_directives, vec!["connection", "type"]);
        assert_eq!(client.client_schema_directives, vec!["client", "rest"]);
    }
}
