//! Models for the PingAccess administrative API.
//!
//! # Design
//! Wire names are camelCase. Every field is optional so partial server
//! payloads still decode, and unset fields are left out of request bodies so
//! a `PUT` only carries what the caller filled in.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// Envelope used by every list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ItemsView<T> {
    // A bare `default` would demand `T: Default` for the whole envelope.
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

/// Error payload returned by PingAccess on validation and lookup failures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ApiErrorView {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub flash: Vec<String>,
    #[serde(default)]
    pub form: HashMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct LicenseView {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_applications: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "tracking_id")]
    pub tracking_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_login: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_tutorial: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sla_accepted: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct VersionView {
    #[serde(default)]
    pub version: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_root: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_auth_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub virtual_host_ids: Option<Vec<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_sensitive_path: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spa_support_enabled: Option<bool>,
    /// Resource-type specific settings PingAccess accepts but this crate does not model.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secure: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_connections: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_hostname_verification: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trusted_certificate_group_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_target_host_header: Option<bool>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct VirtualHost {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_pair_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trusted_certificate_group_id: Option<i64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        rename = "agentResourceCacheTTL"
    )]
    pub agent_resource_cache_ttl: Option<i64>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    // Deliberately not `Default`.
    #[derive(Debug, Deserialize, PartialEq)]
    struct Named {
        name: String,
    }

    #[test]
    fn items_view_decodes_models_without_default() {
        let view: ItemsView<Named> = serde_json::from_str(r#"{"items":[{"name":"a"}]}"#).unwrap();
        assert_eq!(view.items, vec![Named { name: "a".to_string() }]);

        let empty: ItemsView<Named> = serde_json::from_str("{}").unwrap();
        assert!(empty.items.is_empty());
    }

    #[test]
    fn license_accepts_snake_and_camel_tracking_id() {
        let a: LicenseView = serde_json::from_str(r#"{"tracking_id":"abc"}"#).unwrap();
        let b: LicenseView = serde_json::from_str(r#"{"trackingId":"abc"}"#).unwrap();
        assert_eq!(a.tracking_id.as_deref(), Some("abc"));
        assert_eq!(a, b);
    }

    #[test]
    fn unset_fields_are_not_serialized() {
        let user = UserView {
            email: Some("admin@example.com".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json, serde_json::json!({"email": "admin@example.com"}));
    }

    #[test]
    fn application_keeps_unmodelled_fields() {
        let app: Application = serde_json::from_str(
            r#"{"id":3,"name":"web","contextRoot":"/web","identityMappingIds":{"Web":0}}"#,
        )
        .unwrap();
        assert_eq!(app.context_root.as_deref(), Some("/web"));
        assert_eq!(app.extra["identityMappingIds"], serde_json::json!({"Web": 0}));

        let back = serde_json::to_value(&app).unwrap();
        assert_eq!(back["identityMappingIds"]["Web"], 0);
    }

    #[test]
    fn virtual_host_uses_ttl_wire_name() {
        let vh = VirtualHost {
            host: Some("localhost".to_string()),
            port: Some(3000),
            agent_resource_cache_ttl: Some(900),
            ..Default::default()
        };
        let json = serde_json::to_value(&vh).unwrap();
        assert_eq!(json["agentResourceCacheTTL"], 900);
        assert_eq!(json["port"], 3000);
    }

    #[test]
    fn items_view_defaults_to_empty() {
        let view: ItemsView<Site> = serde_json::from_str("{}").unwrap();
        assert!(view.items.is_empty());
    }
}
