//! SQL resource provider models (`Cirrus.Sql`)

use super::{expandable_enum, Resource, TrackedResource};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

expandable_enum! {
    /// Edition of a SQL database
    DatabaseEdition {
        Basic => "Basic",
        Standard => "Standard",
        Premium => "Premium",
        Free => "Free",
        Stretch => "Stretch",
        DataWarehouse => "DataWarehouse",
        System => "System",
    }
}

expandable_enum! {
    /// Engine version of a SQL server
    ServerVersion {
        V2 => "2.0",
        V12 => "12.0",
    }
}

expandable_enum! {
    /// Role of a server within a disaster-recovery pairing
    DisasterRecoveryRole {
        None => "None",
        Primary => "Primary",
        Secondary => "Secondary",
    }
}

// ============================================================================
// Servers
// ============================================================================

/// A SQL server resource
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SqlServer {
    #[serde(flatten)]
    pub resource: TrackedResource,
    /// Server kind discriminator, set by the service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default)]
    pub properties: ServerProperties,
}

/// Provider-specific server fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<ServerVersion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub administrator_login: Option<String>,
    /// Only sent on create/update; the service never returns it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub administrator_login_password: Option<String>,
    /// Read-only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fully_qualified_domain_name: Option<String>,
    /// Read-only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// Body of a server create-or-update request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerCreateParams {
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<HashMap<String, String>>,
    #[serde(default)]
    pub properties: ServerProperties,
}

// ============================================================================
// Databases
// ============================================================================

/// A database hosted on a SQL server
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Database {
    #[serde(flatten)]
    pub resource: TrackedResource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default)]
    pub properties: DatabaseProperties,
}

/// Provider-specific database fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collation: Option<String>,
    /// Read-only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<DateTime<Utc>>,
    /// Read-only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_id: Option<String>,
    /// Read-only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub earliest_restore_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edition: Option<DatabaseEdition>,
    /// Maximum size in bytes, sent as a decimal string on the wire
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_size_bytes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_service_objective_name: Option<String>,
    /// Read-only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elastic_pool_name: Option<String>,
    /// Read-only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_secondary_location: Option<String>,
}

/// Body of a database create-or-update request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseCreateParams {
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<HashMap<String, String>>,
    #[serde(default)]
    pub properties: DatabaseProperties,
}

// ============================================================================
// Firewall rules
// ============================================================================

/// A server-level firewall rule
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirewallRule {
    #[serde(flatten)]
    pub resource: Resource,
    #[serde(default)]
    pub properties: FirewallRuleProperties,
}

/// Address range a firewall rule admits
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirewallRuleProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_ip_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_ip_address: Option<String>,
}

// ============================================================================
// Disaster recovery
// ============================================================================

/// Pairing of a server with a disaster-recovery partner
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisasterRecoveryConfiguration {
    #[serde(flatten)]
    pub resource: Resource,
    #[serde(default)]
    pub properties: DisasterRecoveryProperties,
}

/// Provider-specific disaster-recovery fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisasterRecoveryProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partner_server_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<DisasterRecoveryRole>,
    /// Read-only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}
