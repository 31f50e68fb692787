//! Wire models for the resource providers
//!
//! Data-transfer types matching the JSON request/response schemas of the
//! control plane. Each resource keeps the wire shape: common envelope
//! fields are flattened in, provider-specific fields live under a nested
//! `properties` object exactly as the server sends them.
//!
//! String enums on the wire are open sets: the server may return values
//! this SDK version does not know about. Those are modeled with an
//! `Other(String)` variant so unknown values round-trip losslessly instead
//! of failing deserialization.

mod network;
mod sql;

pub use network::{
    AddressSpace, DhcpOptions, Subnet, SubnetProperties, VirtualNetwork,
    VirtualNetworkCreateParams, VirtualNetworkProperties,
};
pub use sql::{
    Database, DatabaseCreateParams, DatabaseEdition, DatabaseProperties,
    DisasterRecoveryConfiguration, DisasterRecoveryProperties, DisasterRecoveryRole, FirewallRule,
    FirewallRuleProperties, ServerCreateParams, ServerProperties, ServerVersion, SqlServer,
};

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Declares an open string enum: known values plus an `Other` variant that
/// carries any unrecognized wire value verbatim.
macro_rules! expandable_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
            /// Value not known to this SDK version, preserved verbatim
            Other(String),
        }

        impl $name {
            /// The wire representation of this value
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $wire,)+
                    Self::Other(raw) => raw,
                }
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                match raw.as_str() {
                    $($wire => Self::$variant,)+
                    _ => Self::Other(raw),
                }
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self::from(raw.to_string())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.as_str().to_string()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}
pub(crate) use expandable_enum;

// ============================================================================
// Common resource envelope
// ============================================================================

/// Fields every resource carries
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    /// Fully qualified resource id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Resource name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Resource type, e.g. `Cirrus.Sql/servers`
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
}

/// A resource tracked to a region, with optional tags
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackedResource {
    #[serde(flatten)]
    pub resource: Resource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<HashMap<String, String>>,
}

/// Reference to another resource by id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubResource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

// ============================================================================
// Error envelope
// ============================================================================

/// Structured error body: `{"error": {"code": ..., "message": ...}}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorEnvelope {
    #[serde(default)]
    pub error: Option<ErrorDetail>,
}

/// The inner error object of the envelope
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub target: Option<String>,
}

expandable_enum! {
    /// Lifecycle state of a resource as reported by the control plane
    ProvisioningState {
        Succeeded => "Succeeded",
        Updating => "Updating",
        Deleting => "Deleting",
        Failed => "Failed",
    }
}
