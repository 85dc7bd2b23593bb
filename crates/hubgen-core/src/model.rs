//! Catalog entity types
//!
//! These are read-only snapshots of what the vendor cloud reports: devices
//! with their components and capability references, capability definitions,
//! scenes, rooms, and locations. Wire payloads are camelCase JSON; fields the
//! generator does not consume are ignored on deserialization.
//!
//! Schema bodies inside capability definitions stay as raw
//! [`serde_json::Value`]s here. Translating them into the closed type
//! vocabulary (and rejecting anything outside it) is the job of the schema
//! mapper in `hubgen-codegen`, not of deserialization.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Unique key of a capability definition: `(id, version)`.
///
/// The same key may be referenced by thousands of components; the resolved
/// catalog holds exactly one definition per key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CapabilityKey {
    pub id: String,
    pub version: u32,
}

impl CapabilityKey {
    pub fn new(id: impl Into<String>, version: u32) -> Self {
        Self {
            id: id.into(),
            version,
        }
    }
}

impl fmt::Display for CapabilityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} v{}", self.id, self.version)
    }
}

/// Reference to a capability as it appears on a device component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityRef {
    pub id: String,
    pub version: u32,
}

impl CapabilityRef {
    pub fn key(&self) -> CapabilityKey {
        CapabilityKey::new(self.id.clone(), self.version)
    }
}

/// Lifecycle status of a capability definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CapabilityStatus {
    #[default]
    Live,
    Deprecated,
    Dead,
    Proposed,
    /// Any status value this generator does not recognize
    #[serde(other)]
    Unknown,
}

impl fmt::Display for CapabilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            CapabilityStatus::Live => "live",
            CapabilityStatus::Deprecated => "deprecated",
            CapabilityStatus::Dead => "dead",
            CapabilityStatus::Proposed => "proposed",
            CapabilityStatus::Unknown => "unknown",
        };
        f.write_str(text)
    }
}

/// A capability definition, uniquely identified by `(id, version)`.
///
/// Immutable once fetched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Capability {
    pub id: String,
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub status: CapabilityStatus,
    #[serde(default)]
    pub attributes: BTreeMap<String, Attribute>,
    #[serde(default)]
    pub commands: BTreeMap<String, Command>,
}

impl Capability {
    /// Name-only placeholder reserved in the dedup map while the real
    /// definition is in flight. Never survives into the final snapshot.
    pub fn placeholder(key: &CapabilityKey) -> Self {
        Self {
            id: key.id.clone(),
            version: key.version,
            name: key.id.clone(),
            status: CapabilityStatus::default(),
            attributes: BTreeMap::new(),
            commands: BTreeMap::new(),
        }
    }
}

/// One observable attribute of a capability
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attribute {
    pub schema: AttributeSchema,
}

/// Schema wrapper of an attribute: a mandatory `value` sub-schema plus
/// optional `unit` and `data` sub-schemas, each independently markable as
/// required via the `required` list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributeSchema {
    pub properties: AttributeProperties,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
}

/// The three fixed sub-schemas an attribute may carry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributeProperties {
    pub value: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

/// An invokable command of a capability
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Command {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<CommandArgument>,
}

/// One positional command argument
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandArgument {
    pub name: String,
    pub schema: serde_json::Value,
    #[serde(default)]
    pub optional: bool,
}

/// A device as listed by the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub device_id: String,
    pub label: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_id: Option<String>,
    #[serde(default)]
    pub components: Vec<Component>,
}

/// A named sub-unit of a device grouping related capabilities
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Component {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub capabilities: Vec<CapabilityRef>,
}

/// Reference entry from the location listing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationRef {
    pub location_id: String,
}

/// A full location record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub location_id: String,
    pub name: String,
}

/// A room, belonging to exactly one location
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub room_id: String,
    #[serde(default)]
    pub name: String,
    pub location_id: String,
}

/// A scene summary.
///
/// The date fields are time-varying; the emitter strips them so regenerated
/// output stays byte-identical across runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    pub scene_id: String,
    pub scene_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_executed_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<String>,
}

/// Collect the distinct `(id, version)` pairs referenced anywhere in a device
/// graph. Duplicates are the common case; the acquisition engine fetches each
/// distinct key at most once.
pub fn distinct_capability_keys(devices: &[Device]) -> BTreeSet<CapabilityKey> {
    devices
        .iter()
        .flat_map(|d| d.components.iter())
        .flat_map(|c| c.capabilities.iter())
        .map(CapabilityRef::key)
        .collect()
}
