//! The resolved catalog snapshot handed from acquisition to translation

use crate::error::{HubgenError, HubgenResult};
use crate::model::{Capability, CapabilityKey, Device, Location, Room, Scene};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Complete, deduplicated result of one acquisition run.
///
/// Acquisition finishes entirely before translation starts; a snapshot is
/// only constructed once every capability reference in the device graph
/// resolves to a definition in `capabilities`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    pub devices: Vec<Device>,
    /// One definition per distinct `(id, version)` key
    #[serde(with = "capability_map")]
    pub capabilities: BTreeMap<CapabilityKey, Capability>,
    pub scenes: Vec<Scene>,
    pub rooms: Vec<Room>,
    pub locations: Vec<Location>,
}

impl CatalogSnapshot {
    /// Verify that every component capability reference resolves to a
    /// definition present in the catalog.
    pub fn verify_complete(&self) -> HubgenResult<()> {
        for device in &self.devices {
            for component in &device.components {
                for cap in &component.capabilities {
                    if !self.capabilities.contains_key(&cap.key()) {
                        return Err(HubgenError::MissingCapability {
                            id: cap.id.clone(),
                            version: cap.version,
                        });
                    }
                }
            }
        }
        Ok(())
    }
}

/// Serde helper: a struct-keyed map cannot be a JSON object, so the snapshot
/// file stores the capability catalog as a flat list and rebuilds the map on
/// load. The key is recomputed from each definition's own `(id, version)`.
mod capability_map {
    use super::*;
    use serde::{Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        map: &BTreeMap<CapabilityKey, Capability>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let entries: Vec<&Capability> = map.values().collect();
        entries.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<BTreeMap<CapabilityKey, Capability>, D::Error> {
        let entries = Vec::<Capability>::deserialize(deserializer)?;
        Ok(entries
            .into_iter()
            .map(|c| (CapabilityKey::new(c.id.clone(), c.version), c))
            .collect())
    }
}
