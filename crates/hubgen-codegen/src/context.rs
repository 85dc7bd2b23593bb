//! Naming context: run-scoped assignment of unique symbol names.
//!
//! Labels are independently-sourced free text, so two devices can share one
//! label. Within a naming scope (all devices, all locations, rooms of one
//! location) the first claimant of a name keeps it; later claimants fall back
//! to `label + "_" + id`, which is unique because entity ids are unique. The
//! assigned names are recorded in lookup tables so later-emitted modules can
//! cross-reference earlier ones (rooms reference devices, locations reference
//! rooms).

use crate::naming::{identifier, lower_first};
use hubgen_core::{HubgenError, HubgenResult};
use std::collections::{HashMap, HashSet};

/// Room bucket name reserved for devices with no room assigned
pub const NO_ROOM_SENTINEL: &str = "NoRoom";

/// One naming scope: tracks claimed names and resolves collisions.
#[derive(Debug, Default)]
pub struct ScopedNames {
    seen: HashSet<String>,
}

impl ScopedNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve a name so no entity in this scope can claim it.
    pub fn reserve(&mut self, name: &str) {
        self.seen.insert(name.to_string());
    }

    /// Assign the `(TypeName, valueName)` pair for an entity.
    ///
    /// The id-suffixed fallback is the sole collision tie-break; there is no
    /// numeric-counter branch. An entity whose fallback is needed but whose
    /// id is empty, or whose fallback is itself already claimed (only
    /// possible with duplicate ids), is a fatal input-data error.
    pub fn assign(&mut self, label: &str, id: &str) -> HubgenResult<(String, String)> {
        let mut name = identifier(label);
        if self.seen.contains(&name) {
            if id.is_empty() {
                return Err(HubgenError::InvalidEntity(format!(
                    "label {label:?} collides and the entity has no id to disambiguate"
                )));
            }
            name = identifier(&format!("{label}_{id}"));
            if self.seen.contains(&name) {
                return Err(HubgenError::InvalidEntity(format!(
                    "id-suffixed name {name:?} is already taken; duplicate entity id {id:?}"
                )));
            }
        }
        self.seen.insert(name.clone());
        let lower = lower_first(&name);
        Ok((name, lower))
    }
}

/// Cross-reference tables filled while emitting, keyed by entity id.
///
/// Filled in emission order: devices first, then locations (which emit their
/// rooms inline), so a room always finds its devices' accessors and a
/// location always finds its rooms' type names.
#[derive(Debug, Default)]
pub struct NamingContext {
    device_accessors: HashMap<String, String>,
    location_accessors: HashMap<String, String>,
    room_types: HashMap<String, String>,
}

impl NamingContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_device(&mut self, device_id: &str, accessor: &str) {
        self.device_accessors
            .insert(device_id.to_string(), accessor.to_string());
    }

    pub fn device_accessor(&self, device_id: &str) -> HubgenResult<&str> {
        self.device_accessors
            .get(device_id)
            .map(String::as_str)
            .ok_or_else(|| {
                HubgenError::InvalidEntity(format!("no accessor recorded for device {device_id:?}"))
            })
    }

    pub fn record_location(&mut self, location_id: &str, accessor: &str) {
        self.location_accessors
            .insert(location_id.to_string(), accessor.to_string());
    }

    /// Accessor name assigned to a location.
    ///
    /// The locations module is emitted last, so no emitter reads this
    /// table; it completes the id-to-symbol index so callers embedding the
    /// generated modules can resolve any entity's accessor without
    /// re-running name assignment.
    pub fn location_accessor(&self, location_id: &str) -> Option<&str> {
        self.location_accessors.get(location_id).map(String::as_str)
    }

    pub fn record_room(&mut self, room_id: &str, type_name: &str) {
        self.room_types
            .insert(room_id.to_string(), type_name.to_string());
    }

    pub fn room_type(&self, room_id: &str) -> HubgenResult<&str> {
        self.room_types.get(room_id).map(String::as_str).ok_or_else(|| {
            HubgenError::InvalidEntity(format!("no type name recorded for room {room_id:?}"))
        })
    }
}

#[cfg(test)]
#[path = "context/context_tests.rs"]
mod context_tests;
