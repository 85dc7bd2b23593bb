//! hubgen-core - Catalog data model and error types
//!
//! This crate provides the foundational types shared by the acquisition and
//! code-generation layers:
//! - catalog entities ([`Device`], [`Capability`], [`Scene`], [`Location`], [`Room`])
//! - [`CatalogSnapshot`], the complete deduplicated acquisition result
//! - [`HubgenError`] / [`ApiError`] error taxonomy

mod error;
mod model;
mod snapshot;

pub use error::{ApiError, HubgenError, HubgenResult};
pub use model::{
    Attribute, AttributeProperties, AttributeSchema, Capability, CapabilityKey, CapabilityRef,
    CapabilityStatus, Command, CommandArgument, Component, Device, Location, LocationRef, Room,
    Scene, distinct_capability_keys,
};
pub use snapshot::CatalogSnapshot;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ApiError, Capability, CapabilityKey, CapabilityRef, CapabilityStatus, CatalogSnapshot,
        Component, Device, HubgenError, HubgenResult, Location, LocationRef, Room, Scene,
    };
}
