//! Abstract remote catalog source

use async_trait::async_trait;
use hubgen_core::{ApiError, Capability, Device, Location, LocationRef, Room, Scene};

/// Result type alias for remote catalog calls
pub type ApiResult<T> = Result<T, ApiError>;

/// The remote device/capability catalog, organized by entity kind.
///
/// Every operation may fail transiently (network, rate limit) or permanently;
/// the acquisition engine owns the retry and throttling policy, so
/// implementations should surface errors directly rather than retrying
/// themselves.
#[async_trait]
pub trait CatalogApi: Send + Sync + 'static {
    /// List every device visible to the authenticated principal
    async fn list_devices(&self) -> ApiResult<Vec<Device>>;

    /// List every scene
    async fn list_scenes(&self) -> ApiResult<Vec<Scene>>;

    /// List location references (ids only; full records come from
    /// [`get_location`](CatalogApi::get_location))
    async fn list_location_refs(&self) -> ApiResult<Vec<LocationRef>>;

    /// Fetch the full record for one location
    async fn get_location(&self, location_id: &str) -> ApiResult<Location>;

    /// List the rooms belonging to one location
    async fn list_rooms(&self, location_id: &str) -> ApiResult<Vec<Room>>;

    /// Fetch one capability definition by `(id, version)`
    async fn get_capability(&self, id: &str, version: u32) -> ApiResult<Capability>;
}
