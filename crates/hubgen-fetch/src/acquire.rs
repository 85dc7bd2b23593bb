//! Acquisition engine: resolves the full catalog graph into a snapshot

use crate::api::CatalogApi;
use crate::retry::RetryPolicy;
use crate::throttle::Throttle;
use futures::future::try_join_all;
use hubgen_core::{
    Capability, CapabilityKey, CatalogSnapshot, HubgenResult, Location, LocationRef, Room,
    distinct_capability_keys,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};

/// Tuning knobs for one acquisition run
#[derive(Debug, Clone, Copy)]
pub struct AcquireConfig {
    /// Retry ceiling per remote call
    pub max_attempts: u32,
    /// Global cap on simultaneously in-flight remote calls
    pub max_in_flight: usize,
}

impl Default for AcquireConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            max_in_flight: Throttle::DEFAULT_MAX_IN_FLIGHT,
        }
    }
}

/// Fetches the complete `{devices, capabilities, scenes, rooms, locations}`
/// snapshot from a [`CatalogApi`].
///
/// Every remote call is wrapped by the retry policy composed around the
/// admission throttle. Any call that exhausts its retries aborts the whole
/// run; no partial snapshot is ever returned.
pub struct Acquirer<A: CatalogApi> {
    api: Arc<A>,
    retry: RetryPolicy,
    throttle: Throttle,
}

impl<A: CatalogApi> Acquirer<A> {
    pub fn new(api: A) -> Self {
        Self::with_config(api, AcquireConfig::default())
    }

    pub fn with_config(api: A, config: AcquireConfig) -> Self {
        Self {
            api: Arc::new(api),
            retry: RetryPolicy::new(config.max_attempts),
            throttle: Throttle::new(config.max_in_flight),
        }
    }

    /// Resolve the full catalog.
    ///
    /// The device, scene, and location-reference listings have no ordering
    /// dependency and run concurrently. Capability definitions are then
    /// fetched for every distinct `(id, version)` pair discovered in the
    /// device graph, and each location's record and room list are fetched
    /// concurrently across locations. Result ordering of the snapshot's
    /// vectors is not guaranteed; emission imposes its own deterministic
    /// order.
    pub async fn acquire(&self) -> HubgenResult<CatalogSnapshot> {
        let (devices, scenes, location_refs) = tokio::try_join!(
            self.retry
                .run(|| self.throttle.run(|| self.api.list_devices())),
            self.retry.run(|| self.throttle.run(|| self.api.list_scenes())),
            self.retry
                .run(|| self.throttle.run(|| self.api.list_location_refs())),
        )?;

        let total_refs: usize = devices
            .iter()
            .flat_map(|d| d.components.iter())
            .map(|c| c.capabilities.len())
            .sum();
        info!(
            devices = devices.len(),
            scenes = scenes.len(),
            locations = location_refs.len(),
            capability_refs = total_refs,
            distinct_capabilities = distinct_capability_keys(&devices).len(),
            "catalog listings fetched"
        );

        let catalog = Mutex::new(BTreeMap::new());
        let refs: Vec<CapabilityKey> = devices
            .iter()
            .flat_map(|d| d.components.iter())
            .flat_map(|c| c.capabilities.iter())
            .map(|r| r.key())
            .collect();
        try_join_all(refs.iter().map(|key| self.fetch_capability(&catalog, key))).await?;
        let capabilities = catalog.into_inner();

        let per_location =
            try_join_all(location_refs.iter().map(|r| self.fetch_location(r))).await?;
        let mut locations = Vec::new();
        let mut rooms = Vec::new();
        for (location, location_rooms) in per_location {
            locations.push(location);
            rooms.extend(location_rooms);
        }

        let snapshot = CatalogSnapshot {
            devices,
            capabilities,
            scenes,
            rooms,
            locations,
        };
        snapshot.verify_complete()?;
        info!(
            capabilities = snapshot.capabilities.len(),
            rooms = snapshot.rooms.len(),
            "catalog snapshot complete"
        );
        Ok(snapshot)
    }

    /// Fetch one capability definition unless another worker already owns the
    /// key.
    ///
    /// Check-then-reserve happens atomically under the catalog lock: the
    /// first worker to see an absent key installs a placeholder and becomes
    /// the sole fetcher; every later worker finds the key present (placeholder
    /// or not) and skips the network call entirely.
    async fn fetch_capability(
        &self,
        catalog: &Mutex<BTreeMap<CapabilityKey, Capability>>,
        key: &CapabilityKey,
    ) -> HubgenResult<()> {
        {
            let mut guard = catalog.lock().await;
            if guard.contains_key(key) {
                debug!(capability = %key, "already resolved or in flight, skipping fetch");
                return Ok(());
            }
            guard.insert(key.clone(), Capability::placeholder(key));
        }

        let capability = self
            .retry
            .run(|| {
                self.throttle
                    .run(|| self.api.get_capability(&key.id, key.version))
            })
            .await?;
        catalog.lock().await.insert(key.clone(), capability);
        Ok(())
    }

    /// Fetch one location's record, then its room list.
    ///
    /// The room listing is causally ordered after the location fetch; across
    /// locations both run concurrently.
    async fn fetch_location(&self, loc_ref: &LocationRef) -> HubgenResult<(Location, Vec<Room>)> {
        let location = self
            .retry
            .run(|| {
                self.throttle
                    .run(|| self.api.get_location(&loc_ref.location_id))
            })
            .await?;
        let rooms = self
            .retry
            .run(|| {
                self.throttle
                    .run(|| self.api.list_rooms(&location.location_id))
            })
            .await?;
        Ok((location, rooms))
    }
}
