//! hubgen-fetch - Catalog acquisition engine
//!
//! Resolves the complete remote object graph (devices, capability
//! definitions, scenes, rooms, locations) into a [`CatalogSnapshot`]:
//! - [`CatalogApi`] abstracts the remote source per entity kind
//! - [`RetryPolicy`] and [`Throttle`] are the two composable call policies
//! - [`Acquirer`] owns deduplication and the fan-out ordering
//! - [`HttpCatalogApi`] is the reqwest-backed implementation for the real
//!   vendor cloud
//!
//! Acquisition is all-or-nothing: one call exhausting its retries aborts the
//! run, and translation never starts on a partial graph.

mod acquire;
mod api;
mod http;
mod retry;
mod throttle;

pub use acquire::{AcquireConfig, Acquirer};
pub use api::{ApiResult, CatalogApi};
pub use http::HttpCatalogApi;
pub use retry::RetryPolicy;
pub use throttle::Throttle;

#[doc(no_inline)]
pub use hubgen_core::CatalogSnapshot;
