//! Nearby pharmacy search
//!
//! `ranking` turns raw Overpass elements into sorted [`PharmacyRecord`]s,
//! `locator` wires the ranking to a live [`OverpassClient`].
//!
//! [`PharmacyRecord`]: crate::models::PharmacyRecord
//! [`OverpassClient`]: crate::overpass::OverpassClient

pub mod locator;
pub mod ranking;

use async_trait::async_trait;

use crate::Result;
use crate::models::{Location, PharmacyRecord};

pub use locator::PharmacyLocator;
pub use ranking::{DEFAULT_RESULT_LIMIT, rank_pharmacies};

/// Search radius in meters used when the caller gives none
pub const DEFAULT_RADIUS_M: i64 = 3000;

/// Anything that can answer "which pharmacies are near this point"
#[async_trait]
pub trait PharmacySource: Send + Sync {
    /// Nearest pharmacies around `origin`, or the upstream failure
    async fn search(&self, origin: Location, radius_m: i64) -> Result<Vec<PharmacyRecord>>;

    /// Same as [`search`](Self::search) but an upstream failure becomes an empty list
    async fn nearby_pharmacies(&self, origin: Location, radius_m: i64) -> Vec<PharmacyRecord> {
        match self.search(origin, radius_m).await {
            Ok(pharmacies) => pharmacies,
            Err(e) if e.is_upstream() => {
                tracing::warn!(
                    "Pharmacy lookup around ({}) failed, returning no results: {} ({})",
                    origin.format_coordinates(),
                    e,
                    e.user_message()
                );
                Vec::new()
            }
            Err(e) => {
                tracing::error!(
                    "Pharmacy lookup around ({}) could not run: {}",
                    origin.format_coordinates(),
                    e
                );
                Vec::new()
            }
        }
    }
}
