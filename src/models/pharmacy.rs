//! Pharmacy record returned by the nearby search

use serde::{Deserialize, Serialize};

/// Address used when an element carries neither `addr:full` nor `addr:street`
pub const DEFAULT_ADDRESS: &str = "Abu Dhabi, UAE";
/// Opening hours used when the `opening_hours` tag is missing
pub const DEFAULT_OPENING_HOURS: &str = "9:00";
/// Phone sentinel used when the `contact:phone` tag is missing
pub const DEFAULT_PHONE: &str = "N/A";

/// A pharmacy near the search origin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PharmacyRecord {
    pub name: String,
    pub address: String,
    pub opening_hours: String,
    pub phone: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Great-circle distance from the origin, rounded to 2 decimals
    pub distance_km: f64,
    pub maps_url: String,
}
