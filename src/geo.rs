//! Geographic helpers: great-circle distance and map links

use haversine::{Units, distance};

use crate::models::Location;

/// Great-circle distance between two points in kilometers (Earth radius 6371 km)
#[must_use]
pub fn haversine_km(from: &Location, to: &Location) -> f64 {
    distance((*from).into(), (*to).into(), Units::Kilometers)
}

/// Round `value` to `decimals` places
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let multiplier = 10_f64.powi(decimals);
    (value * multiplier).round() / multiplier
}

/// Google Maps search deep link for a point
#[must_use]
pub fn google_maps_url(location: &Location) -> String {
    format!(
        "https://www.google.com/maps/search/?api=1&query={},{}",
        location.latitude, location.longitude
    )
}
