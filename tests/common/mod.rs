#![allow(dead_code)]

use pharmacy_locator::config::OverpassConfig;
use pharmacy_locator::{OverpassClient, PharmacyLocator};
use serde_json::{Value, json};
use wiremock::MockServer;

pub const ORIGIN_LAT: f64 = 24.345_942;
pub const ORIGIN_LON: f64 = 54.539_434;
pub const INTERPRETER_PATH: &str = "/api/interpreter";

pub fn locator_for(server: &MockServer) -> PharmacyLocator {
    let config = OverpassConfig {
        base_url: format!("{}{}", server.uri(), INTERPRETER_PATH),
        timeout_seconds: 5,
        ..OverpassConfig::default()
    };
    PharmacyLocator::new(OverpassClient::new(&config).expect("client"))
}

pub fn node(id: i64, lat: f64, lon: f64, tags: Value) -> Value {
    json!({ "type": "node", "id": id, "lat": lat, "lon": lon, "tags": tags })
}

/// Ten named pharmacies north of the origin, listed farthest first
pub fn ten_pharmacies() -> Value {
    let elements: Vec<Value> = (1..=10_i32)
        .rev()
        .map(|i| {
            node(
                i64::from(i),
                ORIGIN_LAT + 0.002 * f64::from(i),
                ORIGIN_LON,
                json!({ "amenity": "pharmacy", "name": format!("Pharmacy {i}") }),
            )
        })
        .collect();
    json!({ "version": 0.6, "elements": elements })
}
