//! Pharmacy locator
//!
//! Finds the pharmacies nearest to a coordinate using the OpenStreetMap
//! Overpass API and exposes the search over HTTP.

pub mod api;
pub mod config;
pub mod error;
pub mod geo;
pub mod models;
pub mod overpass;
pub mod pharmacy;
pub mod telemetry;
pub mod web;

// Re-export core types for public API
pub use config::PharmacyLocatorConfig;
pub use error::PharmacyError;
pub use models::{Location, PharmacyRecord};
pub use overpass::OverpassClient;
pub use pharmacy::{PharmacyLocator, PharmacySource};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, PharmacyError>;
