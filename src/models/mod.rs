//! Data models for the pharmacy locator
//!
//! - Location: geographic coordinates of a search origin or a place
//! - Pharmacy: the normalized record returned to clients

pub mod location;
pub mod pharmacy;

pub use location::Location;
pub use pharmacy::PharmacyRecord;
