//! OpenStreetMap Overpass API integration
//!
//! - `query`: Overpass QL builders
//! - `types`: response DTOs
//! - `client`: HTTP client issuing interpreter requests

pub mod client;
pub mod query;
pub mod types;

pub use client::OverpassClient;
pub use query::build_pharmacy_query;
pub use types::{OverpassElement, OverpassResponse};
