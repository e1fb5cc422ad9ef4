use std::sync::Arc;

use axum::{
    Router,
    extract::{Query, State},
    response::Json,
    routing::get,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::models::{Location, PharmacyRecord};
use crate::pharmacy::{DEFAULT_RADIUS_M, PharmacySource};

/// Shared state handed to every request
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn PharmacySource>,
    pub default_radius_m: i64,
}

impl AppState {
    pub fn new(source: Arc<dyn PharmacySource>) -> Self {
        Self {
            source,
            default_radius_m: DEFAULT_RADIUS_M,
        }
    }

    pub fn with_default_radius(mut self, radius_m: i64) -> Self {
        self.default_radius_m = radius_m;
        self
    }
}

#[derive(Debug, Deserialize)]
pub struct NearbyQuery {
    pub lat: f64,
    pub lon: f64,
    /// Search radius in meters
    pub radius: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NearbyResponse {
    pub pharmacies: Vec<PharmacyRecord>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/pharmacy/nearby", get(nearby_pharmacies))
        .with_state(state)
}

#[instrument(skip(state))]
async fn nearby_pharmacies(
    State(state): State<AppState>,
    Query(params): Query<NearbyQuery>,
) -> Json<NearbyResponse> {
    let origin = Location::new(params.lat, params.lon);
    let radius_m = params.radius.unwrap_or(state.default_radius_m);

    let pharmacies = state.source.nearby_pharmacies(origin, radius_m).await;
    Json(NearbyResponse { pharmacies })
}
