use async_trait::async_trait;
use tracing::{info, instrument};

use super::{DEFAULT_RESULT_LIMIT, PharmacySource, rank_pharmacies};
use crate::Result;
use crate::config::PharmacyLocatorConfig;
use crate::models::{Location, PharmacyRecord};
use crate::overpass::{OverpassClient, build_pharmacy_query};

/// Pharmacy search backed by the Overpass API
#[derive(Debug, Clone)]
pub struct PharmacyLocator {
    client: OverpassClient,
    max_results: usize,
}

impl PharmacyLocator {
    #[must_use]
    pub fn new(client: OverpassClient) -> Self {
        Self {
            client,
            max_results: DEFAULT_RESULT_LIMIT,
        }
    }

    /// Build a locator from the Overpass and search sections of the config
    pub fn from_config(config: &PharmacyLocatorConfig) -> Result<Self> {
        let client = OverpassClient::new(&config.overpass)?;
        Ok(Self::new(client).with_max_results(config.search.max_results))
    }

    #[must_use]
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    #[must_use]
    pub fn max_results(&self) -> usize {
        self.max_results
    }
}

#[async_trait]
impl PharmacySource for PharmacyLocator {
    #[instrument(skip(self), fields(lat = origin.latitude, lon = origin.longitude))]
    async fn search(&self, origin: Location, radius_m: i64) -> Result<Vec<PharmacyRecord>> {
        let query = build_pharmacy_query(&origin, radius_m, self.client.timeout_seconds());
        let response = self.client.query(&query).await?;

        let pharmacies = rank_pharmacies(&origin, &response.elements, self.max_results);
        info!(
            "Found {} pharmacies within {}m of ({})",
            pharmacies.len(),
            radius_m,
            origin.format_coordinates()
        );
        Ok(pharmacies)
    }
}
