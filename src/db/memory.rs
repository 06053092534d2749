use std::sync::Mutex;

use async_trait::async_trait;

use crate::db::store::CityStore;
use crate::entities::city::{self, CityWithDistance, NewCity};
use crate::error::{AppError, AppResult};
use crate::utils::geo::{geodesic_distance, is_within_radius, GeoPoint};

/// In-process city storage.
///
/// Distances come from [`geodesic_distance`] on the WGS-84 ellipsoid, the
/// same model PostGIS uses for `geography`, so query results match the
/// database to well under a metre. Cities with equal distance keep their
/// insertion order.
#[derive(Debug, Default)]
pub struct MemoryCityStore {
    rows: Mutex<Vec<city::Model>>,
}

impl MemoryCityStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> AppResult<std::sync::MutexGuard<'_, Vec<city::Model>>> {
        self.rows
            .lock()
            .map_err(|_| AppError::Internal("City store lock poisoned".to_string()))
    }
}

#[async_trait]
impl CityStore for MemoryCityStore {
    async fn count(&self) -> AppResult<u64> {
        Ok(self.lock()?.len() as u64)
    }

    async fn insert_many(&self, cities: Vec<NewCity>) -> AppResult<u64> {
        let mut rows = self.lock()?;
        let first_id = i32::try_from(rows.len())
            .map_err(|_| AppError::Internal("City id space exhausted".to_string()))?
            + 1;

        let inserted = cities.len() as u64;
        rows.extend(cities.into_iter().zip(first_id..).map(|(city, id)| city::Model {
            id,
            name: city.name,
            location: city.location,
        }));

        Ok(inserted)
    }

    async fn find_within(
        &self,
        reference: GeoPoint,
        radius_metres: f64,
    ) -> AppResult<Vec<CityWithDistance>> {
        let rows = self.lock()?;

        let mut results: Vec<CityWithDistance> = rows
            .iter()
            .filter(|c| is_within_radius(c.location, reference, radius_metres))
            .map(|c| CityWithDistance {
                city: c.clone(),
                distance_metres: geodesic_distance(c.location, reference),
            })
            .collect();

        // Stable, so ties stay in insertion order
        results.sort_by(|a, b| a.distance_metres.total_cmp(&b.distance_metres));

        Ok(results)
    }
}
