//! Storage port for cities.
//!
//! Everything the seeder and the proximity query need from a backend goes
//! through this trait; distance math belongs to the implementation.

use async_trait::async_trait;

use crate::entities::city::{CityWithDistance, NewCity};
use crate::error::AppResult;
use crate::utils::geo::GeoPoint;

#[async_trait]
pub trait CityStore: Send + Sync {
    /// Number of stored cities.
    async fn count(&self) -> AppResult<u64>;

    /// Insert all cities in one atomic batch. Returns the number of rows
    /// written.
    async fn insert_many(&self, cities: Vec<NewCity>) -> AppResult<u64>;

    /// Cities whose geodesic distance to `reference` is at most
    /// `radius_metres`, nearest first.
    async fn find_within(
        &self,
        reference: GeoPoint,
        radius_metres: f64,
    ) -> AppResult<Vec<CityWithDistance>>;
}
