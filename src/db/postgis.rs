use async_trait::async_trait;
use sea_orm::sea_query::{Alias, Expr, Func, SimpleExpr};
use sea_orm::{
    DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};

use crate::db::store::CityStore;
use crate::entities::city::{self, CityDistanceRow, CityWithDistance, NewCity};
use crate::error::AppResult;
use crate::utils::geo::GeoPoint;

pub const DISTANCE_ALIAS: &str = "distance_metres";

/// City storage backed by PostgreSQL with the PostGIS extension.
pub struct PostgisCityStore {
    db: DatabaseConnection,
}

impl PostgisCityStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn into_inner(self) -> DatabaseConnection {
        self.db
    }
}

/// `ST_SetSRID(ST_MakePoint(lon, lat), 4326)::geography`
fn reference_geography(reference: GeoPoint) -> SimpleExpr {
    Expr::cust_with_values(
        "ST_SetSRID(ST_MakePoint($1, $2), 4326)::geography",
        [reference.longitude, reference.latitude],
    )
}

fn location_column() -> Expr {
    Expr::col((city::Entity, city::Column::Location))
}

/// Spheroidal distance in metres between the stored location and `reference`.
fn distance_to(reference: GeoPoint) -> SimpleExpr {
    Func::cust(Alias::new("ST_Distance"))
        .arg(location_column())
        .arg(reference_geography(reference))
        .into()
}

/// Inclusive radius filter; served by the GIST index on `location`.
fn within(reference: GeoPoint, radius_metres: f64) -> SimpleExpr {
    Func::cust(Alias::new("ST_DWithin"))
        .arg(location_column())
        .arg(reference_geography(reference))
        .arg(Expr::val(radius_metres))
        .into()
}

/// All cities within `radius_metres` of `reference`, nearest first, with
/// the distance projected as `distance_metres`.
pub fn nearby_query(reference: GeoPoint, radius_metres: f64) -> Select<city::Entity> {
    city::Entity::find()
        .column_as(distance_to(reference), DISTANCE_ALIAS)
        .filter(within(reference, radius_metres))
        .order_by_asc(distance_to(reference))
}

#[async_trait]
impl CityStore for PostgisCityStore {
    async fn count(&self) -> AppResult<u64> {
        Ok(city::Entity::find().count(&self.db).await?)
    }

    async fn insert_many(&self, cities: Vec<NewCity>) -> AppResult<u64> {
        if cities.is_empty() {
            return Ok(0);
        }

        // A single multi-row INSERT, so either every row lands or none do
        let models = cities.into_iter().map(city::ActiveModel::from);
        let inserted = city::Entity::insert_many(models)
            .exec_without_returning(&self.db)
            .await?;

        Ok(inserted)
    }

    async fn find_within(
        &self,
        reference: GeoPoint,
        radius_metres: f64,
    ) -> AppResult<Vec<CityWithDistance>> {
        tracing::debug!(
            longitude = reference.longitude,
            latitude = reference.latitude,
            radius_metres,
            "Querying cities within radius"
        );

        let rows = nearby_query(reference, radius_metres)
            .into_model::<CityDistanceRow>()
            .all(&self.db)
            .await?;

        Ok(rows.into_iter().map(CityWithDistance::from).collect())
    }
}
