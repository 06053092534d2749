use sea_orm::entity::prelude::*;
use sea_orm::{FromQueryResult, Set};

use crate::utils::geo::GeoPoint;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "city")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// `geography(Point, 4326)`, exchanged with PostGIS as EWKB bytes
    #[sea_orm(
        column_type = "custom(\"geography\")",
        select_as = "bytea",
        save_as = "geography"
    )]
    pub location: GeoPoint,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// A city that has not been stored yet
#[derive(Clone, Debug, PartialEq)]
pub struct NewCity {
    pub name: String,
    pub location: GeoPoint,
}

impl NewCity {
    pub fn new(name: impl Into<String>, longitude: f64, latitude: f64) -> Self {
        Self {
            name: name.into(),
            location: GeoPoint::new(longitude, latitude),
        }
    }
}

impl From<NewCity> for ActiveModel {
    fn from(city: NewCity) -> Self {
        ActiveModel {
            name: Set(city.name),
            location: Set(city.location),
            ..Default::default()
        }
    }
}

/// A stored city annotated with its distance to a query point.
#[derive(Clone, Debug, PartialEq)]
pub struct CityWithDistance {
    pub city: Model,
    pub distance_metres: f64,
}

/// Raw row of the proximity query: the city columns plus the computed
/// `distance_metres` projection.
#[derive(Debug, FromQueryResult)]
pub struct CityDistanceRow {
    pub id: i32,
    pub name: String,
    pub location: GeoPoint,
    pub distance_metres: f64,
}

impl From<CityDistanceRow> for CityWithDistance {
    fn from(row: CityDistanceRow) -> Self {
        Self {
            city: Model {
                id: row.id,
                name: row.name,
                location: row.location,
            },
            distance_metres: row.distance_metres,
        }
    }
}
