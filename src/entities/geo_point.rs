//! sea-orm value plumbing for [`GeoPoint`].
//!
//! The `city.location` column is selected as `CAST(location AS bytea)` and
//! saved through `CAST($n AS geography)`, so on the Rust side a point is
//! always an EWKB byte string, read and written with `postgis::ewkb`.

use postgis::ewkb::{self, AsEwkbPoint, EwkbRead, EwkbWrite};
use sea_orm::sea_query::{ArrayType, ColumnType, Nullable, ValueType, ValueTypeErr};
use sea_orm::{ColIdx, DbErr, QueryResult, TryGetError, TryGetable, Value};

use crate::utils::geo::GeoPoint;

pub const WGS84_SRID: i32 = 4326;

/// Little-endian EWKB with SRID 4326, the form PostGIS itself emits.
pub fn point_to_ewkb(point: &GeoPoint) -> Vec<u8> {
    let point = ewkb::Point::new(point.longitude, point.latitude, Some(WGS84_SRID));
    let mut bytes = Vec::with_capacity(25);
    // Writing into a Vec cannot fail
    let _ = point.as_ewkb().write_ewkb(&mut bytes);
    bytes
}

pub fn point_from_ewkb(bytes: &[u8]) -> Result<GeoPoint, DbErr> {
    let point = ewkb::Point::read_ewkb(&mut &bytes[..])
        .map_err(|e| DbErr::Type(format!("Invalid EWKB point: {}", e)))?;

    if point.srid != Some(WGS84_SRID) {
        return Err(DbErr::Type(format!(
            "Expected SRID {}, got {:?}",
            WGS84_SRID, point.srid
        )));
    }
    if point.x.is_nan() || point.y.is_nan() {
        return Err(DbErr::Type("Empty point".to_string()));
    }

    Ok(GeoPoint::new(point.x, point.y))
}

impl From<GeoPoint> for Value {
    fn from(point: GeoPoint) -> Self {
        Value::Bytes(Some(Box::new(point_to_ewkb(&point))))
    }
}

impl TryGetable for GeoPoint {
    fn try_get_by<I: ColIdx>(res: &QueryResult, index: I) -> Result<Self, TryGetError> {
        let bytes = <Vec<u8> as TryGetable>::try_get_by(res, index)?;
        point_from_ewkb(&bytes).map_err(TryGetError::DbErr)
    }
}

impl ValueType for GeoPoint {
    fn try_from(v: Value) -> Result<Self, ValueTypeErr> {
        match v {
            Value::Bytes(Some(bytes)) => point_from_ewkb(&bytes).map_err(|_| ValueTypeErr),
            _ => Err(ValueTypeErr),
        }
    }

    fn type_name() -> String {
        "GeoPoint".to_owned()
    }

    fn array_type() -> ArrayType {
        ArrayType::Bytes
    }

    fn column_type() -> ColumnType {
        ColumnType::custom("geography")
    }
}

impl Nullable for GeoPoint {
    fn null() -> Value {
        Value::Bytes(None)
    }
}
