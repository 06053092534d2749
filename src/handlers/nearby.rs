use crate::db::CityStore;
use crate::entities::city::CityWithDistance;
use crate::error::{AppError, AppResult};
use crate::utils::geo::GeoPoint;

/// Central London
pub const REFERENCE_POINT: GeoPoint = GeoPoint::new(-0.1276, 51.5074);
pub const SEARCH_RADIUS_METRES: f64 = 600_000.0;

/// Find every stored city within `radius_metres` (inclusive) of `reference`,
/// nearest first.
pub async fn find_nearby<S: CityStore + ?Sized>(
    store: &S,
    reference: GeoPoint,
    radius_metres: f64,
) -> AppResult<Vec<CityWithDistance>> {
    reference.validate().map_err(AppError::InvalidInput)?;

    if !radius_metres.is_finite() || radius_metres < 0.0 {
        return Err(AppError::InvalidInput(format!(
            "radius must be a non-negative number of metres, got {}",
            radius_metres
        )));
    }

    let results = store.find_within(reference, radius_metres).await?;
    tracing::info!(
        "Found {} cities within {} m of ({}, {})",
        results.len(),
        radius_metres,
        reference.longitude,
        reference.latitude
    );

    Ok(results)
}
