use crate::db::CityStore;
use crate::entities::city::NewCity;
use crate::error::AppResult;

/// Name, longitude, latitude
pub const SEED_CITIES: [(&str, f64, f64); 6] = [
    ("Bristol", -2.5879, 51.4545),
    ("Bath", -2.3590, 51.3758),
    ("Exeter", -3.5339, 50.7184),
    ("Cardiff", -3.1746, 51.4816),
    ("Edinburgh", -3.1883, 55.9533),
    ("Leeds", -1.5491, 53.8008),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The table was empty and this many rows were written
    Inserted(u64),
    /// The table already held this many rows; nothing was written
    AlreadySeeded(u64),
}

pub fn seed_cities() -> Vec<NewCity> {
    SEED_CITIES
        .iter()
        .map(|&(name, longitude, latitude)| NewCity::new(name, longitude, latitude))
        .collect()
}

/// Seed the city table if it is empty
pub async fn seed<S: CityStore + ?Sized>(store: &S) -> AppResult<SeedOutcome> {
    let existing = store.count().await?;
    if existing > 0 {
        tracing::info!("City table already holds {} rows, skipping seed", existing);
        return Ok(SeedOutcome::AlreadySeeded(existing));
    }

    let inserted = store.insert_many(seed_cities()).await?;
    tracing::info!("Seeded {} cities", inserted);

    Ok(SeedOutcome::Inserted(inserted))
}
