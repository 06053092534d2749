pub use sea_orm_migration::prelude::*;

mod m20240601_000001_enable_postgis;
mod m20240601_000002_create_cities;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240601_000001_enable_postgis::Migration),
            Box::new(m20240601_000002_create_cities::Migration),
        ]
    }
}
