pub mod memory;
pub mod postgis;
pub mod store;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::config::Config;
use crate::error::AppResult;

pub use memory::MemoryCityStore;
pub use postgis::PostgisCityStore;
pub use store::CityStore;

pub async fn connect(config: &Config) -> AppResult<DatabaseConnection> {
    let mut options = ConnectOptions::new(config.database_url.clone());
    options
        .max_connections(config.max_connections)
        .sqlx_logging(config.sql_logging);

    Ok(Database::connect(options).await?)
}
