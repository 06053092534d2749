use std::io;
use std::process::ExitCode;

use sea_orm_migration::MigratorTrait;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use city_radius::{
    config::Config,
    db::{self, PostgisCityStore},
    handlers::{
        nearby::{find_nearby, REFERENCE_POINT, SEARCH_RADIUS_METRES},
        report::write_report,
        seed::seed,
    },
    AppResult,
};

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr; stdout carries only the report
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "city_radius=info,sea_orm=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> AppResult<()> {
    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Connecting to {}", config.redacted_url());

    // Connect to database
    let db = db::connect(&config).await?;
    tracing::info!("Connected to database");

    // Run migrations
    migration::Migrator::up(&db, None).await?;
    tracing::info!("Migrations complete");

    let store = PostgisCityStore::new(db);

    seed(&store).await?;

    let results = find_nearby(&store, REFERENCE_POINT, SEARCH_RADIUS_METRES).await?;

    let stdout = io::stdout();
    write_report(&mut stdout.lock(), &results)?;

    Ok(())
}
