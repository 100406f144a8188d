//! # Invoicing API Main Entry Point

use migration::{Migrator, MigratorTrait};

use invoicing::{
    config::ConfigLoader, db::init_pool, seeds::seed_reference_data, server::run_server,
    telemetry::init_tracing,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ConfigLoader::new().load()?;

    init_tracing(&config)?;

    tracing::info!(profile = %config.profile, "Loaded configuration");
    if let Ok(redacted_json) = config.redacted_json() {
        tracing::debug!("Configuration: {}", redacted_json);
    }

    let db = init_pool(&config).await?;
    Migrator::up(&db, None).await?;

    if config.profile == "local" {
        seed_reference_data(&db).await?;
    }

    run_server(config, db).await
}
