use clap::Parser;
use std::fs::File;

use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};
use ubs_axum::{router, start_server};
use ubs_sqlite::Db;
use ubsdemo::{AppConfig, Cli, impls::DemoApp};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // By convention, we leverage `tracing` to instrument and log various
    // operations throughout this project.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::try_parse()?;
    let AppConfig { server, database } = AppConfig::load(&cli)?;

    let db = Db::open(&database).await?;
    let app = DemoApp { db };

    // If requested, dump the schema and exit.
    if let Some(path) = cli.schema {
        let (_, schema) = router(app);
        serde_json::to_writer_pretty(File::create(path)?, &schema)?;
        return Ok(());
    }

    tokio::select! {
        result = start_server(server, app) => result?,
        _ = tokio::signal::ctrl_c() => tracing::info!("shutting down"),
    }

    Ok(())
}
