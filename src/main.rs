//! Minimal web chat server
//!
//! (c) Softlandia 2025

use web_chat::config::Config;
use web_chat::infrastructure::database::DatabaseConnection;

use anyhow::{Context, anyhow};
use log::info;
use tokio::runtime::{Builder, Runtime};

const PORT: u16 = 8080;

fn main() -> anyhow::Result<()> {
    // initialize tracing
    tracing_subscriber::fmt::init();

    dotenvy::dotenv().ok();
    let config = Config::from_env().context("invalid configuration")?;

    let runtime: Runtime = Builder::new_multi_thread().enable_all().build()?;
    runtime.block_on(web_server_task(config))
}

async fn web_server_task(config: Config) -> anyhow::Result<()> {
    let connection = DatabaseConnection::from_config(&config);
    sqlx::migrate!()
        .run(&*connection)
        .await
        .context("cannot reach database")?;
    info!("database ready");

    let provider = web_chat::service_provider(connection).map_err(|e| anyhow!("{e}"))?;

    let app = web_chat::app(provider, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", PORT)).await?;
    info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    info!("Shutting down...");

    Ok(())
}
