use std::sync::Arc;

use anyhow::Context;
use dotenvy::dotenv;
use sqlx::sqlite::SqlitePoolOptions;
use tokio::net::TcpListener;
use tracing::info;

use ipam_platform::config::AppConfig;
use ipam_platform::routes::{create_router, AppState};
use ipam_platform::store::AllocationStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "ipam_platform=info,tower_http=warn".to_string()),
        )
        .with_target(false)
        .init();

    let config = AppConfig::from_env();

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await
        .with_context(|| format!("failed to open database {}", config.database_url))?;

    let store = AllocationStore::new(pool);
    store
        .init()
        .await
        .context("failed to create the allocation table")?;

    let app = create_router(Arc::new(AppState { store }));

    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    info!("allocation service listening on {}", config.bind_addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
