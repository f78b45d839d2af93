use std::{env, sync::Arc};

use anyhow::Context;
use clap::Parser;
use items_api::store::{ItemStore, MemoryStore, PgStore};
use items_api::{app, db};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug, Clone)]
#[command(name = "items-api")]
#[command(about = "Item CRUD API server")]
struct Args {
    /// Serve from an in-memory store instead of Postgres (nothing persists)
    #[arg(long)]
    in_memory: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load .env file if present
    dotenvy::dotenv().ok();

    let store: Arc<dyn ItemStore> = if args.in_memory {
        tracing::warn!("IN-MEMORY STORE ENABLED");
        Arc::new(MemoryStore::new())
    } else {
        let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
        let pool = db::create_pool(&database_url);

        // A dead database is logged, not fatal; requests report storage
        // faults until it comes back.
        match db::ping(&pool) {
            Ok(()) => tracing::info!("Database connected"),
            Err(e) => tracing::error!("Database connection failed: {e:#}"),
        }

        match db::run_migrations(&pool) {
            Ok(applied) if applied.is_empty() => tracing::info!("Database is up to date"),
            Ok(applied) => {
                for m in &applied {
                    tracing::info!("Applied migration: {}", m);
                }
            }
            Err(e) => tracing::error!("Failed to run migrations: {e:#}"),
        }

        Arc::new(PgStore::new(pool))
    };

    let app = app(store);

    // Bind and serve
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("{}:{}", host, port);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down..."),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down..."),
    }
}
