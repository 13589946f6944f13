use std::net::SocketAddr;
use std::sync::Arc;

use redpen_api::config::{DatabaseConfig, ServerConfig};
use redpen_api::router::build_app_router;
use redpen_api::state::AppState;
use redpen_db::{DbPool, PgArticleStore, PgUserStore};
use tokio::signal;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "redpen_api=debug,redpen_core=debug,redpen_db=info,tower_http=debug";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ServerConfig::from_env();
    let pool = open_database(&DatabaseConfig::from_env()).await;

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .unwrap_or_else(|e| panic!("Invalid HOST/PORT '{}:{}': {e}", config.host, config.port));

    let state = AppState::new(
        config,
        Arc::new(PgArticleStore::new(pool.clone())),
        Arc::new(PgUserStore::new(pool.clone())),
    );
    let app = build_app_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| panic!("Failed to bind {addr}: {e}"));
    tracing::info!(%addr, "Redpen API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    pool.close().await;
    tracing::info!("Database pool closed, shutdown complete");
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Connect, verify, and migrate. Any failure aborts start-up.
async fn open_database(db: &DatabaseConfig) -> DbPool {
    let pool = redpen_db::create_pool(&db.url, db.max_connections)
        .await
        .expect("Failed to connect to database");
    redpen_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    redpen_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!(max_connections = db.max_connections, "Database ready");
    pool
}

/// Resolves on SIGINT or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let interrupt = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = interrupt => tracing::info!("SIGINT received, shutting down"),
        () = terminate => tracing::info!("SIGTERM received, shutting down"),
    }
}
