use std::{future::Future, net::SocketAddr, sync::Arc};

use axum::Router;
use configs::{AppConfig, StorageBackend};
use migration::MigratorTrait;
use service::guests::{
    file::FileGuestRepository, seaorm::SeaOrmGuestRepository, GuestRepository, GuestService,
};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes::{self, ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", cfg.server.host, cfg.server.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("server address: {e}")))
}

/// Open the configured backend and wrap it in the guest service.
pub async fn build_state(cfg: &AppConfig) -> Result<ServerState, StartupError> {
    let repo: Arc<dyn GuestRepository> = match cfg.storage.backend {
        StorageBackend::File => {
            let repo = FileGuestRepository::new(&cfg.storage.data_file)
                .await
                .map_err(|e| StartupError::Storage(e.to_string()))?;
            info!(backend = "file", path = %cfg.storage.data_file, "guest storage ready");
            repo
        }
        StorageBackend::Postgres => {
            let db = models::db::connect_with_config(&cfg.database).await?;
            migration::Migrator::up(&db, None)
                .await
                .map_err(|e| StartupError::Storage(format!("migrations failed: {e}")))?;
            info!(backend = "postgres", "guest storage ready");
            Arc::new(SeaOrmGuestRepository::new(db))
        }
    };
    Ok(ServerState::new(GuestService::new(repo)))
}

pub fn build_app(state: ServerState) -> Router {
    routes::build_router(state, build_cors())
}

/// Public entry: load config, build the app and serve until `shutdown` resolves.
pub async fn run_until<F>(shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let cfg = AppConfig::load_or_env()?;
    let state = build_state(&cfg).await?;
    let app = build_app(state);

    let addr = bind_addr(&cfg)?;
    info!(%addr, backend = ?cfg.storage.backend, "starting guest registry server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    Ok(())
}

/// Serve until the process is killed.
pub async fn run() -> anyhow::Result<()> {
    run_until(std::future::pending()).await
}
