use std::{future::Future, net::SocketAddr, sync::Arc};

use axum::Router;
use configs::{AppConfig, DatabaseConfig, ServerConfig, StorageBackend};
use migration::MigratorTrait;
use service::marketing_status::{
    repo::{MemoryMarketingStatusRepository, SeaOrmMarketingStatusRepository},
    MarketingStatusRepository,
};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes;
use crate::state::AppState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(server: &ServerConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", server.host, server.port).parse()?)
}

/// Open the configured store. Postgres is migrated before use.
pub async fn build_repository(cfg: &DatabaseConfig) -> anyhow::Result<Arc<dyn MarketingStatusRepository>> {
    match cfg.backend {
        StorageBackend::Memory => {
            info!(backend = "memory", "marketing status storage ready");
            Ok(Arc::new(MemoryMarketingStatusRepository::new()))
        }
        StorageBackend::Postgres => {
            let db = models::db::connect_with_config(cfg).await?;
            migration::Migrator::up(&db, None).await?;
            info!(backend = "postgres", "marketing status storage ready");
            Ok(Arc::new(SeaOrmMarketingStatusRepository::new(db)))
        }
    }
}

/// Router over the given repository, with CORS and tracing layers applied.
pub fn app(repo: Arc<dyn MarketingStatusRepository>) -> Router {
    routes::build_router(AppState::new(repo), build_cors())
}

/// Serve until `shutdown` resolves.
pub async fn run<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let repo = build_repository(&cfg.database).await?;
    let app = app(repo);

    let addr = bind_addr(&cfg.server)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "marketing status server listening");
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    Ok(())
}
