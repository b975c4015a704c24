pub mod api;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod index;
pub mod metrics_defs;
pub mod response;
pub mod state;

#[cfg(test)]
mod testutils;

use config::Config;
use connectors::Connectors;
use errors::ServerError;
use shared::admin_service::AdminService;
use shared::http::run_http_service;
use state::AppState;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::net::TcpListener;

pub async fn run(config: Config) -> Result<(), ServerError> {
    let connectors = Connectors::new(&config.connectors)?;
    let app = api::router(Arc::new(AppState::new(connectors, &config)));

    let ready = Arc::new(AtomicBool::new(false));
    let admin = AdminService::new({
        let ready = ready.clone();
        move || ready.load(Ordering::Relaxed)
    });

    let admin_task = async {
        let admin_listener = &config.admin_listener;
        tracing::info!(
            host = %admin_listener.host,
            port = admin_listener.port,
            "Starting admin listener"
        );
        run_http_service(&admin_listener.host, admin_listener.port, admin)
            .await
            .map_err(ServerError::from)
    };

    let badge_task = async {
        let addr = format!("{}:{}", config.listener.host, config.listener.port);
        let listener = TcpListener::bind(&addr).await?;
        tracing::info!(%addr, "Serving badges");
        ready.store(true, Ordering::Relaxed);

        axum::serve(listener, app).await?;
        Ok::<_, ServerError>(())
    };

    tokio::try_join!(badge_task, admin_task)?;
    Ok(())
}
