//! Listening socket and graceful shutdown.

use std::sync::Arc;

use crate::config::Settings;
use crate::pipeline::ExampleService;

/// Serve lookups until Ctrl+C.
pub async fn serve(settings: Settings) -> anyhow::Result<()> {
    let service = Arc::new(ExampleService::from_settings(&settings));
    let languages = service.registry().languages();
    if languages.is_empty() {
        tracing::warn!("[http] no languages enabled, every lookup will answer 404");
    }

    let router = super::router(service, &settings.server);
    let address = settings.server.address();

    let listener = tokio::net::TcpListener::bind(&address).await?;
    crate::log_event!("http", "listening", "http://{address}");
    crate::log_event!("http", "languages", "{}", languages.join(", "));
    eprintln!("Listening for HTTP requests on {address}");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    crate::log_event!("http", "stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("[http] failed to listen for ctrl+c: {e}");
        std::future::pending::<()>().await;
    }
    eprintln!("Shutting down HTTP server...");
}
