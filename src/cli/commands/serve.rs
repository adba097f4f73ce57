//! Serve command - HTTP server mode.

use crate::config::Settings;

/// Run the serve command.
#[cfg(feature = "http-server")]
pub async fn run(settings: Settings) -> anyhow::Result<()> {
    tracing::info!(
        "[serve] starting on {} (provider timeout: {}s)",
        settings.server.address(),
        settings.providers.timeout_secs
    );
    crate::http::serve(settings).await
}

#[cfg(not(feature = "http-server"))]
pub async fn run(_settings: Settings) -> anyhow::Result<()> {
    anyhow::bail!(
        "HTTP server support is not compiled in. Rebuild with: cargo build --features http-server"
    )
}
