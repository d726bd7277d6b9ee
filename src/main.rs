use anyhow::Context;

use docuhub::config::AppConfig;
use docuhub::core::upload::UploadService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let _log_guard = docuhub::core::logging::init();
    log::info!("{} v{} starting", docuhub::NAME, docuhub::VERSION);

    let config = AppConfig::load();
    let mut service = UploadService::new(config.port(), config.uploads_dir());
    service.start().await.context("failed to start upload service")?;
    log::info!("Backend running on {}", service.url());

    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for shutdown signal")?;
    service.stop().await;

    Ok(())
}
