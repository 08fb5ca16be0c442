use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

use crate::core::config::SearchConfig;
use crate::core::directory::MunicipalityDirectory;
use crate::utils::network::browser_url;
use crate::web::handlers::api::ApiState;
use crate::web::server::WebServer;

pub struct App {
    addr: SocketAddr,
    directory: Arc<MunicipalityDirectory>,
    search: SearchConfig,
    open_browser: bool,
}

impl App {
    pub fn new(
        addr: SocketAddr,
        directory: Arc<MunicipalityDirectory>,
        search: SearchConfig,
        open_browser: bool,
    ) -> Self {
        Self {
            addr,
            directory,
            search,
            open_browser,
        }
    }

    /// Loads the directory on a blocking thread. Startup stops here when the
    /// dataset is unusable.
    pub async fn warm_directory(&self) -> Result<usize> {
        let directory = Arc::clone(&self.directory);
        let count = tokio::task::spawn_blocking(move || directory.get_directory().map(|r| r.len()))
            .await
            .context("directory load task panicked")??;
        Ok(count)
    }

    pub async fn run(&self) -> Result<()> {
        info!("Municipality source: {}", self.directory.source_description());
        let count = self.warm_directory().await?;
        info!("{} municipalities available for autocomplete", count);

        let url = browser_url(self.addr);
        info!("Location picker available at: {}", url);

        // Open browser if requested
        if self.open_browser {
            if let Err(e) = open::that(&url) {
                error!("Failed to open browser: {}", e);
            }
        }

        let state = ApiState::new(Arc::clone(&self.directory), self.search.clone());
        let server = WebServer::new(self.addr, state);

        // Setup graceful shutdown
        let shutdown_signal = async {
            if let Err(e) = signal::ctrl_c().await {
                error!("Failed to listen for Ctrl+C: {}", e);
                std::future::pending::<()>().await;
            }
            info!("Received Ctrl+C, shutting down gracefully...");
        };

        tokio::select! {
            result = server.run() => {
                if let Err(e) = result {
                    error!("Server error: {}", e);
                    return Err(e);
                }
            }
            _ = shutdown_signal => {
                info!("Shutdown signal received");
            }
        }

        info!("Shutdown complete");
        Ok(())
    }
}
