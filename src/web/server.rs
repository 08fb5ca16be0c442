use anyhow::Result;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::web::handlers::api::ApiState;
use crate::web::routes::create_routes;

pub struct WebServer {
    addr: SocketAddr,
    state: ApiState,
}

impl WebServer {
    pub fn new(addr: SocketAddr, state: ApiState) -> Self {
        Self { addr, state }
    }

    pub async fn run(&self) -> Result<()> {
        // Create CORS layer
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        let app = create_routes(self.state.clone())
            .layer(TraceLayer::new_for_http())
            .layer(cors);

        info!("Starting web server on {}", self.addr);
        let listener = TcpListener::bind(self.addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}
