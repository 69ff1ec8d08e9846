use crate::config::Config;
use crate::handler::middleware::request_log::request_log;
use crate::store::EpisodeStore;
use crate::synthesis::{PlayHtClient, SynthesisClient};
use anyhow::Result;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::select;
use tokio_util::sync::CancellationToken;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tracing::info;

pub struct AppStateInner {
    pub config: Arc<Config>,
    pub store: EpisodeStore,
    pub synthesis: Box<dyn SynthesisClient>,
    pub token: CancellationToken,
}

pub type AppState = Arc<AppStateInner>;

pub struct AppStateBuilder {
    pub config: Option<Config>,
    pub synthesis: Option<Box<dyn SynthesisClient>>,
}

impl AppStateBuilder {
    pub fn new() -> Self {
        Self {
            config: None,
            synthesis: None,
        }
    }

    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Replace the outbound synthesis client, mainly for tests.
    pub fn synthesis(mut self, client: Box<dyn SynthesisClient>) -> Self {
        self.synthesis = Some(client);
        self
    }

    pub fn build(self) -> Result<AppState> {
        let config = Arc::new(self.config.unwrap_or_default());
        let synthesis = match self.synthesis {
            Some(client) => client,
            None => Box::new(PlayHtClient::new(config.synthesis.clone())),
        };

        Ok(Arc::new(AppStateInner {
            config,
            store: EpisodeStore::new(),
            synthesis,
            token: CancellationToken::new(),
        }))
    }
}

impl Default for AppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub async fn run(state: AppState) -> Result<()> {
    let token = state.token.clone();
    let app = create_router(state.clone());
    let addr: SocketAddr = state.config.http_addr.parse()?;
    let listener = match TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!("Failed to bind to {}: {}", addr, e);
            return Err(anyhow::anyhow!("Failed to bind to {}: {}", addr, e));
        }
    };

    let http_task = axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    );

    select! {
        http_result = http_task => {
            match http_result {
                Ok(_) => info!("Server shut down gracefully"),
                Err(e) => {
                    tracing::error!("Server error: {}", e);
                    return Err(anyhow::anyhow!("Server error: {}", e));
                }
            }
        }
        _ = token.cancelled() => {
            info!("Application shutting down due to cancellation");
        }
    }
    Ok(())
}

pub fn create_router(state: AppState) -> Router {
    // All origins, methods and headers, with credentials. tower-http rejects
    // wildcards combined with credentials, so mirror the request instead.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    crate::handler::router()
        .with_state(state)
        .layer(axum::middleware::from_fn(request_log))
        .layer(cors)
}
