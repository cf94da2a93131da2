//! Axum server exposing the permutation engine over HTTP.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use rubiks_topology::engine;
use rubiks_topology::wire::TransformRequest;
use rubiks_topology::{FaceletState, Move};
use serde::Serialize;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use crate::config::ServiceConfig;
use crate::error::Result;

/// Shared application state.
#[derive(Default)]
pub struct AppState {
    transforms: AtomicU64,
}

/// Transformation server.
pub struct TransformServer {
    state: Arc<AppState>,
    config: ServiceConfig,
}

impl TransformServer {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            state: Arc::new(AppState::default()),
            config,
        }
    }

    /// Build the router for the server.
    pub fn router(&self) -> Router {
        let router = Router::new()
            .route("/cube", post(transform_handler))
            .route("/api/status", get(status_handler))
            .layer(CorsLayer::permissive())
            .with_state(self.state.clone());

        match &self.config.static_dir {
            Some(dir) => router.fallback_service(ServeDir::new(dir)),
            None => router,
        }
    }

    /// Bind `0.0.0.0` on the configured port and serve until the process exits.
    pub async fn serve(self) -> Result<()> {
        let addr = std::net::SocketAddr::from(([0, 0, 0, 0], self.config.port));
        let listener = TcpListener::bind(addr).await?;
        self.serve_on(listener).await
    }

    /// Serve on an already bound listener.
    pub async fn serve_on(self, listener: TcpListener) -> Result<()> {
        let addr = listener.local_addr()?;
        tracing::info!("Transformation service running on http://{}", addr);
        if let Some(dir) = &self.config.static_dir {
            tracing::info!(dir = %dir.display(), "serving static frontend");
        }
        axum::serve(listener, self.router()).await?;
        Ok(())
    }
}

/// Browsers post the layout as a plain string body, so the request is decoded
/// whatever its content type.
async fn transform_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> std::result::Result<Json<FaceletState>, StatusCode> {
    let req: TransformRequest = serde_json::from_slice(&body).map_err(|err| {
        tracing::warn!(error = %err, "rejecting malformed transform request");
        StatusCode::BAD_REQUEST
    })?;
    let applied = engine::apply_sequence(&req.cube_layout, &req.transformation);
    if !applied.ignored.is_empty() {
        tracing::warn!(ignored = ?applied.ignored, "skipping unknown move symbols");
    }
    let served = state.transforms.fetch_add(1, Ordering::Relaxed) + 1;
    tracing::debug!(transformation = %req.transformation, served, "applied transformation");
    Ok(Json(applied.state))
}

/// Server status response.
#[derive(Debug, Serialize)]
struct StatusResponse {
    status: &'static str,
    moves: Vec<String>,
    transforms_served: u64,
}

async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok",
        moves: Move::FACE_TURNS.iter().map(|m| m.to_string()).collect(),
        transforms_served: state.transforms.load(Ordering::Relaxed),
    })
}
