use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, error};

use crate::core::config::SearchConfig;
use crate::core::directory::MunicipalityDirectory;
use crate::core::error::{AppError, AppResult};
use crate::core::models::{MunicipalityRecord, Province};
use crate::core::provinces::PROVINCES;

/// Shared state of the API routes.
#[derive(Clone)]
pub struct ApiState {
    pub directory: Arc<MunicipalityDirectory>,
    pub search: SearchConfig,
}

impl ApiState {
    pub fn new(directory: Arc<MunicipalityDirectory>, search: SearchConfig) -> Self {
        Self { directory, search }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    pub limit: Option<usize>,
}

type ApiError = (StatusCode, Json<Value>);

fn error_response(status: StatusCode, err: &AppError) -> ApiError {
    (status, Json(json!({ "error": err.to_string() })))
}

/// Parses the dataset off the async workers if nobody has done it yet.
async fn ensure_loaded(directory: &Arc<MunicipalityDirectory>) -> AppResult<()> {
    if directory.is_loaded() {
        return Ok(());
    }

    let directory = Arc::clone(directory);
    tokio::task::spawn_blocking(move || directory.get_directory().map(|_| ()))
        .await
        .map_err(|e| AppError::Server(format!("directory load task failed: {}", e)))?
}

pub async fn health_check(State(state): State<ApiState>) -> Json<Value> {
    let records = if state.directory.is_loaded() {
        state.directory.get_directory().map(|r| r.len()).unwrap_or(0)
    } else {
        0
    };

    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "service": "yourroom-places",
        "loaded": state.directory.is_loaded(),
        "records": records
    }))
}

pub async fn search_municipalities(
    State(state): State<ApiState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<MunicipalityRecord>>, ApiError> {
    ensure_loaded(&state.directory).await.map_err(|e| {
        error!("Municipality directory unavailable: {}", e);
        error_response(StatusCode::SERVICE_UNAVAILABLE, &e)
    })?;

    let limit = state.search.effective_limit(params.limit);
    let results = state.directory.search(&params.q, limit).map_err(|e| {
        error!("Municipality search failed: {}", e);
        error_response(StatusCode::SERVICE_UNAVAILABLE, &e)
    })?;

    debug!("Query {:?} returned {} suggestions", params.q, results.len());
    Ok(Json(results.into_iter().cloned().collect()))
}

pub async fn list_provinces() -> Json<Vec<Province>> {
    Json(PROVINCES.to_vec())
}

/// Handle 404 errors for API routes
pub async fn api_not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({
        "error": "API endpoint not found"
    })))
}
