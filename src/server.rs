//! Click ledger HTTP server.
//!
//! Exposes the ledger's ingestion and aggregation endpoints over a small
//! JSON/plain-text HTTP API so search frontends can report clicks and pull
//! relevance-feedback signals back out.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `PUT`  | `/click/{id}` | Record a click for document `id` (`q` required, `w` optional float) |
//! | `GET`  | `/ids` | Sum click weights per document for queries matching `q` |
//! | `GET`  | `/` | Informational text |
//! | `GET`  | `/health` | Health check (returns version) |
//!
//! # Error Contract
//!
//! Validation failures return `400` with a plain-text message (`Missing q
//! parameter`, `Could not parse weight`) and never touch the store; storage
//! failures, including malformed FTS5 match syntax, return `500`.
//!
//! The aggregation result is a JSON array of `[doc_id, total_weight]` pairs
//! in no particular order; callers needing ranked output sort client-side.
//!
//! # CORS
//!
//! All origins, methods, and headers are permitted so browser-based search
//! frontends can report clicks directly.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::config::Config;
use crate::db;
use crate::models::ClickEvent;
use crate::store;

/// Shared application state passed to all route handlers via Axum's `State`
/// extractor.
#[derive(Clone)]
struct AppState {
    /// Application configuration (wrapped in `Arc` for cheap cloning across handlers).
    config: Arc<Config>,
    /// Connection pool over the click database; handlers check connections
    /// out per request and drop returns them on every exit path.
    pool: sqlx::SqlitePool,
}

/// Starts the click ledger HTTP server.
///
/// Opens the database (creating the schema on first use), binds to the
/// address configured in `[server].bind`, and serves until the process is
/// terminated.
pub async fn run_server(config: &Config) -> anyhow::Result<()> {
    let bind_addr = config.server.bind.clone();
    let pool = db::open(config).await?;

    let state = AppState {
        config: Arc::new(config.clone()),
        pool,
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/", get(handle_root))
        .route("/click/{id}", put(handle_click))
        .route("/ids", get(handle_ids))
        .route("/health", get(handle_health))
        .layer(cors)
        .with_state(state);

    println!("Click ledger listening on http://{}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ============ Error response ============

/// Internal error type that converts into a plain-text Axum HTTP response.
struct AppError {
    status: StatusCode,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status, self.message).into_response()
    }
}

/// Constructs a 400 Bad Request error.
fn bad_request(message: impl Into<String>) -> AppError {
    AppError {
        status: StatusCode::BAD_REQUEST,
        message: message.into(),
    }
}

/// Constructs a 500 error for store failures.
fn storage_error(err: anyhow::Error) -> AppError {
    AppError {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        message: format!("storage error: {}", err),
    }
}

// ============ PUT /click/{id} ============

/// Query parameters accepted by `PUT /click/{id}`. The weight arrives as a
/// raw string so a non-numeric value can be rejected with its own message
/// rather than a generic deserialization failure.
#[derive(Deserialize)]
struct ClickParams {
    q: Option<String>,
    w: Option<String>,
}

/// Handler for `PUT /click/{id}`.
///
/// Validates, then appends exactly one click event. `q` is required; `w`
/// must parse as a finite float and defaults to the configured weight when
/// absent. Returns a plain `OK` on success.
async fn handle_click(
    State(state): State<AppState>,
    Path(doc_id): Path<String>,
    Query(params): Query<ClickParams>,
) -> Result<&'static str, AppError> {
    let query = params.q.ok_or_else(|| bad_request("Missing q parameter"))?;

    let weight = match params.w {
        Some(raw) => raw
            .parse::<f64>()
            .ok()
            .filter(|w| w.is_finite())
            .ok_or_else(|| bad_request("Could not parse weight"))?,
        None => state.config.ingest.default_weight,
    };

    let event = ClickEvent {
        doc_id,
        query,
        weight,
    };
    store::append_click(&state.pool, &event)
        .await
        .map_err(storage_error)?;

    Ok("OK")
}

// ============ GET /ids ============

/// Query parameters accepted by `GET /ids`.
#[derive(Deserialize)]
struct IdsParams {
    q: Option<String>,
}

/// Handler for `GET /ids`.
///
/// Full-text matches `q` against recorded queries and returns the
/// per-document weight sums verbatim, with no ordering or pagination.
/// Zero matches yields an empty array, not an error.
async fn handle_ids(
    State(state): State<AppState>,
    Query(params): Query<IdsParams>,
) -> Result<Json<Vec<(String, f64)>>, AppError> {
    let query = params.q.ok_or_else(|| bad_request("Missing q parameter"))?;

    let results = store::aggregate_by_match(&state.pool, &query)
        .await
        .map_err(storage_error)?;

    Ok(Json(
        results
            .into_iter()
            .map(|r| (r.doc_id, r.total_weight))
            .collect(),
    ))
}

// ============ GET / ============

/// Handler for `GET /`: a short identification banner.
async fn handle_root() -> &'static str {
    "click-through API"
}

// ============ GET /health ============

/// JSON response body for `GET /health`.
#[derive(Serialize)]
struct HealthResponse {
    /// Always `"ok"` when the server is running.
    status: String,
    /// The crate version from `Cargo.toml`.
    version: String,
}

/// Handler for `GET /health`.
///
/// Returns a simple health check response with the server status and version.
/// This endpoint is used by load balancers and monitoring tools.
async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
