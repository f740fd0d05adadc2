use std::path::Path;

use axum::{
    extract::{Json, State},
    http::StatusCode,
    routing::{get, post},
    Router,
};
use serde_json::json;
use tower_http::services::ServeDir;
use tracing::{error, info_span, warn, Instrument};
use uuid::Uuid;

use crate::{
    app_state::{AppState, Status},
    error::ChatError,
    models::{ChatReply, ChatRequest},
    statutes::StatuteRepository as _,
};

// --- Router ---

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/chat", post(chat_handler))
        .route("/ping", get(ping_handler))
        .route("/status", get(status_handler))
        .with_state(app_state)
}

/// Router de la API más los ficheros estáticos del widget bajo `/static`.
pub fn create_router_with_static(app_state: AppState, static_dir: &Path) -> Router {
    create_router(app_state).nest_service("/static", ServeDir::new(static_dir))
}

// --- Handlers ---

#[axum::debug_handler]
async fn chat_handler(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatReply>, (StatusCode, Json<serde_json::Value>)> {
    let span = info_span!("chat", request_id = %Uuid::new_v4());

    state
        .assistant
        .chat(&payload.message, &payload.history)
        .instrument(span)
        .await
        .map(Json)
        .map_err(|e| {
            let status = match &e {
                ChatError::ModelTimeout => {
                    warn!("Tiempo de espera agotado con el modelo");
                    StatusCode::GATEWAY_TIMEOUT
                }
                ChatError::Internal(cause) => {
                    error!("Error al procesar el chat: {cause:#}");
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            };
            (status, Json(json!({ "error": e.to_string() })))
        })
}

#[axum::debug_handler]
async fn ping_handler() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

#[axum::debug_handler]
async fn status_handler(State(state): State<AppState>) -> Json<Status> {
    Json(Status {
        status: "API ok",
        articles: state.assistant.statutes().len(),
    })
}
