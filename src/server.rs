//! HTTP boundary for [`GenerationService`].

use crate::ai::GeminiTextClient;
use crate::models::{Config, ErrorResponse, GenerationRequest, GenerationResponse};
use crate::service::GenerationService;
use crate::{Error, Result};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::{info, warn, Level};

async fn fallback() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Not Found".to_string(),
        }),
    )
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn submit(
    State(service): State<GenerationService>,
    payload: std::result::Result<Json<GenerationRequest>, JsonRejection>,
) -> Result<Json<GenerationResponse>> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("Rejected submit body: {}", rejection.body_text());
        Error::Validation("Description is required.".to_string())
    })?;

    let tweet = service.handle(&request).await?;
    Ok(Json(GenerationResponse { tweet }))
}

pub fn router(service: GenerationService) -> Router {
    let routes_api = Router::new()
        .route("/submit", post(submit))
        .route("/health", get(health))
        .with_state(service);

    Router::new()
        .nest("/api", routes_api)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
        .fallback(fallback)
}

pub async fn serve(listener: TcpListener, router: Router) -> Result<()> {
    info!("Starting HTTP server on {}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}

/// Build the Gemini-backed service from `config` and serve it on `bind_addr`.
pub async fn run(config: &Config) -> Result<()> {
    let provider = GeminiTextClient::from_config(config);
    info!("Provider: Gemini (model: {})", provider.model());

    let service = GenerationService::new(Arc::new(provider));
    let listener = TcpListener::bind(&config.bind_addr).await?;
    serve(listener, router(service)).await
}
