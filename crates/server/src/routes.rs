use std::sync::Arc;

use axum::{routing::get, Json, Router};
use common::types::{Health, Message};
use service::guests::GuestService;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use crate::openapi::ApiDoc;

pub mod guests;

/// Shared handler state; the guest service owns whichever backend was configured.
#[derive(Clone)]
pub struct ServerState {
    pub guests: Arc<GuestService>,
}

impl ServerState {
    pub fn new(guests: GuestService) -> Self {
        Self { guests: Arc::new(guests) }
    }
}

#[utoipa::path(get, path = "/", tag = "health", responses((status = 200, description = "Liveness message", body = crate::openapi::MessageDoc)))]
pub async fn root() -> Json<Message> {
    Json(Message::new("API do casamento funcionando!"))
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router: liveness, docs and the guest endpoints.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json));

    let guest_routes = Router::new()
        .route("/convidados", get(guests::list_guests).post(guests::create_guest))
        .route("/convidados/:code", get(guests::get_guest).put(guests::update_guest));

    public
        .merge(guest_routes)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx are logged at ERROR
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
