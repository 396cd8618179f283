use axum::{extract::{Path, State}, Json};
use axum_extra::extract::WithRejection;
use common::types::Message;
use models::GuestEntry;
use tracing::info;

use crate::{errors::JsonApiError, routes::ServerState};

type GuestBody = WithRejection<Json<GuestEntry>, JsonApiError>;

#[utoipa::path(
    post, path = "/convidados", tag = "convidados",
    request_body = crate::openapi::ConvidadoDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::MessageDoc),
        (status = 400, description = "Duplicate or empty code", body = crate::openapi::DetailDoc),
        (status = 422, description = "Malformed payload", body = crate::openapi::DetailDoc),
        (status = 500, description = "Storage failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create_guest(
    State(state): State<ServerState>,
    WithRejection(Json(entry), _): GuestBody,
) -> Result<Json<Message>, JsonApiError> {
    state.guests.create(entry).await?;
    Ok(Json(Message::new("Convidado adicionado com sucesso")))
}

#[utoipa::path(
    get, path = "/convidados", tag = "convidados",
    responses(
        (status = 200, description = "All guest entries", body = [crate::openapi::ConvidadoDoc]),
        (status = 500, description = "Storage failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list_guests(State(state): State<ServerState>) -> Result<Json<Vec<GuestEntry>>, JsonApiError> {
    let list = state.guests.list().await?;
    info!(count = list.len(), "list guests");
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/convidados/{code}", tag = "convidados",
    params(("code" = String, Path, description = "Guest entry code")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::ConvidadoDoc),
        (status = 404, description = "Not Found", body = crate::openapi::DetailDoc),
        (status = 500, description = "Storage failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get_guest(
    State(state): State<ServerState>,
    Path(code): Path<String>,
) -> Result<Json<GuestEntry>, JsonApiError> {
    Ok(Json(state.guests.get(&code).await?))
}

#[utoipa::path(
    put, path = "/convidados/{code}", tag = "convidados",
    params(("code" = String, Path, description = "Guest entry code")),
    request_body = crate::openapi::ConvidadoDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::MessageDoc),
        (status = 400, description = "Body code differs from path", body = crate::openapi::DetailDoc),
        (status = 404, description = "Not Found", body = crate::openapi::DetailDoc),
        (status = 422, description = "Malformed payload", body = crate::openapi::DetailDoc),
        (status = 500, description = "Storage failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update_guest(
    State(state): State<ServerState>,
    Path(code): Path<String>,
    WithRejection(Json(entry), _): GuestBody,
) -> Result<Json<Message>, JsonApiError> {
    state.guests.update(&code, entry).await?;
    Ok(Json(Message::new(format!("Confirmação atualizada para '{code}'"))))
}
