use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::venue::{CreateVenueRequest, VenueResponse},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/venues",
    responses(
        (status = 200, description = "List all venues", body = Vec<VenueResponse>)
    ),
    tag = "venues"
)]
pub async fn list_venues(State(db): State<Database>) -> Result<Response, WebError> {
    let venues = services::list_venues(db.pool()).await?;

    let response: Vec<VenueResponse> = venues.into_iter().map(VenueResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    post,
    path = "/api/venues",
    request_body = CreateVenueRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Venue created successfully", body = VenueResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "venues"
)]
pub async fn create_venue(
    State(db): State<Database>,
    Json(req): Json<CreateVenueRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let venue = services::create_venue(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(VenueResponse::from(venue))).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/venues/{id}",
    params(
        ("id" = Uuid, Path, description = "Venue id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Venue deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Venue not found")
    ),
    tag = "venues"
)]
pub async fn delete_venue(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_venue(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
