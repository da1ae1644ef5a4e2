use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{Database, dto::age_group::CreateAgeGroupRequest, models::AgeGroup};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/age-groups",
    responses(
        (status = 200, description = "List all age groups", body = Vec<AgeGroup>)
    ),
    tag = "age-groups"
)]
pub async fn list_age_groups(State(db): State<Database>) -> Result<Response, WebError> {
    let age_groups = services::list_age_groups(db.pool()).await?;

    Ok(Json(age_groups).into_response())
}

#[utoipa::path(
    post,
    path = "/api/age-groups",
    request_body = CreateAgeGroupRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Age group created successfully", body = AgeGroup),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "age-groups"
)]
pub async fn create_age_group(
    State(db): State<Database>,
    Json(req): Json<CreateAgeGroupRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let age_group = services::create_age_group(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(age_group)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/age-groups/{id}",
    params(
        ("id" = Uuid, Path, description = "Age group id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Age group deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Age group not found")
    ),
    tag = "age-groups"
)]
pub async fn delete_age_group(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_age_group(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
