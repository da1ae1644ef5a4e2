use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database, DisciplineCatalog,
    dto::stadium::{
        CreateDisciplineRequest, CreateStadiumRequest, DisciplineCatalogResponse,
        DisciplineResponse, UpdateStadiumRequest,
    },
    models::Stadium,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/stadiums",
    responses(
        (status = 200, description = "List all stadiums", body = Vec<Stadium>)
    ),
    tag = "stadiums"
)]
pub async fn list_stadiums(State(db): State<Database>) -> Result<Response, WebError> {
    let stadiums = services::list_stadiums(db.pool()).await?;

    Ok(Json(stadiums).into_response())
}

#[utoipa::path(
    get,
    path = "/api/stadiums/{id}",
    params(
        ("id" = Uuid, Path, description = "Stadium id")
    ),
    responses(
        (status = 200, description = "Stadium found", body = Stadium),
        (status = 404, description = "Stadium not found")
    ),
    tag = "stadiums"
)]
pub async fn get_stadium(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let stadium = services::get_stadium(db.pool(), id).await?;

    Ok(Json(stadium).into_response())
}

#[utoipa::path(
    get,
    path = "/api/stadiums/{id}/disciplines",
    params(
        ("id" = Uuid, Path, description = "Stadium id")
    ),
    responses(
        (status = 200, description = "Disciplines held at the stadium, ordered by name", body = Vec<DisciplineResponse>)
    ),
    tag = "stadiums"
)]
pub async fn list_stadium_disciplines(
    State(db): State<Database>,
    State(catalog): State<Arc<DisciplineCatalog>>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    tracing::debug!("Loading disciplines for stadium {}", id);

    let disciplines = services::list_stadium_disciplines(db.pool(), &catalog, id).await?;

    Ok(Json(disciplines).into_response())
}

#[utoipa::path(
    post,
    path = "/api/stadiums",
    request_body = CreateStadiumRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Stadium created successfully", body = Stadium),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "stadiums"
)]
pub async fn create_stadium(
    State(db): State<Database>,
    Json(req): Json<CreateStadiumRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let stadium = services::create_stadium(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(stadium)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/stadiums/{id}",
    params(
        ("id" = Uuid, Path, description = "Stadium id")
    ),
    request_body = UpdateStadiumRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Stadium updated successfully", body = Stadium),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Stadium not found")
    ),
    tag = "stadiums"
)]
pub async fn update_stadium(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
    Json(update_req): Json<UpdateStadiumRequest>,
) -> Result<Response, WebError> {
    update_req.validate()?;

    let updated = services::update_stadium(db.pool(), id, &update_req).await?;

    Ok(Json(updated).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/stadiums/{id}",
    params(
        ("id" = Uuid, Path, description = "Stadium id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Stadium and its disciplines deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Stadium not found")
    ),
    tag = "stadiums"
)]
pub async fn delete_stadium(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_stadium(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    get,
    path = "/api/disciplines",
    responses(
        (status = 200, description = "List all disciplines", body = Vec<DisciplineResponse>)
    ),
    tag = "disciplines"
)]
pub async fn list_disciplines(
    State(db): State<Database>,
    State(catalog): State<Arc<DisciplineCatalog>>,
) -> Result<Response, WebError> {
    let disciplines = services::list_disciplines(db.pool(), &catalog).await?;

    Ok(Json(disciplines).into_response())
}

#[utoipa::path(
    get,
    path = "/api/disciplines/catalog",
    responses(
        (status = 200, description = "Discipline names known as road and field events", body = DisciplineCatalogResponse)
    ),
    tag = "disciplines"
)]
pub async fn get_discipline_catalog(State(catalog): State<Arc<DisciplineCatalog>>) -> Response {
    Json(DisciplineCatalogResponse::from(catalog.as_ref())).into_response()
}

#[utoipa::path(
    post,
    path = "/api/disciplines",
    request_body = CreateDisciplineRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Discipline created successfully", body = DisciplineResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Stadium already has this discipline")
    ),
    tag = "disciplines"
)]
pub async fn create_discipline(
    State(db): State<Database>,
    State(catalog): State<Arc<DisciplineCatalog>>,
    Json(req): Json<CreateDisciplineRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let discipline = services::create_discipline(db.pool(), &catalog, &req).await?;

    Ok((StatusCode::CREATED, Json(discipline)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/disciplines/{id}",
    params(
        ("id" = Uuid, Path, description = "Discipline id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Discipline deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Discipline not found")
    ),
    tag = "disciplines"
)]
pub async fn delete_discipline(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_discipline(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
