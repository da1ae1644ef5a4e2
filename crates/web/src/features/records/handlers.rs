use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database, DisciplineCatalog,
    dto::common::SettingFilter,
    dto::record::{CreateRecordRequest, RecordResponse, UpdateRecordRequest},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::Owner;

use super::services;

#[utoipa::path(
    get,
    path = "/api/records",
    params(SettingFilter),
    responses(
        (status = 200, description = "Records grouped by age group and discipline type", body = Vec<RecordResponse>),
        (status = 400, description = "Unknown indoors_outdoors value")
    ),
    tag = "records"
)]
pub async fn list_records(
    State(db): State<Database>,
    State(catalog): State<Arc<DisciplineCatalog>>,
    Query(filter): Query<SettingFilter>,
) -> Result<Response, WebError> {
    let setting = filter.validate().map_err(WebError::BadRequest)?;

    let records = services::list_records(db.pool(), &catalog, setting).await?;

    Ok(Json(records).into_response())
}

#[utoipa::path(
    get,
    path = "/api/records/{id}",
    params(
        ("id" = Uuid, Path, description = "Record id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Record found", body = RecordResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Record not found or owned by another account")
    ),
    tag = "records"
)]
pub async fn get_record(
    State(db): State<Database>,
    State(catalog): State<Arc<DisciplineCatalog>>,
    Extension(owner): Extension<Owner>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let record = services::get_record(db.pool(), &catalog, id, owner.as_str()).await?;

    Ok(Json(record).into_response())
}

#[utoipa::path(
    post,
    path = "/api/records",
    request_body = CreateRecordRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Record created successfully", body = RecordResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Holder already has this performance in this discipline")
    ),
    tag = "records"
)]
pub async fn create_record(
    State(db): State<Database>,
    State(catalog): State<Arc<DisciplineCatalog>>,
    Extension(owner): Extension<Owner>,
    Json(req): Json<CreateRecordRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let record = services::create_record(db.pool(), &catalog, owner.as_str(), &req).await?;
    tracing::info!("{} created record {}", owner.as_str(), record.record_id);

    Ok((StatusCode::CREATED, Json(record)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/records/{id}",
    params(
        ("id" = Uuid, Path, description = "Record id")
    ),
    request_body = UpdateRecordRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Record updated successfully", body = RecordResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Record not found or owned by another account"),
        (status = 409, description = "Holder already has this performance in this discipline")
    ),
    tag = "records"
)]
pub async fn update_record(
    State(db): State<Database>,
    State(catalog): State<Arc<DisciplineCatalog>>,
    Extension(owner): Extension<Owner>,
    Path(id): Path<Uuid>,
    Json(update_req): Json<UpdateRecordRequest>,
) -> Result<Response, WebError> {
    update_req.validate()?;

    let updated =
        services::update_record(db.pool(), &catalog, id, owner.as_str(), &update_req).await?;

    Ok(Json(updated).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/records/{id}",
    params(
        ("id" = Uuid, Path, description = "Record id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Record deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Record not found or owned by another account")
    ),
    tag = "records"
)]
pub async fn delete_record(
    State(db): State<Database>,
    Extension(owner): Extension<Owner>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_record(db.pool(), id, owner.as_str()).await?;
    tracing::info!("{} deleted record {}", owner.as_str(), id);

    Ok(StatusCode::NO_CONTENT.into_response())
}
