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
    dto::goal::{CreateGoalRequest, GoalResponse, UpdateGoalRequest},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::Owner;

use super::services;

#[utoipa::path(
    get,
    path = "/api/goals",
    params(SettingFilter),
    responses(
        (status = 200, description = "Goals ordered by target performance", body = Vec<GoalResponse>),
        (status = 400, description = "Unknown indoors_outdoors value")
    ),
    tag = "goals"
)]
pub async fn list_goals(
    State(db): State<Database>,
    State(catalog): State<Arc<DisciplineCatalog>>,
    Query(filter): Query<SettingFilter>,
) -> Result<Response, WebError> {
    let setting = filter.validate().map_err(WebError::BadRequest)?;

    let goals = services::list_goals(db.pool(), &catalog, setting).await?;

    Ok(Json(goals).into_response())
}

#[utoipa::path(
    get,
    path = "/api/goals/{id}",
    params(
        ("id" = Uuid, Path, description = "Goal id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Goal found", body = GoalResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Goal not found or owned by another account")
    ),
    tag = "goals"
)]
pub async fn get_goal(
    State(db): State<Database>,
    State(catalog): State<Arc<DisciplineCatalog>>,
    Extension(owner): Extension<Owner>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let goal = services::get_goal(db.pool(), &catalog, id, owner.as_str()).await?;

    Ok(Json(goal).into_response())
}

#[utoipa::path(
    post,
    path = "/api/goals",
    request_body = CreateGoalRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Goal created successfully", body = GoalResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Athlete already has this goal in this discipline")
    ),
    tag = "goals"
)]
pub async fn create_goal(
    State(db): State<Database>,
    State(catalog): State<Arc<DisciplineCatalog>>,
    Extension(owner): Extension<Owner>,
    Json(req): Json<CreateGoalRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let goal = services::create_goal(db.pool(), &catalog, owner.as_str(), &req).await?;
    tracing::info!("{} created goal {}", owner.as_str(), goal.goal_id);

    Ok((StatusCode::CREATED, Json(goal)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/goals/{id}",
    params(
        ("id" = Uuid, Path, description = "Goal id")
    ),
    request_body = UpdateGoalRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Goal updated successfully", body = GoalResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Goal not found or owned by another account")
    ),
    tag = "goals"
)]
pub async fn update_goal(
    State(db): State<Database>,
    State(catalog): State<Arc<DisciplineCatalog>>,
    Extension(owner): Extension<Owner>,
    Path(id): Path<Uuid>,
    Json(update_req): Json<UpdateGoalRequest>,
) -> Result<Response, WebError> {
    update_req.validate()?;

    let updated =
        services::update_goal(db.pool(), &catalog, id, owner.as_str(), &update_req).await?;

    Ok(Json(updated).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/goals/{id}",
    params(
        ("id" = Uuid, Path, description = "Goal id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Goal deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Goal not found or owned by another account")
    ),
    tag = "goals"
)]
pub async fn delete_goal(
    State(db): State<Database>,
    Extension(owner): Extension<Owner>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_goal(db.pool(), id, owner.as_str()).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
