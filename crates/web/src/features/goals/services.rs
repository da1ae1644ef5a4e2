use sqlx::PgPool;
use storage::{
    DisciplineCatalog,
    dto::goal::{CreateGoalRequest, GoalResponse, UpdateGoalRequest},
    error::Result,
    models::StadiumSetting,
    repository::goal::GoalRepository,
};
use uuid::Uuid;

/// Goals in target performance order, as returned by the database
pub async fn list_goals(
    pool: &PgPool,
    catalog: &DisciplineCatalog,
    setting: Option<StadiumSetting>,
) -> Result<Vec<GoalResponse>> {
    let repo = GoalRepository::new(pool);
    let listings = repo.list_listings(setting).await?;

    Ok(listings
        .into_iter()
        .map(|listing| GoalResponse::new(listing, catalog))
        .collect())
}

pub async fn get_goal(
    pool: &PgPool,
    catalog: &DisciplineCatalog,
    id: Uuid,
    owner: &str,
) -> Result<GoalResponse> {
    let repo = GoalRepository::new(pool);
    let listing = repo.find_listing(id, owner).await?;

    Ok(GoalResponse::new(listing, catalog))
}

pub async fn create_goal(
    pool: &PgPool,
    catalog: &DisciplineCatalog,
    owner: &str,
    request: &CreateGoalRequest,
) -> Result<GoalResponse> {
    let repo = GoalRepository::new(pool);
    let goal = repo.create(owner, request).await?;

    let listing = repo.find_listing(goal.goal_id, owner).await?;
    Ok(GoalResponse::new(listing, catalog))
}

pub async fn update_goal(
    pool: &PgPool,
    catalog: &DisciplineCatalog,
    id: Uuid,
    owner: &str,
    request: &UpdateGoalRequest,
) -> Result<GoalResponse> {
    let repo = GoalRepository::new(pool);

    let existing = repo.find_owned(id, owner).await?;
    let updated = repo.update(&existing, owner, request).await?;

    let listing = repo.find_listing(updated.goal_id, owner).await?;
    Ok(GoalResponse::new(listing, catalog))
}

pub async fn delete_goal(pool: &PgPool, id: Uuid, owner: &str) -> Result<()> {
    let repo = GoalRepository::new(pool);
    repo.delete(id, owner).await
}
