use sqlx::PgPool;
use storage::{
    DisciplineCatalog,
    dto::stadium::{
        CreateDisciplineRequest, CreateStadiumRequest, DisciplineResponse, UpdateStadiumRequest,
    },
    error::Result,
    models::Stadium,
    repository::stadium::StadiumRepository,
};
use uuid::Uuid;

pub async fn list_stadiums(pool: &PgPool) -> Result<Vec<Stadium>> {
    let repo = StadiumRepository::new(pool);
    repo.list().await
}

pub async fn get_stadium(pool: &PgPool, id: Uuid) -> Result<Stadium> {
    let repo = StadiumRepository::new(pool);
    repo.find_by_id(id).await
}

pub async fn create_stadium(pool: &PgPool, request: &CreateStadiumRequest) -> Result<Stadium> {
    let repo = StadiumRepository::new(pool);
    repo.create(request).await
}

pub async fn update_stadium(
    pool: &PgPool,
    id: Uuid,
    request: &UpdateStadiumRequest,
) -> Result<Stadium> {
    let repo = StadiumRepository::new(pool);

    let existing = repo.find_by_id(id).await?;
    repo.update(existing.stadium_id, &existing, request).await
}

pub async fn delete_stadium(pool: &PgPool, id: Uuid) -> Result<()> {
    let repo = StadiumRepository::new(pool);
    repo.delete(id).await
}

pub async fn list_disciplines(
    pool: &PgPool,
    catalog: &DisciplineCatalog,
) -> Result<Vec<DisciplineResponse>> {
    let repo = StadiumRepository::new(pool);
    let disciplines = repo.list_disciplines().await?;

    Ok(disciplines
        .into_iter()
        .map(|d| DisciplineResponse::new(d, catalog))
        .collect())
}

/// Disciplines to offer once a stadium has been picked
pub async fn list_stadium_disciplines(
    pool: &PgPool,
    catalog: &DisciplineCatalog,
    stadium_id: Uuid,
) -> Result<Vec<DisciplineResponse>> {
    let repo = StadiumRepository::new(pool);
    let disciplines = repo.list_disciplines_for_stadium(stadium_id).await?;

    Ok(disciplines
        .into_iter()
        .map(|d| DisciplineResponse::new(d, catalog))
        .collect())
}

pub async fn create_discipline(
    pool: &PgPool,
    catalog: &DisciplineCatalog,
    request: &CreateDisciplineRequest,
) -> Result<DisciplineResponse> {
    let repo = StadiumRepository::new(pool);
    let discipline = repo.create_discipline(request).await?;

    Ok(DisciplineResponse::new(discipline, catalog))
}

pub async fn delete_discipline(pool: &PgPool, id: Uuid) -> Result<()> {
    let repo = StadiumRepository::new(pool);
    repo.delete_discipline(id).await
}
