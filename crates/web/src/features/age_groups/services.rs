use sqlx::PgPool;
use storage::{
    dto::age_group::CreateAgeGroupRequest, error::Result, models::AgeGroup,
    repository::age_group::AgeGroupRepository,
};
use uuid::Uuid;

pub async fn list_age_groups(pool: &PgPool) -> Result<Vec<AgeGroup>> {
    let repo = AgeGroupRepository::new(pool);
    repo.list().await
}

pub async fn create_age_group(pool: &PgPool, request: &CreateAgeGroupRequest) -> Result<AgeGroup> {
    let repo = AgeGroupRepository::new(pool);
    repo.create(request).await
}

pub async fn delete_age_group(pool: &PgPool, id: Uuid) -> Result<()> {
    let repo = AgeGroupRepository::new(pool);
    repo.delete(id).await
}
