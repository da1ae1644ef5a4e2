use sqlx::PgPool;
use storage::{
    DisciplineCatalog,
    dto::record::{CreateRecordRequest, RecordResponse, UpdateRecordRequest},
    error::Result,
    models::StadiumSetting,
    repository::record::RecordRepository,
    services::record_query,
};
use uuid::Uuid;

/// Records grouped by age group, field events before road events, best first
pub async fn list_records(
    pool: &PgPool,
    catalog: &DisciplineCatalog,
    setting: Option<StadiumSetting>,
) -> Result<Vec<RecordResponse>> {
    let repo = RecordRepository::new(pool);
    let listings = repo.list_listings().await?;

    Ok(record_query::sorted_view(listings, setting, catalog)
        .into_iter()
        .map(|listing| RecordResponse::new(listing, catalog))
        .collect())
}

pub async fn get_record(
    pool: &PgPool,
    catalog: &DisciplineCatalog,
    id: Uuid,
    owner: &str,
) -> Result<RecordResponse> {
    let repo = RecordRepository::new(pool);
    let listing = repo.find_listing(id, owner).await?;

    Ok(RecordResponse::new(listing, catalog))
}

pub async fn create_record(
    pool: &PgPool,
    catalog: &DisciplineCatalog,
    owner: &str,
    request: &CreateRecordRequest,
) -> Result<RecordResponse> {
    let repo = RecordRepository::new(pool);
    let record = repo.create(owner, request).await?;

    let listing = repo.find_listing(record.record_id, owner).await?;
    Ok(RecordResponse::new(listing, catalog))
}

pub async fn update_record(
    pool: &PgPool,
    catalog: &DisciplineCatalog,
    id: Uuid,
    owner: &str,
    request: &UpdateRecordRequest,
) -> Result<RecordResponse> {
    let repo = RecordRepository::new(pool);

    let existing = repo.find_owned(id, owner).await?;
    let updated = repo.update(&existing, owner, request).await?;

    let listing = repo.find_listing(updated.record_id, owner).await?;
    Ok(RecordResponse::new(listing, catalog))
}

pub async fn delete_record(pool: &PgPool, id: Uuid, owner: &str) -> Result<()> {
    let repo = RecordRepository::new(pool);
    repo.delete(id, owner).await
}
