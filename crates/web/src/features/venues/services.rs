use sqlx::PgPool;
use storage::{
    dto::venue::CreateVenueRequest, error::Result, models::Venue,
    repository::venue::VenueRepository,
};
use uuid::Uuid;

pub async fn list_venues(pool: &PgPool) -> Result<Vec<Venue>> {
    let repo = VenueRepository::new(pool);
    repo.list().await
}

pub async fn create_venue(pool: &PgPool, request: &CreateVenueRequest) -> Result<Venue> {
    let repo = VenueRepository::new(pool);
    repo.create(request).await
}

/// Records and goals held at the venue keep existing with no venue
pub async fn delete_venue(pool: &PgPool, id: Uuid) -> Result<()> {
    let repo = VenueRepository::new(pool);
    repo.delete(id).await
}
