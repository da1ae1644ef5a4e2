use axum::{
    Router, middleware,
    routing::{delete, get, post},
};

use super::handlers::{create_venue, delete_venue, list_venues};
use crate::middleware::auth::{ApiKeys, require_auth};
use crate::state::AppState;

pub fn routes(api_keys: ApiKeys) -> Router<AppState> {
    let protected = Router::new()
        .route("/", post(create_venue))
        .route("/:id", delete(delete_venue))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new().route("/", get(list_venues)).merge(protected)
}
