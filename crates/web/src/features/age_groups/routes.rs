use axum::{
    Router, middleware,
    routing::{delete, get, post},
};

use super::handlers::{create_age_group, delete_age_group, list_age_groups};
use crate::middleware::auth::{ApiKeys, require_auth};
use crate::state::AppState;

pub fn routes(api_keys: ApiKeys) -> Router<AppState> {
    let protected = Router::new()
        .route("/", post(create_age_group))
        .route("/:id", delete(delete_age_group))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new().route("/", get(list_age_groups)).merge(protected)
}
