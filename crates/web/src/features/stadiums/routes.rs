use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};

use super::handlers::{
    create_discipline, create_stadium, delete_discipline, delete_stadium, get_discipline_catalog,
    get_stadium, list_disciplines, list_stadium_disciplines, list_stadiums, update_stadium,
};
use crate::middleware::auth::{ApiKeys, require_auth};
use crate::state::AppState;

pub fn routes(api_keys: ApiKeys) -> Router<AppState> {
    let protected = Router::new()
        .route("/", post(create_stadium))
        .route("/:id", put(update_stadium))
        .route("/:id", delete(delete_stadium))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/", get(list_stadiums))
        .route("/:id", get(get_stadium))
        .route("/:id/disciplines", get(list_stadium_disciplines))
        .merge(protected)
}

pub fn discipline_routes(api_keys: ApiKeys) -> Router<AppState> {
    let protected = Router::new()
        .route("/", post(create_discipline))
        .route("/:id", delete(delete_discipline))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/", get(list_disciplines))
        .route("/catalog", get(get_discipline_catalog))
        .merge(protected)
}
