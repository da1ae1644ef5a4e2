use axum::{Router, response::Redirect, routing::get};

use crate::features::{age_groups, athletes, goals, records, stadiums, venues};
use crate::middleware::auth::ApiKeys;
use crate::state::AppState;

pub fn router(api_keys: ApiKeys) -> Router<AppState> {
    let api = Router::new()
        .nest("/athletes", athletes::routes::routes(api_keys.clone()))
        .nest("/stadiums", stadiums::routes::routes(api_keys.clone()))
        .nest(
            "/disciplines",
            stadiums::routes::discipline_routes(api_keys.clone()),
        )
        .nest("/venues", venues::routes::routes(api_keys.clone()))
        .nest("/age-groups", age_groups::routes::routes(api_keys.clone()))
        .nest("/records", records::routes::routes(api_keys.clone()))
        .nest("/goals", goals::routes::routes(api_keys));

    Router::new()
        .route("/", get(|| async { Redirect::to("/api/records") }))
        .nest("/api", api)
}
