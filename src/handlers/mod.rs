mod cafe;
mod home;

use crate::{middlewares::ApiKeyLayer, state::StateTrait};
use axum::{
    extract::State,
    handler::Handler,
    http::StatusCode,
    routing::{delete, get, patch, post},
    Router,
};
use sea_orm::ConnectionTrait;

/// GET          /
/// GET, POST    /all
/// GET, POST    /random
/// POST         /create
/// GET          /search?loc=
/// PATCH        /update-price/:id
/// DELETE       /delete/:id        (requires `x-api-key`)
pub fn routes<S: StateTrait>(state: S) -> Router<S> {
    Router::new()
        .route("/", get(home::home))
        .route(
            "/all",
            get(cafe::list_cafes::<S>).post(cafe::list_cafes::<S>),
        )
        .route(
            "/random",
            get(cafe::random_cafe::<S>).post(cafe::random_cafe::<S>),
        )
        .route("/create", post(cafe::create_cafe::<S>))
        .route("/search", get(cafe::search_cafes::<S>))
        .route("/update-price/:id", patch(cafe::update_price::<S>))
        .route(
            "/delete/:id",
            delete(cafe::delete_cafe::<S>.layer(ApiKeyLayer::new(state.api_key()))),
        )
        .route("/livez", get(liveness::<S>))
        .route("/readyz", get(|| async {}))
}

async fn liveness<S: StateTrait>(State(state): State<S>) -> StatusCode {
    if state.db().execute_unprepared("select 1").await.is_err() {
        return StatusCode::INTERNAL_SERVER_ERROR;
    }

    StatusCode::OK
}
