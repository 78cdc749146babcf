use crate::{
    cafe::Cafe,
    error::{self, Result},
    extractors::Json,
    StateTrait,
};
use axum::extract::{Query, State};
use entity::cafes;
use sea_orm::EntityTrait;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct Params {
    loc: Option<String>,
}

pub async fn search_cafes<S: StateTrait>(
    State(state): State<S>,
    Query(params): Query<Params>,
) -> Result<Json<Vec<Cafe>>> {
    let Some(location) = params.loc.filter(|loc| !loc.is_empty()) else {
        return Err(error::LOCATION_REQUIRED);
    };

    let cafes = cafes::Entity::find_by_location(&location)
        .into_model::<Cafe>()
        .all(state.db())
        .await?;

    if cafes.is_empty() {
        return Err(error::NO_CAFES_IN_LOCATION
            .with_message(format!("No cafes found in the location '{location}'")));
    }

    Ok(Json(cafes))
}
