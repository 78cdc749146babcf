use crate::{
    cafe::Cafe,
    error::{self, Result},
    extractors::{Json, ResponseFormat},
    pages, StateTrait,
};
use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use entity::cafes;
use rand::Rng;
use sea_orm::{EntityTrait, PaginatorTrait, QueryOrder, QuerySelect};

pub async fn list_cafes<S: StateTrait>(
    State(state): State<S>,
    format: ResponseFormat,
) -> Result<Response> {
    let cafes = cafes::Entity::find()
        .order_by_asc(cafes::Column::Id)
        .into_model::<Cafe>()
        .all(state.db())
        .await?;

    if cafes.is_empty() {
        return Err(error::NO_CAFES);
    }

    Ok(match format {
        ResponseFormat::Json => Json(cafes).into_response(),
        ResponseFormat::Html => pages::render(&cafes).into_response(),
    })
}

pub async fn random_cafe<S: StateTrait>(
    State(state): State<S>,
    format: ResponseFormat,
) -> Result<Response> {
    let count = cafes::Entity::find().count(state.db()).await?;

    if count == 0 {
        return Err(error::NO_CAFES);
    }

    let offset = state.rng().gen_range(0..count);

    // a concurrent delete can shrink the table between the two queries
    let cafe = cafes::Entity::find()
        .order_by_asc(cafes::Column::Id)
        .offset(offset)
        .into_model::<Cafe>()
        .one(state.db())
        .await?
        .ok_or(error::NO_CAFES)?;

    Ok(match format {
        ResponseFormat::Json => Json(cafe).into_response(),
        ResponseFormat::Html => pages::render(&[cafe]).into_response(),
    })
}
