use crate::{
    cafe::Cafe,
    error::{self, DatabaseError, Result},
    extractors::{Json, ValidatedJson},
    StateTrait,
};
use axum::{extract::State, http::StatusCode};
use entity::cafes;
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, Set};
use serde::Deserialize;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct Request {
    #[validate(length(min = 1, max = 250))]
    name: String,
    #[validate(length(min = 1, max = 500))]
    map_url: String,
    #[validate(length(min = 1, max = 500))]
    img_url: String,
    #[validate(length(min = 1, max = 250))]
    location: String,
    #[validate(length(min = 1, max = 250))]
    seats: String,
    has_toilet: bool,
    has_wifi: bool,
    has_sockets: bool,
    can_take_calls: bool,
    #[validate(length(max = 250))]
    coffee_price: Option<String>,
}

pub async fn create_cafe<S: StateTrait>(
    State(state): State<S>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<(StatusCode, Json<Cafe>)> {
    let cafe = cafes::ActiveModel {
        id: NotSet,
        name: Set(request.name),
        map_url: Set(request.map_url),
        img_url: Set(request.img_url),
        location: Set(request.location),
        seats: Set(request.seats),
        has_toilet: Set(request.has_toilet),
        has_wifi: Set(request.has_wifi),
        has_sockets: Set(request.has_sockets),
        can_take_calls: Set(request.can_take_calls),
        coffee_price: Set(request.coffee_price),
    };

    let model = match cafe.insert(state.db()).await {
        Err(err) if err.unique_violation() => return Err(error::DUPLICATE_CAFE_NAME),
        res => res?,
    };

    info!(id = model.id, name = %model.name, "created cafe");

    Ok((StatusCode::CREATED, Json(model.into())))
}
