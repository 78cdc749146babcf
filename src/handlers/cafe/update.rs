use super::parse_id;
use crate::{
    cafe::Cafe,
    error::{self, Result},
    extractors::Json,
    StateTrait,
};
use axum::extract::{Path, State};
use entity::cafes::{self, TEXT_MAX_LEN};
use sea_orm::{ActiveModelTrait, EntityTrait, IntoActiveModel, Set};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct Request {
    #[serde(default)]
    coffee_price: Option<String>,
}

/// The body is optional at the extractor level: an absent or unreadable body
/// is reported as a missing price, after the cafe lookup.
pub async fn update_price<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<String>,
    request: Option<Json<Request>>,
) -> Result<Json<Cafe>> {
    let id = parse_id(&id)?;

    let cafe = cafes::Entity::find_by_id(id)
        .one(state.db())
        .await?
        .ok_or(error::CAFE_NOT_FOUND)?;

    let Some(price) = request
        .and_then(|Json(request)| request.coffee_price)
        .filter(|price| !price.is_empty())
    else {
        return Err(error::COFFEE_PRICE_REQUIRED);
    };

    if price.chars().count() > TEXT_MAX_LEN as usize {
        return Err(error::JSON_VALIDATE_INVALID);
    }

    let mut model = cafe.into_active_model();
    model.coffee_price = Set(Some(price));

    let model = model.update(state.db()).await?;

    info!(id, coffee_price = ?model.coffee_price, "updated coffee price");

    Ok(Json(model.into()))
}
