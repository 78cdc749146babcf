use super::parse_id;
use crate::{
    error::{self, Result},
    extractors::Json,
    StateTrait,
};
use axum::extract::{Path, State};
use entity::cafes;
use sea_orm::EntityTrait;
use serde_json::{json, Value};

pub async fn delete_cafe<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    let id = parse_id(&id)?;

    let res = cafes::Entity::delete_by_id(id).exec(state.db()).await?;

    if res.rows_affected == 0 {
        return Err(error::CAFE_NOT_FOUND);
    }

    info!(id, "deleted cafe");

    Ok(Json(json!({
        "message": format!("Cafe with id {id} has been deleted successfully"),
    })))
}
