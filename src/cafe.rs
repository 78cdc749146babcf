use entity::cafes;
use sea_orm::FromQueryResult;
use serde::Serialize;

/// Flat representation of one cafe, used for every JSON response and the HTML page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromQueryResult)]
pub struct Cafe {
    pub id: i32,
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    pub seats: String,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub has_sockets: bool,
    pub can_take_calls: bool,
    pub coffee_price: Option<String>,
}

impl From<cafes::Model> for Cafe {
    fn from(model: cafes::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            map_url: model.map_url,
            img_url: model.img_url,
            location: model.location,
            seats: model.seats,
            has_toilet: model.has_toilet,
            has_wifi: model.has_wifi,
            has_sockets: model.has_sockets,
            can_take_calls: model.can_take_calls,
            coffee_price: model.coffee_price,
        }
    }
}
