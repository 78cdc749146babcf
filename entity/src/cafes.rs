use sea_orm::{
    entity::prelude::*,
    sea_query::{BinOper, Expr, Func},
    QueryFilter, QueryOrder,
};

pub const NAME_MAX_LEN: u32 = 250;
pub const URL_MAX_LEN: u32 = 500;
pub const TEXT_MAX_LEN: u32 = 250;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "cafes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
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

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    /// Case-insensitive substring match on the location column.
    ///
    /// Both sides are folded by the database so that they agree on which
    /// characters have a lowercase form.
    #[inline]
    pub fn find_by_location(needle: &str) -> Select<Entity> {
        let pattern = format!("%{needle}%");

        Self::find()
            .filter(Expr::expr(Func::lower(Expr::col(Column::Location))).binary(
                BinOper::Like,
                Func::lower(Expr::val(pattern)),
            ))
            .order_by_asc(Column::Id)
    }
}
