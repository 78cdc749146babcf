#![allow(unused_imports)]

pub(crate) use super::macros::*;
pub use super::{request::*, response::*, setup, setup_with_api_key, App, API_KEY};
pub use assert_json_diff::{assert_json_eq, assert_json_include};
pub use cafe_api::{error, X_API_KEY};
pub use entity::cafes;
pub use sea_orm::{EntityTrait, PaginatorTrait};
pub use http::{header, StatusCode};
pub use serde_json::{json, Value};
