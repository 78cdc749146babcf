mod create;
mod delete;
mod list;
mod search;
mod update;

pub use create::*;
pub use delete::*;
pub use list::*;
pub use search::*;
pub use update::*;

use crate::error::{self, Result};

/// Ids come from the path as text so that a non-numeric id reads as an unknown cafe.
fn parse_id(id: &str) -> Result<i32> {
    id.parse().map_err(|_| error::CAFE_NOT_FOUND)
}
