mod format;
mod json;

pub use format::*;
pub use json::*;
