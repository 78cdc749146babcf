mod app;
pub mod macros;
pub mod prelude;
mod request;
mod response;

pub use app::*;
