#[macro_use]
extern crate tracing;

mod cafe;
pub mod config;
pub mod error;
mod extractors;
mod handlers;
mod middlewares;
mod pages;
mod state;
mod utils;

use crate::{middlewares::middlewares, utils::shutdown_signal};
use axum::{extract::Request, ServiceExt};
pub use config::Config;
use error::Error;
pub use middlewares::X_API_KEY;
pub use state::*;
use tokio::net::TcpListener;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;
pub use utils::panic;

pub async fn run<S: StateTrait>(listener: TcpListener, state: S) -> anyhow::Result<()> {
    info!("listening on port {}", listener.local_addr()?.port());

    let routes = handlers::routes::<S>(state.clone());
    let app = NormalizePathLayer::trim_trailing_slash().layer(middlewares(state, routes));

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
