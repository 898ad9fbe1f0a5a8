#[macro_use]
extern crate tracing;

pub mod error;
mod extractors;
mod handlers;
mod middlewares;
pub mod repositories;
pub mod schemas;
mod state;
pub mod storage;
mod utils;

use crate::{middlewares::middlewares, utils::ShutdownSignal};
use error::Error;
pub use state::*;
use tokio::net::TcpListener;

pub async fn run<S: StateTrait>(listener: TcpListener, state: S) -> anyhow::Result<()> {
    info!("listening on port {}", listener.local_addr()?.port());

    let routes = handlers::routes::<S>();
    let app = middlewares(state, routes);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(ShutdownSignal::new())
        .await?;

    info!("server stopped");

    Ok(())
}
