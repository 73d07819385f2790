//! Receipt API 模块

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/receipts", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::process))
        .route("/{id}", get(handler::points))
}
