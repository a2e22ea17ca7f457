use super::{dish, order};
use crate::{types::Context, utils::fallback::not_found};
use axum::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .nest("/dishes", dish::get_router())
        .nest("/orders", order::get_router())
        .fallback(not_found)
}
