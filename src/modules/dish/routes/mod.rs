mod create;
mod get;
mod list;
mod update;

use crate::{types::Context, utils::fallback::method_not_allowed};
use axum::routing::{get, Router};
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route(
            "/",
            get(list::handler)
                .post(create::handler)
                .fallback(method_not_allowed),
        )
        .route(
            "/:id",
            get(get::handler)
                .put(update::handler)
                .fallback(method_not_allowed),
        )
}
