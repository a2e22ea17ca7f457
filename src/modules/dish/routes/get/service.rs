use super::types::{request, response};
use crate::{modules::dish::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let dishes = ctx.db.dishes.lock().await;

    repository::find_by_id(&dishes, &payload.id)
        .map(response::Success::Dish)
        .ok_or(response::Error::DishNotFound(payload.id))
}
