use super::types::{request, response};
use crate::{
    modules::dish::{repository, validation},
    types::Context,
    utils,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let mut dishes = ctx.db.dishes.lock().await;

    if !repository::exists(&dishes, &payload.id) {
        return Err(response::Error::DishNotFound(payload.id));
    }

    utils::validation::run(validation::FIELD_CHECKS, &payload.body)?;
    validation::id_matches_route(&payload.body, &payload.id)?;

    let dish = repository::update_by_id(&mut dishes, &payload.id, payload.body.into())
        .ok_or_else(|| response::Error::DishNotFound(payload.id.clone()))?;
    tracing::debug!("Dish updated: {}", dish.id);

    Ok(response::Success::DishUpdated(dish))
}
