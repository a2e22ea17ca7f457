use super::types::{request, response};
use crate::{
    modules::dish::{repository, validation},
    types::Context,
    utils,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    utils::validation::run(validation::FIELD_CHECKS, &payload.body)?;

    let mut dishes = ctx.db.dishes.lock().await;
    let id = ctx
        .db
        .next_id(|id| repository::exists(&dishes, id))
        .await;

    let dish = repository::create(&mut dishes, id, payload.body.into());
    tracing::debug!("Dish created: {}", dish.id);

    Ok(response::Success::DishCreated(dish))
}
