use super::types::{request, response};
use crate::{
    modules::order::{repository, validation},
    types::Context,
    utils,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    utils::validation::run(validation::CREATE_CHECKS, &payload.body)?;

    let mut orders = ctx.db.orders.lock().await;
    let id = ctx
        .db
        .next_id(|id| repository::exists(&orders, id))
        .await;

    let order = repository::create(&mut orders, id, payload.body.into());
    tracing::debug!("Order created: {} ({})", order.id, order.status);

    Ok(response::Success::OrderCreated(order))
}
