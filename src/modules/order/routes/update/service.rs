use super::types::{request, response};
use crate::{
    modules::order::{repository, validation},
    types::Context,
    utils,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let mut orders = ctx.db.orders.lock().await;

    let order = repository::find_by_id(&orders, &payload.id)
        .ok_or_else(|| response::Error::OrderNotFound(payload.id.clone()))?;

    utils::validation::run(validation::UPDATE_CHECKS, &payload.body)?;

    validation::accepts_updates(&order).map_err(|err| {
        tracing::warn!("Rejected update of delivered order {}", order.id);
        err
    })?;

    validation::id_matches_route(&payload.body, &payload.id)?;

    let order = repository::update_by_id(&mut orders, &payload.id, payload.body.into())
        .ok_or_else(|| response::Error::OrderNotFound(payload.id.clone()))?;
    tracing::debug!("Order updated: {} ({})", order.id, order.status);

    Ok(response::Success::OrderUpdated(order))
}
