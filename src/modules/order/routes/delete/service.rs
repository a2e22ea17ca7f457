use super::types::{request, response};
use crate::{
    modules::order::{repository, validation},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let mut orders = ctx.db.orders.lock().await;

    let order = repository::find_by_id(&orders, &payload.id)
        .ok_or_else(|| response::Error::OrderNotFound(payload.id.clone()))?;

    validation::is_deletable(&order).map_err(|err| {
        tracing::warn!("Rejected deletion of {} order {}", order.status, order.id);
        err
    })?;

    repository::delete_by_id(&mut orders, &payload.id)
        .ok_or(response::Error::OrderNotFound(payload.id))?;
    tracing::debug!("Order deleted: {}", order.id);

    Ok(response::Success::OrderDeleted)
}
