use super::types::{request, response};
use crate::{modules::order::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let orders = ctx.db.orders.lock().await;

    repository::find_by_id(&orders, &payload.id)
        .map(response::Success::Order)
        .ok_or(response::Error::OrderNotFound(payload.id))
}
