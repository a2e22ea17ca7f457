use super::types::response;
use crate::{modules::dish::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>) -> response::Success {
    let dishes = ctx.db.dishes.lock().await;
    response::Success::Dishes(repository::find_many(&dishes))
}
