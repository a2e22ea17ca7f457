use super::{service::service, types::request};
use crate::{types::Context, utils::json::Data};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    Path(id): Path<String>,
    Data(body): Data<request::Body>,
) -> impl IntoResponse {
    service(ctx, request::Payload { id, body }).await
}
