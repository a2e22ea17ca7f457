use axum::{
    async_trait,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::{json, Value};

#[derive(Deserialize)]
struct Envelope {
    data: Option<Value>,
}

/// Extracts the `data` member of a `{ "data": ... }` request body. A missing,
/// null or non-object `data` yields `T::default()` so that field validation,
/// rather than decoding, reports what is absent.
pub struct Data<T>(pub T);

fn reject(status: StatusCode, message: String) -> Response {
    tracing::debug!("Rejected request body: {}", message);
    (status, Json(json!({ "error": message }))).into_response()
}

#[async_trait]
impl<S, T> FromRequest<S> for Data<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(envelope) = Json::<Envelope>::from_request(req, state)
            .await
            .map_err(|rejection| reject(rejection.status(), rejection.body_text()))?;

        match envelope.data {
            Some(data @ Value::Object(_)) => serde_json::from_value(data)
                .map(Data)
                .map_err(|err| reject(StatusCode::BAD_REQUEST, err.to_string())),
            _ => Ok(Data(T::default())),
        }
    }
}
