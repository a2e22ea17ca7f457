pub mod request {
    use crate::modules::order::validation::OrderData;

    pub type Body = OrderData;

    pub struct Payload {
        pub body: Body,
    }
}

pub mod response {
    use crate::modules::order::{repository::Order, validation};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        OrderCreated(Order),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OrderCreated(order) => {
                    (StatusCode::CREATED, Json(json!({ "data": order }))).into_response()
                }
            }
        }
    }

    pub enum Error {
        InvalidOrder(validation::Error),
    }

    impl From<validation::Error> for Error {
        fn from(err: validation::Error) -> Self {
            Self::InvalidOrder(err)
        }
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::InvalidOrder(err) => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": err.to_string() })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
