pub mod request {
    use crate::modules::dish::validation::DishData;

    pub type Body = DishData;

    pub struct Payload {
        pub id: String,
        pub body: Body,
    }
}

pub mod response {
    use crate::modules::dish::{repository::Dish, validation};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        DishUpdated(Dish),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::DishUpdated(dish) => {
                    (StatusCode::OK, Json(json!({ "data": dish }))).into_response()
                }
            }
        }
    }

    pub enum Error {
        DishNotFound(String),
        InvalidDish(validation::Error),
    }

    impl From<validation::Error> for Error {
        fn from(err: validation::Error) -> Self {
            Self::InvalidDish(err)
        }
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::DishNotFound(id) => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": format!("Dish does not exist: {}", id) })),
                )
                    .into_response(),
                Self::InvalidDish(err) => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": err.to_string() })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
