pub mod request {
    use crate::modules::dish::validation::DishData;

    pub type Body = DishData;

    pub struct Payload {
        pub body: Body,
    }
}

pub mod response {
    use crate::modules::dish::{repository::Dish, validation};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        DishCreated(Dish),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::DishCreated(dish) => {
                    (StatusCode::CREATED, Json(json!({ "data": dish }))).into_response()
                }
            }
        }
    }

    pub enum Error {
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
