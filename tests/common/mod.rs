#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use grubdash_backend_rs::{
    app::App,
    types::{AppConfig, AppEnvironment, Config, DatabaseConfig, ToContext},
};
use serde_json::Value;
use tower::ServiceExt;

fn config(seed: bool) -> Config {
    Config {
        app: AppConfig {
            host: String::from("127.0.0.1"),
            environment: AppEnvironment::Development,
            port: 0,
        },
        database: DatabaseConfig { seed },
    }
}

pub fn app() -> Router {
    App::new(config(false).to_context().unwrap()).router()
}

pub fn seeded_app() -> Router {
    App::new(config(true).to_context().unwrap()).router()
}

pub async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, body)
}
