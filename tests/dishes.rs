mod common;

use axum::http::{Method, StatusCode};
use common::{app, seeded_app, send};
use serde_json::{json, Value};
use std::collections::HashSet;

fn pasta() -> Value {
    json!({
        "data": {
            "name": "Pasta",
            "description": "x",
            "price": 10,
            "image_url": "u"
        }
    })
}

fn with_data(field: &str, value: Value) -> Value {
    let mut body = pasta();
    body["data"][field] = value;
    body
}

fn without(field: &str) -> Value {
    let mut body = pasta();
    body["data"].as_object_mut().unwrap().remove(field);
    body
}

#[tokio::test]
async fn should_list_no_dishes_initially() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/dishes", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "data": [] }));
}

#[tokio::test]
async fn should_list_seeded_dishes() {
    let app = seeded_app();
    let (status, body) = send(&app, Method::GET, "/dishes", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(!body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn should_create_read_and_reject_mismatched_update() {
    let app = app();

    let (status, created) = send(&app, Method::POST, "/dishes", Some(pasta())).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["data"]["id"].as_str().unwrap().to_string();
    assert!(!id.is_empty());
    assert_eq!(created["data"]["name"], "Pasta");
    assert_eq!(created["data"]["price"], 10);

    let (status, read) = send(&app, Method::GET, &format!("/dishes/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(read, created);

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/dishes/{}", id),
        Some(with_data("id", json!("someone-else"))),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        format!(
            "Dish id does not match route id. Dish: someone-else, Route: {}",
            id
        )
    );
}

#[tokio::test]
async fn should_return_identical_data_on_repeated_reads() {
    let app = app();
    let (_, created) = send(&app, Method::POST, "/dishes", Some(pasta())).await;
    let uri = format!("/dishes/{}", created["data"]["id"].as_str().unwrap());

    let (_, first) = send(&app, Method::GET, &uri, None).await;
    let (_, second) = send(&app, Method::GET, &uri, None).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn should_assign_unique_ids() {
    let app = seeded_app();
    for _ in 0..20 {
        let (status, _) = send(&app, Method::POST, "/dishes", Some(pasta())).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, body) = send(&app, Method::GET, "/dishes", None).await;
    let dishes = body["data"].as_array().unwrap();
    let ids = dishes
        .iter()
        .map(|dish| dish["id"].as_str().unwrap())
        .collect::<HashSet<_>>();

    assert_eq!(ids.len(), dishes.len());
}

#[tokio::test]
async fn should_require_each_field() {
    let app = app();

    for field in ["name", "description", "price", "image_url"] {
        let (status, body) = send(&app, Method::POST, "/dishes", Some(without(field))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], format!("Dish must include a {}", field));
    }

    let (status, body) = send(
        &app,
        Method::POST,
        "/dishes",
        Some(with_data("name", json!(""))),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Dish must include a name");
}

#[tokio::test]
async fn should_treat_missing_data_as_empty() {
    let app = app();
    let (status, body) = send(&app, Method::POST, "/dishes", Some(json!({}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Dish must include a name");
}

#[tokio::test]
async fn should_validate_price() {
    let app = app();

    for price in [json!(0), json!(-5), json!(2.5), json!("10")] {
        let (status, body) = send(
            &app,
            Method::POST,
            "/dishes",
            Some(with_data("price", price)),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"],
            "Dish must have a price that is an integer greater than 0"
        );
    }

    let (status, body) = send(
        &app,
        Method::POST,
        "/dishes",
        Some(with_data("price", json!(1))),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["price"], 1);
}

#[tokio::test]
async fn should_not_find_unknown_dish() {
    let app = app();

    let (status, body) = send(&app, Method::GET, "/dishes/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Dish does not exist: nope");

    let (status, body) = send(&app, Method::PUT, "/dishes/nope", Some(json!({}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Dish does not exist: nope");
}

#[tokio::test]
async fn should_update_dish_in_place() {
    let app = app();
    let (_, created) = send(&app, Method::POST, "/dishes", Some(pasta())).await;
    let id = created["data"]["id"].as_str().unwrap().to_string();
    let uri = format!("/dishes/{}", id);

    let body = json!({
        "data": {
            "id": id,
            "name": "Lasagne",
            "description": "Layered",
            "price": 14,
            "image_url": "v"
        }
    });
    let (status, updated) = send(&app, Method::PUT, &uri, Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["data"]["id"], id.as_str());
    assert_eq!(updated["data"]["name"], "Lasagne");
    assert_eq!(updated["data"]["price"], 14);

    let (status, body) = send(&app, Method::PUT, &uri, Some(with_data("price", json!(0)))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Dish must have a price that is an integer greater than 0"
    );

    let (_, read) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(read, updated);

    let (_, list) = send(&app, Method::GET, "/dishes", None).await;
    assert_eq!(list["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn should_reject_unsupported_methods() {
    let app = app();
    let (_, created) = send(&app, Method::POST, "/dishes", Some(pasta())).await;
    let uri = format!("/dishes/{}", created["data"]["id"].as_str().unwrap());

    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["error"], format!("DELETE not allowed for {}", uri));

    let (status, body) = send(&app, Method::PATCH, "/dishes", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["error"], "PATCH not allowed for /dishes");
}

#[tokio::test]
async fn should_report_unknown_paths() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/menus", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Path not found: /menus");
}

#[tokio::test]
async fn should_reject_malformed_json() {
    let app = app();
    let request = axum::http::Request::builder()
        .method(Method::POST)
        .uri("/dishes")
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from("{ not json"))
        .unwrap();

    let response = tower::ServiceExt::oneshot(app, request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn should_report_wrongly_typed_fields_as_validation_errors() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/dishes",
        Some(with_data("name", json!(5))),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Dish must include a name");

    let (status, body) = send(
        &app,
        Method::POST,
        "/dishes",
        Some(with_data("image_url", json!(["u"]))),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Dish must include a image_url");

    let (status, body) = send(&app, Method::POST, "/dishes", Some(json!({ "data": 5 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Dish must include a name");
}

#[tokio::test]
async fn should_reject_numeric_body_id_on_update() {
    let app = app();
    let (_, created) = send(&app, Method::POST, "/dishes", Some(pasta())).await;
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/dishes/{}", id),
        Some(with_data("id", json!(42))),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        format!("Dish id does not match route id. Dish: 42, Route: {}", id)
    );
}
