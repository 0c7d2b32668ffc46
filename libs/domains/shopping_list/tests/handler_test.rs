//! Handler tests for the shopping list domain
//!
//! These exercise the HTTP contract of the items router on its own:
//! - Request deserialization (JSON → DTOs)
//! - Response envelope and status codes
//! - Error bodies
//!
//! The full application (docs, CORS, health) is not involved.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_shopping_list::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

fn app() -> (Router, ItemService<InMemoryItemRepository>) {
    let service = ItemService::new(InMemoryItemRepository::seeded());
    (handlers::router(service.clone()), service)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

// Helper to parse JSON response body
async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_list_items_returns_bare_seed_array() {
    let (app, _) = app();

    let response = app.oneshot(empty_request("GET", "/items")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    let items = body.as_array().expect("list is a bare array");
    assert_eq!(items.len(), 4);
    assert_eq!(
        items[0],
        json!({ "id": 1, "itemName": "Sugar", "unitPrice": 40.0, "qty": 2.0, "isPurchased": false })
    );
}

#[tokio::test]
async fn test_add_item_returns_201_with_full_sequence() {
    let (app, _) = app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/items",
            json!({ "itemName": "Milk", "unitPrice": 30, "qty": 2 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["success"], "y");
    let items = body["data"].as_array().unwrap();
    assert_eq!(items.len(), 5);
    assert_eq!(items[4]["id"], 5);
    assert_eq!(items[4]["itemName"], "Milk");
    assert_eq!(items[4]["qty"], 2.0);
    assert_eq!(items[4]["isPurchased"], false);
}

#[tokio::test]
async fn test_add_item_accepts_form_strings() {
    let (app, service) = app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/items",
            json!({ "itemName": "Bread", "unitPrice": "25.5", "qty": "3" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let items = service.list_items().await.unwrap();
    let bread = items.last().unwrap();
    assert_eq!(bread.unit_price, 25.5);
    assert_eq!(bread.qty, 3.0);
}

#[tokio::test]
async fn test_add_item_missing_fields_returns_400_and_no_change() {
    let bodies = [
        json!({ "unitPrice": 30, "qty": 2 }),
        json!({ "itemName": "", "unitPrice": 30, "qty": 2 }),
        json!({ "itemName": "Milk", "unitPrice": 0, "qty": 2 }),
        json!({ "itemName": "Milk", "unitPrice": 30, "qty": "" }),
        json!({}),
    ];

    for body in bodies {
        let (app, service) = app();
        let response = app
            .oneshot(json_request("POST", "/items", body.clone()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body}");
        let error = json_body(response.into_body()).await;
        assert_eq!(error["success"], "n");
        assert_eq!(error["message"], "Missing required fields");

        assert_eq!(service.list_items().await.unwrap(), seed_items());
    }
}

#[tokio::test]
async fn test_add_item_malformed_json_is_400() {
    let (app, _) = app();

    let request = Request::builder()
        .method("POST")
        .uri("/items")
        .header("content-type", "application/json")
        .body(Body::from("{ not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response.into_body()).await["success"], "n");
}

#[tokio::test]
async fn test_patch_marks_item_purchased() {
    let (app, service) = app();

    let response = app
        .oneshot(json_request("PATCH", "/items/1", json!({ "isPurchased": true })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["success"], "y");
    assert_eq!(body["data"]["id"], 1);
    assert_eq!(body["data"]["isPurchased"], true);

    let items = service.list_items().await.unwrap();
    assert!(items[0].is_purchased);
    assert!(items[1..].iter().all(|i| !i.is_purchased));
}

#[tokio::test]
async fn test_patch_unknown_id_is_404() {
    let (app, service) = app();

    let response = app
        .oneshot(json_request("PATCH", "/items/999", json!({ "isPurchased": true })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["success"], "n");
    assert_eq!(body["message"], "Item not found");
    assert_eq!(service.list_items().await.unwrap(), seed_items());
}

#[tokio::test]
async fn test_patch_without_flag_is_400() {
    let (app, _) = app();

    let response = app
        .oneshot(json_request("PATCH", "/items/2", json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["message"], "isPurchased status is required");
}

#[tokio::test]
async fn test_put_updates_only_supplied_fields() {
    let (app, _) = app();

    let response = app
        .oneshot(json_request(
            "PUT",
            "/items/2",
            json!({ "itemName": "Dark chocolate", "unitPrice": "", "qty": "" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["success"], "y");
    assert_eq!(
        body["data"],
        json!({ "id": 2, "itemName": "Dark chocolate", "unitPrice": 40.0, "qty": 5.0, "isPurchased": false })
    );
}

#[tokio::test]
async fn test_put_unknown_id_is_404() {
    let (app, _) = app();

    let response = app
        .oneshot(json_request("PUT", "/items/77", json!({ "itemName": "X" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_then_delete_again() {
    let (app, service) = app();

    let first = app
        .clone()
        .oneshot(empty_request("DELETE", "/items/3"))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(
        json_body(first.into_body()).await,
        json!({ "success": "y", "message": "Item deleted successfully" })
    );
    assert_eq!(service.list_items().await.unwrap().len(), 3);

    let second = app.oneshot(empty_request("DELETE", "/items/3")).await.unwrap();
    assert_eq!(second.status(), StatusCode::NOT_FOUND);
    assert_eq!(service.list_items().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_delete_unknown_id_leaves_sequence_unchanged() {
    let (app, service) = app();

    let response = app
        .oneshot(empty_request("DELETE", "/items/999"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(service.list_items().await.unwrap(), seed_items());
}

#[tokio::test]
async fn test_non_numeric_id_is_404() {
    let (app, service) = app();

    let response = app
        .oneshot(empty_request("DELETE", "/items/abc"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(response.into_body()).await["error"], "NOT_FOUND");
    assert_eq!(service.list_items().await.unwrap(), seed_items());
}

#[tokio::test]
async fn test_unknown_id_without_body_is_404() {
    let (app, _) = app();

    for method in ["PATCH", "PUT"] {
        let response = app
            .clone()
            .oneshot(empty_request(method, "/items/999"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{method}");
    }

    let response = app
        .oneshot(
            Request::builder()
                .method("PATCH")
                .uri("/items/999")
                .header("content-type", "application/json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_patch_known_id_without_body_asks_for_flag() {
    let (app, _) = app();

    let response = app
        .oneshot(empty_request("PATCH", "/items/1"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(response.into_body()).await["message"],
        "isPurchased status is required"
    );
}

#[tokio::test]
async fn test_fractional_quantity_on_add_and_edit() {
    let (app, _) = app();

    let added = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/items",
            json!({ "itemName": "Rice", "unitPrice": 60, "qty": 1.5 }),
        ))
        .await
        .unwrap();
    assert_eq!(added.status(), StatusCode::CREATED);
    assert_eq!(json_body(added.into_body()).await["data"][4]["qty"], 1.5);

    let edited = app
        .oneshot(json_request("PUT", "/items/1", json!({ "qty": 2.5 })))
        .await
        .unwrap();
    assert_eq!(edited.status(), StatusCode::OK);
    assert_eq!(json_body(edited.into_body()).await["data"]["qty"], 2.5);
}

#[tokio::test]
async fn test_new_id_after_delete_does_not_collide() {
    let (app, _) = app();

    let deleted = app
        .clone()
        .oneshot(empty_request("DELETE", "/items/4"))
        .await
        .unwrap();
    assert_eq!(deleted.status(), StatusCode::OK);

    let response = app
        .oneshot(json_request(
            "POST",
            "/items",
            json!({ "itemName": "Eggs", "unitPrice": 12, "qty": 12 }),
        ))
        .await
        .unwrap();

    let body = json_body(response.into_body()).await;
    let ids: Vec<u64> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, [1, 2, 3, 5]);
}

#[tokio::test]
async fn test_legacy_routes_share_the_same_list() {
    let (app, _) = app();

    let added = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/add_item",
            json!({ "itemName": "Milk", "unitPrice": 30, "qty": 2 }),
        ))
        .await
        .unwrap();
    assert_eq!(added.status(), StatusCode::CREATED);

    let marked = app
        .clone()
        .oneshot(json_request("PATCH", "/update_status/5", json!({ "isPurchased": true })))
        .await
        .unwrap();
    assert_eq!(marked.status(), StatusCode::OK);

    let edited = app
        .clone()
        .oneshot(json_request("PUT", "/update_item/5", json!({ "qty": 4 })))
        .await
        .unwrap();
    assert_eq!(json_body(edited.into_body()).await["data"]["qty"], 4.0);

    let deleted = app
        .clone()
        .oneshot(empty_request("DELETE", "/delete_item/1"))
        .await
        .unwrap();
    assert_eq!(deleted.status(), StatusCode::OK);

    let listed = app.oneshot(empty_request("GET", "/get_items")).await.unwrap();
    let items = json_body(listed.into_body()).await;
    let items = items.as_array().unwrap();
    assert_eq!(items.len(), 4);
    assert_eq!(items[3]["id"], 5);
    assert_eq!(items[3]["isPurchased"], true);
}
