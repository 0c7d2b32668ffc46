use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, patch, post, put},
};
use axum_helpers::{
    ApiResponse, IdPath, ValidatedJson,
    errors::responses::{
        BadRequestValidationResponse, InternalServerErrorResponse, NotFoundResponse,
    },
};
#[allow(unused_imports)]
use serde_json::json;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ItemResult;
use crate::models::{CreateItem, Item, SetPurchased, UpdateItem};
use crate::repository::ItemRepository;
use crate::service::ItemService;

pub const ITEM_DELETED: &str = "Item deleted successfully";

/// OpenAPI documentation for the Items API
#[derive(OpenApi)]
#[openapi(
    paths(list_items, create_item, set_purchased, update_item, delete_item),
    components(
        schemas(Item, CreateItem, UpdateItem, SetPurchased),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Items", description = "Shopping list items")
    )
)]
pub struct ApiDoc;

/// Create the items router
///
/// Serves the resource routes under `/items` plus the older RPC-style paths
/// (`/get_items`, `/add_item`, `/update_status/{id}`, `/update_item/{id}`,
/// `/delete_item/{id}`) that existing browser clients still call.
pub fn router<R: ItemRepository + 'static>(service: ItemService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route(
            "/items/{id}",
            patch(set_purchased).put(update_item).delete(delete_item),
        )
        .route("/get_items", get(list_items))
        .route("/add_item", post(create_item))
        .route("/update_status/{id}", patch(set_purchased))
        .route("/update_item/{id}", put(update_item))
        .route("/delete_item/{id}", delete(delete_item))
        .with_state(shared_service)
}

/// List all items
#[utoipa::path(
    get,
    path = "",
    tag = "Items",
    responses(
        (status = 200, description = "All items in insertion order", body = Vec<Item>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_items<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
) -> ItemResult<Json<Vec<Item>>> {
    let items = service.list_items().await?;
    Ok(Json(items))
}

/// Add an item
#[utoipa::path(
    post,
    path = "",
    tag = "Items",
    request_body = CreateItem,
    responses(
        (status = 201, description = "Item added; returns every item", body = ApiResponse<Vec<Item>>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateItem>,
) -> ItemResult<impl IntoResponse> {
    let items = service.add_item(input).await?;
    Ok(ApiResponse::data(items).with_status(StatusCode::CREATED))
}

/// Mark an item purchased
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = u64, Path, description = "Item ID")
    ),
    request_body = SetPurchased,
    responses(
        (status = 200, description = "Purchase status updated", body = ApiResponse<Item>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn set_purchased<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<SetPurchased>,
) -> ItemResult<ApiResponse<Item>> {
    let item = service.set_purchased(id, input).await?;
    Ok(ApiResponse::data(item))
}

/// Edit an item
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = u64, Path, description = "Item ID")
    ),
    request_body = UpdateItem,
    responses(
        (status = 200, description = "Item updated", body = ApiResponse<Item>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<UpdateItem>,
) -> ItemResult<ApiResponse<Item>> {
    let item = service.update_item(id, input).await?;
    Ok(ApiResponse::data(item))
}

/// Delete an item
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = u64, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item deleted", body = serde_json::Value,
            example = json!({ "success": "y", "message": ITEM_DELETED })),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    IdPath(id): IdPath,
) -> ItemResult<ApiResponse<()>> {
    service.remove_item(id).await?;
    Ok(ApiResponse::message(ITEM_DELETED))
}
