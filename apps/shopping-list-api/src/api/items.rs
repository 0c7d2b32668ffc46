//! Wires the shopping list domain to HTTP routes.

use axum::Router;
use domain_shopping_list::{ItemService, handlers};

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    let service = ItemService::new(state.items.clone());
    handlers::router(service)
}
