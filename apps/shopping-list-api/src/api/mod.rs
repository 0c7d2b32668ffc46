//! API routes

pub mod items;

use axum::Router;

use crate::state::AppState;

/// All API routes, merged at the root by `axum_helpers::create_router`
pub fn routes(state: &AppState) -> Router {
    Router::new().merge(items::router(state))
}
