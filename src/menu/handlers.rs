//! REST API handlers for the menu

use super::models::MenuItem;
use crate::error::AppError;
use crate::state::SharedState;
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

/// Creates routes for menu retrieval
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/api/menu", get(list_menu))
        .route("/api/menu/:id", get(get_menu_item))
}

/// Endpoint: GET /api/menu
async fn list_menu(State(state): State<SharedState>) -> Json<Vec<MenuItem>> {
    Json(state.menu.list().to_vec())
}

/// Endpoint: GET /api/menu/:id
async fn get_menu_item(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<MenuItem>, AppError> {
    state.menu.get(&id).cloned().map(Json)
}
