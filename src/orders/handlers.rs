//! REST API handlers for orders

use super::models::*;
use crate::error::AppError;
use crate::state::SharedState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

/// Creates routes for order create/read/update/delete
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/api/orders", get(list_orders).post(create_order))
        .route(
            "/api/orders/:id",
            get(get_order).put(update_order).delete(delete_order),
        )
}

/// Endpoint: GET /api/orders
async fn list_orders(State(state): State<SharedState>) -> Json<Vec<Order>> {
    Json(state.orders.list())
}

/// Endpoint: GET /api/orders/:id
async fn get_order(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Order>, AppError> {
    state.orders.get(&id).map(Json)
}

/// Endpoint: POST /api/orders
async fn create_order(
    State(state): State<SharedState>,
    body: Result<Json<NewOrderInput>, JsonRejection>,
) -> Result<(StatusCode, Json<OrderCreatedResponse>), AppError> {
    let Json(payload) = body?;
    let order = state.orders.create(payload)?;

    Ok((
        StatusCode::CREATED,
        Json(OrderCreatedResponse {
            message: "Order placed successfully!".to_string(),
            order,
        }),
    ))
}

/// Endpoint: PUT /api/orders/:id
async fn update_order(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    body: Result<Json<UpdateOrderInput>, JsonRejection>,
) -> Result<Json<Order>, AppError> {
    let Json(payload) = body?;
    state.orders.update(&id, payload).map(Json)
}

/// Endpoint: DELETE /api/orders/:id
async fn delete_order(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    state.orders.delete(&id)?;

    Ok(Json(MessageResponse {
        message: "Order deleted successfully".to_string(),
    }))
}
