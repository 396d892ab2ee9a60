//! REST API handlers for shopping cart operations
//!
//! Every endpoint resolves the cart from an explicit `cartId` or the
//! `cart_session` cookie, applies one aggregator operation and answers with
//! the cart's display view.

use super::{helpers::*, models::*};
use crate::error::AppError;
use crate::state::SharedState;
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

/// Creates routes for cart-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/api/cart", get(view_cart))
        .route("/api/cart/add", post(add_item))
        .route("/api/cart/remove", post(remove_item))
        .route("/api/cart/clear", post(clear_cart))
        .route("/api/cart/checkout", post(checkout))
}

/// Endpoint: GET /api/cart
async fn view_cart(
    State(state): State<SharedState>,
    headers: HeaderMap,
    query: Result<Query<CartIdInput>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(query) = query?;
    let (session_id, is_new_session) = resolve_session_id(&headers);
    let explicit = query.cart_id.is_some();
    let cart_id = get_or_default_cart_id(query.cart_id, &session_id);

    let view = view_session_cart(&state.carts, &cart_id);

    Ok(with_session_cookie(
        Json(view).into_response(),
        &session_id,
        is_new_session && !explicit,
    ))
}

/// Endpoint: POST /api/cart/add
async fn add_item(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Result<Json<AddItemInput>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(payload) = body?;
    let (session_id, is_new_session) = resolve_session_id(&headers);
    let explicit = payload.cart_id.is_some();
    let cart_id = get_or_default_cart_id(payload.cart_id, &session_id);

    let view = add_to_session_cart(&state.carts, &cart_id, &payload.name, payload.price)?;

    tracing::debug!(cart_id = %cart_id, item = %payload.name, "Added item to cart");

    Ok(with_session_cookie(
        Json(view).into_response(),
        &session_id,
        is_new_session && !explicit,
    ))
}

/// Endpoint: POST /api/cart/remove
async fn remove_item(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Result<Json<RemoveItemInput>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(payload) = body?;
    let (session_id, _) = resolve_session_id(&headers);
    let cart_id = get_or_default_cart_id(payload.cart_id, &session_id);

    let view = remove_from_session_cart(&state.carts, &cart_id, &payload.name);

    tracing::debug!(cart_id = %cart_id, item = %payload.name, "Removed item from cart");

    Ok(Json(view).into_response())
}

/// Endpoint: POST /api/cart/clear
async fn clear_cart(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Result<Json<CartIdInput>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(payload) = body?;
    let (session_id, _) = resolve_session_id(&headers);
    let cart_id = get_or_default_cart_id(payload.cart_id, &session_id);

    Ok(Json(clear_session_cart(&state.carts, &cart_id)).into_response())
}

/// Endpoint: POST /api/cart/checkout
/// Submits the cart as an order; the cart is cleared only on success.
async fn checkout(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Result<Json<CartIdInput>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(payload) = body?;
    let (session_id, _) = resolve_session_id(&headers);
    let cart_id = get_or_default_cart_id(payload.cart_id, &session_id);

    let order_id = checkout_cart(&state.carts, &cart_id, state.submitter.as_ref())?;

    let cart = view_session_cart(&state.carts, &cart_id);

    let response = CheckoutResponse {
        message: "Order placed successfully!".to_string(),
        order_id,
        cart,
    };

    Ok((StatusCode::CREATED, Json(response)).into_response())
}
