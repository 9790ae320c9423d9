//! Order API handlers

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use http::StatusCode;
use serde_json::{Value, json};

use super::extract::ValidJson;
use crate::error::{AppError, AppResult};
use crate::models::{Order, OrderCreate};
use crate::state::AppState;

/// Order router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/orders", get(list).post(create))
        .route("/orders/{order_id}", get(get_by_id))
}

/// Create a new order
pub async fn create(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<OrderCreate>,
) -> AppResult<(StatusCode, Json<Value>)> {
    payload.validate()?;
    let order = state.store.create_order(payload.into_order())?;

    tracing::info!(order_id = %order.order_id, zone_code = %order.zone_code, "order created");

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Order created successfully",
            "order": order,
        })),
    ))
}

/// Get order by id; embeds the assigned partner's current snapshot
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> AppResult<Json<Value>> {
    let order = state
        .store
        .get_order(&order_id)
        .ok_or_else(|| AppError::order_not_found(&order_id))?;

    let mut body = serde_json::to_value(&order).map_err(|e| AppError::internal(e.to_string()))?;
    if let Some(partner_id) = &order.assigned_partner_id {
        if let Some(partner) = state.store.get_partner(partner_id) {
            body["assignedPartnerDetails"] =
                serde_json::to_value(&partner).map_err(|e| AppError::internal(e.to_string()))?;
        }
    }
    Ok(Json(body))
}

/// List all orders (diagnostic/test surface)
pub async fn list(State(state): State<AppState>) -> Json<Vec<Order>> {
    Json(state.store.list_orders())
}
