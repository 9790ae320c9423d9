//! Assignment API handler

use axum::Json;
use axum::extract::State;
use serde::Deserialize;
use serde_json::{Value, json};

use super::extract::ValidJson;
use crate::dispatch;
use crate::error::AppResult;
use crate::state::AppState;

/// Assignment request body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignRequest {
    pub order_id: String,
}

/// Assign an order to the best available partner in its zone
///
/// A zone with no eligible partner is a 200 with `assignedPartner: null`,
/// not an error; the order stays PENDING.
pub async fn assign_order(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<AssignRequest>,
) -> AppResult<Json<Value>> {
    let outcome = dispatch::assign(&state.store, &req.order_id)?;

    let message = if outcome.assigned_partner.is_some() {
        "Order assigned successfully"
    } else {
        "No eligible delivery partners available for this order"
    };

    Ok(Json(json!({
        "message": message,
        "order": outcome.order,
        "assignedPartner": outcome.assigned_partner,
    })))
}
