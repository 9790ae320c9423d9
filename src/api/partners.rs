//! Delivery partner API handlers

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use http::StatusCode;
use serde_json::{Value, json};

use super::extract::ValidJson;
use crate::error::{AppError, AppResult};
use crate::models::{DeliveryPartner, PartnerCreate};
use crate::state::AppState;

/// Partner router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/partners", get(list).post(create))
        .route("/partners/{partner_id}", get(get_by_id))
}

/// Register a new delivery partner
pub async fn create(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<PartnerCreate>,
) -> AppResult<(StatusCode, Json<Value>)> {
    payload.validate()?;
    let partner = state.store.create_partner(payload.into_partner())?;

    tracing::info!(
        partner_id = %partner.partner_id,
        zone_code = %partner.zone_code,
        "partner registered"
    );

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Partner added successfully",
            "partner": partner,
        })),
    ))
}

/// Get partner by id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(partner_id): Path<String>,
) -> AppResult<Json<DeliveryPartner>> {
    let partner = state
        .store
        .get_partner(&partner_id)
        .ok_or_else(|| AppError::partner_not_found(&partner_id))?;
    Ok(Json(partner))
}

/// List all partners (diagnostic/test surface)
pub async fn list(State(state): State<AppState>) -> Json<Vec<DeliveryPartner>> {
    Json(state.store.list_partners())
}
