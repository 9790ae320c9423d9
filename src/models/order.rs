//! Order model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::validate_zone_code;
use crate::error::{AppError, AppResult};

/// Order lifecycle status
///
/// The only defined transition is `Pending -> Assigned` on successful
/// assignment. There is no completion, cancellation, or re-assignment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Pending,
    Assigned,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "PENDING"),
            Self::Assigned => write!(f, "ASSIGNED"),
        }
    }
}

/// Delivery order entity
///
/// Invariant: `assigned_partner_id` is `Some` iff `status == Assigned`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique order identifier, immutable once created
    pub order_id: String,
    /// Delivery zone, exactly 6 ASCII digits
    pub zone_code: String,
    /// Monetary value of the order items
    pub items_value: Decimal,
    /// Plus membership flag (recorded but inert, reserved for future ranking)
    pub is_plus_member: bool,
    /// Lifecycle status
    pub status: OrderStatus,
    /// Id of the assigned partner, set only on successful assignment
    pub assigned_partner_id: Option<String>,
    /// Creation timestamp, set once
    pub created_at: DateTime<Utc>,
}

/// Create order payload
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    pub order_id: String,
    pub zone_code: String,
    pub items_value: Decimal,
    #[serde(default)]
    pub is_plus_member: bool,
}

impl OrderCreate {
    /// Validate field contents (presence and types are enforced by serde)
    pub fn validate(&self) -> AppResult<()> {
        if self.order_id.trim().is_empty() {
            return Err(AppError::validation("orderId must not be empty"));
        }
        validate_zone_code(&self.zone_code)?;
        if self.items_value < Decimal::ZERO {
            return Err(
                AppError::validation("itemsValue must be non-negative")
                    .with_detail("itemsValue", self.items_value.to_string()),
            );
        }
        Ok(())
    }

    /// Build the entity with server-assigned fields
    pub fn into_order(self) -> Order {
        Order {
            order_id: self.order_id,
            zone_code: self.zone_code,
            items_value: self.items_value,
            is_plus_member: self.is_plus_member,
            status: OrderStatus::Pending,
            assigned_partner_id: None,
            created_at: Utc::now(),
        }
    }
}
