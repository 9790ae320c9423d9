//! Delivery partner model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::validate_zone_code;
use crate::error::{AppError, AppResult};

/// Partner availability status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PartnerStatus {
    Available,
    OnDelivery,
    Offline,
}

/// Delivery partner entity
///
/// `capacity` is the number of remaining concurrent-delivery slots. It is
/// decremented on successful assignment and never replenished here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryPartner {
    /// Unique partner identifier
    pub partner_id: String,
    /// Operating zone, exactly 6 ASCII digits
    pub zone_code: String,
    /// Rating in [1.0, 5.0]
    pub rating: Decimal,
    /// Availability status
    pub status: PartnerStatus,
    /// Remaining concurrent-delivery slots
    pub capacity: u32,
}

/// Create partner payload
///
/// Status enum membership and non-negative capacity are enforced by the
/// types themselves at deserialization.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerCreate {
    pub partner_id: String,
    pub zone_code: String,
    pub rating: Decimal,
    pub status: PartnerStatus,
    pub capacity: u32,
}

impl PartnerCreate {
    /// Validate field contents
    pub fn validate(&self) -> AppResult<()> {
        if self.partner_id.trim().is_empty() {
            return Err(AppError::validation("partnerId must not be empty"));
        }
        validate_zone_code(&self.zone_code)?;
        if self.rating < Decimal::ONE || self.rating > Decimal::from(5) {
            return Err(
                AppError::validation("Rating must be between 1.0 and 5.0")
                    .with_detail("rating", self.rating.to_string()),
            );
        }
        Ok(())
    }

    /// Build the entity
    pub fn into_partner(self) -> DeliveryPartner {
        DeliveryPartner {
            partner_id: self.partner_id,
            zone_code: self.zone_code,
            rating: self.rating,
            status: self.status,
            capacity: self.capacity,
        }
    }
}
