//! Data models
//!
//! Entities and create payloads shared between the store, the dispatch
//! core, and the HTTP API. All wire names are camelCase; status enums are
//! SCREAMING_SNAKE_CASE on the wire.

pub mod order;
pub mod partner;

// Re-exports
pub use order::*;
pub use partner::*;

use crate::error::{AppError, AppResult};

/// Validate a zone code: exactly 6 ASCII digits
pub fn validate_zone_code(zone_code: &str) -> AppResult<()> {
    if zone_code.len() != 6 || !zone_code.bytes().all(|b| b.is_ascii_digit()) {
        return Err(
            AppError::validation("Zone code must be a 6-digit number")
                .with_detail("zoneCode", zone_code),
        );
    }
    Ok(())
}
