//! Shared application state

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::config::Config;
use crate::models::{DeliveryPartner, PartnerStatus};
use crate::store::EntityStore;

/// Shared application state, cloned into every handler
#[derive(Clone)]
pub struct AppState {
    /// Process-wide entity store
    pub store: Arc<EntityStore>,
}

impl AppState {
    /// Create a new AppState, seeding sample partners when configured
    pub fn new(config: &Config) -> Self {
        let state = Self {
            store: Arc::new(EntityStore::new()),
        };
        if config.seed_sample_data {
            state.seed_sample_partners();
        }
        state
    }

    /// Load the stock sample fleet: three zones, every status, one
    /// zero-capacity partner. Handy for manual runs and smoke tests.
    fn seed_sample_partners(&self) {
        let sample = [
            ("FP-PART-001", "560001", Decimal::new(45, 1), PartnerStatus::Available, 3),
            ("FP-PART-002", "560001", Decimal::new(42, 1), PartnerStatus::Available, 2),
            ("FP-PART-003", "560002", Decimal::new(48, 1), PartnerStatus::Available, 1),
            ("FP-PART-004", "560001", Decimal::new(45, 1), PartnerStatus::Available, 3),
            ("FP-PART-005", "560003", Decimal::new(39, 1), PartnerStatus::Available, 4),
            ("FP-PART-006", "560001", Decimal::new(47, 1), PartnerStatus::OnDelivery, 2),
            ("FP-PART-007", "560002", Decimal::new(43, 1), PartnerStatus::Available, 0),
            ("FP-PART-008", "560001", Decimal::new(41, 1), PartnerStatus::Offline, 3),
        ];

        for (partner_id, zone_code, rating, status, capacity) in sample {
            let partner = DeliveryPartner {
                partner_id: partner_id.to_string(),
                zone_code: zone_code.to_string(),
                rating,
                status,
                capacity,
            };
            if let Err(err) = self.store.create_partner(partner) {
                tracing::warn!(partner_id, error = %err, "failed to seed sample partner");
            }
        }

        let (_, partners) = self.store.counts();
        tracing::info!(count = partners, "sample delivery partners loaded");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(seed: bool) -> Config {
        Config {
            host: "127.0.0.1".into(),
            http_port: 0,
            environment: "test".into(),
            seed_sample_data: seed,
        }
    }

    #[test]
    fn test_seeding_is_opt_in() {
        let state = AppState::new(&config(false));
        assert_eq!(state.store.counts(), (0, 0));

        let state = AppState::new(&config(true));
        assert_eq!(state.store.counts(), (0, 8));
        assert!(state.store.get_partner("FP-PART-001").is_some());
    }
}
