//! Ranking engine
//!
//! Pure selection logic: score eligible partners and pick a deterministic
//! best. Exact `Decimal` arithmetic means tie comparisons are exact, not
//! float-epsilon.

use rust_decimal::Decimal;

use crate::models::DeliveryPartner;

/// Weighted priority score: rating * 0.6 + capacity * 0.4
pub fn priority_score(partner: &DeliveryPartner) -> Decimal {
    partner.rating * Decimal::new(6, 1) + Decimal::from(partner.capacity) * Decimal::new(4, 1)
}

/// Select the best candidate: highest priority score, ties broken by
/// ascending `partner_id`. Empty input yields `None`.
pub fn select_best<'a>(candidates: &[&'a DeliveryPartner]) -> Option<&'a DeliveryPartner> {
    candidates.iter().copied().min_by(|a, b| {
        priority_score(b)
            .cmp(&priority_score(a))
            .then_with(|| a.partner_id.cmp(&b.partner_id))
    })
}
