//! Dispatch core: eligibility filtering and order assignment
//!
//! The orchestrator runs the whole assignment under the store's write lock,
//! so two concurrent assigns cannot both succeed on one order and a
//! partner's capacity decrement is atomic with respect to competing
//! assignments.

pub mod ranking;

use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::models::{DeliveryPartner, Order, OrderStatus, PartnerStatus};
use crate::store::EntityStore;

/// Outcome of an assignment request
///
/// `assigned_partner` is `None` when no partner in the order's zone was
/// eligible; the order is left untouched in that case.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentOutcome {
    pub order: Order,
    pub assigned_partner: Option<DeliveryPartner>,
}

/// Every partner usable for an order in `zone_code`:
/// available, matching zone, with spare capacity.
pub fn eligible_partners<'a>(
    partners: &'a [DeliveryPartner],
    zone_code: &str,
) -> Vec<&'a DeliveryPartner> {
    partners
        .iter()
        .filter(|p| {
            p.status == PartnerStatus::Available && p.zone_code == zone_code && p.capacity > 0
        })
        .collect()
}

/// Assign an order to the best eligible partner
///
/// Fails if the order is unknown or not `PENDING`. On success mutates
/// exactly the order and the selected partner, nothing else.
pub fn assign(store: &EntityStore, order_id: &str) -> AppResult<AssignmentOutcome> {
    let mut inner = store.write();

    let Some(order_idx) = inner.orders.iter().position(|o| o.order_id == order_id) else {
        return Err(AppError::order_not_found(order_id));
    };
    let current = &inner.orders[order_idx];
    if current.status != OrderStatus::Pending {
        return Err(AppError::order_not_assignable(current.status));
    }
    let zone_code = current.zone_code.clone();

    let selected = ranking::select_best(&eligible_partners(&inner.partners, &zone_code))
        .map(|p| p.partner_id.clone());

    let Some(partner_id) = selected else {
        tracing::info!(order_id, zone_code = %zone_code, "no eligible partner for order");
        return Ok(AssignmentOutcome {
            order: inner.orders[order_idx].clone(),
            assigned_partner: None,
        });
    };

    // Selection happened under the same lock, so the partner is still there
    let partner_idx = inner
        .partners
        .iter()
        .position(|p| p.partner_id == partner_id)
        .ok_or_else(|| AppError::internal("selected partner missing from store"))?;

    let order = &mut inner.orders[order_idx];
    order.status = OrderStatus::Assigned;
    order.assigned_partner_id = Some(partner_id);
    let order = order.clone();

    let partner = &mut inner.partners[partner_idx];
    partner.capacity -= 1;
    let partner = partner.clone();

    tracing::info!(
        order_id,
        partner_id = %partner.partner_id,
        remaining_capacity = partner.capacity,
        "order assigned"
    );

    Ok(AssignmentOutcome {
        order,
        assigned_partner: Some(partner),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use chrono::Utc;
    use rust_decimal::Decimal;

    fn order(id: &str, zone_code: &str) -> Order {
        Order {
            order_id: id.to_string(),
            zone_code: zone_code.to_string(),
            items_value: Decimal::TEN,
            is_plus_member: false,
            status: OrderStatus::Pending,
            assigned_partner_id: None,
            created_at: Utc::now(),
        }
    }

    fn partner(
        id: &str,
        zone_code: &str,
        rating: Decimal,
        status: PartnerStatus,
        capacity: u32,
    ) -> DeliveryPartner {
        DeliveryPartner {
            partner_id: id.to_string(),
            zone_code: zone_code.to_string(),
            rating,
            status,
            capacity,
        }
    }

    fn store_with_zone_560001() -> EntityStore {
        let store = EntityStore::new();
        let partners = [
            partner("P1", "560001", Decimal::new(45, 1), PartnerStatus::Available, 3),
            partner("P2", "560001", Decimal::new(42, 1), PartnerStatus::Available, 2),
            partner("P3", "560002", Decimal::new(48, 1), PartnerStatus::Available, 1),
            partner("P4", "560001", Decimal::new(47, 1), PartnerStatus::OnDelivery, 2),
            partner("P5", "560001", Decimal::new(43, 1), PartnerStatus::Available, 0),
            partner("P6", "560001", Decimal::new(41, 1), PartnerStatus::Offline, 3),
        ];
        for p in partners {
            store.create_partner(p).unwrap();
        }
        store
    }

    #[test]
    fn test_eligibility_filters_status_zone_and_capacity() {
        let store = store_with_zone_560001();
        let partners = store.list_partners();
        let eligible = eligible_partners(&partners, "560001");
        let ids: Vec<_> = eligible.iter().map(|p| p.partner_id.as_str()).collect();
        // P3 wrong zone, P4 on delivery, P5 no capacity, P6 offline
        assert_eq!(ids, ["P1", "P2"]);
    }

    #[test]
    fn test_eligibility_empty_zone_is_empty_not_error() {
        let store = store_with_zone_560001();
        let partners = store.list_partners();
        assert!(eligible_partners(&partners, "").is_empty());
        assert!(eligible_partners(&partners, "999999").is_empty());
    }

    #[test]
    fn test_assign_picks_best_and_decrements_once() {
        let store = store_with_zone_560001();
        store.create_order(order("ORD-1", "560001")).unwrap();

        let outcome = assign(&store, "ORD-1").unwrap();
        let assigned = outcome.assigned_partner.unwrap();
        // P1 scores 4.5*0.6 + 3*0.4 = 3.9, the zone maximum
        assert_eq!(assigned.partner_id, "P1");
        assert_eq!(assigned.capacity, 2);
        assert_eq!(outcome.order.status, OrderStatus::Assigned);
        assert_eq!(outcome.order.assigned_partner_id.as_deref(), Some("P1"));

        // only P1 changed, everyone else untouched
        assert_eq!(store.get_partner("P1").unwrap().capacity, 2);
        assert_eq!(store.get_partner("P2").unwrap().capacity, 2);
        assert_eq!(store.get_partner("P3").unwrap().capacity, 1);
        assert_eq!(store.get_partner("P5").unwrap().capacity, 0);
    }

    #[test]
    fn test_assign_unknown_order() {
        let store = store_with_zone_560001();
        let err = assign(&store, "ORD-404").unwrap_err();
        assert_eq!(err.code, ErrorCode::OrderNotFound);
    }

    #[test]
    fn test_double_assign_fails_without_second_decrement() {
        let store = store_with_zone_560001();
        store.create_order(order("ORD-1", "560001")).unwrap();

        assign(&store, "ORD-1").unwrap();
        let err = assign(&store, "ORD-1").unwrap_err();
        assert_eq!(err.code, ErrorCode::OrderNotAssignable);
        assert!(err.message.contains("ASSIGNED"));
        assert_eq!(store.get_partner("P1").unwrap().capacity, 2);
    }

    #[test]
    fn test_no_eligible_partner_leaves_order_pending() {
        let store = store_with_zone_560001();
        store.create_order(order("ORD-1", "560003")).unwrap();

        let outcome = assign(&store, "ORD-1").unwrap();
        assert!(outcome.assigned_partner.is_none());
        assert_eq!(outcome.order.status, OrderStatus::Pending);

        let stored = store.get_order("ORD-1").unwrap();
        assert_eq!(stored.status, OrderStatus::Pending);
        assert!(stored.assigned_partner_id.is_none());
    }

    #[test]
    fn test_assignment_consumes_capacity_until_exhausted() {
        let store = EntityStore::new();
        store
            .create_partner(partner(
                "P1",
                "560001",
                Decimal::new(45, 1),
                PartnerStatus::Available,
                1,
            ))
            .unwrap();
        store.create_order(order("ORD-1", "560001")).unwrap();
        store.create_order(order("ORD-2", "560001")).unwrap();

        assert!(assign(&store, "ORD-1").unwrap().assigned_partner.is_some());
        // capacity now 0, the partner is no longer eligible
        let outcome = assign(&store, "ORD-2").unwrap();
        assert!(outcome.assigned_partner.is_none());
        assert_eq!(store.get_partner("P1").unwrap().capacity, 0);
    }
}
