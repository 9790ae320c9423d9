//! In-memory entity store
//!
//! Process-wide store for orders and delivery partners. Listings preserve
//! insertion order; lookups return snapshots (clones) so callers never hold
//! the lock. All mutations happen in place on the stored entity under a
//! single `RwLock`, which also gives the dispatch core the mutual exclusion
//! it needs for assignment (see `dispatch`).

use parking_lot::{RwLock, RwLockWriteGuard};

use crate::error::{AppError, AppResult};
use crate::models::{DeliveryPartner, Order};

/// Shared in-memory store for orders and partners
#[derive(Default)]
pub struct EntityStore {
    inner: RwLock<StoreInner>,
}

#[derive(Default)]
pub(crate) struct StoreInner {
    pub(crate) orders: Vec<Order>,
    pub(crate) partners: Vec<DeliveryPartner>,
}

impl EntityStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new order, failing if the id is already taken
    pub fn create_order(&self, order: Order) -> AppResult<Order> {
        let mut inner = self.inner.write();
        if inner.orders.iter().any(|o| o.order_id == order.order_id) {
            return Err(AppError::already_exists("Order ID")
                .with_detail("orderId", order.order_id.clone()));
        }
        inner.orders.push(order.clone());
        Ok(order)
    }

    /// Insert a new partner, failing if the id is already taken
    pub fn create_partner(&self, partner: DeliveryPartner) -> AppResult<DeliveryPartner> {
        let mut inner = self.inner.write();
        if inner
            .partners
            .iter()
            .any(|p| p.partner_id == partner.partner_id)
        {
            return Err(AppError::already_exists("Partner ID")
                .with_detail("partnerId", partner.partner_id.clone()));
        }
        inner.partners.push(partner.clone());
        Ok(partner)
    }

    /// Snapshot of an order by id
    pub fn get_order(&self, order_id: &str) -> Option<Order> {
        self.inner
            .read()
            .orders
            .iter()
            .find(|o| o.order_id == order_id)
            .cloned()
    }

    /// Snapshot of a partner by id
    pub fn get_partner(&self, partner_id: &str) -> Option<DeliveryPartner> {
        self.inner
            .read()
            .partners
            .iter()
            .find(|p| p.partner_id == partner_id)
            .cloned()
    }

    /// All orders, in insertion order
    pub fn list_orders(&self) -> Vec<Order> {
        self.inner.read().orders.clone()
    }

    /// All partners, in insertion order
    pub fn list_partners(&self) -> Vec<DeliveryPartner> {
        self.inner.read().partners.clone()
    }

    /// (order count, partner count), for the health probe
    pub fn counts(&self) -> (usize, usize) {
        let inner = self.inner.read();
        (inner.orders.len(), inner.partners.len())
    }

    /// Exclusive access for multi-entity mutations (assignment)
    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, StoreInner> {
        self.inner.write()
    }
}
