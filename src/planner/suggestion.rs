use rust_decimal::Decimal;

use crate::models::CatalogItem;
use crate::planner::constants::MIN_QUANTITY;
use crate::planner::quantity::{coverage, effective_capacity, suggest_quantity, Coverage, GuestCount};
use crate::state::SelectionLedger;

/// A pending quantity suggestion for one item.
///
/// Starts at the suggested quantity; the planner may nudge it up or down
/// (never below 1) before accepting. Coverage is advisory: accepting an
/// under-covering quantity is allowed.
#[derive(Debug, Clone)]
pub struct QuantitySuggestion {
    pub item_id: String,
    pub name: String,
    pub unit_customer_price: Decimal,
    pub serving_capacity: Option<u32>,
    pub guest_count: GuestCount,
    pub suggested: u32,
    quantity: u32,
    item: CatalogItem,
}

impl QuantitySuggestion {
    pub fn new(item: &CatalogItem, guest_count: GuestCount) -> Self {
        let serving_capacity = item.planning_capacity();
        let suggested = suggest_quantity(guest_count, serving_capacity);

        Self {
            item_id: item.id.clone(),
            name: item.name.clone(),
            unit_customer_price: item.customer_price(),
            serving_capacity,
            guest_count,
            suggested,
            quantity: suggested,
            item: item.clone(),
        }
    }

    /// Quantity that will be written on accept.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn effective_capacity(&self) -> u32 {
        effective_capacity(self.serving_capacity)
    }

    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity.max(MIN_QUANTITY);
    }

    pub fn increment(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    pub fn decrement(&mut self) {
        self.set_quantity(self.quantity.saturating_sub(1));
    }

    /// Back to the suggested quantity.
    pub fn reset(&mut self) {
        self.quantity = self.suggested;
    }

    pub fn is_modified(&self) -> bool {
        self.quantity != self.suggested
    }

    pub fn coverage(&self) -> Coverage {
        coverage(self.quantity, self.serving_capacity, self.guest_count)
    }

    pub fn estimated_cost(&self) -> Decimal {
        self.unit_customer_price
            .saturating_mul(Decimal::from(self.quantity))
    }

    /// Write the chosen quantity into the ledger, replacing any existing entry.
    ///
    /// The entry is keyed and priced from the item this suggestion was built for.
    pub fn accept(self, ledger: &mut SelectionLedger) {
        ledger.add_or_replace(&self.item, self.quantity);
    }
}
