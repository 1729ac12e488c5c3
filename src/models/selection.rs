use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::CatalogItem;

/// The item fields a ledger entry keeps for display and export.
///
/// Captured when the entry is created so later catalog changes do not leak
/// into an in-progress selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSnapshot {
    pub name: String,
    pub serving_capacity: Option<u32>,
    pub category_label: String,
    pub is_vegetarian: bool,
}

impl ItemSnapshot {
    pub fn from_item(item: &CatalogItem) -> Self {
        Self {
            name: item.name.clone(),
            serving_capacity: item.planning_capacity(),
            category_label: item.category_label().to_string(),
            is_vegetarian: item.is_vegetarian,
        }
    }
}

/// One chosen item in a selection ledger.
///
/// `quantity` is always at least 1. `unit_customer_price` is locked in when
/// the entry is added and survives guest-count recomputation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionEntry {
    pub item_id: String,
    pub item: ItemSnapshot,
    pub quantity: u32,
    pub unit_customer_price: Decimal,
    /// Insertion sequence, used only for display ordering.
    pub(crate) seq: u64,
}

impl SelectionEntry {
    pub fn name(&self) -> &str {
        &self.item.name
    }

    pub fn serving_capacity(&self) -> Option<u32> {
        self.item.serving_capacity
    }
}

/// A rendered row of the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerLine {
    pub item_id: String,
    pub name: String,
    pub quantity: u32,
    pub unit_customer_price: Decimal,
    pub line_cost: Decimal,
}

/// A committed entry, in the shape the external cart expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLine {
    pub item_id: String,
    pub name: String,
    pub unit_customer_price: Decimal,
    pub quantity: u32,
    pub category_label: String,
}
