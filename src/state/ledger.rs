use std::collections::HashMap;

use tracing::{debug, trace};

use crate::models::{CartLine, CatalogItem, ItemSnapshot, SelectionEntry};
use crate::planner::constants::MIN_QUANTITY;
use crate::planner::quantity::{suggest_quantity, GuestCount};

/// The planner's in-progress selection for one session.
///
/// Keyed by catalog item id. Every operation leaves the ledger consistent:
/// at most one entry per id, and no entry with a quantity below 1.
/// Operations on ids that are not present are no-ops.
#[derive(Debug, Clone, Default)]
pub struct SelectionLedger {
    /// Entries keyed by item id.
    entries: HashMap<String, SelectionEntry>,
    next_seq: u64,
    revision: u64,
}

impl SelectionLedger {
    /// Create an empty ledger for a new planning session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the entry for `item`, locking in its current
    /// customer price. Quantities below 1 are clamped to 1.
    pub fn add_or_replace(&mut self, item: &CatalogItem, quantity: u32) {
        let quantity = quantity.max(MIN_QUANTITY);
        let unit_customer_price = item.customer_price();

        // A replaced entry keeps its display position.
        let seq = match self.entries.get(&item.id).map(|existing| existing.seq) {
            Some(seq) => seq,
            None => self.take_seq(),
        };

        self.entries.insert(
            item.id.clone(),
            SelectionEntry {
                item_id: item.id.clone(),
                item: ItemSnapshot::from_item(item),
                quantity,
                unit_customer_price,
                seq,
            },
        );
        self.touch();

        debug!(item_id = %item.id, quantity, price = %unit_customer_price, "entry set");
    }

    /// Add one unit of `item`, creating the entry at quantity 1 if needed.
    pub fn increment_or_add(&mut self, item: &CatalogItem) {
        match self.entries.get_mut(&item.id) {
            Some(entry) => {
                entry.quantity = entry.quantity.saturating_add(1);
                debug!(item_id = %item.id, quantity = entry.quantity, "entry incremented");
                self.touch();
            }
            None => self.add_or_replace(item, 1),
        }
    }

    /// Remove one unit; the entry is deleted when its last unit goes.
    pub fn decrement_or_remove(&mut self, item_id: &str) {
        let Some(entry) = self.entries.get_mut(item_id) else {
            trace!(item_id, "decrement on missing entry");
            return;
        };

        if entry.quantity > 1 {
            entry.quantity -= 1;
            debug!(item_id, quantity = entry.quantity, "entry decremented");
        } else {
            self.entries.remove(item_id);
            debug!(item_id, "entry removed at zero");
        }
        self.touch();
    }

    /// Shift the quantity by `delta`, never going below 1.
    pub fn adjust(&mut self, item_id: &str, delta: i64) {
        let Some(entry) = self.entries.get_mut(item_id) else {
            trace!(item_id, delta, "adjust on missing entry");
            return;
        };

        let target = i64::from(entry.quantity)
            .saturating_add(delta)
            .clamp(i64::from(MIN_QUANTITY), i64::from(u32::MAX));
        entry.quantity = target as u32;
        debug!(item_id, delta, quantity = entry.quantity, "entry adjusted");
        self.touch();
    }

    /// Delete the entry if present.
    pub fn remove(&mut self, item_id: &str) -> Option<SelectionEntry> {
        let removed = self.entries.remove(item_id);
        match &removed {
            Some(_) => {
                debug!(item_id, "entry removed");
                self.touch();
            }
            None => trace!(item_id, "remove on missing entry"),
        }
        removed
    }

    /// Re-suggest quantities after a guest-count change.
    ///
    /// Every entry whose item declares a serving capacity gets the fresh
    /// suggestion; prices and snapshots are kept. Entries without a capacity
    /// are left alone.
    ///
    /// NOTE: this overwrites quantities the planner set by hand, including
    /// ones chosen for an earlier guest count. Whether manual overrides should
    /// survive is an open product question; until it is settled the latest
    /// guest count wins.
    ///
    /// Returns the number of entries whose quantity changed.
    pub fn recompute_for_guest_count(&mut self, guest_count: GuestCount) -> usize {
        let mut changed = 0;

        for entry in self.entries.values_mut() {
            let Some(capacity) = entry.serving_capacity() else {
                continue;
            };

            let quantity = suggest_quantity(guest_count, Some(capacity));
            if entry.quantity != quantity {
                entry.quantity = quantity;
                changed += 1;
            }
        }

        if changed > 0 {
            self.touch();
        }
        debug!(guests = guest_count.get(), changed, "ledger recomputed");
        changed
    }

    /// Export the current entries for the external cart, in display order.
    ///
    /// The ledger is left untouched; the caller decides whether to clear it.
    pub fn commit(&self) -> Vec<CartLine> {
        self.entries()
            .into_iter()
            .map(|entry| CartLine {
                item_id: entry.item_id.clone(),
                name: entry.item.name.clone(),
                unit_customer_price: entry.unit_customer_price,
                quantity: entry.quantity,
                category_label: entry.item.category_label.clone(),
            })
            .collect()
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        if !self.entries.is_empty() {
            self.entries.clear();
            self.touch();
        }
    }

    pub fn get(&self, item_id: &str) -> Option<&SelectionEntry> {
        self.entries.get(item_id)
    }

    pub fn contains(&self, item_id: &str) -> bool {
        self.entries.contains_key(item_id)
    }

    /// Selected quantity for an item, 0 when not selected.
    pub fn quantity_of(&self, item_id: &str) -> u32 {
        self.entries.get(item_id).map(|e| e.quantity).unwrap_or(0)
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> Vec<&SelectionEntry> {
        let mut entries: Vec<&SelectionEntry> = self.entries.values().collect();
        entries.sort_by_key(|e| e.seq);
        entries
    }

    /// Entries in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &SelectionEntry> {
        self.entries.values()
    }

    /// Counter bumped on every mutation that changed the ledger.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn take_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    fn touch(&mut self) {
        self.revision += 1;
    }
}
