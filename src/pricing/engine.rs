use rust_decimal::Decimal;

use crate::models::{LedgerLine, SelectionEntry};
use crate::state::SelectionLedger;

/// Itemized view of a ledger with its totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingSummary {
    pub lines: Vec<LedgerLine>,
    pub total: Decimal,
    /// Distinct items selected.
    pub item_count: usize,
    /// Sum of quantities across all entries.
    pub total_units: u64,
}

/// Cost of one entry at its locked-in customer price, saturating at the
/// decimal range.
#[inline]
pub fn line_cost(entry: &SelectionEntry) -> Decimal {
    entry
        .unit_customer_price
        .saturating_mul(Decimal::from(entry.quantity))
}

fn saturating_sum(costs: impl Iterator<Item = Decimal>) -> Decimal {
    costs.fold(Decimal::ZERO, Decimal::saturating_add)
}

/// Sum of all line costs. Order-independent.
pub fn total(ledger: &SelectionLedger) -> Decimal {
    saturating_sum(ledger.iter().map(line_cost))
}

/// Number of distinct items in the ledger, not the sum of quantities.
pub fn item_count(ledger: &SelectionLedger) -> usize {
    ledger.len()
}

pub fn total_units(ledger: &SelectionLedger) -> u64 {
    ledger.iter().map(|e| u64::from(e.quantity)).sum()
}

/// Ledger rows in insertion order.
pub fn ledger_lines(ledger: &SelectionLedger) -> Vec<LedgerLine> {
    ledger
        .entries()
        .into_iter()
        .map(|entry| LedgerLine {
            item_id: entry.item_id.clone(),
            name: entry.name().to_string(),
            quantity: entry.quantity,
            unit_customer_price: entry.unit_customer_price,
            line_cost: line_cost(entry),
        })
        .collect()
}

pub fn summarize(ledger: &SelectionLedger) -> PricingSummary {
    let lines = ledger_lines(ledger);
    let total = saturating_sum(lines.iter().map(|l| l.line_cost));

    PricingSummary {
        lines,
        total,
        item_count: item_count(ledger),
        total_units: total_units(ledger),
    }
}
