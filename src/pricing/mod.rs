pub mod engine;
pub mod margin;

pub use engine::{item_count, ledger_lines, line_cost, summarize, total, total_units, PricingSummary};
pub use margin::{compute_margin, customer_price};
