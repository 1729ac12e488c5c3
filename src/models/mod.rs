mod catalog;
mod selection;

pub use catalog::{CatalogItem, MarginMode};
pub use selection::{CartLine, ItemSnapshot, LedgerLine, SelectionEntry};
