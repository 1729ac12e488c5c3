mod catalog;
mod ledger;
mod persistence;

pub use catalog::{Catalog, CatalogFilter};
pub use ledger::SelectionLedger;
pub use persistence::{load_catalog, write_cart_csv, write_cart_json};
