pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;
pub mod pricing;
pub mod state;

pub use error::{PlannerError, Result};
pub use models::{CartLine, CatalogItem, MarginMode, SelectionEntry};
pub use planner::{Coverage, GuestCount, QuantitySuggestion};
pub use state::{Catalog, SelectionLedger};
