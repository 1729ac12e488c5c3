pub mod constants;
pub mod quantity;
pub mod suggestion;

pub use constants::*;
pub use quantity::{coverage, effective_capacity, suggest_quantity, Coverage, GuestCount};
pub use suggestion::QuantitySuggestion;
