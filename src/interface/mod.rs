pub mod prompts;
pub mod render;

pub use prompts::{
    prompt_action, prompt_guest_count, prompt_item, prompt_quantity_delta, prompt_suggestion,
    prompt_yes_no, PlanAction,
};
pub use render::{display_cart, display_catalog, display_ledger, display_suggestion, format_price};
