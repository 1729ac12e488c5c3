use dialoguer::{Confirm, Input, Select};

use crate::error::{PlannerError, Result};
use crate::interface::render::display_suggestion;
use crate::models::CatalogItem;
use crate::planner::constants::MAX_FUZZY_CANDIDATES;
use crate::planner::{GuestCount, QuantitySuggestion};
use crate::state::Catalog;

/// One planner action in an interactive session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanAction {
    AddOne,
    Suggest,
    RemoveOne,
    Adjust,
    RemoveItem,
    ChangeGuests,
    ShowCatalog,
    Checkout,
    Cancel,
}

impl PlanAction {
    const ALL: [PlanAction; 9] = [
        PlanAction::AddOne,
        PlanAction::Suggest,
        PlanAction::RemoveOne,
        PlanAction::Adjust,
        PlanAction::RemoveItem,
        PlanAction::ChangeGuests,
        PlanAction::ShowCatalog,
        PlanAction::Checkout,
        PlanAction::Cancel,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PlanAction::AddOne => "Add one unit of an item",
            PlanAction::Suggest => "Suggest quantity for an item",
            PlanAction::RemoveOne => "Remove one unit",
            PlanAction::Adjust => "Adjust a quantity",
            PlanAction::RemoveItem => "Remove an item",
            PlanAction::ChangeGuests => "Change guest count",
            PlanAction::ShowCatalog => "Show catalog",
            PlanAction::Checkout => "Checkout",
            PlanAction::Cancel => "Cancel session",
        }
    }
}

/// Prompt for the guest count. Values below 1 become 1.
pub fn prompt_guest_count(current: GuestCount) -> Result<GuestCount> {
    let input: String = Input::new()
        .with_prompt("How many guests?")
        .default(current.to_string())
        .interact_text()?;

    Ok(GuestCount::parse(&input))
}

/// Prompt for the next session action.
pub fn prompt_action() -> Result<PlanAction> {
    let labels: Vec<&str> = PlanAction::ALL.iter().map(|a| a.label()).collect();

    let selection = Select::new()
        .with_prompt("What next?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(PlanAction::ALL[selection])
}

/// Prompt for an item by name with fuzzy matching. Returns the item id.
pub fn prompt_item(candidates: &[&CatalogItem], prompt: &str) -> Result<Option<String>> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;

    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    let matches = Catalog::find_by_name(candidates, input);

    match matches.len() {
        0 => {
            println!("No matching item found for '{}'", input);
            Ok(None)
        }
        1 => {
            let item = matches[0].0;
            if matches[0].1 >= 1.0 {
                return Ok(Some(item.id.clone()));
            }

            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", item.name))
                .default(true)
                .interact()?;

            Ok(confirm.then(|| item.id.clone()))
        }
        _ => {
            let options: Vec<&CatalogItem> = matches
                .iter()
                .take(MAX_FUZZY_CANDIDATES)
                .map(|(item, _)| *item)
                .collect();

            let mut labels: Vec<String> = options.iter().map(|i| i.name.clone()).collect();
            labels.push("None of these".to_string());

            let selection = Select::new()
                .with_prompt("Which did you mean?")
                .items(&labels)
                .default(0)
                .interact()?;

            Ok(options.get(selection).map(|item| item.id.clone()))
        }
    }
}

/// Prompt for a signed quantity change.
pub fn prompt_quantity_delta() -> Result<i64> {
    let input: String = Input::new()
        .with_prompt("Change quantity by (e.g. 3 or -2)")
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| PlannerError::InvalidInput(format!("Invalid quantity change: {}", input)))
}

/// Walk the planner through a quantity suggestion.
///
/// Returns `true` when the planner accepts, `false` when they choose to edit
/// manually instead.
pub fn prompt_suggestion(suggestion: &mut QuantitySuggestion) -> Result<bool> {
    loop {
        display_suggestion(suggestion);

        let options = [
            format!("Accept ({})", suggestion.quantity()),
            "+1".to_string(),
            "-1".to_string(),
            "Enter quantity".to_string(),
            "Reset to suggestion".to_string(),
            "Edit manually".to_string(),
        ];

        let selection = Select::new()
            .with_prompt("Adjust quantity if needed")
            .items(&options)
            .default(0)
            .interact()?;

        match selection {
            0 => return Ok(true),
            1 => suggestion.increment(),
            2 => suggestion.decrement(),
            3 => {
                let input: String = Input::new()
                    .with_prompt("Quantity")
                    .default(suggestion.quantity().to_string())
                    .interact_text()?;
                // Unparsable input falls back to 1, like the guest-count field
                suggestion.set_quantity(input.trim().parse().unwrap_or(1));
            }
            4 => suggestion.reset(),
            _ => return Ok(false),
        }
    }
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
