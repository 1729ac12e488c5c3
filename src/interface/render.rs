use rust_decimal::Decimal;

use crate::models::{CartLine, CatalogItem, MarginMode};
use crate::planner::constants::coverage_label;
use crate::planner::{GuestCount, QuantitySuggestion};
use crate::pricing::PricingSummary;

/// Format a price with two decimal places.
pub fn format_price(price: Decimal) -> String {
    format!("{:.2}", price.round_dp(2))
}

fn format_margin(item: &CatalogItem) -> String {
    match item.margin_mode() {
        MarginMode::Percent => format!("{}%", item.margin_value().normalize()),
        MarginMode::Fixed => format!("+{}", format_price(item.margin_value())),
    }
}

/// Display catalog items with base and customer prices.
pub fn display_catalog(items: &[&CatalogItem], title: &str) {
    if items.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, items.len());
    println!();

    let max_name_len = items.iter().map(|i| i.name.len()).max().unwrap_or(10);

    for item in items {
        let serves = match item.planning_capacity() {
            Some(c) => format!("serves {}", c),
            None => "no serving info".to_string(),
        };
        let veg = if item.is_vegetarian { " [veg]" } else { "" };

        println!(
            "  {:<width$}  base {:>9} | margin {:>8} | price {:>9} | {}{}",
            item.name,
            format_price(item.base_price),
            format_margin(item),
            format_price(item.customer_price()),
            serves,
            veg,
            width = max_name_len
        );
    }

    println!();
}

/// Display the current selection with totals.
pub fn display_ledger(summary: &PricingSummary, guest_count: GuestCount) {
    println!();
    println!("=== Selection for {} guests ===", guest_count);
    println!();

    if summary.lines.is_empty() {
        println!("  (nothing selected)");
        println!();
        return;
    }

    let max_name_len = summary
        .lines
        .iter()
        .map(|l| l.name.len())
        .max()
        .unwrap_or(10);

    for (i, line) in summary.lines.iter().enumerate() {
        println!(
            "{:>3}. {:<width$} - {:>4} x {:>9} = {:>10}",
            i + 1,
            line.name,
            line.quantity,
            format_price(line.unit_customer_price),
            format_price(line.line_cost),
            width = max_name_len
        );
    }

    println!();
    println!("--- Summary ---");
    println!("Items selected: {}", summary.item_count);
    println!("Total units: {}", summary.total_units);
    println!("Total cost: {}", format_price(summary.total));
    println!();
}

/// Display a quantity suggestion with its coverage advisory.
pub fn display_suggestion(suggestion: &QuantitySuggestion) {
    let capacity = suggestion.effective_capacity();
    let coverage = suggestion.coverage();

    println!();
    println!("=== Quantity Suggestion: {} ===", suggestion.name);
    println!("Price per unit: {}", format_price(suggestion.unit_customer_price));
    println!("Your guests: {}", suggestion.guest_count);
    println!("Serves per unit: {} persons", capacity);
    println!("Recommended quantity: {} units", suggestion.suggested);
    println!();

    let advisory = if coverage.meets_guest_count {
        coverage_label(true).to_string()
    } else {
        format!(
            "{} for {} guests (short by {})",
            coverage_label(false),
            suggestion.guest_count,
            coverage.shortfall(suggestion.guest_count)
        )
    };

    println!(
        "{} units x {} persons = {} servings ({})",
        suggestion.quantity(),
        capacity,
        coverage.actual_servings,
        advisory
    );
    println!(
        "Estimated cost: {} ({} units x {})",
        format_price(suggestion.estimated_cost()),
        suggestion.quantity(),
        format_price(suggestion.unit_customer_price)
    );
    println!();
}

/// Display the lines handed to the cart on checkout.
pub fn display_cart(lines: &[CartLine]) {
    println!();
    println!("=== Cart ({} items) ===", lines.len());
    for line in lines {
        println!(
            "  [{}] {} x{} @ {}",
            line.category_label,
            line.name,
            line.quantity,
            format_price(line.unit_customer_price)
        );
    }
    println!();
}
