use clap::Parser;
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

use catering_planner_rs::CatalogItem;
use catering_planner_rs::cli::{CartFormat, Cli, Command};
use catering_planner_rs::error::{PlannerError, Result};
use catering_planner_rs::interface::{
    display_cart, display_catalog, display_ledger, display_suggestion, prompt_action,
    prompt_guest_count, prompt_item, prompt_quantity_delta, prompt_suggestion, prompt_yes_no,
    PlanAction,
};
use catering_planner_rs::planner::{GuestCount, QuantitySuggestion};
use catering_planner_rs::pricing;
use catering_planner_rs::state::{
    load_catalog, write_cart_csv, write_cart_json, Catalog, CatalogFilter, SelectionLedger,
};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan {
            guests,
            cart,
            format,
        } => cmd_plan(&cli.catalog, GuestCount::new(guests), &cart, format),
        Command::Suggest { item, guests } => {
            cmd_suggest(&cli.catalog, &item, GuestCount::new(guests))
        }
        Command::Prices {
            query,
            category,
            plannable,
            vegetarian,
        } => {
            let filter = CatalogFilter {
                query,
                category_id: category,
                plannable_only: plannable,
                vegetarian_only: vegetarian,
                include_unavailable: false,
            };
            cmd_prices(&cli.catalog, &filter)
        }
    }
}

fn open_catalog(path: &Path) -> Result<Catalog> {
    if !path.exists() {
        eprintln!("Catalog file not found: {}", path.display());
        eprintln!("Pass --catalog <path> or place catalog.json in the current directory.");
        return Err(PlannerError::InvalidInput(format!(
            "missing catalog file {}",
            path.display()
        )));
    }

    Ok(Catalog::new(load_catalog(path)?))
}

/// List catalog items with their customer prices.
fn cmd_prices(catalog_path: &Path, filter: &CatalogFilter) -> Result<()> {
    let catalog = open_catalog(catalog_path)?;
    let items = catalog.filter(filter);

    display_catalog(&items, "Catalog");

    let categories = catalog.categories();
    if !categories.is_empty() {
        let names: Vec<String> = categories
            .iter()
            .map(|(id, name)| format!("{} ({})", name, id))
            .collect();
        println!("Categories: {}", names.join(", "));
    }

    Ok(())
}

/// Print a one-off quantity suggestion.
fn cmd_suggest(catalog_path: &Path, query: &str, guests: GuestCount) -> Result<()> {
    let catalog = open_catalog(catalog_path)?;
    let item = catalog
        .resolve_for_planning(query)
        .ok_or_else(|| PlannerError::ItemNotFound(query.to_string()))?;

    if !item.is_plannable() {
        println!(
            "'{}' has no serving information; planning one unit per guest.",
            item.name
        );
    }

    display_suggestion(&QuantitySuggestion::new(item, guests));
    Ok(())
}

/// Interactive planning session over a selection ledger.
fn cmd_plan(catalog_path: &Path, start: GuestCount, cart_path: &Path, format: CartFormat) -> Result<()> {
    let catalog = open_catalog(catalog_path)?;
    let available = catalog.filter(&CatalogFilter::default());

    if available.is_empty() {
        println!("No catalog items are available.");
        return Ok(());
    }

    println!("Loaded {} catalog items ({} available)", catalog.len(), available.len());

    let mut guests = start;
    let mut ledger = SelectionLedger::new();
    info!(guests = guests.get(), "planning session started");

    loop {
        display_ledger(&pricing::summarize(&ledger), guests);

        match prompt_action()? {
            PlanAction::AddOne => {
                if let Some(item) = pick_item(&catalog, &available, "Item to add")? {
                    ledger.increment_or_add(item);
                }
            }
            PlanAction::Suggest => {
                if let Some(item) = pick_item(&catalog, &available, "Item to plan")? {
                    let mut suggestion = QuantitySuggestion::new(item, guests);
                    if prompt_suggestion(&mut suggestion)? {
                        suggestion.accept(&mut ledger);
                    }
                }
            }
            PlanAction::RemoveOne => {
                if let Some(id) = pick_selected(&catalog, &ledger, "Item to remove one unit of")? {
                    ledger.decrement_or_remove(&id);
                }
            }
            PlanAction::Adjust => {
                if let Some(id) = pick_selected(&catalog, &ledger, "Item to adjust")? {
                    match prompt_quantity_delta() {
                        Ok(delta) => ledger.adjust(&id, delta),
                        Err(PlannerError::InvalidInput(msg)) => println!("{}", msg),
                        Err(e) => return Err(e),
                    }
                }
            }
            PlanAction::RemoveItem => {
                if let Some(id) = pick_selected(&catalog, &ledger, "Item to remove")? {
                    ledger.remove(&id);
                }
            }
            PlanAction::ChangeGuests => {
                let updated = prompt_guest_count(guests)?;
                if updated != guests {
                    guests = updated;
                    let changed = ledger.recompute_for_guest_count(guests);
                    if changed > 0 {
                        println!("Recomputed {} quantities for {} guests.", changed, guests);
                    }
                }
            }
            PlanAction::ShowCatalog => display_catalog(&available, "Available items"),
            PlanAction::Checkout => {
                if ledger.is_empty() {
                    println!("Nothing selected yet.");
                    continue;
                }

                let lines = ledger.commit();
                display_cart(&lines);

                if prompt_yes_no("Write cart?", true)? {
                    match format {
                        CartFormat::Json => write_cart_json(cart_path, &lines)?,
                        CartFormat::Csv => write_cart_csv(cart_path, &lines)?,
                    }
                    println!("Cart written to {}", cart_path.display());
                    info!(items = lines.len(), "planning session committed");
                    return Ok(());
                }
            }
            PlanAction::Cancel => {
                if ledger.is_empty() || prompt_yes_no("Discard the current selection?", false)? {
                    info!(entries = ledger.len(), "planning session cancelled");
                    return Ok(());
                }
            }
        }
    }
}

fn pick_item<'a>(
    catalog: &'a Catalog,
    candidates: &[&'a CatalogItem],
    prompt: &str,
) -> Result<Option<&'a CatalogItem>> {
    Ok(prompt_item(candidates, prompt)?.and_then(|id| catalog.get(&id)))
}

/// Resolve an item among those already in the ledger.
fn pick_selected(catalog: &Catalog, ledger: &SelectionLedger, prompt: &str) -> Result<Option<String>> {
    if ledger.is_empty() {
        println!("Nothing selected yet.");
        return Ok(None);
    }

    let selected: Vec<_> = ledger
        .entries()
        .into_iter()
        .filter_map(|entry| catalog.get(&entry.item_id))
        .collect();

    prompt_item(&selected, prompt)
}
