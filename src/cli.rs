use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::planner::constants::DEFAULT_GUEST_COUNT;

/// Catering planner: turns guest counts into purchase quantities and customer prices.
#[derive(Parser, Debug)]
#[command(name = "catering_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the catalog snapshot JSON file.
    #[arg(short, long, default_value = "catalog.json", global = true)]
    pub catalog: PathBuf,

    /// Enable debug logging (overrides RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run an interactive planning session.
    Plan {
        /// Starting guest count.
        #[arg(short, long, default_value_t = i64::from(DEFAULT_GUEST_COUNT), allow_negative_numbers = true)]
        guests: i64,

        /// Where to write the cart on checkout.
        #[arg(long, default_value = "cart.json")]
        cart: PathBuf,

        /// Cart file format.
        #[arg(long, value_enum, default_value_t = CartFormat::Json)]
        format: CartFormat,
    },

    /// Suggest a quantity for one item.
    Suggest {
        /// Item name or id (fuzzy matched).
        item: String,

        /// Guest count to plan for.
        #[arg(short, long, default_value_t = i64::from(DEFAULT_GUEST_COUNT), allow_negative_numbers = true)]
        guests: i64,
    },

    /// List catalog items with customer prices.
    Prices {
        /// Only items whose name contains this text.
        #[arg(short, long)]
        query: Option<String>,

        /// Only items in this category id.
        #[arg(long)]
        category: Option<String>,

        /// Only items with serving information.
        #[arg(long)]
        plannable: bool,

        /// Only vegetarian items.
        #[arg(long)]
        vegetarian: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Prices {
            query: None,
            category: None,
            plannable: false,
            vegetarian: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CartFormat {
    Json,
    Csv,
}
