use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::planner::constants::DEFAULT_CATEGORY_LABEL;
use crate::pricing::margin;

/// How the platform margin is applied on top of the supplier's base price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarginMode {
    /// Proportional markup: `margin_value` is a percentage of the base price.
    #[default]
    Percent,
    /// Flat add-on: `margin_value` is added to the base price as-is.
    Fixed,
}

/// A catalog item as supplied by the catalog provider.
///
/// The planner treats items as read-only snapshots. Optional fields carry
/// defined defaults through the accessor methods rather than at the call site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,

    pub name: String,

    /// Supplier price per unit, before platform margin.
    #[serde(rename = "price")]
    pub base_price: Decimal,

    #[serde(rename = "platform_margin_type", default)]
    pub margin_mode: Option<MarginMode>,

    #[serde(rename = "platform_margin_value", default)]
    pub margin_value: Option<Decimal>,

    /// Persons served by one unit.
    #[serde(rename = "serves_persons", default)]
    pub serving_capacity: Option<u32>,

    #[serde(default)]
    pub category_id: Option<String>,

    #[serde(default)]
    pub category_name: Option<String>,

    #[serde(default)]
    pub is_vegetarian: bool,

    #[serde(default = "default_available")]
    pub is_available: bool,
}

fn default_available() -> bool {
    true
}

impl CatalogItem {
    /// Margin mode, defaulting to percent when the provider left it unset.
    #[inline]
    pub fn margin_mode(&self) -> MarginMode {
        self.margin_mode.unwrap_or_default()
    }

    /// Margin value, defaulting to zero.
    #[inline]
    pub fn margin_value(&self) -> Decimal {
        self.margin_value.unwrap_or(Decimal::ZERO)
    }

    /// Serving capacity usable for quantity planning.
    ///
    /// A zero capacity is reported as `None`: the item is not plannable.
    #[inline]
    pub fn planning_capacity(&self) -> Option<u32> {
        self.serving_capacity.filter(|&c| c > 0)
    }

    pub fn is_plannable(&self) -> bool {
        self.planning_capacity().is_some()
    }

    pub fn margin(&self) -> Decimal {
        margin::compute_margin(self.base_price, self.margin_mode(), self.margin_value)
    }

    /// Base price plus platform margin.
    pub fn customer_price(&self) -> Decimal {
        margin::customer_price(self.base_price, self.margin_mode(), self.margin_value)
    }

    /// Category name for exported cart lines.
    pub fn category_label(&self) -> &str {
        self.category_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(DEFAULT_CATEGORY_LABEL)
    }
}
