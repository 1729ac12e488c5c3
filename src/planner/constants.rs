/// Guest count a planning session starts with.
pub const DEFAULT_GUEST_COUNT: u32 = 50;

/// Smallest guest count the planner accepts; lower inputs are clamped up.
pub const MIN_GUEST_COUNT: u32 = 1;

/// Serving capacity assumed when an item declares none (or zero).
pub const FALLBACK_SERVING_CAPACITY: u32 = 1;

/// Smallest quantity a ledger entry may hold.
pub const MIN_QUANTITY: u32 = 1;

/// Category label used for cart lines when the item has no category name.
pub const DEFAULT_CATEGORY_LABEL: &str = "Other";

// ─────────────────────────────────────────────────────────────────────────────
// Catalog search
// ─────────────────────────────────────────────────────────────────────────────

/// Minimum Jaro-Winkler similarity for a fuzzy name match.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Maximum fuzzy candidates offered to the planner at once.
pub const MAX_FUZZY_CANDIDATES: usize = 5;

/// Human-readable coverage advisory.
pub fn coverage_label(meets_guest_count: bool) -> &'static str {
    if meets_guest_count {
        "covers all guests"
    } else {
        "not enough"
    }
}
