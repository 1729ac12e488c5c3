use std::fmt;

use crate::planner::constants::{DEFAULT_GUEST_COUNT, FALLBACK_SERVING_CAPACITY, MIN_GUEST_COUNT};

/// Number of persons a plan must cover. Always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GuestCount(u32);

impl GuestCount {
    /// Build a guest count, clamping anything below 1 up to 1.
    pub fn new(count: i64) -> Self {
        let clamped = count.clamp(i64::from(MIN_GUEST_COUNT), i64::from(u32::MAX));
        Self(clamped as u32)
    }

    /// Parse a typed guest count from its leading integer.
    ///
    /// Surrounding whitespace and an optional sign are accepted and trailing
    /// text is ignored, so `"12 guests"` reads as 12. Input without leading
    /// digits falls back to 1, and counts too large to represent clamp to the
    /// maximum.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        let (negative, unsigned) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };

        let digits_end = unsigned
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(unsigned.len());
        let digits = &unsigned[..digits_end];
        if digits.is_empty() {
            return Self(MIN_GUEST_COUNT);
        }

        let magnitude = digits.parse::<u32>().unwrap_or(u32::MAX);
        if negative {
            Self(MIN_GUEST_COUNT)
        } else {
            Self::from(magnitude)
        }
    }

    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for GuestCount {
    fn default() -> Self {
        Self(DEFAULT_GUEST_COUNT)
    }
}

impl From<u32> for GuestCount {
    fn from(count: u32) -> Self {
        Self::new(i64::from(count))
    }
}

impl fmt::Display for GuestCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Advisory result of checking a quantity against the guest count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coverage {
    pub actual_servings: u64,
    pub meets_guest_count: bool,
}

impl Coverage {
    /// Guests left without a serving, zero when covered.
    pub fn shortfall(&self, guest_count: GuestCount) -> u64 {
        u64::from(guest_count.get()).saturating_sub(self.actual_servings)
    }
}

/// Capacity used for planning: the declared capacity if positive, else 1.
#[inline]
pub fn effective_capacity(serving_capacity: Option<u32>) -> u32 {
    serving_capacity
        .filter(|&c| c > 0)
        .unwrap_or(FALLBACK_SERVING_CAPACITY)
}

/// Minimum number of units whose servings reach the guest count.
///
/// Rounds up so the suggestion never under-provisions.
pub fn suggest_quantity(guest_count: GuestCount, serving_capacity: Option<u32>) -> u32 {
    let capacity = effective_capacity(serving_capacity);
    guest_count.get().div_ceil(capacity).max(1)
}

/// Servings delivered by `unit_count` units and whether they cover every guest.
pub fn coverage(unit_count: u32, serving_capacity: Option<u32>, guest_count: GuestCount) -> Coverage {
    let actual_servings = u64::from(unit_count) * u64::from(effective_capacity(serving_capacity));
    Coverage {
        actual_servings,
        meets_guest_count: actual_servings >= u64::from(guest_count.get()),
    }
}
