use std::collections::HashMap;

use strsim::jaro_winkler;

use crate::models::CatalogItem;
use crate::planner::constants::FUZZY_MATCH_THRESHOLD;

/// Criteria for narrowing the catalog before display.
#[derive(Debug, Clone, Default)]
pub struct CatalogFilter {
    /// Case-insensitive substring of the item name.
    pub query: Option<String>,
    pub category_id: Option<String>,
    /// Only items that declare a serving capacity.
    pub plannable_only: bool,
    pub vegetarian_only: bool,
    /// Include items the provider marked unavailable.
    pub include_unavailable: bool,
}

impl CatalogFilter {
    pub fn matches(&self, item: &CatalogItem) -> bool {
        if !self.include_unavailable && !item.is_available {
            return false;
        }
        if self.plannable_only && !item.is_plannable() {
            return false;
        }
        if self.vegetarian_only && !item.is_vegetarian {
            return false;
        }
        if let Some(category) = &self.category_id {
            if item.category_id.as_deref() != Some(category.as_str()) {
                return false;
            }
        }
        match &self.query {
            Some(query) => item.name.to_lowercase().contains(&query.to_lowercase()),
            None => true,
        }
    }
}

/// Read-only snapshot of catalog items handed over by the catalog provider.
pub struct Catalog {
    /// Items keyed by id.
    items: HashMap<String, CatalogItem>,
}

impl Catalog {
    /// Build a snapshot. Later items win on duplicate ids.
    pub fn new(items: Vec<CatalogItem>) -> Self {
        let mut map = HashMap::new();
        for item in items {
            map.insert(item.id.clone(), item);
        }
        Self { items: map }
    }

    pub fn get(&self, item_id: &str) -> Option<&CatalogItem> {
        self.items.get(item_id)
    }

    /// All items sorted by name.
    pub fn items(&self) -> Vec<&CatalogItem> {
        let mut items: Vec<&CatalogItem> = self.items.values().collect();
        items.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        items
    }

    /// Items passing `filter`, sorted by name.
    pub fn filter(&self, filter: &CatalogFilter) -> Vec<&CatalogItem> {
        self.items()
            .into_iter()
            .filter(|item| filter.matches(item))
            .collect()
    }

    /// Available items that declare a serving capacity.
    pub fn plannable(&self) -> Vec<&CatalogItem> {
        self.filter(&CatalogFilter {
            plannable_only: true,
            ..CatalogFilter::default()
        })
    }

    /// Distinct `(category_id, display name)` pairs, sorted by display name.
    pub fn categories(&self) -> Vec<(String, String)> {
        let mut seen: HashMap<&str, &str> = HashMap::new();
        for item in self.items.values() {
            if let Some(id) = item.category_id.as_deref() {
                let label = item.category_name.as_deref().unwrap_or(id);
                seen.entry(id).or_insert(label);
            }
        }

        let mut categories: Vec<(String, String)> = seen
            .into_iter()
            .map(|(id, name)| (id.to_string(), name.to_string()))
            .collect();
        categories.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
        categories
    }

    /// Resolve a typed name against `candidates`.
    ///
    /// An exact case-insensitive name or id match is returned alone with a
    /// score of 1.0. Otherwise returns fuzzy matches above the threshold,
    /// best first.
    pub fn find_by_name<'a>(
        candidates: &[&'a CatalogItem],
        input: &str,
    ) -> Vec<(&'a CatalogItem, f64)> {
        let needle = input.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        if let Some(exact) = candidates
            .iter()
            .find(|item| item.name.to_lowercase() == needle || item.id.to_lowercase() == needle)
        {
            return vec![(*exact, 1.0)];
        }

        let mut matches: Vec<(&CatalogItem, f64)> = candidates
            .iter()
            .map(|item| (*item, jaro_winkler(&item.name.to_lowercase(), &needle)))
            .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
            .collect();

        matches.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        matches
    }

    /// Resolve a typed name for quantity planning.
    ///
    /// An exact match wins even without serving information. Among fuzzy
    /// matches, the best plannable item is preferred over a closer item that
    /// would plan one unit per guest.
    pub fn resolve_for_planning(&self, input: &str) -> Option<&CatalogItem> {
        let all = self.items();
        let matches = Self::find_by_name(&all, input);

        match matches.first() {
            None => None,
            Some((item, score)) if *score >= 1.0 || item.is_plannable() => Some(*item),
            Some((closest, _)) => Self::find_by_name(&self.plannable(), input)
                .first()
                .map(|(item, _)| *item)
                .or(Some(*closest)),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
