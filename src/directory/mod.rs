//! Filtering and selection over fixed record collections.
//!
//! The lawyer directory and the IPC catalog share one contract: a static,
//! order-fixed collection is narrowed by a small set of user criteria. Each
//! active criterion matches on its own terms (substring for text, exact tag
//! for category), and a record is visible only if it satisfies all of them.
//! Filtering is a pure, total recomputation over the current criteria; no
//! partial state is carried between recomputations.

use serde::{Deserialize, Serialize};

/// A record that can be listed and narrowed in a directory view.
pub trait DirectoryEntry {
    /// Stable identifier used for selection.
    fn key(&self) -> &str;

    /// The fields probed by the free-text query, in display order.
    fn search_fields(&self) -> Vec<&str>;

    /// Tags the category criterion matches exactly against.
    fn categories(&self) -> &[String];

    /// Region matched by the location criterion, if the record type has one.
    fn location(&self) -> Option<&str> {
        None
    }
}

/// The user-chosen constraints currently applied to a collection.
///
/// Created empty when a view opens, mutated on every input event, and
/// discarded on navigation. An empty or absent value means "no constraint"
/// for that criterion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Free-text query; empty matches every record.
    pub query: String,
    /// Exact category tag; `None` (or empty) matches every record.
    pub category: Option<String>,
    /// Location substring; `None` (or empty) matches every record.
    pub location: Option<String>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no criterion is active and the whole collection is visible.
    pub fn is_unconstrained(&self) -> bool {
        self.query.is_empty() && self.active_category().is_none() && self.active_location().is_none()
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Empty input clears the location criterion.
    pub fn set_location(&mut self, location: impl Into<String>) {
        let location = location.into();
        self.location = if location.is_empty() { None } else { Some(location) };
    }

    /// Category pill semantics: selecting the active category clears it,
    /// selecting any other category replaces the previous one. At most one
    /// category is active at a time.
    pub fn toggle_category(&mut self, category: &str) {
        if self.active_category() == Some(category) {
            self.category = None;
        } else {
            self.category = Some(category.to_string());
        }
    }

    fn active_category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }

    fn active_location(&self) -> Option<&str> {
        self.location.as_deref().filter(|l| !l.is_empty())
    }

    /// AND of all active criteria. Pure: no state is touched.
    pub fn matches<E: DirectoryEntry + ?Sized>(&self, entry: &E) -> bool {
        if !self.query.is_empty() {
            let needle = self.query.to_lowercase();
            let hit = entry
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle));
            if !hit {
                return false;
            }
        }

        if let Some(category) = self.active_category() {
            // Exact tag membership, case-sensitive.
            if !entry.categories().iter().any(|c| c == category) {
                return false;
            }
        }

        if let Some(location) = self.active_location() {
            let needle = location.to_lowercase();
            match entry.location() {
                Some(loc) if loc.to_lowercase().contains(&needle) => {}
                _ => return false,
            }
        }

        true
    }
}

/// Compute the visible subset of `entries` under `criteria`.
///
/// The result preserves input order and borrows from the collection; an
/// empty result is a valid result, not an error.
pub fn filter_entries<'a, E: DirectoryEntry>(
    entries: &'a [E],
    criteria: &FilterCriteria,
) -> Vec<&'a E> {
    entries.iter().filter(|entry| criteria.matches(*entry)).collect()
}

/// Per-view state: the active criteria plus at most one selected record.
///
/// Selection is keyed, not indexed, so it stays stable while the visible
/// subset changes underneath it.
#[derive(Debug, Clone, Default)]
pub struct DirectoryView {
    pub criteria: FilterCriteria,
    selected: Option<String>,
}

impl DirectoryView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a click; the last selection wins and replaces the previous one.
    pub fn select(&mut self, key: impl Into<String>) {
        self.selected = Some(key.into());
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected_key(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// The subset currently visible under this view's criteria.
    pub fn visible<'a, E: DirectoryEntry>(&self, entries: &'a [E]) -> Vec<&'a E> {
        filter_entries(entries, &self.criteria)
    }

    /// Resolve the selection against the full collection, not the filtered
    /// subset: a selected record keeps its detail panel even after a filter
    /// change excludes it from the list. This mirrors the legacy UI; see
    /// DESIGN.md before changing it.
    pub fn selected_entry<'a, E: DirectoryEntry>(&self, entries: &'a [E]) -> Option<&'a E> {
        let key = self.selected.as_deref()?;
        entries.iter().find(|entry| entry.key() == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item {
        key: String,
        name: String,
        tags: Vec<String>,
        city: Option<String>,
    }

    impl Item {
        fn new(key: &str, name: &str, tags: &[&str], city: Option<&str>) -> Self {
            Self {
                key: key.to_string(),
                name: name.to_string(),
                tags: tags.iter().map(|t| t.to_string()).collect(),
                city: city.map(|c| c.to_string()),
            }
        }
    }

    impl DirectoryEntry for Item {
        fn key(&self) -> &str {
            &self.key
        }

        fn search_fields(&self) -> Vec<&str> {
            let mut fields = vec![self.name.as_str()];
            fields.extend(self.tags.iter().map(String::as_str));
            fields
        }

        fn categories(&self) -> &[String] {
            &self.tags
        }

        fn location(&self) -> Option<&str> {
            self.city.as_deref()
        }
    }

    fn sample() -> Vec<Item> {
        vec![
            Item::new("a", "Alpha Notary", &["Property"], Some("Mumbai")),
            Item::new("b", "Beta Counsel", &["Criminal"], Some("Delhi")),
            Item::new("c", "Gamma Chambers", &["Property", "Civil"], Some("Mumbai")),
        ]
    }

    fn keys(entries: &[&Item]) -> Vec<String> {
        entries.iter().map(|e| e.key.clone()).collect()
    }

    #[test]
    fn empty_criteria_return_everything_in_order() {
        let items = sample();
        let criteria = FilterCriteria::new();
        assert!(criteria.is_unconstrained());
        assert_eq!(keys(&filter_entries(&items, &criteria)), ["a", "b", "c"]);
    }

    #[test]
    fn query_is_case_insensitive_across_fields() {
        let items = sample();
        let mut criteria = FilterCriteria::new();
        criteria.set_query("BETA");
        assert_eq!(keys(&filter_entries(&items, &criteria)), ["b"]);

        // Tag fields are searchable too.
        criteria.set_query("civil");
        assert_eq!(keys(&filter_entries(&items, &criteria)), ["c"]);
    }

    #[test]
    fn category_is_exact_and_case_sensitive() {
        let items = sample();
        let mut criteria = FilterCriteria::new();
        criteria.toggle_category("Property");
        assert_eq!(keys(&filter_entries(&items, &criteria)), ["a", "c"]);

        criteria.category = Some("property".to_string());
        assert!(filter_entries(&items, &criteria).is_empty());

        // Substrings of a tag do not count as membership.
        criteria.category = Some("Prop".to_string());
        assert!(filter_entries(&items, &criteria).is_empty());
    }

    #[test]
    fn toggle_clears_then_replaces() {
        let mut criteria = FilterCriteria::new();
        criteria.toggle_category("Property");
        assert_eq!(criteria.category.as_deref(), Some("Property"));

        // Re-selecting the active pill deselects it.
        criteria.toggle_category("Property");
        assert_eq!(criteria.category, None);

        // Selecting a different pill replaces in one step.
        criteria.toggle_category("Property");
        criteria.toggle_category("Criminal");
        assert_eq!(criteria.category.as_deref(), Some("Criminal"));
    }

    #[test]
    fn location_is_substring_and_case_insensitive() {
        let items = sample();
        let mut criteria = FilterCriteria::new();
        criteria.set_location("mumBAI");
        assert_eq!(keys(&filter_entries(&items, &criteria)), ["a", "c"]);

        criteria.set_location("");
        assert!(criteria.is_unconstrained());
    }

    #[test]
    fn combined_criteria_intersect() {
        let items = sample();

        let mut by_category = FilterCriteria::new();
        by_category.toggle_category("Property");
        let mut by_location = FilterCriteria::new();
        by_location.set_location("Mumbai");

        let mut both = FilterCriteria::new();
        both.toggle_category("Property");
        both.set_location("Mumbai");

        let lhs = keys(&filter_entries(&items, &both));
        let category_keys = keys(&filter_entries(&items, &by_category));
        let location_keys = keys(&filter_entries(&items, &by_location));
        let rhs: Vec<String> = category_keys
            .into_iter()
            .filter(|k| location_keys.contains(k))
            .collect();
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn empty_strings_do_not_constrain() {
        let items = sample();
        let criteria = FilterCriteria {
            query: String::new(),
            category: Some(String::new()),
            location: Some(String::new()),
        };
        assert_eq!(filter_entries(&items, &criteria).len(), 3);
    }

    #[test]
    fn selection_last_click_wins() {
        let items = sample();
        let mut view = DirectoryView::new();
        assert!(view.selected_entry(&items).is_none());

        view.select("a");
        view.select("b");
        assert_eq!(view.selected_entry(&items).map(|e| e.key.as_str()), Some("b"));
    }

    #[test]
    fn selection_survives_exclusion_by_filter() {
        let items = sample();
        let mut view = DirectoryView::new();
        view.select("b");
        view.criteria.toggle_category("Property");

        // "b" is no longer visible, but the detail panel still resolves it.
        assert!(view.visible(&items).iter().all(|e| e.key != "b"));
        assert_eq!(view.selected_entry(&items).map(|e| e.key.as_str()), Some("b"));
    }

    #[test]
    fn selection_of_unknown_key_resolves_to_none() {
        let items = sample();
        let mut view = DirectoryView::new();
        view.select("zz");
        assert!(view.selected_entry(&items).is_none());
    }
}
