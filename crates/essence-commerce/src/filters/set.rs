//! The filter selector and its cascading-reset rule.

use crate::filters::FilterKey;
use serde::{Deserialize, Serialize};

/// The four-dimensional product-classification selector.
///
/// An unset key means "unconstrained along that dimension". `set` enforces
/// the cascade invariant: assigning a key clears every key of strictly
/// greater rank, so a narrower selection never outlives the broader value
/// it was scoped to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSet {
    department: Option<String>,
    brand: Option<String>,
    category: Option<String>,
    subcategory: Option<String>,
}

impl FilterSet {
    /// Create an all-unconstrained filter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the selected value for a key, if any.
    pub fn get(&self, key: FilterKey) -> Option<&str> {
        self.slot(key).as_deref()
    }

    /// Assign a value to a key, cascading the reset to dependent keys.
    ///
    /// An empty string clears the key. Returns `false` when the value
    /// equals the current selection (idempotence guard: nothing changes,
    /// including dependents).
    pub fn set(&mut self, key: FilterKey, value: &str) -> bool {
        let new = if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        };
        if *self.slot(key) == new {
            return false;
        }
        *self.slot_mut(key) = new;
        for dependent in key.dependents() {
            *self.slot_mut(dependent) = None;
        }
        true
    }

    /// Clear a single key (and, via the cascade, its dependents).
    pub fn clear(&mut self, key: FilterKey) -> bool {
        self.set(key, "")
    }

    /// Clear every key.
    pub fn clear_all(&mut self) {
        *self = Self::new();
    }

    /// Check whether no dimension is constrained.
    pub fn is_empty(&self) -> bool {
        FilterKey::ALL.iter().all(|k| self.get(*k).is_none())
    }

    /// Selected `(key, value)` pairs in rank order.
    ///
    /// Unset keys are omitted, matching the wire convention that an
    /// absent query parameter means "unconstrained".
    pub fn entries(&self) -> Vec<(FilterKey, &str)> {
        FilterKey::ALL
            .iter()
            .filter_map(|k| self.get(*k).map(|v| (*k, v)))
            .collect()
    }

    /// A copy containing only the selected keys.
    ///
    /// `FilterSet` never stores empty strings, so this is a plain clone;
    /// it exists to make "the non-empty filters were snapshotted here"
    /// explicit at call sites.
    pub fn non_empty(&self) -> FilterSet {
        self.clone()
    }

    fn slot(&self, key: FilterKey) -> &Option<String> {
        match key {
            FilterKey::Department => &self.department,
            FilterKey::Brand => &self.brand,
            FilterKey::Category => &self.category,
            FilterKey::Subcategory => &self.subcategory,
        }
    }

    fn slot_mut(&mut self, key: FilterKey) -> &mut Option<String> {
        match key {
            FilterKey::Department => &mut self.department,
            FilterKey::Brand => &mut self.brand,
            FilterKey::Category => &mut self.category,
            FilterKey::Subcategory => &mut self.subcategory,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_set() -> FilterSet {
        let mut f = FilterSet::new();
        f.set(FilterKey::Department, "Ropa");
        f.set(FilterKey::Brand, "Nike");
        f.set(FilterKey::Category, "Zapatos");
        f.set(FilterKey::Subcategory, "Running");
        f
    }

    #[test]
    fn test_cascade_clears_dependents() {
        let mut f = full_set();
        assert!(f.set(FilterKey::Brand, "Adidas"));

        assert_eq!(f.get(FilterKey::Department), Some("Ropa"));
        assert_eq!(f.get(FilterKey::Brand), Some("Adidas"));
        assert_eq!(f.get(FilterKey::Category), None);
        assert_eq!(f.get(FilterKey::Subcategory), None);
    }

    #[test]
    fn test_cascade_leaves_broader_keys_alone() {
        let mut f = full_set();
        f.set(FilterKey::Subcategory, "Trail");
        assert_eq!(f.get(FilterKey::Department), Some("Ropa"));
        assert_eq!(f.get(FilterKey::Brand), Some("Nike"));
        assert_eq!(f.get(FilterKey::Category), Some("Zapatos"));
    }

    #[test]
    fn test_idempotent_set_is_a_no_op() {
        let mut f = full_set();
        assert!(!f.set(FilterKey::Brand, "Nike"));
        // Dependents must survive an idempotent assignment.
        assert_eq!(f.get(FilterKey::Category), Some("Zapatos"));
        assert_eq!(f.get(FilterKey::Subcategory), Some("Running"));
    }

    #[test]
    fn test_empty_value_clears_key_and_cascades() {
        let mut f = full_set();
        assert!(f.set(FilterKey::Department, ""));
        assert!(f.is_empty());
    }

    #[test]
    fn test_clear_already_empty_is_no_op() {
        let mut f = FilterSet::new();
        assert!(!f.clear(FilterKey::Brand));
    }

    #[test]
    fn test_entries_in_rank_order() {
        let mut f = FilterSet::new();
        f.set(FilterKey::Department, "Fragancias");
        f.set(FilterKey::Category, "Eau de Parfum");
        let entries = f.entries();
        assert_eq!(
            entries,
            vec![
                (FilterKey::Department, "Fragancias"),
                (FilterKey::Category, "Eau de Parfum"),
            ]
        );
    }

    #[test]
    fn test_clear_all() {
        let mut f = full_set();
        f.clear_all();
        assert!(f.is_empty());
        assert!(f.entries().is_empty());
    }
}
