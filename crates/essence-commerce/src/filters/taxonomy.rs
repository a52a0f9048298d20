//! Server-computed taxonomy of reachable filter options.

use crate::filters::FilterKey;
use serde::{Deserialize, Serialize};

/// The option values still reachable per dimension, given the other
/// active filters.
///
/// The backend regenerates this on every filter change; it is never
/// computed client-side. On a failed taxonomy fetch the client resets to
/// [`Taxonomy::empty`] rather than keeping a possibly inconsistent scope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Taxonomy {
    pub departments: Vec<String>,
    pub brands: Vec<String>,
    pub categories: Vec<String>,
    pub subcategories: Vec<String>,
}

impl Taxonomy {
    /// A taxonomy with no options in any dimension.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Options for a dimension, in server order.
    pub fn options(&self, key: FilterKey) -> &[String] {
        match key {
            FilterKey::Department => &self.departments,
            FilterKey::Brand => &self.brands,
            FilterKey::Category => &self.categories,
            FilterKey::Subcategory => &self.subcategories,
        }
    }

    /// Check whether every dimension is empty.
    pub fn is_empty(&self) -> bool {
        FilterKey::ALL.iter().all(|k| self.options(*k).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_taxonomy() {
        let t = Taxonomy::empty();
        assert!(t.is_empty());
        assert!(t.options(FilterKey::Brand).is_empty());
    }

    #[test]
    fn test_options_lookup() {
        let t = Taxonomy {
            departments: vec!["Fragancias".into()],
            brands: vec!["Dior".into(), "Chanel".into()],
            ..Taxonomy::empty()
        };
        assert_eq!(t.options(FilterKey::Brand).len(), 2);
        assert!(!t.is_empty());
    }
}
