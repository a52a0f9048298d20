//! Filter dimensions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A product-classification dimension the catalog can be filtered on.
///
/// Keys are ranked: department is the broadest, subcategory the narrowest.
/// Changing a key invalidates every key of strictly greater rank, because
/// the narrower selections were scoped to the old value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKey {
    Department,
    Brand,
    Category,
    Subcategory,
}

impl FilterKey {
    /// All keys in rank order.
    pub const ALL: [FilterKey; 4] = [
        FilterKey::Department,
        FilterKey::Brand,
        FilterKey::Category,
        FilterKey::Subcategory,
    ];

    /// Rank within the cascade (0 = broadest).
    pub fn rank(&self) -> u8 {
        match self {
            FilterKey::Department => 0,
            FilterKey::Brand => 1,
            FilterKey::Category => 2,
            FilterKey::Subcategory => 3,
        }
    }

    /// Wire query-parameter name for this key.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKey::Department => "department",
            FilterKey::Brand => "brand",
            FilterKey::Category => "category",
            FilterKey::Subcategory => "subcategory",
        }
    }

    /// Keys of strictly greater rank, in rank order.
    pub fn dependents(&self) -> impl Iterator<Item = FilterKey> {
        let rank = self.rank();
        Self::ALL.into_iter().filter(move |k| k.rank() > rank)
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
