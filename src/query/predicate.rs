//! Filter predicates and orderings.

use super::fold::FoldingStrategy;
use super::record::Queryable;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Which records a query keeps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "filter", content = "value", rename_all = "snake_case")]
pub enum FilterPredicate<C> {
    /// Keep everything
    All,
    /// Keep records whose category equals the tag
    ByCategory(C),
    /// Keep records whose name contains the text, ignoring case.
    /// Empty text keeps everything.
    ByNameSubstring(String),
}

impl<C> Default for FilterPredicate<C> {
    fn default() -> Self {
        FilterPredicate::All
    }
}

impl<C> FilterPredicate<C> {
    /// Search-field helper: blank input means no filter.
    pub fn search(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.is_empty() {
            FilterPredicate::All
        } else {
            FilterPredicate::ByNameSubstring(text)
        }
    }
}

/// Ordering applied after filtering. All orderings are stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Descending sort key, most recent first
    Recency,
    /// Ascending sort key
    Oldest,
    /// Ascending folded name
    Name,
}

impl SortOrder {
    pub(crate) fn compare<R: Queryable>(
        &self,
        a: &R,
        b: &R,
        folding: FoldingStrategy,
    ) -> Ordering {
        match self {
            SortOrder::Recency => b.sort_key().cmp(&a.sort_key()),
            SortOrder::Oldest => a.sort_key().cmp(&b.sort_key()),
            SortOrder::Name => folding.fold(a.name()).cmp(&folding.fold(b.name())),
        }
    }
}
