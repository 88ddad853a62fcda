//! Query value and fluent builder, for callers that keep a query around
//! (for instance the current search text plus a fixed ordering).

use super::apply::apply_with;
use super::fold::FoldingStrategy;
use super::predicate::{FilterPredicate, SortOrder};
use super::record::Queryable;
use serde::{Deserialize, Serialize};

/// A reusable list query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query<C> {
    pub predicate: FilterPredicate<C>,
    pub order: Option<SortOrder>,
    /// Maximum number of records to return, applied after ordering
    pub limit: Option<usize>,
    pub folding: FoldingStrategy,
}

impl<C> Query<C> {
    /// Create a new builder for constructing a Query
    ///
    /// # Example
    /// ```rust
    /// use travelkit::query::{NamedRecord, Query};
    ///
    /// let rooms = vec![
    ///     NamedRecord::new("Hue", 3, ()),
    ///     NamedRecord::new("Jack", 5, ()),
    /// ];
    /// let query = Query::builder().by_name("h").recent().limit(10).build();
    /// assert_eq!(query.run(&rooms).len(), 1);
    /// ```
    pub fn builder() -> QueryBuilder<C> {
        QueryBuilder::default()
    }

    /// Evaluate against `records`.
    pub fn run<R>(&self, records: &[R]) -> Vec<R>
    where
        R: Queryable<Category = C> + Clone,
    {
        let mut result = apply_with(records, &self.predicate, self.order, self.folding);
        if let Some(limit) = self.limit {
            result.truncate(limit);
        }
        result
    }
}

/// Builder for [`Query`]
#[derive(Debug)]
pub struct QueryBuilder<C> {
    predicate: FilterPredicate<C>,
    order: Option<SortOrder>,
    limit: Option<usize>,
    folding: FoldingStrategy,
}

impl<C> Default for QueryBuilder<C> {
    fn default() -> Self {
        Self {
            predicate: FilterPredicate::All,
            order: None,
            limit: None,
            folding: FoldingStrategy::default(),
        }
    }
}

impl<C> QueryBuilder<C> {
    /// Replace the predicate outright
    pub fn predicate(mut self, predicate: FilterPredicate<C>) -> Self {
        self.predicate = predicate;
        self
    }

    /// Filter by case-insensitive name substring. Blank text clears the filter.
    pub fn by_name(mut self, text: impl Into<String>) -> Self {
        self.predicate = FilterPredicate::search(text);
        self
    }

    /// Filter by category
    pub fn by_category(mut self, category: C) -> Self {
        self.predicate = FilterPredicate::ByCategory(category);
        self
    }

    /// Most recent first
    pub fn recent(mut self) -> Self {
        self.order = Some(SortOrder::Recency);
        self
    }

    /// Oldest first
    pub fn oldest(mut self) -> Self {
        self.order = Some(SortOrder::Oldest);
        self
    }

    /// Alphabetical by folded name
    pub fn by_name_ordering(mut self) -> Self {
        self.order = Some(SortOrder::Name);
        self
    }

    pub fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }

    pub fn folding(mut self, folding: FoldingStrategy) -> Self {
        self.folding = folding;
        self
    }

    pub fn build(self) -> Query<C> {
        Query {
            predicate: self.predicate,
            order: self.order,
            limit: self.limit,
            folding: self.folding,
        }
    }
}
