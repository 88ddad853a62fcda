//! Query evaluation.

use super::fold::FoldingStrategy;
use super::predicate::{FilterPredicate, SortOrder};
use super::record::Queryable;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use tracing::trace;

/// Filter `records` by `predicate`, then stably sort by `order` if given.
///
/// Uses the default [`FoldingStrategy`] for name matching.
pub fn apply<R>(
    records: &[R],
    predicate: &FilterPredicate<R::Category>,
    order: Option<SortOrder>,
) -> Vec<R>
where
    R: Queryable + Clone,
{
    apply_with(records, predicate, order, FoldingStrategy::default())
}

/// [`apply`] with an explicit folding strategy.
pub fn apply_with<R>(
    records: &[R],
    predicate: &FilterPredicate<R::Category>,
    order: Option<SortOrder>,
    folding: FoldingStrategy,
) -> Vec<R>
where
    R: Queryable + Clone,
{
    let mut selected = filter(records, predicate, folding);
    if let Some(order) = order {
        selected.sort_by(|a, b| order.compare(a, b, folding));
    }
    trace!(
        input = records.len(),
        output = selected.len(),
        ?order,
        "Applied list query"
    );
    selected
}

/// Filter with the default folding, then stably sort by an arbitrary comparator.
pub fn apply_by<R, F>(records: &[R], predicate: &FilterPredicate<R::Category>, compare: F) -> Vec<R>
where
    R: Queryable + Clone,
    F: FnMut(&R, &R) -> Ordering,
{
    let mut selected = filter(records, predicate, FoldingStrategy::default());
    selected.sort_by(compare);
    selected
}

/// Group records by category. Order inside each bucket follows the input.
pub fn partition_by_category<R>(records: &[R]) -> BTreeMap<R::Category, Vec<R>>
where
    R: Queryable + Clone,
    R::Category: Ord,
{
    let mut buckets: BTreeMap<R::Category, Vec<R>> = BTreeMap::new();
    for record in records {
        buckets
            .entry(record.category())
            .or_default()
            .push(record.clone());
    }
    buckets
}

fn filter<R>(
    records: &[R],
    predicate: &FilterPredicate<R::Category>,
    folding: FoldingStrategy,
) -> Vec<R>
where
    R: Queryable + Clone,
{
    match predicate {
        FilterPredicate::All => records.to_vec(),
        FilterPredicate::ByCategory(tag) => records
            .iter()
            .filter(|r| r.category() == *tag)
            .cloned()
            .collect(),
        FilterPredicate::ByNameSubstring(text) if text.is_empty() => records.to_vec(),
        FilterPredicate::ByNameSubstring(text) => {
            let needle = folding.fold(text);
            records
                .iter()
                .filter(|r| folding.contains_folded(r.name(), &needle))
                .cloned()
                .collect()
        }
    }
}
