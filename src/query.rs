//! List queries: filtering, stable ordering and category partitioning over
//! record collections. Every operation returns a fresh `Vec` and leaves the
//! source untouched.

pub mod apply;
pub mod fold;
pub mod predicate;
pub mod record;
pub mod view;

pub use apply::{apply, apply_by, apply_with, partition_by_category};
pub use fold::FoldingStrategy;
pub use predicate::{FilterPredicate, SortOrder};
pub use record::{NamedRecord, Queryable};
pub use view::{Query, QueryBuilder};
