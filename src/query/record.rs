//! Records that can be filtered and ordered.

use serde::{Deserialize, Serialize};

/// Anything with a display name, a category tag and a sort key
pub trait Queryable {
    type Category: PartialEq;
    type Key: Ord;

    fn name(&self) -> &str;
    fn category(&self) -> Self::Category;
    fn sort_key(&self) -> Self::Key;
}

/// Plain record for callers that have no richer type of their own
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedRecord<C, K> {
    pub name: String,
    pub sort_key: K,
    pub category: C,
}

impl<C, K> NamedRecord<C, K> {
    pub fn new(name: impl Into<String>, sort_key: K, category: C) -> Self {
        Self {
            name: name.into(),
            sort_key,
            category,
        }
    }
}

impl<C, K> Queryable for NamedRecord<C, K>
where
    C: PartialEq + Clone,
    K: Ord + Clone,
{
    type Category = C;
    type Key = K;

    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> C {
        self.category.clone()
    }

    fn sort_key(&self) -> K {
        self.sort_key.clone()
    }
}
