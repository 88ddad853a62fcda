//! Case folding for name matching.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use unicode_normalization::UnicodeNormalization;

/// How names and search text are folded before comparison
///
/// Both strategies are locale-naive. `Normalized` additionally maps
/// compatibility forms (full-width Latin, decomposed Hangul, ligatures) onto
/// their canonical composed form, so text typed on different keyboards still
/// matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoldingStrategy {
    /// `str::to_lowercase`
    Lowercase,
    /// NFKC, then `str::to_lowercase`
    #[default]
    Normalized,
}

impl FoldingStrategy {
    pub fn fold<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match self {
            FoldingStrategy::Lowercase => {
                if text.chars().any(char::is_uppercase) {
                    Cow::Owned(text.to_lowercase())
                } else {
                    Cow::Borrowed(text)
                }
            }
            FoldingStrategy::Normalized => {
                let normalized: String = text.nfkc().collect();
                Cow::Owned(normalized.to_lowercase())
            }
        }
    }

    /// Case-insensitive containment. `needle` must already be folded.
    pub fn contains_folded(&self, haystack: &str, folded_needle: &str) -> bool {
        self.fold(haystack).contains(folded_needle)
    }
}
