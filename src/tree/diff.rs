//! Top-level key diff between two translation trees.
//!
//! Only the first level of each tree is compared. A key that is missing only
//! inside a nested mapping does not appear in the result.

use crate::domain::TranslationTree;
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Returns `(keys in a missing from b, keys in b missing from a)`.
pub fn find_missing_keys(
    a: &TranslationTree,
    b: &TranslationTree,
) -> (BTreeSet<String>, BTreeSet<String>) {
    let missing_in_b = a.keys().filter(|key| !b.contains_key(*key)).cloned().collect();
    let missing_in_a = b.keys().filter(|key| !a.contains_key(*key)).cloned().collect();
    (missing_in_b, missing_in_a)
}

/// Diff result for one target language against the source.
#[derive(Debug, Clone, Serialize)]
pub struct LanguageDiff {
    pub language: String,
    pub source: PathBuf,
    pub target: PathBuf,
    pub missing_in_target: BTreeSet<String>,
    pub missing_in_source: BTreeSet<String>,
}

impl LanguageDiff {
    pub fn compute(
        language: impl Into<String>,
        source: PathBuf,
        source_tree: &TranslationTree,
        target: PathBuf,
        target_tree: &TranslationTree,
    ) -> Self {
        let (missing_in_target, missing_in_source) = find_missing_keys(source_tree, target_tree);
        Self { language: language.into(), source, target, missing_in_target, missing_in_source }
    }

    pub fn is_in_sync(&self) -> bool {
        self.missing_in_target.is_empty() && self.missing_in_source.is_empty()
    }
}
