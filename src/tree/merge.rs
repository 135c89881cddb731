//! Merge missing source keys into a target translation tree.
//!
//! The top level of the result follows the source's key order exactly and drops
//! keys the source does not have. Nested mappings are append-only: keys already
//! in the target keep their position and missing keys are added at the end.

use crate::domain::TranslationTree;
use serde_json::Value;

pub fn merge(source: &TranslationTree, target: &TranslationTree) -> TranslationTree {
    let mut merged = TranslationTree::new();

    for (key, source_value) in source {
        // Existing translations win over the source text.
        let mut value = target.get(key).unwrap_or(source_value).clone();
        if let (Value::Object(source_sub), Value::Object(merged_sub)) = (source_value, &mut value) {
            add_missing_keys_in_order(source_sub, merged_sub);
        }
        merged.insert(key.clone(), value);
    }

    merged
}

/// Copy every key of `source` that `target` lacks onto the end of `target`,
/// descending into mappings present on both sides.
///
/// Walks with an explicit stack so nesting depth is bounded by heap, not by
/// the call stack.
pub fn add_missing_keys_in_order(source: &TranslationTree, target: &mut TranslationTree) {
    let mut pending: Vec<(&TranslationTree, &mut TranslationTree)> = vec![(source, target)];

    while let Some((source, target)) = pending.pop() {
        let existing = target.len();
        for (key, value) in source {
            if !target.contains_key(key) {
                target.insert(key.clone(), value.clone());
            }
        }

        // Appended entries are copies of the source and need no further work.
        for (key, value) in IntoIterator::into_iter(target).take(existing) {
            if let (Some(Value::Object(source_sub)), Value::Object(target_sub)) =
                (source.get(key), value)
            {
                pending.push((source_sub, target_sub));
            }
        }
    }
}
