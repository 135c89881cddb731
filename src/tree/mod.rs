//! Translation tree operations: load/save, top-level diff and ordered merge.

pub mod diff;
pub mod io;
pub mod merge;

pub use diff::{find_missing_keys, LanguageDiff};
pub use io::{load_tree, to_pretty_json, write_tree};
pub use merge::{add_missing_keys_in_order, merge};
