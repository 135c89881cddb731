//! Loading and saving translation trees.

use crate::domain::TranslationTree;
use crate::error::{SyncError, SyncResult};
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

pub fn load_tree(path: &Path) -> SyncResult<TranslationTree> {
    let content = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => SyncError::NotFound { path: path.to_path_buf() },
        _ => SyncError::Read { path: path.to_path_buf(), source },
    })?;
    tracing::debug!("Loaded {} ({} bytes)", path.display(), content.len());
    parse_tree(&content, path)
}

/// Parse `content` as a translation tree. `path` is only used for error reporting.
pub fn parse_tree(content: &str, path: &Path) -> SyncResult<TranslationTree> {
    let value: Value = serde_json::from_str(content).map_err(|source| SyncError::Parse {
        path: path.to_path_buf(),
        line: source.line(),
        column: source.column(),
        source,
    })?;

    match value {
        Value::Object(tree) => Ok(tree),
        _ => Err(SyncError::NotAnObject { path: path.to_path_buf() }),
    }
}

/// Two-space indented JSON with non-ASCII kept literal and no trailing newline.
pub fn to_pretty_json(tree: &TranslationTree) -> serde_json::Result<String> {
    serde_json::to_string_pretty(tree)
}

pub fn write_tree(path: &Path, tree: &TranslationTree) -> SyncResult<()> {
    let write_err = |source: std::io::Error| SyncError::Write { path: path.to_path_buf(), source };

    let json = to_pretty_json(tree).map_err(|e| write_err(e.into()))?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, json).map_err(write_err)?;
    tracing::debug!("Wrote {}", path.display());
    Ok(())
}
