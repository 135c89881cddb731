//! Mapping configured language entries to target and output files.

use anyhow::Result;
use std::path::{Path, PathBuf};

/// One target language with its resolved file locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageFile {
    /// Language code, e.g. `es` for both `es` and `es.json`
    pub code: String,
    /// File the target tree is read from
    pub target: PathBuf,
    /// File the merged tree is written to
    pub output: PathBuf,
}

impl LanguageFile {
    /// Resolve `entry` (`es` or `es.json`) against the target and output folders.
    pub fn resolve(entry: &str, target_dir: &Path, output_dir: &Path) -> Result<Self> {
        let code = entry.split('.').next().unwrap_or_default();
        if code.is_empty() {
            anyhow::bail!("Invalid language entry '{}': missing language code", entry);
        }

        let has_json_ext = Path::new(entry)
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));
        let target = if has_json_ext {
            target_dir.join(entry)
        } else {
            target_dir.join(format!("{entry}.json"))
        };

        Ok(Self {
            code: code.to_string(),
            target,
            output: output_dir.join(format!("{code}.json")),
        })
    }

    pub fn resolve_all(entries: &[String], target_dir: &Path, output_dir: &Path) -> Result<Vec<Self>> {
        entries.iter().map(|entry| Self::resolve(entry, target_dir, output_dir)).collect()
    }
}
