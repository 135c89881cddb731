//! Core domain types shared by the tree operations, config and CLI.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use std::path::PathBuf;

/// Ordered key/value tree for one language. Iteration order is document order.
pub type TranslationTree = Map<String, Value>;

pub const DEFAULT_SOURCE: &str = "src/assets/i18n/en.json";
pub const DEFAULT_TARGET_DIR: &str = "src/assets/i18n";
pub const DEFAULT_LANGUAGES: &[&str] = &["tw", "tr", "es", "it", "pt", "de", "ar"];

/// Resolved run configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Authoritative source-language file
    pub source: PathBuf,
    /// Folder holding the target language files
    pub target_dir: PathBuf,
    /// Folder merged files are written to; `None` means `target_dir`
    pub output_dir: Option<PathBuf>,
    /// Target language codes or file names (`es` or `es.json`)
    #[serde(deserialize_with = "string_or_list")]
    pub languages: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            target_dir: PathBuf::from(DEFAULT_TARGET_DIR),
            output_dir: None,
            languages: DEFAULT_LANGUAGES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Config {
    pub fn output_dir(&self) -> &std::path::Path {
        self.output_dir.as_deref().unwrap_or(&self.target_dir)
    }
}

/// Accept either `languages = "es, de"` or `languages = ["es", "de"]`.
fn string_or_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrList {
        One(String),
        Many(Vec<String>),
    }

    let raw = match StringOrList::deserialize(deserializer)? {
        StringOrList::One(s) => s.split(',').map(str::to_string).collect::<Vec<_>>(),
        StringOrList::Many(items) => items,
    };
    Ok(normalize_languages(raw))
}

pub fn normalize_languages<I, S>(entries: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    entries
        .into_iter()
        .map(|entry| entry.as_ref().trim().to_string())
        .filter(|entry| !entry.is_empty())
        .collect()
}
