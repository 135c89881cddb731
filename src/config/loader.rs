//! Config file loading

use crate::domain::Config;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

const SECTION: &str = "i18n-sync";

const CANDIDATES: &[&str] = &[
    "i18n-sync.toml",
    ".i18n-sync.toml",
    "i18n-sync.yml",
    ".i18n-sync.yml",
    "i18n-sync.yaml",
    ".i18n-sync.yaml",
];

/// Load the config from `config_path`, or discover one in `base_dir`.
///
/// An explicitly provided file must parse. A discovered file that fails to
/// parse only logs a warning and falls back to defaults.
pub fn load_config(base_dir: &Path, config_path: Option<&Path>) -> Result<Config> {
    let config_path_provided = config_path.is_some();

    let discovered = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config(base_dir),
    };

    let Some(config_file) = discovered else {
        return Ok(Config::default());
    };

    let content = fs::read_to_string(&config_file)
        .with_context(|| format!("Failed reading config file: {}", config_file.display()))?;

    let ext = config_file.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();

    let parsed = match ext.as_str() {
        "toml" => parse_toml_config(&content, &config_file),
        "yaml" | "yml" => parse_yaml_config(&content, &config_file),
        other => Err(anyhow::anyhow!(
            "Unsupported config extension '.{}' for file {}",
            other,
            config_file.display()
        )),
    };

    match parsed {
        Ok(cfg) => {
            tracing::debug!("Using config file {}", config_file.display());
            Ok(cfg)
        }
        Err(e) if config_path_provided => Err(e),
        Err(e) => {
            tracing::warn!(
                "Failed to parse auto-discovered config {}: {:#}",
                config_file.display(),
                e
            );
            Ok(Config::default())
        }
    }
}

/// Parse TOML config, supporting an optional `[i18n-sync]` section.
fn parse_toml_config(content: &str, config_file: &Path) -> Result<Config> {
    let raw: toml::Value = toml::from_str(content)
        .with_context(|| format!("Invalid TOML syntax: {}", config_file.display()))?;

    let config_val = match raw.get(SECTION) {
        Some(nested) => nested.clone(),
        None => raw,
    };

    config_val.try_into().with_context(|| format!("Invalid TOML config: {}", config_file.display()))
}

/// Parse YAML config, supporting an optional `i18n-sync:` section.
fn parse_yaml_config(content: &str, config_file: &Path) -> Result<Config> {
    let raw: serde_yaml::Value = serde_yaml::from_str(content)
        .with_context(|| format!("Invalid YAML syntax: {}", config_file.display()))?;

    // An empty document parses as null.
    if raw.is_null() {
        return Ok(Config::default());
    }

    let config_val = match raw.get(SECTION) {
        Some(nested) => nested.clone(),
        None => raw,
    };

    serde_yaml::from_value(config_val)
        .with_context(|| format!("Invalid YAML config: {}", config_file.display()))
}

fn discover_config(base_dir: &Path) -> Option<PathBuf> {
    CANDIDATES.iter().map(|candidate| base_dir.join(candidate)).find(|path| path.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_config_defaults_when_missing() {
        let tmp = TempDir::new().expect("tmp");
        let cfg = load_config(tmp.path(), None).expect("config");
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn test_load_toml_config() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(
            tmp.path().join("i18n-sync.toml"),
            "source = 'locales/en.json'\ntarget_dir = 'locales'\nlanguages = ['fr', 'nl.json']\n",
        )
        .expect("write");

        let cfg = load_config(tmp.path(), None).expect("config");
        assert_eq!(cfg.source, PathBuf::from("locales/en.json"));
        assert_eq!(cfg.target_dir, PathBuf::from("locales"));
        assert_eq!(cfg.languages, vec!["fr", "nl.json"]);
        assert!(cfg.output_dir.is_none());
    }

    #[test]
    fn test_toml_nested_section() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("tools.toml");
        fs::write(&path, "[i18n-sync]\noutput_dir = 'out'\nlanguages = 'es, de ,'\n")
            .expect("write");

        let cfg = load_config(tmp.path(), Some(&path)).expect("config");
        assert_eq!(cfg.output_dir, Some(PathBuf::from("out")));
        assert_eq!(cfg.languages, vec!["es", "de"]);
        assert_eq!(cfg.source, Config::default().source);
    }

    #[test]
    fn test_load_yaml_config() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join(".i18n-sync.yml"), "languages:\n  - it\n  - pt\n")
            .expect("write");

        let cfg = load_config(tmp.path(), None).expect("config");
        assert_eq!(cfg.languages, vec!["it", "pt"]);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("i18n-sync.yaml");
        fs::write(&path, "").expect("write");

        let cfg = load_config(tmp.path(), Some(&path)).expect("config");
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn test_explicit_config_invalid_type_returns_err() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("bad.toml");
        // languages expects a string or array, not an integer
        fs::write(&path, "languages = 123\n").expect("write");

        let result = load_config(tmp.path(), Some(&path));
        assert!(result.is_err(), "explicit config with invalid type should return Err");
    }

    #[test]
    fn test_explicit_config_unknown_field_returns_err() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("bad.toml");
        fs::write(&path, "langauges = ['es']\n").expect("write");

        assert!(load_config(tmp.path(), Some(&path)).is_err());
    }

    #[test]
    fn test_explicit_config_unsupported_extension_returns_err() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("config.ini");
        fs::write(&path, "languages=es\n").expect("write");

        let err = load_config(tmp.path(), Some(&path)).unwrap_err();
        assert!(err.to_string().contains("Unsupported config extension"));
    }

    #[test]
    fn test_auto_discovered_invalid_config_returns_default() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join("i18n-sync.toml"), "languages = [\"es\", 123]\n")
            .expect("write");

        let cfg = load_config(tmp.path(), None).expect("should not error on auto-discovery");
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn test_toml_takes_precedence_over_yaml_when_discovering() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join("i18n-sync.toml"), "languages = ['fr']\n").expect("write");
        fs::write(tmp.path().join("i18n-sync.yml"), "languages: [nl]\n").expect("write");

        let cfg = load_config(tmp.path(), None).expect("config");
        assert_eq!(cfg.languages, vec!["fr"]);
    }
}
