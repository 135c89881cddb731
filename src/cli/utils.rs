//! Shared CLI utilities.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::config::{load_config, merge_cli_with_config, CliOverrides, LanguageFile};
use crate::domain::Config;

/// Options shared by `diff` and `merge`.
#[derive(Args, Debug, Clone)]
pub struct SyncArgs {
    /// Path to config file (i18n-sync.toml or .i18n-sync.yml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Source-language JSON file
    #[arg(short = 's', long, value_name = "FILE")]
    pub source: Option<PathBuf>,

    /// Folder containing the target language files
    #[arg(short = 't', long, value_name = "DIR")]
    pub target_dir: Option<PathBuf>,

    /// Target languages (comma-separated, e.g. 'es,de' or 'es.json,de.json')
    #[arg(short = 'l', long, value_name = "LANGS")]
    pub languages: Option<String>,
}

impl SyncArgs {
    /// Resolve file config and CLI values into the effective run config.
    pub fn resolve(&self, output_dir: Option<PathBuf>) -> Result<Config> {
        let cwd = std::env::current_dir()?;
        let file_config = load_config(&cwd, self.config.as_deref())?;
        let overrides = CliOverrides {
            source: self.source.clone(),
            target_dir: self.target_dir.clone(),
            output_dir,
            languages: parse_csv(&self.languages),
        };
        let config = merge_cli_with_config(file_config, overrides);
        if config.languages.is_empty() {
            anyhow::bail!("No target languages configured");
        }
        tracing::debug!(?config, "Resolved configuration");
        Ok(config)
    }
}

pub fn language_files(config: &Config) -> Result<Vec<LanguageFile>> {
    LanguageFile::resolve_all(&config.languages, &config.target_dir, config.output_dir())
}

/// Run `process` for every language, reporting failures and carrying on.
///
/// Returns an error once all languages were attempted if any of them failed.
pub fn for_each_language<F>(languages: &[LanguageFile], mut process: F) -> Result<()>
where
    F: FnMut(&LanguageFile) -> Result<()>,
{
    let mut failed = 0usize;
    for language in languages {
        if let Err(e) = process(language) {
            failed += 1;
            tracing::debug!(language = %language.code, "Language failed: {:?}", e);
            eprintln!("error: {}: {:#}", language.code, e);
        }
    }

    if failed > 0 {
        anyhow::bail!("{} of {} languages failed", failed, languages.len());
    }
    Ok(())
}

/// Parse a comma-separated string into a `Vec<String>`, trimming whitespace and
/// discarding empty segments.  Returns `None` when `value` is `None`.
pub fn parse_csv(value: &Option<String>) -> Option<Vec<String>> {
    value.as_ref().map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| part.to_string())
            .collect::<Vec<_>>()
    })
}
