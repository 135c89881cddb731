//! Apply CLI overrides on top of the file/default config.

use crate::domain::{normalize_languages, Config};
use std::path::PathBuf;

/// Values given on the command line. `None` means "not given".
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub source: Option<PathBuf>,
    pub target_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub languages: Option<Vec<String>>,
}

pub fn merge_cli_with_config(mut config: Config, cli: CliOverrides) -> Config {
    if let Some(source) = cli.source {
        config.source = source;
    }
    if let Some(target_dir) = cli.target_dir {
        config.target_dir = target_dir;
    }
    if let Some(output_dir) = cli.output_dir {
        config.output_dir = Some(output_dir);
    }
    if let Some(languages) = cli.languages {
        config.languages = normalize_languages(languages);
    }
    config
}
