//! Diff command implementation

use anyhow::Result;
use clap::{Args, ValueEnum};

use super::utils::{for_each_language, language_files, SyncArgs};
use crate::render::{render_json_report, render_text_report};
use crate::tree::{load_tree, LanguageDiff};

#[derive(Args)]
pub struct DiffArgs {
    #[command(flatten)]
    pub sync: SyncArgs,

    /// Report format
    #[arg(short = 'f', long, value_name = "FORMAT", default_value = "text")]
    pub format: ReportFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}

pub fn run(args: DiffArgs) -> Result<()> {
    let config = args.sync.resolve(None)?;
    let languages = language_files(&config)?;
    let source_tree = load_tree(&config.source)?;

    let mut diffs = Vec::with_capacity(languages.len());
    let outcome = for_each_language(&languages, |lang| {
        let target_tree = load_tree(&lang.target)?;
        let diff = LanguageDiff::compute(
            lang.code.clone(),
            config.source.clone(),
            &source_tree,
            lang.target.clone(),
            &target_tree,
        );
        tracing::debug!(
            language = %lang.code,
            missing_in_target = diff.missing_in_target.len(),
            missing_in_source = diff.missing_in_source.len(),
            "Compared top-level keys"
        );

        match args.format {
            ReportFormat::Text => print!("{}", render_text_report(&diff)),
            ReportFormat::Json => diffs.push(diff),
        }
        Ok(())
    });

    if args.format == ReportFormat::Json {
        println!("{}", render_json_report(&diffs)?);
    }
    outcome
}
