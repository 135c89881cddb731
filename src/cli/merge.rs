//! Merge command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

use super::utils::{for_each_language, language_files, SyncArgs};
use crate::tree::{load_tree, merge, to_pretty_json, write_tree};

#[derive(Args)]
pub struct MergeArgs {
    #[command(flatten)]
    pub sync: SyncArgs,

    /// Directory merged files are written to (defaults to the target directory)
    #[arg(short = 'o', long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Report which files would change without writing them
    #[arg(long)]
    pub dry_run: bool,
}

pub fn run(args: MergeArgs) -> Result<()> {
    let config = args.sync.resolve(args.output_dir.clone())?;
    let languages = language_files(&config)?;
    let source_tree = load_tree(&config.source)?;

    for_each_language(&languages, |lang| {
        let target_tree = load_tree(&lang.target)?;
        let merged = merge(&source_tree, &target_tree);

        if args.dry_run {
            let rendered = to_pretty_json(&merged)
                .with_context(|| format!("Failed rendering {}", lang.output.display()))?;
            // A missing output file simply counts as changed.
            let current = fs::read_to_string(&lang.output).ok();
            if current.as_deref() == Some(rendered.as_str()) {
                println!("{}: up to date", lang.output.display());
            } else {
                println!("{}: would be updated", lang.output.display());
            }
            return Ok(());
        }

        write_tree(&lang.output, &merged)?;
        println!(
            "Missing keys from {} have been added to {} and saved as {}",
            config.source.display(),
            lang.target.display(),
            lang.output.display()
        );
        Ok(())
    })
}
