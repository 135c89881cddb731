//! Missing-key report rendering.

use crate::tree::LanguageDiff;
use anyhow::Result;
use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;

/// Human-readable report for one language, one key per indented line.
///
/// A blank line separates the two sections only when the second one lists keys.
pub fn render_text_report(diff: &LanguageDiff) -> String {
    TextReport(diff).to_string()
}

struct TextReport<'a>(&'a LanguageDiff);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let diff = self.0;
        write_section(f, &diff.missing_in_target, &diff.source, &diff.target, false)?;
        write_section(f, &diff.missing_in_source, &diff.target, &diff.source, true)
    }
}

fn write_section(
    f: &mut fmt::Formatter<'_>,
    missing: &BTreeSet<String>,
    present_in: &Path,
    missing_in: &Path,
    separated: bool,
) -> fmt::Result {
    if missing.is_empty() {
        return writeln!(
            f,
            "No missing keys in {} from {}.",
            missing_in.display(),
            present_in.display()
        );
    }

    if separated {
        writeln!(f)?;
    }
    writeln!(f, "Keys present in {} but missing in {}:", present_in.display(), missing_in.display())?;
    for key in missing {
        writeln!(f, "  {}", key)?;
    }
    Ok(())
}

/// Pretty JSON array with one entry per language.
pub fn render_json_report(diffs: &[LanguageDiff]) -> Result<String> {
    Ok(serde_json::to_string_pretty(diffs)?)
}
