use anyhow::Result;
use std::path::PathBuf;
use tracing::warn;

use rewriter::core::OutputWriter;
use rewriter::{Preset, Rewriter};

pub fn run(preset: Preset, path: Option<PathBuf>, format: &crate::OutputFormat) -> Result<()> {
    let root = path.unwrap_or_else(|| PathBuf::from("."));

    // Rule tables are checked before any file is touched
    let rules = preset.rule_set()?;

    let rewriter = Rewriter::new(rules, preset.filter(), root);
    let report = rewriter.run();

    OutputWriter::new(format.into()).write_report(&report)?;

    if report.has_errors() {
        warn!(
            errors = report.errors.len(),
            "Some files could not be rewritten; see the report above"
        );
    }

    Ok(())
}
