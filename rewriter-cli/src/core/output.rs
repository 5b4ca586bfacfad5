use anyhow::Result;
use serde::Serialize;
use std::fmt::Write as _;

use crate::core::{FileFilter, RuleSet};
use crate::rewrite::RunReport;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Markdown,
}

/// A rule set as shown by `rewriter rules`
#[derive(Debug, Serialize)]
pub struct RuleSetListing<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub rules: &'a RuleSet,
    pub filter: &'a FileFilter,
}

pub struct OutputWriter {
    format: OutputFormat,
}

impl OutputWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn write_report(&self, report: &RunReport) -> Result<()> {
        print!("{}", self.render_report(report)?);
        Ok(())
    }

    pub fn write_rule_sets(&self, listings: &[RuleSetListing<'_>]) -> Result<()> {
        print!("{}", self.render_rule_sets(listings)?);
        Ok(())
    }

    pub fn render_report(&self, report: &RunReport) -> Result<String> {
        let mut out = String::new();

        match self.format {
            OutputFormat::Json => {
                writeln!(out, "{}", serde_json::to_string_pretty(report)?)?;
            }
            OutputFormat::Text => {
                for update in &report.updates {
                    writeln!(
                        out,
                        "✅ Updated {} ({} replacement{})",
                        update.path.display(),
                        update.replacements,
                        plural(update.replacements)
                    )?;
                }
                for error in &report.errors {
                    writeln!(out, "❌ {}: {}", error.kind, error.message)?;
                }

                writeln!(out)?;
                writeln!(out, "✓ Rewrite complete ({})", report.rule_set)?;
                writeln!(out, "  Files scanned: {}", report.files_scanned)?;
                writeln!(out, "  Files updated: {}", report.files_updated)?;
                writeln!(out, "  Total replacements: {}", report.replacements_made)?;
                writeln!(out, "  Errors: {}", report.errors.len())?;
            }
            OutputFormat::Markdown => {
                writeln!(out, "# Rewrite Report: `{}`\n", report.rule_set)?;
                writeln!(out, "| Metric | Value |")?;
                writeln!(out, "|--------|-------|")?;
                writeln!(out, "| Files scanned | {} |", report.files_scanned)?;
                writeln!(out, "| Files updated | {} |", report.files_updated)?;
                writeln!(out, "| Total replacements | {} |", report.replacements_made)?;
                writeln!(out, "| Errors | {} |", report.errors.len())?;

                if !report.updates.is_empty() {
                    writeln!(out, "\n## Updated Files\n")?;
                    for update in &report.updates {
                        writeln!(out, "- `{}`: {}", update.path.display(), update.replacements)?;
                    }
                }

                if !report.errors.is_empty() {
                    writeln!(out, "\n## Errors\n")?;
                    for error in &report.errors {
                        writeln!(out, "- **{}**: {}", error.kind, error.message)?;
                    }
                }
            }
        }

        Ok(out)
    }

    pub fn render_rule_sets(&self, listings: &[RuleSetListing<'_>]) -> Result<String> {
        let mut out = String::new();

        match self.format {
            OutputFormat::Json => {
                writeln!(out, "{}", serde_json::to_string_pretty(listings)?)?;
            }
            OutputFormat::Text => {
                for (i, listing) in listings.iter().enumerate() {
                    if i > 0 {
                        writeln!(out)?;
                    }
                    writeln!(out, "{} - {}", listing.name, listing.description)?;
                    writeln!(out, "  Extensions: {}", listing.filter.extensions.join(" "))?;
                    writeln!(out, "  Excluded dirs: {}", listing.filter.excluded_dirs.join(" "))?;
                    for rule in listing.rules.rules() {
                        writeln!(out, "  {:?} -> {:?}", rule.search, rule.replace)?;
                    }
                }
            }
            OutputFormat::Markdown => {
                for listing in listings {
                    writeln!(out, "## {}\n", listing.name)?;
                    writeln!(out, "{}\n", listing.description)?;
                    writeln!(
                        out,
                        "Extensions: `{}` | Excluded: `{}`\n",
                        listing.filter.extensions.join(" "),
                        listing.filter.excluded_dirs.join(" ")
                    )?;
                    writeln!(out, "| Search | Replace |")?;
                    writeln!(out, "|--------|---------|")?;
                    for rule in listing.rules.rules() {
                        writeln!(out, "| `{}` | `{}` |", rule.search, rule.replace)?;
                    }
                    writeln!(out)?;
                }
            }
        }

        Ok(out)
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}
