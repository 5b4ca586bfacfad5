use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use rewriter::Preset;

mod commands;

#[derive(Parser)]
#[command(name = "rewriter")]
#[command(author, version, about, long_about = None)]
#[command(
    about = "Bulk literal text rewriting across a source tree",
    long_about = "Walks a directory, applies a built-in table of literal search/replace \
                  rules to matching source and documentation files, and rewrites only \
                  the files whose content changed."
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (json, text, markdown)
    #[arg(short = 'f', long, global = true, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Debug, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Markdown,
}

impl From<&OutputFormat> for rewriter::core::OutputFormat {
    fn from(format: &OutputFormat) -> Self {
        match format {
            OutputFormat::Text => rewriter::core::OutputFormat::Text,
            OutputFormat::Json => rewriter::core::OutputFormat::Json,
            OutputFormat::Markdown => rewriter::core::OutputFormat::Markdown,
        }
    }
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum RuleSetName {
    /// discord.gg/skylineggsu -> discord.gg/skylineggs
    DiscordLink,
    /// Magma -> Skyline names, domains, handles and colors
    Rebrand,
    /// Old Ring-0 domains, mailboxes and invites
    #[value(name = "ring0-rebrand")]
    Ring0Rebrand,
    /// Mistyped and stale Ring-0 invites
    #[value(name = "ring0-discord")]
    Ring0Discord,
}

impl From<RuleSetName> for Preset {
    fn from(name: RuleSetName) -> Self {
        match name {
            RuleSetName::DiscordLink => Preset::DiscordLink,
            RuleSetName::Rebrand => Preset::Rebrand,
            RuleSetName::Ring0Rebrand => Preset::Ring0Rebrand,
            RuleSetName::Ring0Discord => Preset::Ring0Discord,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a built-in rule set to every matching file under a directory
    Apply {
        /// Rule set to apply
        rule_set: RuleSetName,

        /// Root directory (defaults to current directory)
        path: Option<PathBuf>,
    },

    /// Show the built-in rule sets and the files they target
    Rules {
        /// Only show this rule set
        rule_set: Option<RuleSetName>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so the report on stdout stays clean
    let filter = if cli.verbose {
        "rewriter=debug"
    } else {
        "rewriter=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Apply { rule_set, path } => {
            commands::apply::run(rule_set.into(), path, &cli.format)?
        }
        Commands::Rules { rule_set } => {
            commands::rules::run(rule_set.map(Preset::from), &cli.format)?
        }
    }

    Ok(())
}
