//! Built-in rule sets.
//!
//! Each preset pairs an ordered rule table with the file filter it was
//! written for. Presets are independent; run them one at a time.

use crate::core::{FileFilter, RewriteError, RuleSet};

const EXCLUDED_DIRS: &[&str] = &["node_modules", ".next", ".git"];

const DISCORD_LINK_RULES: &[(&str, &str)] =
    &[("discord.gg/skylineggsu", "discord.gg/skylineggs")];

const DISCORD_LINK_EXTENSIONS: &[&str] = &[".tsx", ".ts", ".js", ".jsx", ".md"];

// Longer brand strings come first so "Magma Cheats" is not split by "Magma Cheat".
const REBRAND_RULES: &[(&str, &str)] = &[
    ("magma-logo.png", "skyline-logo.png"),
    ("magma-flame.png", "skyline-icon.png"),
    ("Magma Cheats", "Skyline Cheats"),
    ("Magma Cheat", "Skyline Cheat"),
    ("Magma Store", "Skyline Store"),
    ("Magma <", "Skyline <"),
    ("magmacheats.com", "skylinecheats.org"),
    ("magmacheats.cc", "skylinecheats.org"),
    ("discord.gg/magmacheats", "discord.gg/skylineeggs"),
    ("@magmacheats", "@skylinecheats"),
    ("@magma.local", "@skyline.local"),
    ("provider: 'Magma'", "provider: 'Skyline'"),
    ("Provider='Magma'", "Provider='Skyline'"),
    ("site_name='Magma", "site_name='Skyline"),
    ("#dc2626", "#2563eb"),
    ("#ef4444", "#3b82f6"),
    ("#991b1b", "#1e40af"),
    ("red-600", "blue-600"),
    ("red-700", "blue-700"),
    ("red-800", "blue-800"),
    ("red-500", "blue-500"),
    ("red-400", "blue-400"),
];

const REBRAND_EXTENSIONS: &[&str] = &[
    ".tsx", ".ts", ".jsx", ".js", ".json", ".md", ".sql", ".txt", ".html", ".css",
];

// Mailbox rules run before the bare domain so their counts stay meaningful.
const RING0_REBRAND_RULES: &[(&str, &str)] = &[
    ("noreply@ring-0cheats.org", "noreply@ring-0.xyz"),
    ("support@ring-0cheats.org", "support@ring-0.xyz"),
    ("ring-0cheats.org", "ring-0.xyz"),
    ("ring-0done11", "ring-0"),
    ("discord.gg/ring-0ggs", "discord.gg/ring-0"),
    ("discord.gg/ring-0cheats", "discord.gg/ring-0"),
];

const RING0_REBRAND_EXTENSIONS: &[&str] = &[
    ".ts", ".tsx", ".js", ".jsx", ".md", ".html", ".json", ".css", ".sql",
];

// The typo fix has to run first: it can produce "discord.gg/ring-0ggs".
const RING0_DISCORD_RULES: &[(&str, &str)] = &[
    ("disocord.gg/ring-0", "discord.gg/ring-0"),
    ("discord.gg/ring-0ggs", "discord.gg/ring-0"),
];

const RING0_DISCORD_EXTENSIONS: &[&str] = &[
    ".ts", ".tsx", ".js", ".jsx", ".md", ".html", ".sql", ".txt", ".json",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Fix the misspelled Skyline community invite
    DiscordLink,
    /// Magma to Skyline rebrand: names, domains, handles and colors
    Rebrand,
    /// Retire the old Ring-0 domains, mailboxes and invites
    Ring0Rebrand,
    /// Fix the mistyped and stale Ring-0 community invites
    Ring0Discord,
}

impl Preset {
    pub fn all() -> &'static [Preset] {
        &[
            Preset::DiscordLink,
            Preset::Rebrand,
            Preset::Ring0Rebrand,
            Preset::Ring0Discord,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Preset::DiscordLink => "discord-link",
            Preset::Rebrand => "rebrand",
            Preset::Ring0Rebrand => "ring0-rebrand",
            Preset::Ring0Discord => "ring0-discord",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Preset::DiscordLink => "Fix the misspelled Skyline community invite",
            Preset::Rebrand => "Magma to Skyline rebrand: names, domains, handles and colors",
            Preset::Ring0Rebrand => "Retire the old Ring-0 domains, mailboxes and invites",
            Preset::Ring0Discord => "Fix the mistyped and stale Ring-0 community invites",
        }
    }

    /// Validated rule table for this preset
    pub fn rule_set(&self) -> Result<RuleSet, RewriteError> {
        RuleSet::from_pairs(self.name(), self.rule_pairs())
    }

    pub fn filter(&self) -> FileFilter {
        let extensions = match self {
            Preset::DiscordLink => DISCORD_LINK_EXTENSIONS,
            Preset::Rebrand => REBRAND_EXTENSIONS,
            Preset::Ring0Rebrand => RING0_REBRAND_EXTENSIONS,
            Preset::Ring0Discord => RING0_DISCORD_EXTENSIONS,
        };
        FileFilter::new(extensions, EXCLUDED_DIRS)
    }

    fn rule_pairs(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Preset::DiscordLink => DISCORD_LINK_RULES,
            Preset::Rebrand => REBRAND_RULES,
            Preset::Ring0Rebrand => RING0_REBRAND_RULES,
            Preset::Ring0Discord => RING0_DISCORD_RULES,
        }
    }
}
