//! Bulk literal text rewriting across a source tree.
//!
//! A run walks a root directory, keeps files whose names end with one of
//! the configured extensions, applies an ordered [`RuleSet`] to each
//! and writes a file back only when its content changed.

pub mod core;
pub mod presets;
pub mod rewrite;

pub use crate::core::{FileFilter, ReplacementRule, RewriteError, RuleSet};
pub use presets::Preset;
pub use rewrite::{apply_rules, FileOutcome, Rewriter, RunReport};
