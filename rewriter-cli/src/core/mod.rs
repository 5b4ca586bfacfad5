pub mod error;
pub mod output;
pub mod types;

pub use error::RewriteError;
pub use output::{OutputFormat, OutputWriter, RuleSetListing};
pub use types::{FileFilter, ReplacementRule, RuleSet};
