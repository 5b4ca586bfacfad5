mod driver;
mod engine;
mod report;
mod walker;

pub use driver::{FileOutcome, Rewriter};
pub use engine::{apply_rules, Rewrite};
pub use report::{FileUpdate, ReportedError, RunReport};
pub use walker::CandidateFiles;
