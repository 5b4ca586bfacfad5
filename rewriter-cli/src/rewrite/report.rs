use serde::Serialize;
use std::path::PathBuf;

use crate::core::RewriteError;

/// A file that was rewritten
#[derive(Debug, Clone, Serialize)]
pub struct FileUpdate {
    pub path: PathBuf,
    pub replacements: usize,
}

/// A failure recorded during a run
#[derive(Debug, Clone, Serialize)]
pub struct ReportedError {
    pub path: Option<PathBuf>,
    pub kind: &'static str,
    pub message: String,
}

impl From<&RewriteError> for ReportedError {
    fn from(err: &RewriteError) -> Self {
        Self {
            path: err.path().cloned(),
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

/// Result of a single rewrite run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Name of the rule set that was applied
    pub rule_set: String,

    /// Root the run walked
    pub root: PathBuf,

    /// Candidate files looked at
    pub files_scanned: usize,

    /// Files written back
    pub files_updated: usize,

    /// Occurrences replaced across all updated files
    pub replacements_made: usize,

    /// Updated files, in traversal order
    pub updates: Vec<FileUpdate>,

    /// Per-file and per-directory failures, in traversal order
    pub errors: Vec<ReportedError>,
}

impl RunReport {
    pub fn new(rule_set: &str, root: PathBuf) -> Self {
        Self {
            rule_set: rule_set.to_string(),
            root,
            files_scanned: 0,
            files_updated: 0,
            replacements_made: 0,
            updates: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn add_update(&mut self, path: PathBuf, replacements: usize) {
        self.files_updated += 1;
        self.replacements_made += replacements;
        self.updates.push(FileUpdate { path, replacements });
    }

    pub fn add_error(&mut self, error: &RewriteError) {
        self.errors.push(ReportedError::from(error));
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_follow_updates() {
        let mut report = RunReport::new("demo", PathBuf::from("."));
        report.add_update(PathBuf::from("a.ts"), 3);
        report.add_update(PathBuf::from("b.md"), 1);

        assert_eq!(report.files_updated, 2);
        assert_eq!(report.replacements_made, 4);
        assert_eq!(report.updates[1].path, PathBuf::from("b.md"));
        assert!(!report.has_errors());
    }

    #[test]
    fn test_error_entry_keeps_kind_and_path() {
        let mut report = RunReport::new("demo", PathBuf::from("."));
        report.add_error(&RewriteError::Traversal {
            path: PathBuf::from("locked"),
            message: "permission denied".to_string(),
        });

        assert!(report.has_errors());
        assert_eq!(report.errors[0].kind, "traversal_error");
        assert_eq!(report.errors[0].path, Some(PathBuf::from("locked")));
        assert!(report.errors[0].message.contains("permission denied"));
    }
}
