use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::engine::apply_rules;
use super::report::RunReport;
use super::walker::CandidateFiles;
use crate::core::{FileFilter, RewriteError, RuleSet};

/// What happened to a single candidate file
#[derive(Debug)]
pub enum FileOutcome {
    /// Content changed and was written back
    Updated { replacements: usize },

    /// Left untouched; `occurrences` is non-zero only for identity matches
    Unchanged { occurrences: usize },

    /// Reading, decoding or writing failed
    Failed(RewriteError),
}

/// Applies one rule set to every candidate file under a root
pub struct Rewriter {
    rules: RuleSet,
    filter: FileFilter,
    root: PathBuf,
}

impl Rewriter {
    pub fn new(rules: RuleSet, filter: FileFilter, root: PathBuf) -> Self {
        Self {
            rules,
            filter,
            root,
        }
    }

    /// Walk the tree and rewrite every candidate file.
    ///
    /// Failures are recorded in the report and never stop the run.
    pub fn run(&self) -> RunReport {
        let mut report = RunReport::new(self.rules.name(), self.root.clone());

        info!(
            rule_set = self.rules.name(),
            root = %self.root.display(),
            rules = self.rules.len(),
            "Starting rewrite"
        );

        for candidate in CandidateFiles::new(&self.root, self.filter.clone()) {
            let path = match candidate {
                Ok(path) => path,
                Err(err) => {
                    warn!("{}", err);
                    report.add_error(&err);
                    continue;
                }
            };

            report.files_scanned += 1;

            match self.process_file(&path) {
                FileOutcome::Updated { replacements } => {
                    debug!(path = %path.display(), replacements, "Updated");
                    report.add_update(path, replacements);
                }
                FileOutcome::Unchanged { occurrences } => {
                    debug!(path = %path.display(), occurrences, "Unchanged");
                }
                FileOutcome::Failed(err) => {
                    warn!("{}", err);
                    report.add_error(&err);
                }
            }
        }

        info!(
            files_scanned = report.files_scanned,
            files_updated = report.files_updated,
            replacements = report.replacements_made,
            errors = report.errors.len(),
            "Rewrite finished"
        );

        report
    }

    /// Read, transform and conditionally write back a single file
    pub fn process_file(&self, path: &Path) -> FileOutcome {
        match self.rewrite_file(path) {
            Ok(outcome) => outcome,
            Err(err) => FileOutcome::Failed(err),
        }
    }

    fn rewrite_file(&self, path: &Path) -> Result<FileOutcome, RewriteError> {
        let bytes = fs::read(path).map_err(|source| RewriteError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let content = String::from_utf8(bytes).map_err(|source| RewriteError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        let rewrite = apply_rules(&content, &self.rules);

        if !rewrite.changed(&content) {
            return Ok(FileOutcome::Unchanged {
                occurrences: rewrite.total(),
            });
        }

        fs::write(path, rewrite.content.as_bytes()).map_err(|source| RewriteError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(FileOutcome::Updated {
            replacements: rewrite.total(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use tempfile::TempDir;

    fn rewriter(root: &Path) -> Rewriter {
        let rules = RuleSet::from_pairs("test", &[("foo", "baz"), ("same", "same")]).unwrap();
        let filter = FileFilter::new(&[".txt"], &["skip"]);
        Rewriter::new(rules, filter, root.to_path_buf())
    }

    #[test]
    fn test_process_file_updates() -> Result<()> {
        let temp = TempDir::new()?;
        let file_path = temp.path().join("test.txt");
        fs::write(&file_path, "foo bar foo")?;

        match rewriter(temp.path()).process_file(&file_path) {
            FileOutcome::Updated { replacements } => assert_eq!(replacements, 2),
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert_eq!(fs::read_to_string(&file_path)?, "baz bar baz");

        Ok(())
    }

    #[test]
    fn test_process_file_identity_match_is_unchanged() -> Result<()> {
        let temp = TempDir::new()?;
        let file_path = temp.path().join("test.txt");
        fs::write(&file_path, "same same")?;

        match rewriter(temp.path()).process_file(&file_path) {
            FileOutcome::Unchanged { occurrences } => assert_eq!(occurrences, 2),
            other => panic!("unexpected outcome: {:?}", other),
        }

        Ok(())
    }

    #[test]
    fn test_process_file_decode_error() -> Result<()> {
        let temp = TempDir::new()?;
        let file_path = temp.path().join("test.txt");
        fs::write(&file_path, [b'f', b'o', b'o', 0xff, 0xfe])?;

        match rewriter(temp.path()).process_file(&file_path) {
            FileOutcome::Failed(err) => assert_eq!(err.kind(), "decode_error"),
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert_eq!(fs::read(&file_path)?, vec![b'f', b'o', b'o', 0xff, 0xfe]);

        Ok(())
    }

    #[test]
    fn test_process_missing_file_is_read_error() {
        let temp = TempDir::new().unwrap();
        let file_path = temp.path().join("gone.txt");

        match rewriter(temp.path()).process_file(&file_path) {
            FileOutcome::Failed(err) => assert_eq!(err.kind(), "read_error"),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_process_file_write_error_keeps_original() -> Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new()?;
        let file_path = temp.path().join("test.txt");
        fs::write(&file_path, "foo bar")?;
        fs::set_permissions(&file_path, fs::Permissions::from_mode(0o444))?;

        if fs::OpenOptions::new().write(true).open(&file_path).is_ok() {
            eprintln!("skipping write error check: file modes are not enforced for this user");
            return Ok(());
        }

        let outcome = rewriter(temp.path()).process_file(&file_path);
        fs::set_permissions(&file_path, fs::Permissions::from_mode(0o644))?;

        match outcome {
            FileOutcome::Failed(err) => {
                assert_eq!(err.kind(), "write_error");
                assert_eq!(err.path(), Some(&file_path));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert_eq!(fs::read_to_string(&file_path)?, "foo bar");

        Ok(())
    }

    #[test]
    fn test_run_aggregates_outcomes() -> Result<()> {
        let temp = TempDir::new()?;
        fs::create_dir_all(temp.path().join("skip"))?;
        fs::write(temp.path().join("a.txt"), "foo")?;
        fs::write(temp.path().join("b.txt"), "nothing here")?;
        fs::write(temp.path().join("c.txt"), [0xffu8])?;
        fs::write(temp.path().join("skip/d.txt"), "foo")?;

        let report = rewriter(temp.path()).run();

        assert_eq!(report.files_scanned, 3);
        assert_eq!(report.files_updated, 1);
        assert_eq!(report.replacements_made, 1);
        assert_eq!(report.updates[0].path, temp.path().join("a.txt"));
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].kind, "decode_error");
        assert_eq!(fs::read_to_string(temp.path().join("skip/d.txt"))?, "foo");

        Ok(())
    }
}
