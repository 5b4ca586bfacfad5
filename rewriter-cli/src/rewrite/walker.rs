use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::core::{FileFilter, RewriteError};

type FilteredWalk = walkdir::FilterEntry<walkdir::IntoIter, Box<dyn FnMut(&DirEntry) -> bool>>;

/// Lazy, deterministic sequence of files a run should look at.
///
/// Entries are visited in file-name order. Excluded directories are pruned
/// before descent, symlinks are not followed, and a directory that cannot
/// be listed yields a `Traversal` error without stopping the walk.
pub struct CandidateFiles {
    walker: FilteredWalk,
    filter: FileFilter,
}

impl CandidateFiles {
    pub fn new(root: &Path, filter: FileFilter) -> Self {
        let prune = filter.clone();
        let keep: Box<dyn FnMut(&DirEntry) -> bool> =
            Box::new(move |entry: &DirEntry| !should_prune(entry, &prune));

        let walker = WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(keep);

        Self { walker, filter }
    }
}

impl Iterator for CandidateFiles {
    type Item = Result<PathBuf, RewriteError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.walker.next()? {
                Ok(entry) => entry,
                Err(err) => return Some(Err(traversal_error(err))),
            };

            if !entry.file_type().is_file() {
                continue;
            }

            if self.filter.accepts_file_name(entry.file_name()) {
                return Some(Ok(entry.into_path()));
            }
        }
    }
}

/// Directories below the root whose name is excluded
fn should_prune(entry: &DirEntry, filter: &FileFilter) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }

    filter.excludes_dir_name(entry.file_name())
}

fn traversal_error(err: walkdir::Error) -> RewriteError {
    let path = err
        .path()
        .map(Path::to_path_buf)
        .unwrap_or_default();
    let message = match err.io_error() {
        Some(io) => io.to_string(),
        None => err.to_string(),
    };
    RewriteError::Traversal { path, message }
}
