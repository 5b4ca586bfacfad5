use serde::Serialize;
use std::ffi::OsStr;

use super::error::RewriteError;

/// A literal, case-sensitive search/replace pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplacementRule {
    pub search: String,
    pub replace: String,
}

impl ReplacementRule {
    pub fn new(search: impl Into<String>, replace: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            replace: replace.into(),
        }
    }

    /// Rewriting with this rule never changes content
    pub fn is_identity(&self) -> bool {
        self.search == self.replace
    }
}

/// Ordered, validated sequence of replacement rules
#[derive(Debug, Clone, Serialize)]
pub struct RuleSet {
    name: String,
    rules: Vec<ReplacementRule>,
}

impl RuleSet {
    /// Build a rule set, rejecting any rule with an empty search text
    pub fn new(name: impl Into<String>, rules: Vec<ReplacementRule>) -> Result<Self, RewriteError> {
        let name = name.into();

        if let Some(index) = rules.iter().position(|rule| rule.search.is_empty()) {
            return Err(RewriteError::RuleValidation {
                rule_set: name,
                index,
                message: "search text must not be empty".to_string(),
            });
        }

        Ok(Self { name, rules })
    }

    /// Build a rule set from `(search, replace)` literals
    pub fn from_pairs(name: &str, pairs: &[(&str, &str)]) -> Result<Self, RewriteError> {
        let rules = pairs
            .iter()
            .map(|(search, replace)| ReplacementRule::new(*search, *replace))
            .collect();
        Self::new(name, rules)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rules(&self) -> &[ReplacementRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Pairs `(i, j)` where the output of rule `i` may produce a new match
    /// for rule `j` after `j` has already run in the same pass.
    ///
    /// The replacement can contain the search text outright, or complete it
    /// together with the text on either side of it. A non-empty result means
    /// a second run over rewritten content may still find matches. Identity
    /// rules are ignored on both sides since applying them is a no-op.
    pub fn chain_conflicts(&self) -> Vec<(usize, usize)> {
        let mut conflicts = Vec::new();

        for (i, producer) in self.rules.iter().enumerate() {
            if producer.is_identity() {
                continue;
            }
            for (j, target) in self.rules.iter().enumerate().take(i + 1) {
                if target.is_identity() {
                    continue;
                }
                if may_form_match(&producer.replace, &target.search) {
                    conflicts.push((i, j));
                }
            }
        }

        conflicts
    }
}

/// Whether `search` can occur overlapping a freshly inserted `replace`
fn may_form_match(replace: &str, search: &str) -> bool {
    let r = replace.as_bytes();
    let s = search.as_bytes();

    // deleting text joins its neighbours
    if r.is_empty() {
        return s.len() > 1;
    }

    // search starts inside the replacement, possibly running past its end
    let starts_inside = (0..r.len()).any(|at| {
        let n = (r.len() - at).min(s.len());
        r[at..at + n] == s[..n]
    });

    // search starts in the preceding text and runs into the replacement
    let starts_before = (1..s.len()).any(|skip| {
        let n = (s.len() - skip).min(r.len());
        s[skip..skip + n] == r[..n]
    });

    starts_inside || starts_before
}

/// Which files a run looks at
#[derive(Debug, Clone, Serialize)]
pub struct FileFilter {
    /// Accepted file name suffixes, e.g. ".ts"
    pub extensions: Vec<String>,

    /// Directory names whose subtrees are skipped entirely
    pub excluded_dirs: Vec<String>,
}

impl FileFilter {
    pub fn new(extensions: &[&str], excluded_dirs: &[&str]) -> Self {
        Self {
            extensions: extensions.iter().map(|s| s.to_string()).collect(),
            excluded_dirs: excluded_dirs.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Case-sensitive suffix match against the accepted extensions.
    ///
    /// Works on the raw name so names that are not valid UTF-8 still match.
    pub fn accepts_file_name(&self, name: impl AsRef<OsStr>) -> bool {
        let name = name.as_ref().as_encoded_bytes();
        self.extensions
            .iter()
            .any(|ext| name.ends_with(ext.as_bytes()))
    }

    /// Exact match of a single path segment against the excluded names
    pub fn excludes_dir_name(&self, name: impl AsRef<OsStr>) -> bool {
        let name = name.as_ref().as_encoded_bytes();
        self.excluded_dirs.iter().any(|dir| dir.as_bytes() == name)
    }
}
