use crate::core::RuleSet;

/// Content after a rule set has been applied, with per-rule counts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub content: String,

    /// Occurrences matched by each rule, in rule order
    pub per_rule: Vec<usize>,
}

impl Rewrite {
    /// Total occurrences matched across all rules
    pub fn total(&self) -> usize {
        self.per_rule.iter().sum()
    }

    /// Whether the content differs from `original`.
    ///
    /// Identity rules match without changing anything, so this compares
    /// values instead of looking at the counts.
    pub fn changed(&self, original: &str) -> bool {
        self.content != original
    }
}

/// Apply every rule in order to `content`.
///
/// Each rule sees the output of the rules before it. Matches are literal,
/// non-overlapping and found left to right; replaced text is not rescanned
/// by the same rule.
pub fn apply_rules(content: &str, rules: &RuleSet) -> Rewrite {
    let mut current = content.to_string();
    let mut per_rule = Vec::with_capacity(rules.len());

    for rule in rules.rules() {
        let (next, count) = replace_counted(&current, &rule.search, &rule.replace);
        per_rule.push(count);
        if count > 0 {
            current = next;
        }
    }

    Rewrite {
        content: current,
        per_rule,
    }
}

/// Single-scan replace that also counts matches
fn replace_counted(haystack: &str, search: &str, replace: &str) -> (String, usize) {
    let mut out = String::with_capacity(haystack.len());
    let mut last = 0;
    let mut count = 0;

    for (start, matched) in haystack.match_indices(search) {
        out.push_str(&haystack[last..start]);
        out.push_str(replace);
        last = start + matched.len();
        count += 1;
    }
    out.push_str(&haystack[last..]);

    (out, count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules(pairs: &[(&str, &str)]) -> RuleSet {
        RuleSet::from_pairs("test", pairs).unwrap()
    }

    #[test]
    fn test_counts_and_replaces_all_occurrences() {
        let set = rules(&[("foo", "baz")]);
        let rewrite = apply_rules("foo bar foo", &set);

        assert_eq!(rewrite.content, "baz bar baz");
        assert_eq!(rewrite.per_rule, vec![2]);
        assert!(rewrite.changed("foo bar foo"));
    }

    #[test]
    fn test_matches_do_not_overlap() {
        let set = rules(&[("aa", "b")]);
        let rewrite = apply_rules("aaaaa", &set);

        assert_eq!(rewrite.content, "bba");
        assert_eq!(rewrite.total(), 2);
    }

    #[test]
    fn test_replacement_is_not_rescanned() {
        let set = rules(&[("a", "aa")]);
        let rewrite = apply_rules("a-a", &set);

        assert_eq!(rewrite.content, "aa-aa");
        assert_eq!(rewrite.total(), 2);
    }

    #[test]
    fn test_later_rules_see_earlier_output() {
        let set = rules(&[("Magma Cheats", "Skyline Cheats"), ("Skyline", "Sky")]);
        let rewrite = apply_rules("Magma Cheats", &set);

        assert_eq!(rewrite.content, "Sky Cheats");
        assert_eq!(rewrite.per_rule, vec![1, 1]);
    }

    #[test]
    fn test_rule_order_matters() {
        let longest_first = rules(&[
            ("Magma Cheats", "Skyline Cheats"),
            ("Magma Cheat", "Skyline Cheat"),
        ]);
        let rewrite = apply_rules("Magma Cheats and Magma Cheat", &longest_first);

        assert_eq!(rewrite.content, "Skyline Cheats and Skyline Cheat");
        assert_eq!(rewrite.per_rule, vec![1, 1]);
    }

    #[test]
    fn test_case_sensitive() {
        let set = rules(&[("magma", "skyline")]);
        let rewrite = apply_rules("Magma MAGMA", &set);

        assert!(!rewrite.changed("Magma MAGMA"));
        assert_eq!(rewrite.total(), 0);
    }

    #[test]
    fn test_identity_rule_counts_but_does_not_change() {
        let set = rules(&[("ring-0", "ring-0")]);
        let rewrite = apply_rules("join ring-0 today", &set);

        assert_eq!(rewrite.total(), 1);
        assert!(!rewrite.changed("join ring-0 today"));
    }

    #[test]
    fn test_multibyte_content() {
        let set = rules(&[("discord.gg/skylineggsu", "discord.gg/skylineggs")]);
        let rewrite = apply_rules("✅ discord.gg/skylineggsu 🎉", &set);

        assert_eq!(rewrite.content, "✅ discord.gg/skylineggs 🎉");
        assert_eq!(rewrite.total(), 1);
    }

    #[test]
    fn test_empty_content() {
        let set = rules(&[("a", "b")]);
        let rewrite = apply_rules("", &set);

        assert_eq!(rewrite.content, "");
        assert_eq!(rewrite.per_rule, vec![0]);
    }
}
