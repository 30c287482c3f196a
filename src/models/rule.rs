//! Window-placement rules and their compiled matchers.

use crate::diag::{Diagnostics, WarningKind};
use regex::Regex;
use serde::Serialize;

/// A declarative window-matching policy.
///
/// Rules are tested in declaration order by the matching engine, so the
/// list order is semantically meaningful and preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rule {
    /// Pattern matched against window name and class. Preserved
    /// literally, including the empty string.
    pub window_pattern: String,
    /// Pattern selecting the tags a matched window is placed on.
    /// `None` means no tag constraint (an empty declared string is
    /// normalized to this).
    pub tag_pattern: Option<String>,
    /// Force the matched window to float.
    pub floating: bool,
    /// Output the matched window is sent to. Always within
    /// `[0, output_count)` after resolution; out-of-range declarations
    /// are clamped to 0.
    pub output: usize,
}

/// Compiled matcher for one rule.
///
/// Produced by [`compile_rules`] after the rule list is fully built. A
/// pattern that failed to compile leaves its matcher absent, so the
/// rule never matches on that dimension instead of aborting startup.
#[derive(Debug)]
pub struct RuleMatcher {
    /// Compiled window pattern. An empty declared pattern compiles to a
    /// regex that matches every window, which is the matching engine's
    /// convention for "no constraint".
    pub window: Option<Regex>,
    /// Compiled tag pattern, absent when the rule declared none.
    pub tags: Option<Regex>,
}

impl RuleMatcher {
    /// Returns true if the rule's window pattern matches `name`.
    #[must_use]
    pub fn matches_window(&self, name: &str) -> bool {
        self.window.as_ref().is_some_and(|re| re.is_match(name))
    }

    /// Returns true if the rule constrains tags and `tag` satisfies the
    /// constraint, or if the rule has no tag constraint at all.
    #[must_use]
    pub fn matches_tag(&self, tag: &str) -> bool {
        self.tags.as_ref().map_or(true, |re| re.is_match(tag))
    }
}

/// Compiles every rule's patterns, one matcher per rule, in order.
///
/// Compilation failures are recoverable: the matcher is left absent on
/// that dimension and a warning is emitted.
#[must_use]
pub fn compile_rules(rules: &[Rule], diags: &mut Diagnostics) -> Vec<RuleMatcher> {
    rules
        .iter()
        .enumerate()
        .map(|(index, rule)| RuleMatcher {
            window: compile_pattern(&rule.window_pattern, index, diags),
            tags: rule
                .tag_pattern
                .as_deref()
                .and_then(|pattern| compile_pattern(pattern, index, diags)),
        })
        .collect()
}

fn compile_pattern(pattern: &str, index: usize, diags: &mut Diagnostics) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(err) => {
            diags.warn(
                WarningKind::InvalidPattern,
                format!("rule {index}: cannot compile pattern '{pattern}': {err}"),
            );
            None
        }
    }
}
