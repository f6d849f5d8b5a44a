//! Pattern set evaluation over a file list.

use tracing::{debug, trace, warn};

use crate::pattern::{Pattern, PatternKind};

/// Separator for pattern lists given as a single string.
pub const LIST_SEPARATOR: char = ',';

/// Accumulated outcome of every pattern for one path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Decision {
    /// Some plain pattern matched.
    pub ignored: bool,
    /// Some `!` pattern matched.
    pub reincluded: bool,
}

impl Decision {
    pub fn is_kept(self) -> bool {
        !self.ignored || self.reincluded
    }
}

/// Ordered, read-only collection of patterns.
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    patterns: Vec<Pattern>,
}

impl PatternSet {
    /// Create an empty pattern set; it keeps every path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Split a comma-separated list into patterns.
    ///
    /// No whitespace trimming and no escaping: `"a, b"` yields `a` and ` b`.
    pub fn parse_list(list: &str) -> Self {
        let mut set = Self::new();
        set.extend_list(list);
        set
    }

    /// Append the patterns of a comma-separated list.
    pub fn extend_list(&mut self, list: &str) {
        self.extend(list.split(LIST_SEPARATOR));
    }

    /// Build from already-split pattern strings, preserving order.
    pub fn from_patterns<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        set.extend(raw);
        set
    }

    /// Append patterns after the existing ones.
    ///
    /// Globs that fail to compile are kept in position but never match.
    pub fn extend<I, S>(&mut self, patterns: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for raw in patterns {
            let (pattern, err) = Pattern::parse_lenient(raw.as_ref());
            if let Some(err) = err {
                warn!("Pattern will never match: {}", err);
            }
            self.patterns.push(pattern);
        }
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pattern> {
        self.patterns.iter()
    }

    /// Patterns whose glob did not compile.
    pub fn invalid(&self) -> impl Iterator<Item = &Pattern> {
        self.patterns.iter().filter(|p| !p.is_valid())
    }

    /// Run every pattern against `path` and accumulate both flags.
    pub fn evaluate(&self, path: &str) -> Decision {
        let mut decision = Decision::default();

        for pattern in &self.patterns {
            if !pattern.matches(path) {
                continue;
            }
            match pattern.kind() {
                PatternKind::Ignore => decision.ignored = true,
                PatternKind::Reinclude => decision.reincluded = true,
            }
        }

        trace!(
            path,
            ignored = decision.ignored,
            reincluded = decision.reincluded,
            "evaluated"
        );
        decision
    }

    pub fn is_kept(&self, path: &str) -> bool {
        self.evaluate(path).is_kept()
    }

    /// Keep the paths that survive, in their original order.
    pub fn filter(&self, files: Vec<String>) -> Vec<String> {
        let total = files.len();
        let kept: Vec<String> = files.into_iter().filter(|f| self.is_kept(f)).collect();

        debug!(
            "Filtered {} paths with {} patterns: {} kept",
            total,
            self.patterns.len(),
            kept.len()
        );
        kept
    }
}

impl<'a> IntoIterator for &'a PatternSet {
    type Item = &'a Pattern;
    type IntoIter = std::slice::Iter<'a, Pattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.patterns.iter()
    }
}
