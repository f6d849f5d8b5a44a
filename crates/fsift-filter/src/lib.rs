//! fsift-filter: Ordered ignore / re-include pattern evaluation.
//!
//! A pattern is a shell-style glob matched against the whole path string.
//! A leading `!` turns it into a re-include rule. Every rule is evaluated for
//! every path and the two outcomes are OR-accumulated:
//!
//! - any matching plain pattern marks the path *ignored*
//! - any matching `!` pattern marks the path *re-included*
//!
//! A path is kept when it is not ignored or when it is re-included. Unlike
//! gitignore, rule order never changes the outcome.

pub mod engine;
pub mod pattern;

pub use engine::{Decision, PatternSet};
pub use pattern::{Pattern, PatternError, PatternKind};

/// Filter `files` against `patterns`, keeping the original order.
///
/// ```
/// use fsift_filter::{filter_files, PatternSet};
///
/// let patterns = PatternSet::parse_list("*.log,!keep.log");
/// let files = vec!["a.log".to_string(), "keep.log".to_string(), "b.txt".to_string()];
/// assert_eq!(filter_files(files, &patterns), vec!["keep.log", "b.txt"]);
/// ```
pub fn filter_files(files: Vec<String>, patterns: &PatternSet) -> Vec<String> {
    patterns.filter(files)
}
