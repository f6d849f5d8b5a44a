//! Single ignore / re-include rule.

use glob::MatchOptions;
use thiserror::Error;

/// Prefix that turns a pattern into a re-include rule.
pub const REINCLUDE_PREFIX: char = '!';

/// A glob that failed to compile.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid glob pattern '{pattern}': {message}")]
pub struct PatternError {
    pub pattern: String,
    pub message: String,
}

/// What a matching pattern does to a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    /// Plain glob; a match marks the path ignored.
    Ignore,
    /// `!`-prefixed glob; a match marks the path re-included.
    Reinclude,
}

/// A parsed pattern: its kind plus the compiled glob (prefix stripped).
#[derive(Debug, Clone)]
pub struct Pattern {
    kind: PatternKind,
    raw: String,
    glob: Option<glob::Pattern>,
}

impl Pattern {
    /// Parse a raw pattern, failing if the glob does not compile.
    ///
    /// ```
    /// use fsift_filter::{Pattern, PatternKind};
    ///
    /// let p = Pattern::parse("!sub/*.log").unwrap();
    /// assert_eq!(p.kind(), PatternKind::Reinclude);
    /// assert_eq!(p.glob_text(), "sub/*.log");
    ///
    /// // Unclosed brackets are literal, `**` is just `*`.
    /// assert!(Pattern::parse("[abc").unwrap().matches("[abc"));
    /// assert!(Pattern::parse("a**b").unwrap().matches("a/x/b"));
    /// ```
    pub fn parse(raw: &str) -> Result<Self, PatternError> {
        let (kind, text) = split_kind(raw);
        let glob = glob::Pattern::new(&to_glob_syntax(text)).map_err(|e| PatternError {
            pattern: raw.to_string(),
            message: e.to_string(),
        })?;

        Ok(Self {
            kind,
            raw: raw.to_string(),
            glob: Some(glob),
        })
    }

    /// Parse a raw pattern; a glob that does not compile yields a pattern
    /// that never matches.
    pub fn parse_lenient(raw: &str) -> (Self, Option<PatternError>) {
        match Self::parse(raw) {
            Ok(pattern) => (pattern, None),
            Err(err) => (Self::never_matching(raw), Some(err)),
        }
    }

    fn never_matching(raw: &str) -> Self {
        Self {
            kind: split_kind(raw).0,
            raw: raw.to_string(),
            glob: None,
        }
    }

    pub fn kind(&self) -> PatternKind {
        self.kind
    }

    /// The pattern exactly as supplied, including any `!`.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The glob text with the re-include prefix removed.
    pub fn glob_text(&self) -> &str {
        split_kind(&self.raw).1
    }

    /// Whether the glob compiled. Invalid patterns never match.
    pub fn is_valid(&self) -> bool {
        self.glob.is_some()
    }

    /// Match the glob against the entire path string.
    pub fn matches(&self, path: &str) -> bool {
        match &self.glob {
            Some(glob) => glob.matches_with(path, match_options()),
            None => false,
        }
    }
}

fn split_kind(raw: &str) -> (PatternKind, &str) {
    match raw.strip_prefix(REINCLUDE_PREFIX) {
        Some(rest) => (PatternKind::Reinclude, rest),
        None => (PatternKind::Ignore, raw),
    }
}

/// Rewrite shell wildcard text into the `glob` crate's dialect.
///
/// A run of `*` is one `*` (the crate would otherwise reject it or read it
/// as a recursive `**`), and a `[` with no closing `]` is a literal `[`.
/// Bracket expressions are copied untouched.
fn to_glob_syntax(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '*' => {
                out.push('*');
                while chars.get(i + 1) == Some(&'*') {
                    i += 1;
                }
            }
            '[' => match class_end(&chars, i) {
                Some(end) => {
                    out.extend(&chars[i..=end]);
                    i = end;
                }
                None => out.push_str("[[]"),
            },
            c => out.push(c),
        }
        i += 1;
    }

    out
}

/// Index of the `]` closing the class opened at `start`. A `]` right after
/// `[` or `[!` is a member, not the close.
fn class_end(chars: &[char], start: usize) -> Option<usize> {
    let mut j = start + 1;
    if chars.get(j) == Some(&'!') {
        j += 1;
    }
    if chars.get(j) == Some(&']') {
        j += 1;
    }
    (j..chars.len()).find(|&k| chars[k] == ']')
}

/// `*` crosses `/` and leading dots are ordinary characters, so a glob
/// applies to the full path string. Case follows the host filesystem.
fn match_options() -> MatchOptions {
    MatchOptions {
        case_sensitive: !cfg!(windows),
        require_literal_separator: false,
        require_literal_leading_dot: false,
    }
}
