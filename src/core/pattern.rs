//! Base-name filter built on shell-style glob patterns.

use glob::{MatchOptions, Pattern};

use crate::error::{Error, Result};

/// Base names are matched case-sensitively and `*` matches a leading dot.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

/// A compiled glob pattern, matched against base names only.
#[derive(Debug, Clone)]
pub struct NamePattern {
    source: String,
    compiled: Pattern,
}

impl NamePattern {
    /// Compile `pattern`. `[^...]` is accepted as a synonym for `[!...]`.
    pub fn new(pattern: &str) -> Result<Self> {
        let normalized = normalize_negation(pattern);
        let compiled =
            Pattern::new(&normalized).map_err(|e| Error::pattern_invalid(pattern, &e))?;

        Ok(Self {
            source: pattern.to_string(),
            compiled,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn matches(&self, base_name: &str) -> bool {
        self.compiled.matches_with(base_name, MATCH_OPTIONS)
    }
}

fn normalize_negation(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut in_class = false;
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        out.push(c);
        match c {
            '[' if !in_class => {
                in_class = true;
                if chars.peek() == Some(&'^') {
                    chars.next();
                    out.push('!');
                }
                // A leading ']' is a literal member, not the closing bracket.
                if chars.peek() == Some(&']') {
                    if let Some(close) = chars.next() {
                        out.push(close);
                    }
                }
            }
            ']' if in_class => in_class = false,
            _ => {}
        }
    }

    out
}
