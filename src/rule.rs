//! Pattern-driven rewrite rules.
//!
//! A [`Rule`] is a compiled regex plus a [`Replacement`]. Rules are grouped
//! into ordered batches and a batch is exposed to the pipeline as one
//! [`Stage`](crate::stage::Stage). Inside a batch every rule runs exactly
//! once, left to right, and sees the output of the rule before it. There is
//! no fixed-point loop.
//!
//! Application is zero-copy: a rule that does not change the text hands the
//! incoming `Cow` straight back, so an untouched input stays borrowed all the
//! way through the pipeline.

use regex::{Captures, Regex};
use std::borrow::Cow;

/// How the matched span is rewritten.
#[derive(Clone, Copy)]
pub enum Replacement {
    /// A `regex` replacement template, e.g. `"${1} remotely"`.
    Template(&'static str),
    /// Computed from the captures, for rewrites that depend on the matched
    /// word (verb agreement, lexicon lookups, capitalisation).
    With(fn(&Captures<'_>) -> String),
}

pub struct Rule {
    regex: Regex,
    replacement: Replacement,
}

impl Rule {
    /// Compile a rule. Patterns are static table data: a pattern that does
    /// not compile is a bug in this crate, not a runtime condition.
    pub fn new(pattern: &str, replacement: Replacement) -> Self {
        let regex = Regex::new(pattern)
            .unwrap_or_else(|e| panic!("rewrite rule `{pattern}` failed to compile: {e}"));
        Self { regex, replacement }
    }

    #[inline]
    pub fn template(pattern: &str, template: &'static str) -> Self {
        Self::new(pattern, Replacement::Template(template))
    }

    #[inline]
    pub fn with(pattern: &str, f: fn(&Captures<'_>) -> String) -> Self {
        Self::new(pattern, Replacement::With(f))
    }

    #[inline]
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Rewrite every non-overlapping match. Returns `text` untouched when
    /// nothing matched or the rewrite reproduced the input byte for byte.
    pub fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        let rewritten = match self.replacement {
            Replacement::Template(template) => match self.regex.replace_all(&text, template) {
                Cow::Owned(s) => Some(s),
                Cow::Borrowed(_) => None,
            },
            Replacement::With(f) => {
                match self.regex.replace_all(&text, |caps: &Captures<'_>| f(caps)) {
                    Cow::Owned(s) => Some(s),
                    Cow::Borrowed(_) => None,
                }
            }
        };

        match rewritten {
            Some(s) if s != *text => Cow::Owned(s),
            _ => text,
        }
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("pattern", &self.regex.as_str())
            .finish_non_exhaustive()
    }
}

/// Run a batch in order. Later rules observe earlier rules' output.
pub fn apply_rules<'a>(rules: &[Rule], text: Cow<'a, str>) -> Cow<'a, str> {
    rules.iter().fold(text, |text, rule| rule.apply(text))
}

/// `true` if any rule of the batch matches `text`.
///
/// If no rule matches the input, no rule can change it, so no later rule can
/// be enabled by an earlier one; the check is exact as a skip condition.
pub fn any_match(rules: &[Rule], text: &str) -> bool {
    rules.iter().any(|rule| rule.is_match(text))
}

/// Declare a lazily compiled, ordered rule batch.
///
/// ```ignore
/// rule_batch!(ADVERBS, [
///     Rule::template(r"(?i)\b(worked)\s+remote\b", "${1} remotely"),
/// ]);
/// ```
#[macro_export]
macro_rules! rule_batch {
    ($name:ident, [$($rule:expr),+ $(,)?]) => {
        static $name: ::std::sync::LazyLock<Vec<$crate::rule::Rule>> =
            ::std::sync::LazyLock::new(|| vec![$($rule),+]);
    };
}
