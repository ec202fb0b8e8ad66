//! Change detection.
//!
//! Improvements are re-derived by testing the original and the enhanced text
//! against a fixed table of before/after predicates. Nothing is recorded
//! while the rules run. The table covers only some rule categories and
//! tests shapes, not causes, so it can both miss real changes (a spelling
//! fix produces no message of its own) and report ones that did not come
//! from the matching rule (the `of` → `have` check only looks at the
//! original text).

use regex::Regex;
use std::sync::LazyLock;

pub const NO_CHANGES: &str = "Text appears grammatically correct";
pub const GENERAL_CHANGES: &str = "Applied general grammar and style improvements";

/// One side of a predicate.
enum Check {
    Contains(&'static str),
    Matches(Regex),
    NotMatches(Regex),
    Always,
}

impl Check {
    fn holds(&self, text: &str) -> bool {
        match self {
            Check::Contains(needle) => text.contains(*needle),
            Check::Matches(re) => re.is_match(text),
            Check::NotMatches(re) => !re.is_match(text),
            Check::Always => true,
        }
    }
}

struct Predicate {
    before: Check,
    after: Check,
    message: &'static str,
}

fn re(pattern: &str) -> Regex {
    Regex::new(pattern)
        .unwrap_or_else(|e| panic!("change predicate `{pattern}` failed to compile: {e}"))
}

fn matches(pattern: &str) -> Check {
    Check::Matches(re(pattern))
}

fn not_matches(pattern: &str) -> Check {
    Check::NotMatches(re(pattern))
}

/// Same shape before and gone after.
fn removed(pattern: &str, message: &'static str) -> Predicate {
    Predicate {
        before: matches(pattern),
        after: not_matches(pattern),
        message,
    }
}

static PREDICATES: LazyLock<Vec<Predicate>> = LazyLock::new(|| {
    vec![
        Predicate {
            before: Check::Contains("principle"),
            after: Check::Contains("principal"),
            message: "Corrected 'principle' to 'principal'",
        },
        removed(r"\s+be\s+that", "Fixed verb 'be' to proper form (is/are)"),
        removed(r"(?i)every\s+\w+s\s+", "Fixed singular/plural agreement with 'every'"),
        Predicate {
            before: matches(r"(?i)worked\s+remote"),
            after: matches(r"(?i)worked\s+remotely"),
            message: "Changed adjective to adverb (remote → remotely)",
        },
        Predicate {
            before: matches(r"Beside,"),
            after: matches(r"Besides,"),
            message: "Corrected 'Beside' to 'Besides'",
        },
        Predicate {
            before: matches(r"(?i)what\s+was\s+present"),
            after: matches(r"(?i)which\s+was\s+presented"),
            message: "Fixed 'what was present' to 'which was presented'",
        },
        Predicate {
            before: matches(r"(?i)its\s+assumptions"),
            after: matches(r"(?i)their\s+assumptions"),
            message: "Fixed pronoun agreement (its → their)",
        },
        removed(r"(?i)before\s+\w+\s+will\s+", "Removed unnecessary 'will' in time clause"),
        Predicate {
            before: matches(r"\bi\b"),
            after: matches(r"\bI\b"),
            message: "Capitalized pronoun 'I'",
        },
        Predicate {
            before: matches(r"(?i)could\s+of|should\s+of|would\s+of"),
            after: Check::Always,
            message: "Fixed 'of' to 'have' in verb phrases",
        },
        Predicate {
            before: matches(r"(?i)their\s+(is|are|was|were)"),
            after: matches(r"(?i)there\s+(is|are|was|were)"),
            message: "Fixed their/there/they're confusion",
        },
        Predicate {
            before: matches(r"(?i)your\s+(welcome|right|wrong|going)"),
            after: matches(r"(?i)you're\s+(welcome|right|wrong|going)"),
            message: "Fixed your/you're confusion",
        },
    ]
});

/// Describe what changed between `original` and `enhanced`.
///
/// Never empty: identical texts yield [`NO_CHANGES`] without consulting the
/// predicate table, and a change no predicate recognises yields
/// [`GENERAL_CHANGES`].
pub fn detect(original: &str, enhanced: &str) -> Vec<String> {
    if original == enhanced {
        return vec![NO_CHANGES.to_owned()];
    }

    let mut improvements: Vec<String> = PREDICATES
        .iter()
        .filter(|p| p.before.holds(original) && p.after.holds(enhanced))
        .map(|p| p.message.to_owned())
        .collect();

    if improvements.is_empty() {
        improvements.push(GENERAL_CHANGES.to_owned());
    }
    improvements
}
