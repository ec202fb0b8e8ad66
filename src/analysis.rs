//! Readability score and advisory suggestions.
//!
//! Both are pure functions of one text and are independent of whether the
//! rule engine changed anything.

use crate::unicode::{count_split_segments, is_sentence_terminator, is_whitespace, split_sentences};
use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Sentences with more words than this are reported as long.
pub const LONG_SENTENCE_WORDS: usize = 25;
/// More passive-voice matches than this trigger a suggestion.
pub const PASSIVE_THRESHOLD: usize = 2;
/// Words must be longer than this to count as repetitive.
pub const REPEATED_WORD_MIN_LEN: usize = 4;
/// More occurrences than this make a word repetitive.
pub const REPEATED_WORD_THRESHOLD: usize = 3;
/// More sentences than this without a transition word trigger a suggestion.
pub const TRANSITION_SENTENCE_THRESHOLD: usize = 3;

pub const TRANSITION_SUGGESTION: &str =
    "Add transitional phrases (however, therefore, moreover) for better flow between ideas";
pub const GENERIC_SUGGESTION: &str =
    "Consider adding more descriptive language or varying sentence structure";

static PASSIVE_VOICE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(was|were|been|being)\s+\w+ed\b").expect("passive voice pattern")
});

static TRANSITION_WORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(however|therefore|moreover|furthermore|additionally|consequently|meanwhile|nevertheless)\b",
    )
    .expect("transition word pattern")
});

/// Readability of the original and the enhanced text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Readability {
    pub original: f64,
    pub enhanced: f64,
}

impl Readability {
    pub fn of(original: &str, enhanced: &str) -> Self {
        Self {
            original: score(original),
            enhanced: score(enhanced),
        }
    }
}

/// `100 - 2 * (words / sentences)` clamped to `[0, 100]`; higher is simpler.
///
/// Counts follow raw split semantics: words are the pieces between runs of
/// whitespace and sentences the pieces between runs of `.`/`!`/`?`, empty
/// pieces included. Both counts are at least one, so `score("")` is 98.
pub fn score(text: &str) -> f64 {
    let words = count_split_segments(text, is_whitespace) as f64;
    let sentences = count_split_segments(text, is_sentence_terminator) as f64;
    (100.0 - (words / sentences) * 2.0).clamp(0.0, 100.0)
}

/// Sentences used by [`suggest`]: terminator-delimited, blank ones dropped.
fn sentences(text: &str) -> Vec<&str> {
    split_sentences(text)
        .into_iter()
        .filter(|s| !s.trim().is_empty())
        .collect()
}

fn long_sentences(sentences: &[&str]) -> usize {
    sentences
        .iter()
        .filter(|s| s.split_whitespace().count() > LONG_SENTENCE_WORDS)
        .count()
}

fn passive_count(text: &str) -> usize {
    PASSIVE_VOICE.find_iter(text).count()
}

/// Lower-cased, purely alphabetic words above the length floor that occur
/// too often, in first-occurrence order.
fn repeated_words(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for word in lowered.split_whitespace() {
        if word.len() > REPEATED_WORD_MIN_LEN && word.bytes().all(|b| b.is_ascii_lowercase()) {
            *counts.entry(word).or_default() += 1;
        }
    }
    counts
        .into_iter()
        .filter(|&(_, n)| n > REPEATED_WORD_THRESHOLD)
        .map(|(w, _)| w.to_owned())
        .collect()
}

/// Advisory suggestions for `text`, in fixed order. Never empty.
pub fn suggest(text: &str) -> Vec<String> {
    let mut suggestions = Vec::new();
    let sentences = sentences(text);

    let long = long_sentences(&sentences);
    if long > 0 {
        suggestions.push(format!(
            "Found {long} long sentence(s) - consider breaking them down for clarity"
        ));
    }

    let passive = passive_count(text);
    if passive > PASSIVE_THRESHOLD {
        suggestions.push(format!(
            "Detected {passive} instances of passive voice - consider using active voice"
        ));
    }

    let repeated = repeated_words(text);
    if !repeated.is_empty() {
        suggestions.push(format!(
            "Words used frequently: {} - consider varying vocabulary",
            repeated.join(", ")
        ));
    }

    if sentences.len() > TRANSITION_SENTENCE_THRESHOLD && !TRANSITION_WORDS.is_match(text) {
        suggestions.push(TRANSITION_SUGGESTION.to_owned());
    }

    if suggestions.is_empty() {
        suggestions.push(GENERIC_SUGGESTION.to_owned());
    }
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_of_simple_sentence() {
        // 2 words, "Hello world." splits into ["Hello world", ""] → 2 sentences.
        assert_eq!(score("Hello world."), 98.0);
    }

    #[test]
    fn score_without_terminator_counts_one_sentence() {
        assert_eq!(score("one two three four five"), 90.0);
    }

    #[test]
    fn score_of_empty_text() {
        assert_eq!(score(""), 98.0);
    }

    #[test]
    fn score_is_clamped() {
        let long = "word ".repeat(200);
        assert_eq!(score(&long), 0.0);
    }

    #[test]
    fn readability_pair() {
        let r = Readability::of("one two three four five", "Hello world.");
        assert_eq!(r.original, 90.0);
        assert_eq!(r.enhanced, 98.0);
    }

    #[test]
    fn generic_fallback_when_nothing_triggers() {
        assert_eq!(suggest("Short and sweet."), vec![GENERIC_SUGGESTION]);
    }

    #[test]
    fn transition_suggestion_without_fallback() {
        let text = "The sun rose. Birds sang. We ate. The day ended.";
        assert_eq!(suggest(text), vec![TRANSITION_SUGGESTION]);
    }

    #[test]
    fn transition_word_suppresses_suggestion() {
        let text = "The sun rose. Birds sang. However, we ate. The day ended.";
        assert_eq!(suggest(text), vec![GENERIC_SUGGESTION]);
    }

    #[test]
    fn three_sentences_are_not_enough() {
        assert_eq!(suggest("One. Two. Three."), vec![GENERIC_SUGGESTION]);
    }

    #[test]
    fn long_sentence_is_reported() {
        let text = format!("{}.", "word ".repeat(26).trim_end());
        let out = suggest(&text);
        assert_eq!(
            out[0],
            "Found 1 long sentence(s) - consider breaking them down for clarity"
        );
    }

    #[test]
    fn passive_voice_needs_more_than_two() {
        let two = "It was painted. It was cleaned.";
        assert_eq!(suggest(two), vec![GENERIC_SUGGESTION]);
        let three = "It was painted. It was cleaned. They were moved.";
        assert_eq!(
            suggest(three),
            vec!["Detected 3 instances of passive voice - consider using active voice"]
        );
    }

    #[test]
    fn repeated_words_in_first_seen_order() {
        let text = "house garden house garden house garden house garden";
        assert_eq!(
            suggest(text),
            vec!["Words used frequently: house, garden - consider varying vocabulary"]
        );
    }

    #[test]
    fn punctuation_attached_words_are_not_counted() {
        // "house." is not purely alphabetic.
        let text = "house house house house.";
        assert_eq!(suggest(text), vec![GENERIC_SUGGESTION]);
    }

    #[test]
    fn short_words_are_not_counted() {
        assert_eq!(suggest("cat cat cat cat cat"), vec![GENERIC_SUGGESTION]);
    }

    #[test]
    fn repetition_is_case_insensitive() {
        let text = "Green green GREEN green";
        assert_eq!(
            suggest(text),
            vec!["Words used frequently: green - consider varying vocabulary"]
        );
    }
}
