//! Character-class helpers shared by the whitespace, capitalisation and
//! analysis code.

use memchr::memchr3_iter;

/// Characters that terminate a sentence.
pub const SENTENCE_TERMINATORS: [u8; 3] = [b'.', b'!', b'?'];

#[inline(always)]
pub fn is_sentence_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Whitespace as understood by every rule in this crate: Unicode `White_Space`.
/// U+0085 counts, U+FEFF does not.
#[inline(always)]
pub fn is_whitespace(c: char) -> bool {
    c.is_whitespace()
}

/// Split on runs of sentence terminators.
///
/// Leading and trailing segments are kept even when empty, so a text with
/// no terminator yields exactly one segment and `"Hi."` yields `["Hi", ""]`.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let [a, b, c] = SENTENCE_TERMINATORS;
    let mut segments = Vec::new();
    let mut start = 0;
    let mut prev_end: Option<usize> = None;

    for pos in memchr3_iter(a, b, c, text.as_bytes()) {
        // Extend the current run.
        if prev_end == Some(pos) {
            prev_end = Some(pos + 1);
            start = pos + 1;
            continue;
        }
        segments.push(&text[start..pos]);
        prev_end = Some(pos + 1);
        start = pos + 1;
    }
    segments.push(&text[start..]);
    segments
}

/// Number of segments produced by splitting `text` on runs of `pred`
/// characters: one more than the number of runs.
pub fn count_split_segments(text: &str, pred: impl Fn(char) -> bool) -> usize {
    let mut runs = 0;
    let mut in_run = false;
    for c in text.chars() {
        if pred(c) {
            if !in_run {
                runs += 1;
                in_run = true;
            }
        } else {
            in_run = false;
        }
    }
    runs + 1
}

/// Upper-case the first character of `text` if it is lower-case.
/// Returns `None` when nothing would change.
pub fn capitalize_first(text: &str) -> Option<String> {
    let mut chars = text.chars();
    let first = chars.next()?;
    if !first.is_lowercase() {
        return None;
    }
    let mut out = String::with_capacity(text.len() + 2);
    out.extend(first.to_uppercase());
    out.push_str(chars.as_str());
    (out != text).then_some(out)
}
