//! Capitalisation repairs.
//!
//! Runs before whitespace and punctuation normalisation, so a boundary is
//! only recognised where the input already has `[.!?]` followed by
//! whitespace: the `n` of `End.next` stays lower-case.

use crate::{
    context::Context,
    rule::{Rule, apply_rules, any_match},
    rule_batch, rule_stage,
    stage::Stage,
    unicode::capitalize_first,
};
use regex::Captures;
use std::borrow::Cow;

/// Upper-case the first character of the text and the first ASCII letter
/// after every `[.!?]` + whitespace boundary.
pub struct CapitalizeSentences;

fn upper_after_boundary(caps: &Captures<'_>) -> String {
    format!("{}{}", &caps[1], caps[2].to_ascii_uppercase())
}

rule_batch!(SENTENCE_START_RULES, [
    Rule::with(r"(^|[.!?]\s+)([a-z])", upper_after_boundary),
]);

impl Stage for CapitalizeSentences {
    fn name(&self) -> &'static str {
        "capitalize_sentences"
    }

    #[inline]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> bool {
        text.starts_with(char::is_lowercase) || any_match(&SENTENCE_START_RULES, text)
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Cow<'a, str> {
        let text = match capitalize_first(&text) {
            Some(capitalized) => Cow::Owned(capitalized),
            None => text,
        };
        apply_rules(&SENTENCE_START_RULES, text)
    }
}

/// Stand-alone `i` → `I`, including `i'm`, `i've`, `i'll`, `i'd`.
pub struct CapitalizePronounI;

rule_batch!(PRONOUN_I_RULES, [
    Rule::template(r"\bi\b", "I"),
    Rule::template(r"(?i)\bi'm\b", "I'm"),
    Rule::template(r"(?i)\bi've\b", "I've"),
    Rule::template(r"(?i)\bi'll\b", "I'll"),
    Rule::template(r"(?i)\bi'd\b", "I'd"),
]);

rule_stage!(CapitalizePronounI, "capitalize_pronoun_i", PRONOUN_I_RULES);


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_needs_whitespace() {
        let ctx = Context::default();
        let out = CapitalizeSentences.apply(Cow::Borrowed("One.two. three"), &ctx);
        assert_eq!(out, "One.two. Three");
    }

    #[test]
    fn only_ascii_letters_after_boundary() {
        let ctx = Context::default();
        let out = CapitalizeSentences.apply(Cow::Borrowed("Ok. élan"), &ctx);
        assert_eq!(out, "Ok. élan");
    }

    #[test]
    fn i_inside_words_is_untouched() {
        let ctx = Context::default();
        assert!(!CapitalizePronounI.needs_apply("this is it", &ctx));
    }
}
