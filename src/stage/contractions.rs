use crate::{
    context::Context,
    rule::{Rule, any_match, apply_rules},
    stage::Stage,
};
use phf::phf_ordered_map;
use regex::Captures;
use std::{borrow::Cow, sync::LazyLock};

/// Contraction → formal expansion. Matching is case-sensitive and the
/// apostrophe is required: `dont` is not a contraction here.
pub static CONTRACTIONS: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "don't" => "do not",
    "can't" => "cannot",
    "won't" => "will not",
    "isn't" => "is not",
    "aren't" => "are not",
    "wasn't" => "was not",
    "weren't" => "were not",
    "hasn't" => "has not",
    "haven't" => "have not",
    "hadn't" => "had not",
    "shouldn't" => "should not",
    "wouldn't" => "would not",
    "couldn't" => "could not",
};

fn expand(caps: &Captures<'_>) -> String {
    let word = &caps[1];
    CONTRACTIONS
        .get(word)
        .map_or_else(|| word.to_owned(), |full| (*full).to_owned())
}

static CONTRACTION_RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    let words: Vec<&str> = CONTRACTIONS.keys().copied().collect();
    vec![Rule::with(&format!(r"\b({})\b", words.join("|")), expand)]
});

/// Expand contractions when the context asks for a formal tone; a no-op for
/// every other tone.
pub struct ExpandContractions;

impl Stage for ExpandContractions {
    fn name(&self) -> &'static str {
        "expand_contractions"
    }

    #[inline]
    fn needs_apply(&self, text: &str, ctx: &Context) -> bool {
        ctx.tone.is_formal() && any_match(&CONTRACTION_RULES, text)
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        if !ctx.tone.is_formal() {
            return text;
        }
        apply_rules(&CONTRACTION_RULES, text)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Tone;

    #[test]
    fn neutral_tone_skips_stage() {
        let ctx = Context::new(Tone::Neutral);
        assert!(!ExpandContractions.needs_apply("I don't know", &ctx));
        let out = ExpandContractions.apply(Cow::Borrowed("I don't know"), &ctx);
        assert_eq!(out, "I don't know");
    }

    #[test]
    fn lexicon_has_thirteen_entries_in_order() {
        assert_eq!(CONTRACTIONS.len(), 13);
        assert_eq!(CONTRACTIONS.keys().next(), Some(&"don't"));
        assert_eq!(CONTRACTIONS.keys().last(), Some(&"couldn't"));
    }
}
