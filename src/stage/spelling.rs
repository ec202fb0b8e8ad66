//! Fixed misspelling lexicon.

use crate::{
    context::Context,
    rule::{Rule, any_match, apply_rules},
    stage::Stage,
};
use phf::phf_ordered_map;
use regex::Captures;
use std::{borrow::Cow, sync::LazyLock};

/// Misspelling → correction, matched case-insensitively as whole words.
///
/// `accommodate` and `environment` map to themselves. They match, rewrite
/// to identical text and so never change anything.
pub static SPELLING: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "alot" => "a lot",
    "recieve" => "receive",
    "occured" => "occurred",
    "seperate" => "separate",
    "definately" => "definitely",
    "wierd" => "weird",
    "accommodate" => "accommodate",
    "environment" => "environment",
    "occassion" => "occasion",
    "publically" => "publicly",
};

fn correct(caps: &Captures<'_>) -> String {
    let word = &caps[1];
    SPELLING
        .get(word.to_lowercase().as_str())
        .map_or_else(|| word.to_owned(), |fixed| (*fixed).to_owned())
}

static SPELLING_RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    let words: Vec<&str> = SPELLING.keys().copied().collect();
    vec![Rule::with(&format!(r"(?i)\b({})\b", words.join("|")), correct)]
});

pub struct SpellingCorrection;

impl Stage for SpellingCorrection {
    fn name(&self) -> &'static str {
        "spelling_correction"
    }

    #[inline]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> bool {
        any_match(&SPELLING_RULES, text)
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Cow<'a, str> {
        apply_rules(&SPELLING_RULES, text)
    }
}
