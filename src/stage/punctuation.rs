use crate::{
    context::Context,
    rule::Rule,
    rule_batch, rule_stage,
    stage::Stage,
    unicode::is_sentence_terminator,
};
use std::borrow::Cow;

/// Remove whitespace before `. , ! ? ; :` and put one space between such a
/// mark and a directly following ASCII letter.
///
/// Blunt by construction: `e.g.` becomes `e. g.` and `example.com` becomes
/// `example. com`. Digits are never separated, so `3.14` survives.
pub struct PunctuationSpacing;

rule_batch!(PUNCTUATION_SPACING_RULES, [
    Rule::template(r"\s+([.,!?;:])", "${1}"),
    Rule::template(r"([.,!?;:])([A-Za-z])", "${1} ${2}"),
]);

rule_stage!(PunctuationSpacing, "punctuation_spacing", PUNCTUATION_SPACING_RULES);

/// Append `.` to non-empty text that does not already end in `.`, `!` or `?`.
pub struct TerminalPunctuation;

impl Stage for TerminalPunctuation {
    fn name(&self) -> &'static str {
        "terminal_punctuation"
    }

    #[inline]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> bool {
        !text.is_empty() && !text.ends_with(is_sentence_terminator)
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        if !self.needs_apply(&text, ctx) {
            return text;
        }
        let mut owned = text.into_owned();
        owned.push('.');
        Cow::Owned(owned)
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::{assert_stage_contract, testing::stage_contract::StageTestConfig};

    impl StageTestConfig for PunctuationSpacing {
        fn should_pass_through() -> &'static [&'static str] {
            &["", "Hello, world.", "Pi is 3.14", "Wait! Really?"]
        }

        fn should_transform() -> &'static [(&'static str, &'static str)] {
            &[
                ("Hello , world .", "Hello, world."),
                ("one,two", "one, two"),
                ("really ?yes", "really? yes"),
                ("a ;b :c", "a; b: c"),
            ]
        }
    }

    impl StageTestConfig for TerminalPunctuation {
        fn should_pass_through() -> &'static [&'static str] {
            &["", "Done.", "Really?", "Stop!", "!!!"]
        }

        fn should_transform() -> &'static [(&'static str, &'static str)] {
            &[
                ("Hello world", "Hello world."),
                ("Trailing comma,", "Trailing comma,."),
                ("   ", "   ."),
            ]
        }
    }

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(PunctuationSpacing);
        assert_stage_contract!(TerminalPunctuation);
    }
}
