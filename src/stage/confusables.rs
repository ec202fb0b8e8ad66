//! Commonly confused words, each repair keyed on the word that follows.
//!
//! The homophone batch is applied once, in table order. Text that contains
//! both trigger shapes of a pair can see one rule feed the next; that is
//! accepted, there is no fixed-point iteration.

use crate::{
    rule::Rule,
    rule_batch, rule_stage,
};

/// `principle problem` → `principal problem`. The following word is carried
/// through untouched.
pub struct PrincipleConfusion;

rule_batch!(PRINCIPLE_RULES, [
    Rule::template(r"(?i)\bprinciple\s+(problem|issue|concern|reason|cause)\b", "principal ${1}"),
    Rule::template(r"(?i)\bprinciple\s+(goal|objective|aim|purpose)\b", "principal ${1}"),
]);

rule_stage!(PrincipleConfusion, "principle_confusion", PRINCIPLE_RULES);

/// `Beside,` / `beside that` → `Besides`.
pub struct BesideBesides;

rule_batch!(BESIDE_RULES, [
    Rule::template(r"\bBeside,", "Besides,"),
    Rule::template(r"\bbeside,", "besides,"),
    Rule::template(r"(?i)\bBeside\s+that", "Besides that"),
]);

rule_stage!(BesideBesides, "beside_besides", BESIDE_RULES);

/// their/there/they're, your/you're and its/it's.
pub struct Homophones;

rule_batch!(HOMOPHONE_RULES, [
    Rule::template(r"(?i)\btheir\s+(is|are|was|were)\b", "there ${1}"),
    Rule::template(r"(?i)\btheir\s+going\b", "they're going"),
    Rule::template(r"(?i)\bthere\s+(house|car|dog|cat|book|idea)\b", "their ${1}"),
    Rule::template(r"(?i)\byour\s+(welcome|right|wrong|going|coming)\b", "you're ${1}"),
    Rule::template(r"(?i)\byou're\s+(house|car|dog|cat|book|idea)\b", "your ${1}"),
    Rule::template(r"(?i)\bits\s+(a|an|the|not|very|really|so)\b", "it's ${1}"),
    Rule::template(r"(?i)\bit's\s+(own|purpose|meaning|value)\b", "its ${1}"),
]);

rule_stage!(Homophones, "homophones", HOMOPHONE_RULES);


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{context::Context, stage::Stage};
    use std::borrow::Cow;

    #[test]
    fn principle_outside_trigger_is_left_alone() {
        let ctx = Context::default();
        assert!(!PrincipleConfusion.needs_apply("a matter of principle", &ctx));
    }

    #[test]
    fn beside_without_comma_or_that_is_left_alone() {
        let ctx = Context::default();
        assert!(!BesideBesides.needs_apply("sit beside me", &ctx));
    }

    #[test]
    fn rules_run_once_in_order() {
        // "it's own" → "its own" runs after "its a" → "it's a"; neither loops.
        let ctx = Context::default();
        let out = Homophones.apply(Cow::Borrowed("its a deal, it's own fault"), &ctx);
        assert_eq!(out, "it's a deal, its own fault");
    }

    #[test]
    fn there_is_not_rewritten_back() {
        let ctx = Context::default();
        let out = Homophones.apply(Cow::Borrowed("their was their dog"), &ctx);
        assert_eq!(out, "there was their dog");
    }
}
