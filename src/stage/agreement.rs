//! Subject/verb and pronoun agreement repairs.

use crate::{
    rule::Rule,
    rule_batch, rule_stage,
};
use phf::phf_map;
use regex::Captures;

/// Plural → singular verb forms used after `every <noun>`.
static SINGULAR_VERB: phf::Map<&'static str, &'static str> = phf_map! {
    "have" => "has",
    "are" => "is",
    "were" => "was",
};

/// Coerce a verb to its singular form; verbs without a mapping pass through.
pub fn singular_verb(verb: &str) -> &str {
    SINGULAR_VERB
        .get(verb.to_ascii_lowercase().as_str())
        .copied()
        .unwrap_or(verb)
}

/// `proposal be that` → `proposal is that`, `plans be that` → `plans are that`.
pub struct BeVerbForm;

rule_batch!(BE_RULES, [
    Rule::template(
        r"(?i)\b(proposal|idea|concept|plan|project|document)\s+be\s+that\b",
        "${1} is that",
    ),
    Rule::template(
        r"(?i)\b(proposals|ideas|concepts|plans|projects|documents)\s+be\s+that\b",
        "${1} are that",
    ),
    Rule::template(r"(?i)\b(it|this|that)\s+be\s+(a|an|the|that)\b", "${1} is ${2}"),
]);

rule_stage!(BeVerbForm, "be_verb_form", BE_RULES);

/// `every dogs are` → `every dog is`.
///
/// Strips the final `s` of the noun (whatever precedes it is kept, so
/// `every boss is` becomes `every bos is`) and singularises the verb.
pub struct EveryAgreement;

fn every_singular(caps: &Captures<'_>) -> String {
    format!("every {} {}", &caps[1], singular_verb(&caps[2]))
}

rule_batch!(EVERY_RULES, [
    Rule::with(
        r"(?i)\bevery\s+(\w+)s\s+(was|is|has|have|are|were)\b",
        every_singular,
    ),
]);

rule_stage!(EveryAgreement, "every_agreement", EVERY_RULES);

/// Collective nouns take `their`: `the team made its` → `the team made their`.
pub struct CollectivePronoun;

rule_batch!(COLLECTIVE_RULES, [
    Rule::template(
        r"(?i)\b(team|company|group|committee|board|staff)\s+should\s+review\s+its\b",
        "${1} should review their",
    ),
    Rule::template(
        r"(?i)\b(team|company|group|committee|board|staff)\s+made\s+its\b",
        "${1} made their",
    ),
    Rule::template(
        r"(?i)\b(team|company|group|committee|board|staff)\s+presented\s+its\b",
        "${1} presented their",
    ),
]);

rule_stage!(CollectivePronoun, "collective_pronoun", COLLECTIVE_RULES);

/// `he are` → `he is`, `they was` → `they were`.
pub struct PronounVerbAgreement;

rule_batch!(PRONOUN_VERB_RULES, [
    Rule::template(r"(?i)\b(he|she|it)\s+are\b", "${1} is"),
    Rule::template(r"(?i)\b(he|she|it)\s+were\b", "${1} was"),
    Rule::template(r"(?i)\b(they|we|you)\s+is\b", "${1} are"),
    Rule::template(r"(?i)\b(they|we|you)\s+was\b", "${1} were"),
]);

rule_stage!(PronounVerbAgreement, "pronoun_verb_agreement", PRONOUN_VERB_RULES);

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::{assert_stage_contract, testing::stage_contract::StageTestConfig};

    impl StageTestConfig for BeVerbForm {
        fn should_transform() -> &'static [(&'static str, &'static str)] {
            &[
                ("The proposal be that we wait", "The proposal is that we wait"),
                ("Our plans be that", "Our plans are that"),
                ("this be a test", "this is a test"),
            ]
        }
    }

    impl StageTestConfig for EveryAgreement {
        fn should_transform() -> &'static [(&'static str, &'static str)] {
            &[
                ("every dogs are barking", "every dog is barking"),
                ("Every cats have claws", "every cat has claws"),
                ("every students were late", "every student was late"),
                ("every books is here", "every book is here"),
            ]
        }
    }

    impl StageTestConfig for CollectivePronoun {
        fn should_transform() -> &'static [(&'static str, &'static str)] {
            &[
                ("The team should review its assumptions", "The team should review their assumptions"),
                ("the board made its choice", "the board made their choice"),
                ("Staff presented its plan", "Staff presented their plan"),
            ]
        }
    }

    impl StageTestConfig for PronounVerbAgreement {
        fn should_transform() -> &'static [(&'static str, &'static str)] {
            &[
                ("he are here", "he is here"),
                ("She were late", "She was late"),
                ("they is ready", "they are ready"),
                ("We was there", "We were there"),
            ]
        }
    }

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(BeVerbForm);
        assert_stage_contract!(EveryAgreement);
        assert_stage_contract!(CollectivePronoun);
        assert_stage_contract!(PronounVerbAgreement);
    }
}
