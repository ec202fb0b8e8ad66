//! Fixed-phrase repairs: adverb forms, tense in time clauses, modal `of`,
//! double negatives.

use crate::{
    rule::Rule,
    rule_batch, rule_stage,
};

/// Adjective used where an adverb belongs: `worked remote` → `worked remotely`.
pub struct AdverbForm;

rule_batch!(ADVERB_RULES, [
    Rule::template(r"(?i)\b(worked|work|works|working)\s+remote\b", "${1} remotely"),
    Rule::template(r"(?i)\b(moved|move|moves|moving)\s+quick\b", "${1} quickly"),
    Rule::template(r"(?i)\b(ran|run|runs|running)\s+slow\b", "${1} slowly"),
    Rule::template(r"(?i)\b(did|do|does|doing)\s+good\b", "${1} well"),
    Rule::template(r"(?i)\b(performed|perform|performs)\s+bad\b", "${1} badly"),
]);

rule_stage!(AdverbForm, "adverb_form", ADVERB_RULES);

/// `what was present on` → `which was presented on`.
pub struct PresentedPhrase;

rule_batch!(PRESENTED_RULES, [
    Rule::template(r"(?i)\bwhat\s+was\s+present\s+on\b", "which was presented on"),
    Rule::template(r"(?i)\bwhat\s+was\s+present\s+in\b", "which was presented in"),
    Rule::template(r"(?i)\bwhat\s+were\s+present\b", "which were presented"),
]);

rule_stage!(PresentedPhrase, "presented_phrase", PRESENTED_RULES);

/// Drop `will` in a time clause: `before they will leave` → `before they leave`.
pub struct TemporalWill;

rule_batch!(TEMPORAL_WILL_RULES, [
    Rule::template(r"(?i)\bbefore\s+(they|we|you|I)\s+will\s+(\w+)\b", "before ${1} ${2}"),
    Rule::template(r"(?i)\bafter\s+(they|we|you|I)\s+will\s+(\w+)\b", "after ${1} ${2}"),
    Rule::template(r"(?i)\bwhen\s+(they|we|you|I)\s+will\s+(\w+)\b", "when ${1} ${2}"),
]);

rule_stage!(TemporalWill, "temporal_will", TEMPORAL_WILL_RULES);

/// `could of` → `could have`.
pub struct ModalHave;

rule_batch!(MODAL_HAVE_RULES, [
    Rule::template(r"(?i)\bcould\s+of\b", "could have"),
    Rule::template(r"(?i)\bshould\s+of\b", "should have"),
    Rule::template(r"(?i)\bwould\s+of\b", "would have"),
    Rule::template(r"(?i)\bmight\s+of\b", "might have"),
    Rule::template(r"(?i)\bmust\s+of\b", "must have"),
]);

rule_stage!(ModalHave, "modal_have", MODAL_HAVE_RULES);

pub struct DoubleNegative;

rule_batch!(DOUBLE_NEGATIVE_RULES, [
    Rule::template(r"(?i)\bdon't\s+have\s+no\b", "don't have any"),
    Rule::template(r"(?i)\bcan't\s+get\s+no\b", "can't get any"),
    Rule::template(r"(?i)\bain't\s+got\s+no\b", "don't have any"),
]);

rule_stage!(DoubleNegative, "double_negative", DOUBLE_NEGATIVE_RULES);
