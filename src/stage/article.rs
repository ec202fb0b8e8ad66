use crate::{rule::Rule, rule_batch, rule_stage};

/// `a`/`an` chosen by the first letter of the next word: vowel letter → `an`,
/// anything else → `a`.
///
/// Purely orthographic. `an hour` becomes `a hour` and `a university`
/// becomes `an university`. The article is always emitted lower-case.
pub struct IndefiniteArticle;

rule_batch!(ARTICLE_RULES, [
    Rule::template(r"(?i)\ba\s+([aeiou])", "an ${1}"),
    Rule::template(r"(?i)\ban\s+([^aeiou])", "a ${1}"),
]);

rule_stage!(IndefiniteArticle, "indefinite_article", ARTICLE_RULES);
