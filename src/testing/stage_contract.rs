use crate::{
    context::{Context, Tone},
    stage::Stage,
};
use std::borrow::Cow;

const CONTEXTS: &[Context] = &[Context::new(Tone::Neutral), Context::new(Tone::Formal)];

/// Trait that stages implement to opt into the universal test suite.
pub trait StageTestConfig: Stage + Sized {
    /// Contexts every contract is checked under.
    fn contexts() -> &'static [Context] {
        CONTEXTS
    }

    /// General samples (may or may not trigger changes).
    fn samples() -> &'static [&'static str] {
        &[
            "Hello world.",
            "  spaced   out  ",
            "i think its a good idea",
            "He would of known",
            "",
            "!!!",
        ]
    }

    /// Samples that must come back unchanged and still borrowed.
    fn should_pass_through() -> &'static [&'static str] {
        &["", "Hello world.", "The cat sat on the mat."]
    }

    /// Input/output pairs checked under [`StageTestConfig::transform_context`].
    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[]
    }

    fn transform_context() -> Context {
        Context::default()
    }
}

/// Assert that a stage satisfies the universal stage contracts:
///
/// 1. `zero_copy_when_no_changes` → pass-through samples stay borrowed
/// 2. `needs_apply_never_misses` → `needs_apply == false` implies no change
/// 3. `transforms_as_expected` → known rewrites produce the known output
/// 4. `handles_degenerate_input` → empty stays empty, blank/punctuation-only
///    input does not panic
/// 5. `no_panic_on_mixed_scripts` → survives non-Latin text
#[macro_export]
macro_rules! assert_stage_contract {
    ($stage:expr) => {
        $crate::testing::stage_contract::zero_copy_when_no_changes(&$stage);
        $crate::testing::stage_contract::needs_apply_never_misses(&$stage);
        $crate::testing::stage_contract::transforms_as_expected(&$stage);
        $crate::testing::stage_contract::handles_degenerate_input(&$stage);
        $crate::testing::stage_contract::no_panic_on_mixed_scripts(&$stage);
    };
}

fn run<'a, S: Stage>(stage: &S, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
    if stage.needs_apply(&text, ctx) {
        stage.apply(text, ctx)
    } else {
        text
    }
}

pub fn zero_copy_when_no_changes<S: StageTestConfig>(stage: &S) {
    for ctx in S::contexts() {
        for &input in S::should_pass_through() {
            let out = run(stage, Cow::Borrowed(input), ctx);
            assert_eq!(out.as_ref(), input, "stage `{}` changed pass-through `{input}`", stage.name());
            assert!(
                matches!(out, Cow::Borrowed(s) if std::ptr::eq(s, input)),
                "zero-copy violated by `{}` on `{input}` ({ctx:?})",
                stage.name()
            );
        }
    }
}

pub fn needs_apply_never_misses<S: StageTestConfig>(stage: &S) {
    let transform_inputs = S::should_transform().iter().map(|(input, _)| *input);
    let inputs: Vec<&str> = S::samples()
        .iter()
        .copied()
        .chain(S::should_pass_through().iter().copied())
        .chain(transform_inputs)
        .collect();

    for ctx in S::contexts() {
        for &input in &inputs {
            if stage.needs_apply(input, ctx) {
                continue;
            }
            let output = stage.apply(Cow::Owned(input.to_owned()), ctx);
            assert_eq!(
                output.as_ref(),
                input,
                "needs_apply() said skip but `{}` rewrote `{input}` ({ctx:?})",
                stage.name()
            );
        }
    }
}

pub fn transforms_as_expected<S: StageTestConfig>(stage: &S) {
    let ctx = S::transform_context();
    for &(input, expected) in S::should_transform() {
        assert!(
            stage.needs_apply(input, &ctx),
            "`{}` skipped `{input}` that should transform",
            stage.name()
        );
        let out = run(stage, Cow::Borrowed(input), &ctx);
        assert_eq!(out.as_ref(), expected, "stage `{}` on `{input}`", stage.name());
    }
}

pub fn handles_degenerate_input<S: StageTestConfig>(stage: &S) {
    for ctx in S::contexts() {
        let empty = run(stage, Cow::Borrowed(""), ctx);
        assert_eq!(empty.as_ref(), "", "`{}` produced text from nothing", stage.name());

        for input in ["   ", "!!!", "\t\n", "...?!", ",,,"] {
            let _ = run(stage, Cow::Borrowed(input), ctx);
        }
    }
}

pub fn no_panic_on_mixed_scripts<S: StageTestConfig>(stage: &S) {
    for ctx in S::contexts() {
        let _ = stage.apply(
            Cow::Borrowed("hello 世界 русский Türkçe العربية 简体中文. élan i"),
            ctx,
        );
    }
}
