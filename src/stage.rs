//! Core rewrite-stage abstraction.
//!
//! Every rule category of the enhancer is one [`Stage`]. Stages run in a
//! fixed total order (see [`crate::process::default_process`]) and each one
//! observes the output of the stage before it.
//!
//! Stages are infallible: any string, including the empty string, is valid
//! input and absence of a match is a silent no-op. A stage that changes
//! nothing must hand the incoming `Cow` back untouched so that clean input
//! flows through the whole pipeline without a single allocation.

pub mod agreement;
pub mod article;
pub mod capitalize;
pub mod confusables;
pub mod contractions;
pub mod normalize_whitespace;
pub mod phrasing;
pub mod punctuation;
pub mod spelling;

use crate::context::Context;
use std::borrow::Cow;

/// A single rewrite step.
pub trait Stage: Send + Sync {
    /// Human-readable name, used in logs and test failures.
    fn name(&self) -> &'static str;

    /// Fast pre-check. Returning `false` skips the whole stage.
    ///
    /// May report `true` for text the stage ends up leaving alone, but must
    /// never report `false` for text the stage would change.
    fn needs_apply(&self, text: &str, ctx: &Context) -> bool;

    /// Allocation-aware transformation.
    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str>;
}

/// Implement [`Stage`] for a type whose behaviour is exactly one rule batch.
#[macro_export]
macro_rules! rule_stage {
    ($ty:ty, $name:literal, $rules:ident) => {
        impl $crate::stage::Stage for $ty {
            fn name(&self) -> &'static str {
                $name
            }

            #[inline]
            fn needs_apply(&self, text: &str, _ctx: &$crate::context::Context) -> bool {
                $crate::rule::any_match(&$rules, text)
            }

            fn apply<'a>(
                &self,
                text: ::std::borrow::Cow<'a, str>,
                _ctx: &$crate::context::Context,
            ) -> ::std::borrow::Cow<'a, str> {
                $crate::rule::apply_rules(&$rules, text)
            }
        }
    };
}
