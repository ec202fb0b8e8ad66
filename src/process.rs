//! Ordered stage execution.
//!
//! [`DynamicProcess`] owns an ordered list of stages and runs them top to
//! bottom over a single `Cow<str>`. Each stage sees exactly what the previous
//! one produced. The order is part of the observable behaviour:
//! capitalisation has to run before whitespace and punctuation spacing (it
//! only recognises boundaries already followed by whitespace), and the
//! terminal period is added before the `a`/`an` repair looks at the text.
use crate::{
    context::Context,
    stage::{
        Stage,
        agreement::{BeVerbForm, CollectivePronoun, EveryAgreement, PronounVerbAgreement},
        article::IndefiniteArticle,
        capitalize::{CapitalizePronounI, CapitalizeSentences},
        confusables::{BesideBesides, Homophones, PrincipleConfusion},
        contractions::ExpandContractions,
        normalize_whitespace::NORMALIZE_WHITESPACE_FULL,
        phrasing::{AdverbForm, DoubleNegative, ModalHave, PresentedPhrase, TemporalWill},
        punctuation::{PunctuationSpacing, TerminalPunctuation},
        spelling::SpellingCorrection,
    },
};
use smallvec::SmallVec;
use std::{
    borrow::Cow,
    sync::{Arc, LazyLock},
};

pub trait Process {
    fn process<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str>;
}

#[derive(Default)]
pub struct DynamicProcess {
    pub(crate) stages: SmallVec<[Arc<dyn Stage>; 20]>,
}

impl DynamicProcess {
    #[inline(always)]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn push<T: Stage + 'static>(mut self, stage: T) -> Self {
        self.stages.push(Arc::new(stage));
        self
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Stage names in execution order.
    pub fn stage_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.stages.iter().map(|stage| stage.name())
    }
}

impl Process for DynamicProcess {
    fn process<'a>(&self, mut text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        for stage in &self.stages {
            if !stage.needs_apply(&text, ctx) {
                tracing::trace!(stage = stage.name(), "skipped");
                continue;
            }
            let before = text.len();
            text = stage.apply(text, ctx);
            tracing::debug!(
                stage = stage.name(),
                before,
                after = text.len(),
                owned = matches!(text, Cow::Owned(_)),
                "applied"
            );
        }
        text
    }
}

/// The enhancer's rule categories in their required execution order.
pub fn default_process() -> DynamicProcess {
    DynamicProcess::new()
        .push(PrincipleConfusion)
        .push(BeVerbForm)
        .push(EveryAgreement)
        .push(AdverbForm)
        .push(BesideBesides)
        .push(PresentedPhrase)
        .push(CollectivePronoun)
        .push(TemporalWill)
        .push(CapitalizeSentences)
        .push(CapitalizePronounI)
        .push(NORMALIZE_WHITESPACE_FULL)
        .push(PunctuationSpacing)
        .push(SpellingCorrection)
        .push(Homophones)
        .push(ModalHave)
        .push(PronounVerbAgreement)
        .push(DoubleNegative)
        .push(TerminalPunctuation)
        .push(IndefiniteArticle)
        .push(ExpandContractions)
}

/// Shared instance of [`default_process`]; stages are stateless so one copy
/// serves every caller and thread.
pub static DEFAULT_PROCESS: LazyLock<DynamicProcess> = LazyLock::new(default_process);
