use crate::{
    analysis::{Readability, suggest},
    context::{Context, EnhancementOptions, Tone},
    detect::detect,
    process::{DEFAULT_PROCESS, Process},
};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Everything one enhancement call produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnhancementResult {
    pub text: String,
    pub improvements: Vec<String>,
    pub suggestions: Vec<String>,
}

/// Run the ordered rewrite rules over `text`.
///
/// Total: every string, the empty one included, is accepted. Returns the
/// input borrowed when no rule changed it.
pub fn apply<'a>(text: &'a str, options: &EnhancementOptions) -> Cow<'a, str> {
    DEFAULT_PROCESS.process(Cow::Borrowed(text), &Context::from_options(options))
}

/// The rule engine plus change detection and suggestions, configured once.
///
/// ```
/// use enhancy::{Enhancer, Tone};
///
/// let enhancer = Enhancer::builder().tone(Tone::Formal).build();
/// let result = enhancer.enhance("i don't think its a problem");
/// assert_eq!(result.text, "I do not think it's a problem.");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Enhancer {
    ctx: Context,
}

impl Enhancer {
    pub fn builder() -> EnhancerBuilder {
        EnhancerBuilder::default()
    }

    pub fn with_options(options: &EnhancementOptions) -> Self {
        Self {
            ctx: Context::from_options(options),
        }
    }

    #[inline]
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// Rewrite only.
    pub fn rewrite<'a>(&self, text: &'a str) -> Cow<'a, str> {
        DEFAULT_PROCESS.process(Cow::Borrowed(text), &self.ctx)
    }

    /// Rewrite, then describe the changes and suggest further edits against
    /// the rewritten text.
    pub fn enhance(&self, text: &str) -> EnhancementResult {
        let enhanced = self.rewrite(text);
        let improvements = detect(text, &enhanced);
        let suggestions = suggest(&enhanced);
        tracing::debug!(
            tone = ?self.ctx.tone,
            changed = enhanced != text,
            improvements = improvements.len(),
            suggestions = suggestions.len(),
            "enhanced text"
        );
        EnhancementResult {
            text: enhanced.into_owned(),
            improvements,
            suggestions,
        }
    }

    /// [`Enhancer::enhance`] plus readability of the input and the output.
    pub fn enhance_with_readability(&self, text: &str) -> (EnhancementResult, Readability) {
        let result = self.enhance(text);
        let readability = Readability::of(text, &result.text);
        (result, readability)
    }
}

#[derive(Debug, Default)]
pub struct EnhancerBuilder {
    tone: Tone,
}

impl EnhancerBuilder {
    pub fn tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    pub fn options(mut self, options: &EnhancementOptions) -> Self {
        self.tone = options.tone.unwrap_or_default();
        self
    }

    pub fn build(self) -> Enhancer {
        Enhancer {
            ctx: Context::new(self.tone),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{detect::NO_CHANGES, analysis::GENERIC_SUGGESTION};

    #[test]
    fn clean_text_is_borrowed_and_unchanged() {
        let input = "The cat sat on the mat.";
        let out = apply(input, &EnhancementOptions::default());
        assert!(matches!(out, Cow::Borrowed(_)));

        let result = Enhancer::default().enhance(input);
        assert_eq!(result.text, input);
        assert_eq!(result.improvements, vec![NO_CHANGES]);
        assert_eq!(result.suggestions, vec![GENERIC_SUGGESTION]);
    }

    #[test]
    fn builder_and_options_agree() {
        let a = Enhancer::builder().tone(Tone::Formal).build();
        let b = Enhancer::with_options(&EnhancementOptions::formal());
        let c = Enhancer::builder().options(&EnhancementOptions::formal()).build();
        assert_eq!(a.context(), b.context());
        assert_eq!(b.context(), c.context());
    }

    #[test]
    fn readability_uses_input_and_output() {
        let (result, readability) =
            Enhancer::default().enhance_with_readability("one two three four five");
        assert_eq!(result.text, "One two three four five.");
        assert_eq!(readability.original, 90.0);
        assert_eq!(readability.enhanced, 95.0);
    }
}
