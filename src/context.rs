// src/context.rs
// Runtime options handed to every rewrite stage. Kept tiny and Copy so the
// hot loop in `DynamicProcess` can pass it by reference without thought.

use serde::{Deserialize, Serialize};

/// Requested register of the enhanced text.
///
/// Only `Formal` changes behaviour (contraction expansion). Unknown tone
/// strings coming from a request body deserialize to `Neutral`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Formal,
    #[default]
    #[serde(other)]
    Neutral,
}

impl Tone {
    #[inline(always)]
    pub const fn is_formal(self) -> bool {
        matches!(self, Tone::Formal)
    }
}

/// Caller-supplied configuration for one enhancement call.
///
/// Every field is optional; an absent `tone` means the formal-tone rules
/// are skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EnhancementOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<Tone>,
}

impl EnhancementOptions {
    pub const fn formal() -> Self {
        Self {
            tone: Some(Tone::Formal),
        }
    }
}

/// Runtime context passed to every rewrite stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Context {
    pub tone: Tone,
}

impl Context {
    #[inline(always)]
    pub const fn new(tone: Tone) -> Self {
        Self { tone }
    }

    #[inline(always)]
    pub fn from_options(options: &EnhancementOptions) -> Self {
        Self::new(options.tone.unwrap_or_default())
    }
}

impl From<&EnhancementOptions> for Context {
    fn from(options: &EnhancementOptions) -> Self {
        Self::from_options(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_tone_is_neutral() {
        let ctx = Context::from_options(&EnhancementOptions::default());
        assert_eq!(ctx.tone, Tone::Neutral);
        assert!(!ctx.tone.is_formal());
    }

    #[test]
    fn formal_tone_from_json() {
        let opts: EnhancementOptions = serde_json::from_str(r#"{"tone":"formal"}"#).unwrap();
        assert_eq!(opts, EnhancementOptions::formal());
        assert!(Context::from(&opts).tone.is_formal());
    }

    #[test]
    fn unknown_tone_falls_back_to_neutral() {
        let opts: EnhancementOptions = serde_json::from_str(r#"{"tone":"casual"}"#).unwrap();
        assert_eq!(opts.tone, Some(Tone::Neutral));
        assert!(!Context::from_options(&opts).tone.is_formal());
    }

    #[test]
    fn missing_and_null_tone() {
        let opts: EnhancementOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts.tone, None);
        let opts: EnhancementOptions = serde_json::from_str(r#"{"tone":null}"#).unwrap();
        assert_eq!(opts.tone, None);
    }
}
