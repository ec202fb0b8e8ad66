use crate::{context::Context, stage::Stage, unicode::is_whitespace};
use std::borrow::Cow;

/// Collapse whitespace runs and trim the edges, in one pass with at most one
/// allocation.
///
/// | Operation       | Flag       | Effect when enabled                                      |
/// |-----------------|------------|----------------------------------------------------------|
/// | Collapse runs   | `collapse` | Every run of whitespace (any length, any kind) → `' '`   |
/// | Trim edges      | `trim`     | Leading and trailing whitespace removed                  |
///
/// Whitespace is Unicode `White_Space`: tabs, newlines, NBSP, U+3000 and
/// friends are all folded to a plain space. Line structure is not preserved.
#[derive(Debug, Clone, Copy)]
pub struct NormalizeWhitespace {
    pub collapse: bool,
    pub trim: bool,
}

/// Collapse and trim. This is what the enhancer runs.
pub const NORMALIZE_WHITESPACE_FULL: NormalizeWhitespace = NormalizeWhitespace {
    collapse: true,
    trim: true,
};

/// Collapse only, edges preserved.
pub const COLLAPSE_WHITESPACE: NormalizeWhitespace = NormalizeWhitespace {
    collapse: true,
    trim: false,
};

impl Default for NormalizeWhitespace {
    fn default() -> Self {
        NORMALIZE_WHITESPACE_FULL
    }
}

impl NormalizeWhitespace {
    #[inline(always)]
    fn has_dirty_run(text: &str) -> bool {
        let mut prev_ws = false;
        for c in text.chars() {
            let ws = is_whitespace(c);
            if ws && (prev_ws || c != ' ') {
                return true;
            }
            prev_ws = ws;
        }
        false
    }

    #[inline(always)]
    fn has_dirty_edges(text: &str) -> bool {
        text.starts_with(is_whitespace) || text.ends_with(is_whitespace)
    }
}

impl Stage for NormalizeWhitespace {
    fn name(&self) -> &'static str {
        "normalize_whitespace"
    }

    #[inline]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> bool {
        (self.trim && Self::has_dirty_edges(text)) || (self.collapse && Self::has_dirty_run(text))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        if !self.needs_apply(&text, ctx) {
            return text;
        }

        let src: &str = if self.trim {
            text.trim_matches(is_whitespace)
        } else {
            &text
        };

        if !self.collapse {
            return Cow::Owned(src.to_owned());
        }

        let mut out = String::with_capacity(src.len());
        let mut in_run = false;
        for c in src.chars() {
            if is_whitespace(c) {
                if !in_run {
                    out.push(' ');
                    in_run = true;
                }
            } else {
                out.push(c);
                in_run = false;
            }
        }
        Cow::Owned(out)
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::{assert_stage_contract, testing::stage_contract::StageTestConfig};

    impl StageTestConfig for NormalizeWhitespace {
        fn should_pass_through() -> &'static [&'static str] {
            &["", "Hello world.", "a b c", "no-space"]
        }

        fn should_transform() -> &'static [(&'static str, &'static str)] {
            &[
                ("  spaced   out  ", "spaced out"),
                ("tab\there", "tab here"),
                ("line\r\n\r\nbreak", "line break"),
                ("nbsp\u{00A0}here", "nbsp here"),
                ("ideographic\u{3000}\u{3000}space", "ideographic space"),
                ("   ", ""),
            ]
        }
    }

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(NORMALIZE_WHITESPACE_FULL);
        assert_stage_contract!(COLLAPSE_WHITESPACE_CONTRACT);
    }

    // Collapse-only keeps edges, so it needs its own transform table.
    struct CollapseOnly(NormalizeWhitespace);
    const COLLAPSE_WHITESPACE_CONTRACT: CollapseOnly = CollapseOnly(COLLAPSE_WHITESPACE);

    impl Stage for CollapseOnly {
        fn name(&self) -> &'static str {
            "collapse_whitespace"
        }
        fn needs_apply(&self, text: &str, ctx: &Context) -> bool {
            self.0.needs_apply(text, ctx)
        }
        fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
            self.0.apply(text, ctx)
        }
    }

    impl StageTestConfig for CollapseOnly {
        fn should_pass_through() -> &'static [&'static str] {
            &["", "a b", " edge "]
        }

        fn should_transform() -> &'static [(&'static str, &'static str)] {
            &[("  a \t b  ", " a b "), ("x\ny", "x y")]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_spaces_are_clean() {
        assert!(!NORMALIZE_WHITESPACE_FULL.needs_apply("one two three", &Context::default()));
    }

    #[test]
    fn lone_newline_is_dirty() {
        assert!(NORMALIZE_WHITESPACE_FULL.needs_apply("one\ntwo", &Context::default()));
    }

    #[test]
    fn trims_unicode_edges() {
        let out = NORMALIZE_WHITESPACE_FULL
            .apply(Cow::Borrowed("\u{3000}hello\u{00A0}"), &Context::default());
        assert_eq!(out, "hello");
    }
}
