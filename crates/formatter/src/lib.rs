//! Deterministic formatter operations.
//!
//! Every operation is a pure function of its input: no I/O, no randomness,
//! no failure. `FixGrammar` here is the offline fallback; at run time the
//! pipeline normally routes grammar fixes through an AI invoker instead.

pub mod grammar;
pub mod text;

use stepflow_core::{FormatterOperation, ToneKind};

/// Filler paragraph appended by [`FormatterOperation::Expand`].
pub const EXPAND_FILLER: &str = "Additional details can be added here to expand on the main idea.";

/// Closing sentence appended by `Tone(Professional)`.
pub const PROFESSIONAL_CLOSING: &str = "Please let me know if you need any additional details.";

/// Maximum words kept by [`FormatterOperation::Shorten`] when the text has
/// fewer than two sentences.
pub const SHORTEN_WORD_LIMIT: usize = 28;

/// Output of a formatter along with whether it differs from the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatted {
    pub text: String,
    pub changed: bool,
}

/// Stateless entry point for all formatter operations.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatterEngine;

impl FormatterEngine {
    /// Apply `operation` to `text`.
    pub fn apply(operation: FormatterOperation, text: &str) -> String {
        match operation {
            FormatterOperation::FixGrammar => grammar::fix_grammar(text),
            FormatterOperation::Shorten => shorten(text),
            FormatterOperation::Expand => format!("{text}\n\n{EXPAND_FILLER}"),
            FormatterOperation::BulletPoints => bullet_points(text),
            FormatterOperation::Tone(tone) => apply_tone(tone, text),
        }
    }

    /// Apply `operation` and report whether the text changed.
    ///
    /// Appending operations always count as a change.
    pub fn format(operation: FormatterOperation, text: &str) -> Formatted {
        let output = Self::apply(operation, text);
        let changed = match operation {
            FormatterOperation::Expand | FormatterOperation::Tone(ToneKind::Professional) => true,
            _ => output != text,
        };
        Formatted {
            text: output,
            changed,
        }
    }
}

fn shorten(text: &str) -> String {
    let trimmed = text.trim();
    let sentences = text::sentence_fragments(trimmed);
    if sentences.len() >= 2 {
        return format!("{}. {}.", sentences[0], sentences[1]);
    }
    text::truncate_words(trimmed, SHORTEN_WORD_LIMIT)
}

fn bullet_points(text: &str) -> String {
    text::bullet_fragments(text)
        .iter()
        .map(|line| format!("{}{line}", text::BULLET))
        .collect::<Vec<_>>()
        .join("\n")
}

fn apply_tone(tone: ToneKind, text: &str) -> String {
    match tone {
        ToneKind::Casual => text.replace("do not", "don't"),
        ToneKind::Neutral => text.to_string(),
        ToneKind::Professional => format!("{text}\n\n{PROFESSIONAL_CLOSING}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutral_tone_is_identity() {
        for s in ["", "  padded  ", "Line one.\nLine two", "do not touch"] {
            assert_eq!(FormatterEngine::apply(FormatterOperation::Tone(ToneKind::Neutral), s), s);
        }
    }

    #[test]
    fn casual_tone_contracts_every_do_not() {
        let out = FormatterEngine::apply(
            FormatterOperation::Tone(ToneKind::Casual),
            "I do not know. We do not care.",
        );
        assert_eq!(out, "I don't know. We don't care.");
    }

    #[test]
    fn professional_tone_appends_closing() {
        let out = FormatterEngine::apply(FormatterOperation::Tone(ToneKind::Professional), "Hi");
        assert_eq!(
            out,
            "Hi\n\nPlease let me know if you need any additional details."
        );
    }

    #[test]
    fn expand_appends_filler_and_reports_change() {
        let formatted = FormatterEngine::format(FormatterOperation::Expand, "Idea");
        assert_eq!(
            formatted.text,
            "Idea\n\nAdditional details can be added here to expand on the main idea."
        );
        assert!(formatted.changed);
    }

    #[test]
    fn neutral_reports_unchanged() {
        let formatted = FormatterEngine::format(FormatterOperation::Tone(ToneKind::Neutral), "x");
        assert!(!formatted.changed);
    }

    #[test]
    fn bullet_points_shape() {
        let out = FormatterEngine::apply(FormatterOperation::BulletPoints, "a. b. c");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| l.starts_with("• ")));
        assert_eq!(out, "• a\n• b\n• c");
    }

    #[test]
    fn bullet_points_drops_empty_fragments() {
        let out = FormatterEngine::apply(FormatterOperation::BulletPoints, "first..\n\n second.\n");
        assert_eq!(out, "• first\n• second");
    }

    #[test]
    fn bullet_points_of_blank_text_is_empty() {
        assert_eq!(FormatterEngine::apply(FormatterOperation::BulletPoints, " .\n. "), "");
    }

    #[test]
    fn shorten_keeps_first_two_sentences() {
        let out = FormatterEngine::apply(
            FormatterOperation::Shorten,
            "  First point! Second point? Third point.  ",
        );
        assert_eq!(out, "First point. Second point.");
    }

    #[test]
    fn shorten_caps_words_without_sentences() {
        let input = (1..=40).map(|i| format!("w{i}")).collect::<Vec<_>>().join(" ");
        let out = FormatterEngine::apply(FormatterOperation::Shorten, &input);
        assert!(out.ends_with('…'));
        assert_eq!(out.split_whitespace().count(), 28);
        assert!(out.starts_with("w1 w2 "));
        assert!(out.ends_with("w28…"));
    }

    #[test]
    fn shorten_leaves_short_single_sentence_alone() {
        let out = FormatterEngine::apply(FormatterOperation::Shorten, "  just a few words  ");
        assert_eq!(out, "just a few words");
    }

    #[test]
    fn shorten_exactly_at_limit_is_not_truncated() {
        let input = (1..=28).map(|i| format!("w{i}")).collect::<Vec<_>>().join(" ");
        let out = FormatterEngine::apply(FormatterOperation::Shorten, &input);
        assert_eq!(out, input);
    }

    #[test]
    fn fix_grammar_is_deterministic() {
        let input = "hello  world ,how are   you";
        let a = FormatterEngine::apply(FormatterOperation::FixGrammar, input);
        let b = FormatterEngine::apply(FormatterOperation::FixGrammar, input);
        assert_eq!(a, b);
    }
}
