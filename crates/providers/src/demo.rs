//! Offline demo invoker.
//!
//! Lets a workflow run end to end without a provider account. This is not AI:
//! the instruction is matched against a few keywords and the input is run
//! through a fixed transform, so identical inputs always produce identical
//! output.

use async_trait::async_trait;
use stepflow_core::invoker::LocalInvoker;
use stepflow_formatter::{grammar, text};
use tracing::debug;

/// Words kept by the single-sentence summary.
const SUMMARY_WORD_LIMIT: usize = 24;

/// Bullets kept by the demo bullet transform.
const MAX_BULLETS: usize = 8;

/// Which canned transform an instruction selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoBehavior {
    Grammar,
    Summarize,
    Bullets,
    TranslateFrench,
    RewriteProfessional,
}

impl DemoBehavior {
    /// Pick a behaviour from the instruction; the first matching rule wins
    /// and anything unrecognised falls back to a summary.
    pub fn for_instruction(instruction: &str) -> Self {
        let lower = instruction.to_lowercase();
        if lower.contains("grammar") || lower.contains("spelling") {
            DemoBehavior::Grammar
        } else if lower.contains("summarize") {
            DemoBehavior::Summarize
        } else if lower.contains("bullet") {
            DemoBehavior::Bullets
        } else if lower.contains("translate") && (lower.contains("french") || lower.contains("fr")) {
            DemoBehavior::TranslateFrench
        } else if lower.contains("rewrite") || lower.contains("professional") || lower.contains("email")
        {
            DemoBehavior::RewriteProfessional
        } else {
            DemoBehavior::Summarize
        }
    }
}

/// Deterministic stand-in for a remote provider.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoInvoker;

impl DemoInvoker {
    pub fn new() -> Self {
        Self
    }

    /// Synchronous core of [`LocalInvoker::invoke`].
    pub fn transform(input: &str, instruction: &str) -> String {
        let trimmed = input.trim();
        match DemoBehavior::for_instruction(instruction) {
            DemoBehavior::Grammar => grammar::fix_grammar(trimmed),
            DemoBehavior::Summarize => summarize(trimmed),
            DemoBehavior::Bullets => bullets(trimmed),
            DemoBehavior::TranslateFrench => translate_french(trimmed),
            DemoBehavior::RewriteProfessional => rewrite_professional(trimmed),
        }
    }
}

#[async_trait]
impl LocalInvoker for DemoInvoker {
    async fn invoke(&self, input: &str, instruction: &str) -> String {
        debug!(
            behavior = ?DemoBehavior::for_instruction(instruction),
            "Serving step from demo invoker"
        );
        Self::transform(input, instruction)
    }
}

fn summarize(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }
    let parts = text::sentence_fragments(input);
    if parts.len() >= 2 {
        return format!("Summary: {}. {}.", parts[0], parts[1]);
    }
    format!("Summary: {}", text::truncate_words(input, SUMMARY_WORD_LIMIT))
}

fn bullets(input: &str) -> String {
    text::bullet_fragments(input)
        .iter()
        .take(MAX_BULLETS)
        .map(|line| format!("{}{line}", text::BULLET))
        .collect::<Vec<_>>()
        .join("\n")
}

fn translate_french(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }
    format!("FR (demo): {input}")
}

fn rewrite_professional(input: &str) -> String {
    let cleaned = grammar::fix_grammar(input);
    if cleaned.is_empty() {
        return String::new();
    }
    format!("Hi,\n\n{cleaned}\n\nThanks,")
}
