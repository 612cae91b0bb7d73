//! Offline grammar cleanup.
//!
//! A heuristic pass, not a grammar checker: it normalizes spacing around
//! punctuation, capitalizes the pronoun "I" and the first letter, adds a
//! comma after a leading greeting, and closes single-line sentences with a
//! period. Line breaks are preserved so paragraph structure survives.

use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("static regex"));

static SPACE_BEFORE_PUNCT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+([,.:;!?])").expect("static regex"));

/// Unicode word boundaries, so letters such as `ñ` or `ờ` never split a word.
static STANDALONE_I: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[iI]\b").expect("static regex"));

static LEADING_GREETING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(hey|hi|hello) ").expect("static regex"));

const PUNCTUATION: [char; 6] = [',', '.', ':', ';', '!', '?'];
const TERMINALS: [char; 3] = ['.', '!', '?'];

/// Minimum number of space-separated tokens before a period is appended.
const MIN_TOKENS_FOR_PERIOD: usize = 2;

/// Clean up `text` without any AI involvement.
pub fn fix_grammar(text: &str) -> String {
    let normalized = text.replace('\t', " ");
    let joined = normalized
        .split('\n')
        .map(clean_line)
        .collect::<Vec<_>>()
        .join("\n");

    let mut out = joined.trim().to_string();

    let token_count = out.split(' ').filter(|t| !t.is_empty()).count();
    if !out.contains('\n') && !out.ends_with(TERMINALS) && token_count >= MIN_TOKENS_FOR_PERIOD {
        out.push('.');
    }

    capitalize_first_letter(&out)
}

fn clean_line(line: &str) -> String {
    let collapsed = WHITESPACE_RUN.replace_all(line, " ");
    let tightened = SPACE_BEFORE_PUNCT.replace_all(&collapsed, "${1}");
    let spaced = space_after_punctuation(&tightened);
    let pronoun = STANDALONE_I.replace_all(&spaced, "I");
    let trimmed = pronoun.trim();
    LEADING_GREETING.replace(trimmed, "${1}, ").into_owned()
}

/// Insert a single space after punctuation that runs straight into the next character.
fn space_after_punctuation(line: &str) -> String {
    let mut out = String::with_capacity(line.len() + 8);
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        out.push(c);
        if PUNCTUATION.contains(&c) {
            if let Some(&next) = chars.peek() {
                if !next.is_whitespace() {
                    out.push(' ');
                }
            }
        }
    }
    out
}

fn capitalize_first_letter(text: &str) -> String {
    match text.char_indices().find(|(_, c)| c.is_alphabetic()) {
        Some((idx, c)) => {
            let mut out = String::with_capacity(text.len());
            out.push_str(&text[..idx]);
            out.extend(c.to_uppercase());
            out.push_str(&text[idx + c.len_utf8()..]);
            out
        }
        None => text.to_string(),
    }
}
