//! Step and formatter-operation domain types.
//!
//! A workflow is an ordered list of [`Step`]s. Each step either sends the
//! running text to an AI invoker with a free-form instruction, or applies one
//! deterministic [`FormatterOperation`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One unit of the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Step {
    /// Free-form natural-language directive handled by an AI invoker.
    Ai {
        #[serde(default)]
        instruction: String,
    },
    /// A deterministic text operation.
    ///
    /// The operation is optional because step lists read from disk may omit it;
    /// the runner rejects such steps when it reaches them.
    Formatter {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        operation: Option<FormatterOperation>,
    },
}

impl Step {
    /// Create an AI step.
    pub fn ai(instruction: impl Into<String>) -> Self {
        Step::Ai {
            instruction: instruction.into(),
        }
    }

    /// Create a formatter step.
    pub fn formatter(operation: FormatterOperation) -> Self {
        Step::Formatter {
            operation: Some(operation),
        }
    }

    /// Short human label used in traces and progress output.
    pub fn title(&self) -> String {
        match self {
            Step::Ai { instruction } => format!("AI: {}", instruction.trim()),
            Step::Formatter {
                operation: Some(op),
            } => op.display_name(),
            Step::Formatter { operation: None } => "Formatter".into(),
        }
    }

    /// Whether this step needs an AI invoker when executed.
    pub fn uses_ai(&self) -> bool {
        matches!(
            self,
            Step::Ai { .. }
                | Step::Formatter {
                    operation: Some(FormatterOperation::FixGrammar)
                }
        )
    }
}

/// Target register for a tone rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToneKind {
    Casual,
    Neutral,
    Professional,
}

impl ToneKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            ToneKind::Casual => "Casual",
            ToneKind::Neutral => "Neutral",
            ToneKind::Professional => "Professional",
        }
    }
}

impl FromStr for ToneKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "casual" => Ok(ToneKind::Casual),
            "neutral" => Ok(ToneKind::Neutral),
            "professional" => Ok(ToneKind::Professional),
            other => Err(format!(
                "Unknown tone '{other}' (expected casual, neutral or professional)"
            )),
        }
    }
}

/// Closed set of deterministic formatter operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "tone", rename_all = "snake_case")]
pub enum FormatterOperation {
    FixGrammar,
    Shorten,
    Expand,
    BulletPoints,
    Tone(ToneKind),
}

impl FormatterOperation {
    /// Every operation, with each tone listed separately.
    pub const ALL: [FormatterOperation; 7] = [
        FormatterOperation::FixGrammar,
        FormatterOperation::Shorten,
        FormatterOperation::Expand,
        FormatterOperation::BulletPoints,
        FormatterOperation::Tone(ToneKind::Casual),
        FormatterOperation::Tone(ToneKind::Neutral),
        FormatterOperation::Tone(ToneKind::Professional),
    ];

    /// Human-readable name, e.g. `"Tone: Professional"`.
    pub fn display_name(&self) -> String {
        match self {
            FormatterOperation::FixGrammar => "Fix grammar".into(),
            FormatterOperation::Shorten => "Shorten".into(),
            FormatterOperation::Expand => "Expand".into(),
            FormatterOperation::BulletPoints => "Bullet points".into(),
            FormatterOperation::Tone(tone) => format!("Tone: {}", tone.display_name()),
        }
    }

    /// The serialized `kind` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            FormatterOperation::FixGrammar => "fix_grammar",
            FormatterOperation::Shorten => "shorten",
            FormatterOperation::Expand => "expand",
            FormatterOperation::BulletPoints => "bullet_points",
            FormatterOperation::Tone(_) => "tone",
        }
    }
}

impl fmt::Display for FormatterOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}

impl FromStr for FormatterOperation {
    type Err = String;

    /// Parses a kind tag (`fix_grammar`, `fix-grammar`, ...). A bare `tone`
    /// means neutral; `tone:casual` selects a specific tone.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        if let Some(tone) = normalized.strip_prefix("tone:") {
            return tone.parse().map(FormatterOperation::Tone);
        }
        match normalized.as_str() {
            "fix_grammar" | "grammar" => Ok(FormatterOperation::FixGrammar),
            "shorten" => Ok(FormatterOperation::Shorten),
            "expand" => Ok(FormatterOperation::Expand),
            "bullet_points" | "bullets" => Ok(FormatterOperation::BulletPoints),
            "tone" => Ok(FormatterOperation::Tone(ToneKind::Neutral)),
            other => Err(format!("Unknown formatter operation '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names() {
        assert_eq!(FormatterOperation::FixGrammar.display_name(), "Fix grammar");
        assert_eq!(FormatterOperation::BulletPoints.display_name(), "Bullet points");
        assert_eq!(
            FormatterOperation::Tone(ToneKind::Professional).display_name(),
            "Tone: Professional"
        );
    }

    #[test]
    fn step_titles() {
        assert_eq!(Step::ai("  Summarize this ").title(), "AI: Summarize this");
        assert_eq!(Step::formatter(FormatterOperation::Shorten).title(), "Shorten");
        assert_eq!(Step::Formatter { operation: None }.title(), "Formatter");
    }

    #[test]
    fn fix_grammar_counts_as_ai() {
        assert!(Step::ai("x").uses_ai());
        assert!(Step::formatter(FormatterOperation::FixGrammar).uses_ai());
        assert!(!Step::formatter(FormatterOperation::Expand).uses_ai());
    }

    #[test]
    fn operation_json_shape() {
        let json = serde_json::to_value(FormatterOperation::Tone(ToneKind::Casual)).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "tone", "tone": "casual"}));

        let json = serde_json::to_value(FormatterOperation::FixGrammar).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "fix_grammar"}));
    }

    #[test]
    fn step_parses_from_toml() {
        #[derive(Deserialize)]
        struct Doc {
            steps: Vec<Step>,
        }

        let doc: Doc = toml::from_str(
            r#"
[[steps]]
type = "ai"
instruction = "Summarize"

[[steps]]
type = "formatter"
operation = { kind = "tone", tone = "professional" }

[[steps]]
type = "formatter"
"#,
        )
        .unwrap();

        assert_eq!(doc.steps.len(), 3);
        assert_eq!(doc.steps[0], Step::ai("Summarize"));
        assert_eq!(
            doc.steps[1],
            Step::formatter(FormatterOperation::Tone(ToneKind::Professional))
        );
        assert_eq!(doc.steps[2], Step::Formatter { operation: None });
    }

    #[test]
    fn missing_instruction_defaults_to_empty() {
        let step: Step = serde_json::from_str(r#"{"type":"ai"}"#).unwrap();
        assert_eq!(step, Step::ai(""));
    }

    #[test]
    fn operation_from_str() {
        assert_eq!(
            "fix-grammar".parse::<FormatterOperation>(),
            Ok(FormatterOperation::FixGrammar)
        );
        assert_eq!(
            "BULLET_POINTS".parse::<FormatterOperation>(),
            Ok(FormatterOperation::BulletPoints)
        );
        assert_eq!(
            "tone:casual".parse::<FormatterOperation>(),
            Ok(FormatterOperation::Tone(ToneKind::Casual))
        );
        assert_eq!(
            "tone".parse::<FormatterOperation>(),
            Ok(FormatterOperation::Tone(ToneKind::Neutral))
        );
        assert!("translate".parse::<FormatterOperation>().is_err());
        assert!("tone:angry".parse::<FormatterOperation>().is_err());
    }
}
