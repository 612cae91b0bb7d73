//! Workflow definition files.
//!
//! A workflow file names an ordered step list and, optionally, the text to
//! run it on:
//!
//! ```toml
//! name = "Polish email"
//! input = "hi team  i do not think we can ship friday"
//!
//! [[steps]]
//! type = "formatter"
//! operation = { kind = "fix_grammar" }
//!
//! [[steps]]
//! type = "ai"
//! instruction = "Rewrite as a short professional email"
//! ```

use crate::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use stepflow_core::Step;

/// A named, ordered list of steps plus its input text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowFile {
    #[serde(default = "default_name")]
    pub name: String,

    /// Text the workflow runs on; callers may replace it before running.
    #[serde(default)]
    pub input: String,

    #[serde(default)]
    pub steps: Vec<Step>,
}

fn default_name() -> String {
    "My Workflow".into()
}

impl WorkflowFile {
    /// Load and parse a workflow file.
    ///
    /// Only syntax is checked here; call [`WorkflowFile::validate`] once the
    /// final input text is known.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Replace the input text.
    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = input.into();
        self
    }

    /// Reject workflows the runner should never be started on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.steps.is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "workflow '{}' has no steps",
                self.name
            )));
        }

        if self.input.trim().is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "workflow '{}' has no input text",
                self.name
            )));
        }

        Ok(())
    }
}
