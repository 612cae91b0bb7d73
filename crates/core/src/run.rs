//! Per-run configuration and run outputs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where AI-backed steps are served from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AiMode {
    /// A real provider reached through a [`crate::RemoteInvoker`].
    #[default]
    Remote,
    /// The deterministic offline substitute ([`crate::LocalInvoker`]).
    #[serde(alias = "local-demo", alias = "demo")]
    LocalDemo,
}

impl fmt::Display for AiMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AiMode::Remote => f.write_str("remote"),
            AiMode::LocalDemo => f.write_str("local-demo"),
        }
    }
}

impl FromStr for AiMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "remote" => Ok(AiMode::Remote),
            "local_demo" | "local-demo" | "demo" => Ok(AiMode::LocalDemo),
            other => Err(format!("Unknown AI mode '{other}' (expected remote or local-demo)")),
        }
    }
}

/// Immutable settings for a single pipeline run.
///
/// Built once by the caller and passed by reference, so settings edited
/// while a run is in flight never affect that run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfiguration {
    /// Model identifier forwarded to the remote invoker.
    pub model_name: String,

    /// Sampling temperature in `[0, 1]`.
    pub temperature: f32,

    /// Whether a usable API key is available to the remote invoker.
    pub api_key_present: bool,

    pub mode: AiMode,
}

impl RunConfiguration {
    /// Configuration for a run against a remote provider.
    pub fn remote(model_name: impl Into<String>, temperature: f32, api_key_present: bool) -> Self {
        Self {
            model_name: model_name.into(),
            temperature: temperature.clamp(0.0, 1.0),
            api_key_present,
            mode: AiMode::Remote,
        }
    }

    /// Configuration for a run served entirely by the local demo substitute.
    pub fn local_demo(model_name: impl Into<String>, temperature: f32) -> Self {
        Self {
            model_name: model_name.into(),
            temperature: temperature.clamp(0.0, 1.0),
            api_key_present: false,
            mode: AiMode::LocalDemo,
        }
    }

    /// The configured temperature, capped at `max`.
    pub fn temperature_at_most(&self, max: f32) -> f32 {
        self.temperature.min(max)
    }

    pub fn is_local_demo(&self) -> bool {
        self.mode == AiMode::LocalDemo
    }
}

/// The output of one executed step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceStep {
    /// 1-based position in the step list.
    pub index: usize,
    pub title: String,
    /// The running text right after this step.
    pub output_snapshot: String,
}

/// Final output plus the per-step trace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunResult {
    pub final_output: String,
    pub steps: Vec<TraceStep>,
}
