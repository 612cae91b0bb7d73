//! The pipeline runner.

use std::sync::Arc;
use stepflow_core::cancel::CancellationFlag;
use stepflow_core::error::{PipelineError, Result};
use stepflow_core::invoker::{LocalInvoker, RemoteInvoker};
use stepflow_core::run::{RunConfiguration, RunResult, TraceStep};
use stepflow_core::step::{FormatterOperation, Step};
use stepflow_formatter::FormatterEngine;
use tracing::{debug, info, warn};

/// Instruction sent to the remote provider for a Fix grammar step.
pub const FIX_GRAMMAR_INSTRUCTION: &str = "Fix grammar and spelling. Keep the original meaning. Preserve the original language. Keep formatting (line breaks). Return only the corrected text.";

/// Instruction sent to the local substitute for a Fix grammar step.
pub const DEMO_FIX_GRAMMAR_INSTRUCTION: &str = "Fix grammar and spelling.";

/// Upper bound on the temperature used for Fix grammar.
pub const FIX_GRAMMAR_MAX_TEMPERATURE: f32 = 0.3;

/// Runs step lists against a fixed pair of AI collaborators.
///
/// Holds no per-run state, so one runner can serve concurrent runs.
pub struct PipelineRunner {
    remote: Arc<dyn RemoteInvoker>,
    local: Arc<dyn LocalInvoker>,
}

impl PipelineRunner {
    pub fn new(remote: Arc<dyn RemoteInvoker>, local: Arc<dyn LocalInvoker>) -> Self {
        Self { remote, local }
    }

    /// Run `steps` over `input` and return the final text.
    ///
    /// `on_progress(current, total)` fires before each step with a 1-based
    /// position. The first failing step aborts the run.
    pub async fn run<F>(
        &self,
        steps: &[Step],
        input: &str,
        config: &RunConfiguration,
        cancel: &CancellationFlag,
        on_progress: F,
    ) -> Result<String>
    where
        F: FnMut(usize, usize) + Send,
    {
        let result = self
            .execute(steps, input, config, cancel, on_progress, false)
            .await?;
        Ok(result.final_output)
    }

    /// Like [`PipelineRunner::run`], but also records the text after every step.
    pub async fn run_with_trace<F>(
        &self,
        steps: &[Step],
        input: &str,
        config: &RunConfiguration,
        cancel: &CancellationFlag,
        on_progress: F,
    ) -> Result<RunResult>
    where
        F: FnMut(usize, usize) + Send,
    {
        self.execute(steps, input, config, cancel, on_progress, true)
            .await
    }

    async fn execute<F>(
        &self,
        steps: &[Step],
        input: &str,
        config: &RunConfiguration,
        cancel: &CancellationFlag,
        mut on_progress: F,
        collect_trace: bool,
    ) -> Result<RunResult>
    where
        F: FnMut(usize, usize) + Send,
    {
        let total = steps.len();
        info!(
            steps = total,
            mode = %config.mode,
            model = %config.model_name,
            "Starting pipeline run"
        );

        let mut current = input.to_string();
        let mut trace = Vec::new();

        for (index, step) in steps.iter().enumerate() {
            if cancel.is_cancelled() {
                info!(step = index + 1, total, "Pipeline run cancelled");
                return Err(PipelineError::Cancelled);
            }

            on_progress(index + 1, total);
            debug!(step = index + 1, total, title = %step.title(), "Running step");

            current = match self.run_step(step, &current, config).await {
                Ok(output) => output,
                Err(e) => {
                    warn!(step = index + 1, error = %e, "Pipeline step failed");
                    return Err(e);
                }
            };

            if collect_trace {
                trace.push(TraceStep {
                    index: index + 1,
                    title: step.title(),
                    output_snapshot: current.clone(),
                });
            }
        }

        info!(steps = total, chars = current.chars().count(), "Pipeline run finished");

        Ok(RunResult {
            final_output: current,
            steps: trace,
        })
    }

    async fn run_step(&self, step: &Step, current: &str, config: &RunConfiguration) -> Result<String> {
        match step {
            Step::Ai { instruction } => {
                let instruction = instruction.trim();
                if instruction.is_empty() {
                    return Err(PipelineError::InvalidStep("Missing instruction".into()));
                }
                if config.is_local_demo() {
                    return Ok(self.local.invoke(current, instruction).await);
                }
                self.invoke_remote(current, instruction, config.temperature, config)
                    .await
            }
            Step::Formatter { operation: None } => Err(PipelineError::InvalidStep(
                "Missing formatter operation".into(),
            )),
            Step::Formatter {
                operation: Some(FormatterOperation::FixGrammar),
            } => {
                if config.is_local_demo() {
                    return Ok(self
                        .local
                        .invoke(current, DEMO_FIX_GRAMMAR_INSTRUCTION)
                        .await);
                }
                let temperature = config.temperature_at_most(FIX_GRAMMAR_MAX_TEMPERATURE);
                self.invoke_remote(current, FIX_GRAMMAR_INSTRUCTION, temperature, config)
                    .await
            }
            Step::Formatter {
                operation: Some(operation),
            } => Ok(FormatterEngine::apply(*operation, current)),
        }
    }

    async fn invoke_remote(
        &self,
        current: &str,
        instruction: &str,
        temperature: f32,
        config: &RunConfiguration,
    ) -> Result<String> {
        if !config.api_key_present {
            return Err(PipelineError::MissingApiKey);
        }

        self.remote
            .invoke(current, instruction, &config.model_name, temperature)
            .await
            .map_err(|e| {
                warn!(provider = %self.remote.name(), error = %e, "Remote invocation failed");
                PipelineError::Provider(e)
            })
    }
}
