//! `stepflow run` — Run a workflow file.

use std::path::Path;
use std::sync::Arc;
use stepflow_config::{AppConfig, WorkflowFile};
use stepflow_core::{CancellationFlag, PipelineError, RunConfiguration, RunResult, Step};
use stepflow_providers::DemoInvoker;
use stepflow_workflow::PipelineRunner;
use tracing::warn;

pub async fn run(
    workflow_path: &Path,
    input: Option<String>,
    trace: bool,
    demo: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    let mut workflow = WorkflowFile::load_from(workflow_path)?;
    if let Some(text) = input {
        workflow = workflow.with_input(text);
    }
    workflow.validate()?;

    let run_config = if demo {
        RunConfiguration::local_demo(&config.model, config.temperature)
    } else {
        config.run_configuration()
    };

    if lacks_required_key(&workflow.steps, &run_config) {
        eprintln!("{}", missing_key_hint());
        return Err(PipelineError::MissingApiKey.into());
    }

    let remote = stepflow_providers::build_from_config(&config);
    let runner = PipelineRunner::new(remote, Arc::new(DemoInvoker::new()));

    let cancel = CancellationFlag::new();
    let ctrl_c = {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("Interrupted, stopping after the current step");
                cancel.cancel();
            }
        })
    };

    let steps = &workflow.steps;
    let outcome = runner
        .run_with_trace(steps, &workflow.input, &run_config, &cancel, |current, total| {
            eprintln!("  [{current}/{total}] {}", steps[current - 1].title());
        })
        .await;
    ctrl_c.abort();

    match outcome {
        Ok(result) => {
            if trace {
                print!("{}", render_trace(&result));
            }
            println!("{}", result.final_output);
            Ok(())
        }
        Err(PipelineError::MissingApiKey) => {
            eprintln!("{}", missing_key_hint());
            Err(PipelineError::MissingApiKey.into())
        }
        Err(e) => {
            if let Some(hint) = retry_hint(&e) {
                eprintln!("{hint}");
            }
            Err(e.into())
        }
    }
}

/// Whether the run would stop at its first AI step for want of a key.
fn lacks_required_key(steps: &[Step], config: &RunConfiguration) -> bool {
    !config.is_local_demo() && !config.api_key_present && steps.iter().any(Step::uses_ai)
}

fn retry_hint(error: &PipelineError) -> Option<&'static str> {
    error
        .is_retryable()
        .then_some("  Nothing was changed; the same run can be retried as is.")
}

/// Per-step snapshots, one block per step.
fn render_trace(result: &RunResult) -> String {
    let mut out = String::new();
    for step in &result.steps {
        out.push_str(&format!("── Step {}: {} ──\n", step.index, step.title));
        out.push_str(&step.output_snapshot);
        out.push_str("\n\n");
    }
    out
}

fn missing_key_hint() -> String {
    let config_path = AppConfig::config_dir().join("config.toml");
    format!(
        concat!(
            "\n  ERROR: This workflow has AI steps but no API key is configured.\n\n",
            "  Set one of these environment variables:\n",
            "    STEPFLOW_API_KEY = 'sk-...'\n",
            "    OPENAI_API_KEY   = 'sk-...'\n\n",
            "  Or add `api_key` to {}\n\n",
            "  To try the workflow offline, re-run with --demo.\n",
        ),
        config_path.display()
    )
}
