//! End-to-end runs through the real demo and formatter implementations.

use std::sync::Arc;
use stepflow_core::{
    CancellationFlag, FormatterOperation, PipelineError, RunConfiguration, Step, ToneKind,
};
use stepflow_providers::{DemoInvoker, OpenAiCompatInvoker};
use stepflow_workflow::PipelineRunner;

fn demo_runner() -> PipelineRunner {
    // Never reached in demo mode.
    let remote = Arc::new(OpenAiCompatInvoker::new("unused", "http://127.0.0.1:9", ""));
    PipelineRunner::new(remote, Arc::new(DemoInvoker::new()))
}

#[tokio::test]
async fn demo_workflow_polishes_and_bullets_text() {
    let steps = vec![
        Step::formatter(FormatterOperation::FixGrammar),
        Step::ai("Make bullet points"),
        Step::formatter(FormatterOperation::Tone(ToneKind::Casual)),
    ];

    let result = demo_runner()
        .run_with_trace(
            &steps,
            "hello world. i do not know",
            &RunConfiguration::local_demo("demo", 0.4),
            &CancellationFlag::new(),
            |_, _| {},
        )
        .await
        .unwrap();

    assert_eq!(result.steps[0].title, "Fix grammar");
    assert_eq!(result.steps[0].output_snapshot, "Hello, world. I do not know.");
    assert_eq!(result.steps[1].title, "AI: Make bullet points");
    assert_eq!(result.final_output, "• Hello, world\n• I don't know");
}

#[tokio::test]
async fn demo_runs_are_deterministic() {
    let steps = vec![
        Step::ai("Summarize"),
        Step::formatter(FormatterOperation::Expand),
    ];
    let config = RunConfiguration::local_demo("demo", 0.4);
    let input = "The release slipped. QA found two blockers. We ship next week.";

    let runner = demo_runner();
    let first = runner
        .run(&steps, input, &config, &CancellationFlag::new(), |_, _| {})
        .await
        .unwrap();
    let second = runner
        .run(&steps, input, &config, &CancellationFlag::new(), |_, _| {})
        .await
        .unwrap();

    assert_eq!(first, second);
    assert!(first.starts_with("Summary: The release slipped. QA found two blockers."));
}

#[tokio::test]
async fn remote_mode_without_key_never_touches_the_network() {
    let err = demo_runner()
        .run(
            &[Step::ai("Summarize")],
            "text",
            &RunConfiguration::remote("gpt-4o-mini", 0.4, false),
            &CancellationFlag::new(),
            |_, _| {},
        )
        .await
        .unwrap_err();

    assert!(matches!(err, PipelineError::MissingApiKey));
}

#[tokio::test]
async fn runner_is_shareable_across_tasks() {
    let runner = Arc::new(demo_runner());
    let config = RunConfiguration::local_demo("demo", 0.4);

    let mut handles = Vec::new();
    for i in 0..4 {
        let runner = runner.clone();
        let config = config.clone();
        handles.push(tokio::spawn(async move {
            let steps = vec![Step::ai("translate to french")];
            runner
                .run(&steps, &format!("texte {i}"), &config, &CancellationFlag::new(), |_, _| {})
                .await
        }));
    }

    for (i, handle) in handles.into_iter().enumerate() {
        let output = handle.await.unwrap().unwrap();
        assert_eq!(output, format!("FR (demo): texte {i}"));
    }
}
