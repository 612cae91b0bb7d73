//! Pipeline execution for StepFlow.
//!
//! A workflow is an ordered list of [`stepflow_core::Step`]s. The
//! [`PipelineRunner`] threads one piece of text through them, serving AI
//! steps from a remote or local invoker and formatter steps from the
//! offline [`stepflow_formatter::FormatterEngine`].

pub mod runner;

pub use runner::{
    DEMO_FIX_GRAMMAR_INSTRUCTION, FIX_GRAMMAR_INSTRUCTION, FIX_GRAMMAR_MAX_TEMPERATURE,
    PipelineRunner,
};
