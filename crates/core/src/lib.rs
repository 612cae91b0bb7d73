//! # StepFlow Core
//!
//! Domain types, traits, and error definitions for the StepFlow text pipeline.
//! This crate does no I/O and pulls in only `serde`, `thiserror` and
//! `async-trait`. It defines the domain model that the formatter,
//! providers, and runner crates implement against.
//!
//! ## Design Philosophy
//!
//! The two AI collaborators (remote provider and local demo substitute) are
//! defined as traits here. Implementations live in `stepflow-providers`.
//! This enables:
//! - Swapping the remote backend via configuration
//! - Easy testing with scripted mock invokers
//! - Clean dependency graph (all crates depend inward on core)

pub mod cancel;
pub mod error;
pub mod invoker;
pub mod run;
pub mod step;

// Re-export key types at crate root for ergonomics
pub use cancel::CancellationFlag;
pub use error::{PipelineError, ProviderError, Result};
pub use invoker::{LocalInvoker, RemoteInvoker};
pub use run::{AiMode, RunConfiguration, RunResult, TraceStep};
pub use step::{FormatterOperation, Step, ToneKind};
