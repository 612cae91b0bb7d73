//! AI invoker implementations for StepFlow.
//!
//! Remote invokers implement `stepflow_core::RemoteInvoker`; the offline demo
//! substitute implements `stepflow_core::LocalInvoker`.
//! The router builds the remote invoker from configuration.

pub mod demo;
pub mod openai_compat;
pub mod router;

pub use demo::{DemoBehavior, DemoInvoker};
pub use openai_compat::OpenAiCompatInvoker;
pub use router::build_from_config;
