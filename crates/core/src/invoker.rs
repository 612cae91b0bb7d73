//! AI invoker traits, the abstraction over whatever serves AI steps.
//!
//! The runner never knows which backend it is talking to. In remote mode it
//! calls a [`RemoteInvoker`]; in local-demo mode it calls a [`LocalInvoker`].
//!
//! Implementations: OpenAI-compatible endpoints, the offline demo substitute,
//! and scripted mocks in tests.

use crate::error::ProviderError;
use async_trait::async_trait;

/// A remote AI provider that transforms text according to an instruction.
#[async_trait]
pub trait RemoteInvoker: Send + Sync {
    /// A human-readable name for this backend (e.g., "openai", "openrouter").
    fn name(&self) -> &str;

    /// Apply `instruction` to `input` and return the transformed text.
    async fn invoke(
        &self,
        input: &str,
        instruction: &str,
        model: &str,
        temperature: f32,
    ) -> std::result::Result<String, ProviderError>;
}

/// A local deterministic substitute used in demo mode.
///
/// Must return identical output for identical inputs and never fail.
#[async_trait]
pub trait LocalInvoker: Send + Sync {
    async fn invoke(&self, input: &str, instruction: &str) -> String;
}
