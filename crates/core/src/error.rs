//! Error types for the StepFlow domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! A pipeline run fails with exactly one [`PipelineError`]; collaborator
//! failures are carried inside it as a [`ProviderError`].

use thiserror::Error;

/// Why a pipeline run stopped before producing an output.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The run was cancelled at a step boundary.
    #[error("The workflow was cancelled")]
    Cancelled,

    /// A step in the list is malformed.
    #[error("This step is invalid: {0}")]
    InvalidStep(String),

    /// An AI-backed step was reached in remote mode without a usable key.
    #[error("An API key is required to run AI steps")]
    MissingApiKey,

    /// The remote AI collaborator failed.
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),
}

impl PipelineError {
    /// Whether the caller should route the user to credential configuration.
    pub fn is_missing_api_key(&self) -> bool {
        matches!(self, PipelineError::MissingApiKey)
    }

    /// Whether re-running the same steps unchanged could succeed.
    ///
    /// Invalid steps and a missing key need the caller to change something first.
    pub fn is_retryable(&self) -> bool {
        matches!(self, PipelineError::Cancelled | PipelineError::Provider(_))
    }
}

/// Result type alias using [`PipelineError`].
pub type Result<T> = std::result::Result<T, PipelineError>;

// --- Bounded context errors ---

#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    #[error("API request failed: {message} (status: {status_code})")]
    ApiError { status_code: u16, message: String },

    #[error("Rate limited by provider, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("The AI response was empty")]
    EmptyResponse,
}
