//! Invoker selection: builds the remote invoker named in the configuration.

use crate::openai_compat::OpenAiCompatInvoker;
use std::sync::Arc;
use stepflow_config::AppConfig;
use stepflow_core::invoker::RemoteInvoker;
use tracing::debug;

/// Build the remote invoker described by `config`.
///
/// A missing key is not an error here: the runner reports `MissingApiKey`
/// when an AI step is actually reached.
pub fn build_from_config(config: &AppConfig) -> Arc<dyn RemoteInvoker> {
    Arc::new(invoker_for(config))
}

fn invoker_for(config: &AppConfig) -> OpenAiCompatInvoker {
    let api_key = config.api_key.clone().unwrap_or_default();

    let invoker = match (config.provider.as_str(), config.api_url.as_deref()) {
        ("openai", None) => OpenAiCompatInvoker::openai(api_key),
        ("openrouter", None) => OpenAiCompatInvoker::openrouter(api_key),
        ("ollama", url) => OpenAiCompatInvoker::ollama(url),
        (name, url) => {
            let base_url = url.map_or_else(|| default_base_url(name), str::to_string);
            OpenAiCompatInvoker::new(name, base_url, api_key)
        }
    };

    debug!(
        provider = %config.provider,
        base_url = %invoker.base_url(),
        "Built remote invoker"
    );

    invoker
}

/// Get the default base URL for well-known providers.
pub fn default_base_url(provider_name: &str) -> String {
    match provider_name {
        "openai" => "https://api.openai.com/v1".into(),
        "openrouter" => "https://openrouter.ai/api/v1".into(),
        "ollama" => "http://localhost:11434/v1".into(),
        "deepseek" => "https://api.deepseek.com/v1".into(),
        "groq" => "https://api.groq.com/openai/v1".into(),
        "together" => "https://api.together.xyz/v1".into(),
        "mistral" => "https://api.mistral.ai/v1".into(),
        "vllm" => "http://localhost:8000/v1".into(),
        "llamacpp" | "llama.cpp" => "http://localhost:8080/v1".into(),
        _ => format!("https://{provider_name}.api.example.com/v1"),
    }
}

/// Provider names with a built-in base URL.
pub const KNOWN_PROVIDERS: [&str; 9] = [
    "openai",
    "openrouter",
    "ollama",
    "deepseek",
    "groq",
    "together",
    "mistral",
    "vllm",
    "llamacpp",
];
