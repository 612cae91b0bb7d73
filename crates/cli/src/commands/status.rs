//! `stepflow status` — Show the effective configuration.

use stepflow_config::AppConfig;
use stepflow_providers::router::default_base_url;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    let base_url = config
        .api_url
        .clone()
        .unwrap_or_else(|| default_base_url(&config.provider));

    println!("StepFlow Status");
    println!("===============");
    println!("  Config dir:   {}", AppConfig::config_dir().display());
    println!("  Mode:         {}", config.mode);
    println!("  Provider:     {}", config.provider);
    println!("  Endpoint:     {base_url}");
    println!("  Model:        {}", config.model);
    println!("  Temperature:  {}", config.temperature);
    println!("  API key:      {}", if config.has_api_key() { "set" } else { "missing" });

    let config_path = AppConfig::config_dir().join("config.toml");
    if config_path.exists() {
        println!("\n  ✅ Config file found");
    } else {
        println!("\n  ⚠️  No config file — run `stepflow onboard` first");
    }

    Ok(())
}
