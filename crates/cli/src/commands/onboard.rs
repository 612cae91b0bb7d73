//! `stepflow onboard` — First-time setup.

use stepflow_config::AppConfig;

const SAMPLE_WORKFLOW: &str = r#"name = "Polish email"
input = "hi team  i do not think we can ship friday"

[[steps]]
type = "formatter"
operation = { kind = "fix_grammar" }

[[steps]]
type = "ai"
instruction = "Rewrite as a short professional email"

[[steps]]
type = "formatter"
operation = { kind = "tone", tone = "casual" }
"#;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config_dir = AppConfig::config_dir();
    let config_path = config_dir.join("config.toml");
    let workflows_dir = config_dir.join("workflows");

    println!("StepFlow — First-Time Setup");
    println!("===========================\n");

    if !config_dir.exists() {
        std::fs::create_dir_all(&config_dir)?;
        println!("✅ Created config directory: {}", config_dir.display());
    } else {
        println!("  Config directory exists: {}", config_dir.display());
    }

    if !workflows_dir.exists() {
        std::fs::create_dir_all(&workflows_dir)?;
        println!("✅ Created workflows directory: {}", workflows_dir.display());
    }

    let sample_path = workflows_dir.join("polish-email.toml");
    if !sample_path.exists() {
        std::fs::write(&sample_path, SAMPLE_WORKFLOW)?;
        println!("✅ Created sample workflow: {}", sample_path.display());
    }

    if config_path.exists() {
        println!("\n⚠️  Config already exists at: {}", config_path.display());
        println!("   Edit it manually or delete and re-run onboard.\n");
    } else {
        std::fs::write(&config_path, AppConfig::default_toml())?;
        println!("✅ Created config.toml at: {}", config_path.display());
        println!("\n📝 Next steps:");
        println!("   1. Add your API key to {} (or set STEPFLOW_API_KEY)", config_path.display());
        println!("   2. Run: stepflow run {}", sample_path.display());
        println!("   3. No key yet? Add --demo to run offline\n");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use stepflow_config::WorkflowFile;

    #[test]
    fn sample_workflow_is_valid() {
        let workflow: WorkflowFile = toml::from_str(SAMPLE_WORKFLOW).unwrap();
        assert_eq!(workflow.steps.len(), 3);
        assert!(workflow.validate().is_ok());
    }
}
