//! `stepflow formatters` — List the formatter operations.

use stepflow_core::FormatterOperation;

pub fn run() {
    println!("Formatter operations");
    println!("====================");
    for operation in FormatterOperation::ALL {
        println!("  {:<22} {}", operation_name(operation), operation.display_name());
    }
    println!();
    println!("  Fix grammar calls the configured AI provider inside a workflow;");
    println!("  `stepflow format fix_grammar` uses the offline cleanup instead.");
}

/// The name accepted by `stepflow format`.
fn operation_name(operation: FormatterOperation) -> String {
    match operation {
        FormatterOperation::Tone(tone) => format!("tone:{}", tone.display_name().to_lowercase()),
        other => other.kind().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listed_names_parse_back() {
        for operation in FormatterOperation::ALL {
            let parsed: FormatterOperation = operation_name(operation).parse().unwrap();
            assert_eq!(parsed, operation);
        }
    }
}
