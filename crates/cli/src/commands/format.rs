//! `stepflow format` — Apply one offline formatter to some text.

use std::io::Read;
use stepflow_core::{FormatterOperation, ToneKind};
use stepflow_formatter::FormatterEngine;
use tracing::debug;

pub fn run(
    operation: &str,
    tone: Option<&str>,
    text: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let operation = resolve_operation(operation, tone)?;

    let text = match text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let formatted = FormatterEngine::format(operation, &text);
    debug!(operation = %operation, changed = formatted.changed, "Formatted text");
    println!("{}", formatted.text);

    Ok(())
}

/// Parse the operation name; `--tone` only applies to `tone` operations.
fn resolve_operation(name: &str, tone: Option<&str>) -> Result<FormatterOperation, String> {
    let operation: FormatterOperation = name.parse()?;
    match (operation, tone) {
        (FormatterOperation::Tone(_), Some(tone)) => {
            Ok(FormatterOperation::Tone(tone.parse::<ToneKind>()?))
        }
        (_, Some(_)) => Err(format!("--tone only applies to the tone operation, not '{name}'")),
        (operation, None) => Ok(operation),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_operation() {
        assert_eq!(
            resolve_operation("shorten", None),
            Ok(FormatterOperation::Shorten)
        );
    }

    #[test]
    fn tone_flag_selects_tone() {
        assert_eq!(
            resolve_operation("tone", Some("professional")),
            Ok(FormatterOperation::Tone(ToneKind::Professional))
        );
        assert_eq!(
            resolve_operation("tone", None),
            Ok(FormatterOperation::Tone(ToneKind::Neutral))
        );
    }

    #[test]
    fn tone_flag_on_other_operation_is_rejected() {
        assert!(resolve_operation("expand", Some("casual")).is_err());
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert!(resolve_operation("translate", None).is_err());
        assert!(resolve_operation("tone", Some("angry")).is_err());
    }
}
