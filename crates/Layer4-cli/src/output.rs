//! User-facing output formatting

use clio_core::{CommandBatch, RiskTier};

/// Convert a risk tier to user-friendly text
pub fn format_safety_level(tier: RiskTier) -> &'static str {
    match tier {
        RiskTier::Safe => "Safe - Read-only command",
        RiskTier::LowRisk => "Low Risk - Minor system changes",
        RiskTier::ModerateRisk => "Caution - System modifications",
        RiskTier::Dangerous => "Warning - Potentially destructive",
    }
}

/// Print the batch in a human-friendly format.
///
/// Returns whether there are commands worth offering for execution.
pub fn display_friendly(batch: &CommandBatch) -> bool {
    if let Some(error) = &batch.error {
        if error == "No Command Found" {
            println!("No Command Found");
        } else {
            println!("Error: {error}");
        }
        return false;
    }

    if batch.commands.is_empty() {
        println!("No commands to execute.");
        return false;
    }

    for command in &batch.commands {
        println!("Command : {}", command.command);
        println!("Description: {}", command.description);
        println!("Risk Level: {}", format_safety_level(command.safety_level));
        println!();
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use clio_core::Command;

    #[test]
    fn test_safety_labels() {
        assert_eq!(format_safety_level(RiskTier::Safe), "Safe - Read-only command");
        assert_eq!(
            format_safety_level(RiskTier::Dangerous),
            "Warning - Potentially destructive"
        );
    }

    #[test]
    fn test_display_returns_actionability() {
        assert!(!display_friendly(&CommandBatch::from_error("Empty query")));
        assert!(!display_friendly(&CommandBatch::default()));

        let batch = CommandBatch::new(vec![Command::new(
            "ls",
            "List files",
            RiskTier::Safe,
            false,
        )]);
        assert!(display_friendly(&batch));
    }
}
