//! Confirmation interface
//!
//! Separates the stop/continue decision from how the yes/no is obtained,
//! so execution logic stays testable without a terminal.

use std::io::Write;

/// Narrow yes/no interface used before execution and after failures
pub trait Confirmation: Send + Sync {
    /// Present a question and return the answer
    fn confirm(&self, prompt: &str) -> bool;
}

/// Interactive stdin/stdout confirmation
pub struct StdinConfirmation;

impl Confirmation for StdinConfirmation {
    fn confirm(&self, prompt: &str) -> bool {
        print!("{prompt} (Y/N): ");
        let _ = std::io::stdout().flush();

        let mut answer = String::new();
        if std::io::stdin().read_line(&mut answer).is_err() {
            // Unreadable stdin counts as "no" - the safe default
            return false;
        }
        answer.trim().eq_ignore_ascii_case("y")
    }
}

/// Unconditional-continue policy (for `--yes` style flows and tests)
pub struct AlwaysContinue;

impl Confirmation for AlwaysContinue {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

/// Unconditional-stop policy - the non-interactive default
pub struct AlwaysStop;

impl Confirmation for AlwaysStop {
    fn confirm(&self, _prompt: &str) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_doubles() {
        assert!(AlwaysContinue.confirm("Continue?"));
        assert!(!AlwaysStop.confirm("Continue?"));
    }
}
