//! Command data model
//!
//! `Command` and `CommandBatch` use the provider wire field names so the
//! `--json-only` output matches what the model was asked to produce.

use crate::catalog::RiskTier;
use crate::safety::{SafetyClassifier, SafetyVerdict};
use serde::{Deserialize, Serialize};

/// A single generated shell command with its risk assessment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    /// The exact command to run (non-empty)
    pub command: String,

    /// Brief human-readable explanation
    pub description: String,

    /// Reconciled risk tier - never below the locally computed floor
    pub safety_level: RiskTier,

    /// Whether the user should confirm before execution
    pub confirm_required: bool,
}

impl Command {
    pub fn new(
        command: impl Into<String>,
        description: impl Into<String>,
        safety_level: RiskTier,
        confirm_required: bool,
    ) -> Self {
        Self {
            command: command.into(),
            description: description.into(),
            safety_level,
            confirm_required,
        }
    }

    /// Enforce the safety floor: the locally computed tier wins whenever it
    /// is stricter than what the model proposed. A stricter model verdict is
    /// kept as-is.
    pub fn apply_safety_floor(&mut self, classifier: &SafetyClassifier) {
        let local: SafetyVerdict = classifier.classify(&self.command);
        if local.tier.index() > self.safety_level.index() {
            tracing::debug!(
                command = %self.command,
                model = self.safety_level.as_str(),
                local = local.tier.as_str(),
                "escalating model safety rating"
            );
            self.safety_level = local.tier;
            self.confirm_required = local.confirm_required;
        }
    }
}

/// Ordered command sequence plus an optional error descriptor.
///
/// The empty batch with no error is a legal "no actionable intent" result.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommandBatch {
    pub commands: Vec<Command>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CommandBatch {
    pub fn new(commands: Vec<Command>) -> Self {
        Self {
            commands,
            error: None,
        }
    }

    /// 에러 결과 생성 (빈 명령 목록)
    pub fn from_error(error: impl std::fmt::Display) -> Self {
        Self {
            commands: Vec::new(),
            error: Some(error.to_string()),
        }
    }

    /// Error-free and has at least one command
    pub fn is_actionable(&self) -> bool {
        self.error.is_none() && !self.commands.is_empty()
    }

    /// Any command in the batch requires confirmation
    pub fn any_confirm_required(&self) -> bool {
        self.commands.iter().any(|c| c.confirm_required)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safety_floor_escalates_lax_model_rating() {
        let classifier = SafetyClassifier::new();
        let mut command = Command::new("rm -rf /tmp/x", "Clean up", RiskTier::Safe, false);

        command.apply_safety_floor(&classifier);

        assert_eq!(command.safety_level, RiskTier::Dangerous);
        assert!(command.confirm_required);
    }

    #[test]
    fn test_safety_floor_keeps_stricter_model_rating() {
        let classifier = SafetyClassifier::new();
        // Model says dangerous, local analysis says safe: keep the model's
        // verdict, never relax
        let mut command = Command::new("ls -la", "List files", RiskTier::Dangerous, true);

        command.apply_safety_floor(&classifier);

        assert_eq!(command.safety_level, RiskTier::Dangerous);
        assert!(command.confirm_required);
    }

    #[test]
    fn test_safety_floor_invariant() {
        let classifier = SafetyClassifier::new();
        let samples = [
            ("git push origin main", RiskTier::Safe),
            ("mkdir build", RiskTier::Safe),
            ("sudo rm -rf /var/cache", RiskTier::LowRisk),
            ("echo hello", RiskTier::Safe),
        ];

        for (text, model_tier) in samples {
            let mut command = Command::new(text, "test", model_tier, false);
            command.apply_safety_floor(&classifier);
            let floor = classifier.classify(text).tier;
            assert!(
                command.safety_level.index() >= floor.index(),
                "floor violated for {text}"
            );
        }
    }

    #[test]
    fn test_batch_actionability() {
        assert!(!CommandBatch::default().is_actionable());
        assert!(!CommandBatch::from_error("Empty query").is_actionable());

        let batch = CommandBatch::new(vec![Command::new(
            "ls",
            "List files",
            RiskTier::Safe,
            false,
        )]);
        assert!(batch.is_actionable());
        assert!(!batch.any_confirm_required());
    }

    #[test]
    fn test_batch_serialization_shape() {
        let batch = CommandBatch::new(vec![Command::new(
            "git push origin main",
            "Push commits",
            RiskTier::ModerateRisk,
            true,
        )]);
        let json = serde_json::to_value(&batch).unwrap();

        assert_eq!(json["commands"][0]["command"], "git push origin main");
        assert_eq!(json["commands"][0]["safety_level"], "moderate_risk");
        assert_eq!(json["commands"][0]["confirm_required"], true);
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_error_batch_serializes_error() {
        let batch = CommandBatch::from_error("No Command Found");
        let json = serde_json::to_value(&batch).unwrap();
        assert_eq!(json["error"], "No Command Found");
        assert_eq!(json["commands"].as_array().unwrap().len(), 0);
    }
}
