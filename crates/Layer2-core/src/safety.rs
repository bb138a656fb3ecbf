//! Safety Classifier - 명령어 위험도 분류
//!
//! Tier priority is strict: a command matching both a dangerous and a
//! low-risk pattern classifies as dangerous.

use crate::catalog::{catalog, RiskTier};

/// Classification verdict: tier plus confirmation requirement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SafetyVerdict {
    pub tier: RiskTier,
    pub confirm_required: bool,
}

impl SafetyVerdict {
    fn new(tier: RiskTier) -> Self {
        // Moderate and above always require confirmation
        Self {
            tier,
            confirm_required: tier >= RiskTier::ModerateRisk,
        }
    }
}

/// Pattern-based command risk classifier
pub struct SafetyClassifier;

impl SafetyClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify a command string, case-insensitively.
    ///
    /// Empty input returns `(Safe, false)` - a defensive default, not a
    /// safety claim.
    pub fn classify(&self, command: &str) -> SafetyVerdict {
        if command.trim().is_empty() {
            return SafetyVerdict::new(RiskTier::Safe);
        }

        // Checked in fixed priority order: dangerous, moderate, low
        for pattern_set in &catalog().risk_patterns {
            if pattern_set.patterns.iter().any(|p| p.is_match(command)) {
                return SafetyVerdict::new(pattern_set.tier);
            }
        }

        SafetyVerdict::new(RiskTier::Safe)
    }
}

impl Default for SafetyClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dangerous_detection() {
        let classifier = SafetyClassifier::new();

        for command in [
            "rm -rf /tmp/x",
            "sudo rm /etc/hosts",
            "chmod 777 /var/www",
            "dd if=/dev/zero of=/dev/sda",
            "mkfs.ext4 /dev/sdb1",
        ] {
            let verdict = classifier.classify(command);
            assert_eq!(verdict.tier, RiskTier::Dangerous, "command: {command}");
            assert!(verdict.confirm_required, "command: {command}");
        }
    }

    #[test]
    fn test_dangerous_wins_over_lower_tiers() {
        let classifier = SafetyClassifier::new();

        // "sudo rm" is dangerous even though "rm" alone carries no pattern
        // and the redirect would match low_risk
        let verdict = classifier.classify("sudo rm -rf build > out.log");
        assert_eq!(verdict.tier, RiskTier::Dangerous);
        assert!(verdict.confirm_required);
    }

    #[test]
    fn test_moderate_wins_over_low() {
        let classifier = SafetyClassifier::new();

        // "git push" (moderate) beats the "> x.log" low-risk match
        let verdict = classifier.classify("git push origin main > push.log");
        assert_eq!(verdict.tier, RiskTier::ModerateRisk);
        assert!(verdict.confirm_required);
    }

    #[test]
    fn test_moderate_detection() {
        let classifier = SafetyClassifier::new();

        for command in ["git push origin main", "docker stop web", "pip install requests"] {
            let verdict = classifier.classify(command);
            assert_eq!(verdict.tier, RiskTier::ModerateRisk, "command: {command}");
            assert!(verdict.confirm_required);
        }
    }

    #[test]
    fn test_low_risk_detection() {
        let classifier = SafetyClassifier::new();

        for command in ["git commit -m 'x'", "mkdir project", "touch notes.md"] {
            let verdict = classifier.classify(command);
            assert_eq!(verdict.tier, RiskTier::LowRisk, "command: {command}");
            assert!(!verdict.confirm_required);
        }
    }

    #[test]
    fn test_safe_default() {
        let classifier = SafetyClassifier::new();

        for command in ["ls -la", "git status", "pwd"] {
            let verdict = classifier.classify(command);
            assert_eq!(verdict.tier, RiskTier::Safe, "command: {command}");
            assert!(!verdict.confirm_required);
        }
    }

    #[test]
    fn test_empty_input_is_safe() {
        let classifier = SafetyClassifier::new();
        let verdict = classifier.classify("");
        assert_eq!(verdict.tier, RiskTier::Safe);
        assert!(!verdict.confirm_required);

        let verdict = classifier.classify("   ");
        assert_eq!(verdict.tier, RiskTier::Safe);
    }

    #[test]
    fn test_case_insensitive() {
        let classifier = SafetyClassifier::new();
        assert_eq!(
            classifier.classify("DROP my DATABASE now").tier,
            RiskTier::Dangerous
        );
        assert_eq!(classifier.classify("GIT PUSH").tier, RiskTier::ModerateRisk);
    }
}
