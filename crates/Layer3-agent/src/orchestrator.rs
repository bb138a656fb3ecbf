//! Command Orchestrator - 쿼리에서 검증된 명령 배치 생성
//!
//! Pipeline: query checks -> tool/platform detection -> model call ->
//! response parsing -> safety-floor reconciliation.
//!
//! Every failure becomes a `CommandBatch` error descriptor; a malformed
//! model reply never crashes the pipeline.

use crate::parse::{parse_response, ModelReply, RawCommand};
use crate::prompt::build_messages;
use clio_core::{catalog, Command, CommandBatch, RiskTier, SafetyClassifier, ToolDetector};
use clio_foundation::{Error, PlatformFamily, Result};
use clio_provider::{ChatRequest, Provider};
use std::path::PathBuf;

/// Placeholder for a missing description field
const UNKNOWN_DESCRIPTION: &str = "Unknown";

/// Generates and validates command batches from natural-language queries
pub struct CommandOrchestrator<P: Provider> {
    provider: P,
    detector: ToolDetector,
    classifier: SafetyClassifier,
    platform: PlatformFamily,
    /// Directory whose entries serve as detection context
    context_dir: PathBuf,
    max_tokens: u32,
}

impl<P: Provider> CommandOrchestrator<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            detector: ToolDetector::new(),
            classifier: SafetyClassifier::new(),
            platform: PlatformFamily::detect(),
            context_dir: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            max_tokens: 400,
        }
    }

    /// 플랫폼 힌트 고정 (테스트용)
    pub fn with_platform(mut self, platform: PlatformFamily) -> Self {
        self.platform = platform;
        self
    }

    /// 컨텍스트 디렉토리 지정
    pub fn with_context_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.context_dir = dir.into();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Generate a validated command batch for a query.
    ///
    /// Never fails outward - every error maps to a batch error descriptor.
    pub async fn generate(&self, query: &str) -> CommandBatch {
        match self.generate_inner(query).await {
            Ok(batch) => batch,
            Err(e) => {
                if !e.is_benign() {
                    tracing::warn!("command generation failed: {e}");
                }
                CommandBatch::from_error(e)
            }
        }
    }

    async fn generate_inner(&self, query: &str) -> Result<CommandBatch> {
        if query.trim().is_empty() {
            return Err(Error::EmptyQuery);
        }

        // Conversational queries short-circuit before any model contact
        if catalog().is_general_query(query) {
            return Err(Error::NoCommandFound);
        }

        let tool = self.detector.detect_in_dir(query, &self.context_dir);
        let messages = build_messages(query, tool, self.platform);

        let raw = self
            .provider
            .complete(ChatRequest::new(messages).with_max_tokens(self.max_tokens))
            .await?;

        let reply = parse_response(&raw)?;

        match reply {
            ModelReply::Error(message) => Ok(CommandBatch::from_error(message)),
            ModelReply::Commands(raw_commands) => {
                let commands = raw_commands
                    .into_iter()
                    .filter_map(|raw| self.reconcile(raw))
                    .collect();
                Ok(CommandBatch::new(commands))
            }
        }
    }

    /// Validate one proposed entry and enforce the safety floor.
    ///
    /// Entries without non-empty command text are dropped. Missing fields
    /// get placeholder defaults (description "Unknown", confirmation
    /// required, unrecognized tier treated as the lowest rank) before the
    /// local verdict is allowed to escalate - never relax - the rating.
    fn reconcile(&self, raw: RawCommand) -> Option<Command> {
        let text = raw.command.filter(|c| !c.trim().is_empty())?;

        let model_tier = raw
            .safety_level
            .as_deref()
            .and_then(RiskTier::parse)
            .unwrap_or(RiskTier::Safe);

        let mut command = Command::new(
            text,
            raw.description
                .unwrap_or_else(|| UNKNOWN_DESCRIPTION.to_string()),
            model_tier,
            raw.confirm_required.unwrap_or(true),
        );
        command.apply_safety_floor(&self.classifier);

        Some(command)
    }
}
