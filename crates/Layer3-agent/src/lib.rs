//! # clio-agent
//!
//! Orchestration layer for Clio:
//! - Prompt: 고정 지시 템플릿 + few-shot 예시
//! - Parse: 응답 정리 (fence 제거, balanced JSON 추출, 스키마 검증)
//! - Orchestrator: 쿼리 → 모델 호출 → safety-floor 재조정 → CommandBatch

pub mod orchestrator;
pub mod parse;
pub mod prompt;

pub use orchestrator::CommandOrchestrator;
pub use parse::{parse_response, ModelReply, RawCommand};
pub use prompt::{build_messages, build_system_prompt, few_shot_examples};
