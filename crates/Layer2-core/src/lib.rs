//! # clio-core
//!
//! Core layer for Clio:
//! - Catalog: 정적 패턴 테이블 (키워드 가중치, 위험도 regex, 대화 패턴)
//! - Detector: 쿼리 + 디렉토리 컨텍스트 기반 도구 감지
//! - Safety: 명령어 위험도 분류 (dangerous > moderate > low > safe)
//! - Command: 명령/배치 데이터 모델 + safety-floor 재조정
//!
//! ## 파이프라인
//!
//! ```text
//! query ──► ToolDetector ──► (orchestrator/model) ──► SafetyClassifier
//!                                                          │
//!                                              safety floor ▼
//!                                                    CommandBatch
//! ```

pub mod catalog;
pub mod command;
pub mod detector;
pub mod safety;

// ============================================================================
// Catalog
// ============================================================================
pub use catalog::{catalog, PatternCatalog, RiskPattern, RiskTier, ToolId, ToolProfile};

// ============================================================================
// Detection & classification
// ============================================================================
pub use detector::{read_dir_entries, ToolDetector};
pub use safety::{SafetyClassifier, SafetyVerdict};

// ============================================================================
// Data model
// ============================================================================
pub use command::{Command, CommandBatch};
