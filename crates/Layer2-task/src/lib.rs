//! # clio-task
//!
//! Execution layer for Clio:
//! - ExecutionEngine: 배치 스크립트 모드 (Windows) / 순차 모드 (Unix)
//! - Confirmation: 실행 확인 인터페이스 (대화형 + 테스트 더블)

pub mod confirm;
pub mod executor;

pub use confirm::{AlwaysContinue, AlwaysStop, Confirmation, StdinConfirmation};
pub use executor::{render_batch_script, ExecutionEngine, ExecutionResult};
