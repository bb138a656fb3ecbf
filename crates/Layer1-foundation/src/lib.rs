//! # clio-foundation
//!
//! Foundation layer for Clio:
//! - Error: 중앙 에러 타입 (query, config, model response, execution)
//! - Config: 통합 설정 (ClioConfig, env 우선)
//! - EnvDetect: OS/플랫폼 감지 (prompt 힌트 + 실행 모드 선택)

pub mod config;
pub mod env_detect;
pub mod error;

// ============================================================================
// Error
// ============================================================================
pub use error::{Error, Result};

// ============================================================================
// Config
// ============================================================================
pub use config::{config_path, ClioConfig};

// ============================================================================
// Environment
// ============================================================================
pub use env_detect::{OsType, PlatformFamily};
