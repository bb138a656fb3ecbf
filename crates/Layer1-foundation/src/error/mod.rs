//! Error types for Clio
//!
//! 모든 에러를 중앙에서 관리

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Clio 에러 타입
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // 쿼리 관련
    // ========================================================================
    #[error("Empty query")]
    EmptyQuery,

    /// Conversational intent - not a failure, just nothing to execute
    #[error("No Command Found")]
    NoCommandFound,

    // ========================================================================
    // 설정 관련
    // ========================================================================
    #[error("API key not found. Please set OPENROUTER_API_KEY environment variable.")]
    MissingCredential,

    #[error("Configuration error: {0}")]
    Config(String),

    // ========================================================================
    // 모델 응답 관련
    // ========================================================================
    /// Covers both "no JSON object found" and "invalid JSON"; the message
    /// distinguishes the two
    #[error("{0}")]
    MalformedResponse(String),

    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Missing or wrong-typed `commands` field
    #[error("{0}")]
    SchemaViolation(String),

    // ========================================================================
    // 실행 관련
    // ========================================================================
    #[error("Command failed with error code {code}: {command}")]
    Execution { command: String, code: i32 },

    // ========================================================================
    // 외부 에러 변환
    // ========================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ========================================================================
    // 기타
    // ========================================================================
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// 실패가 아닌 결과인지 확인 (대화형 쿼리 등)
    pub fn is_benign(&self) -> bool {
        matches!(self, Error::NoCommandFound)
    }

    /// 사용자에게 그대로 보여줄 수 있는 에러인지 확인
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Error::EmptyQuery
                | Error::NoCommandFound
                | Error::MissingCredential
                | Error::MalformedResponse(_)
                | Error::RequestFailed(_)
                | Error::SchemaViolation(_)
        )
    }

    /// 스키마 위반 에러 생성 헬퍼
    pub fn schema(message: impl Into<String>) -> Self {
        Error::SchemaViolation(message.into())
    }

    /// 응답 파싱 에러 생성 헬퍼
    pub fn malformed(message: impl Into<String>) -> Self {
        Error::MalformedResponse(message.into())
    }
}

// ============================================================================
// From 구현 (추가 변환)
// ============================================================================

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Internal(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Internal(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_visible_messages() {
        assert_eq!(Error::EmptyQuery.to_string(), "Empty query");
        assert_eq!(Error::NoCommandFound.to_string(), "No Command Found");
        assert_eq!(
            Error::malformed("Invalid response format from API").to_string(),
            "Invalid response format from API"
        );
    }

    #[test]
    fn test_benign_classification() {
        assert!(Error::NoCommandFound.is_benign());
        assert!(!Error::EmptyQuery.is_benign());
        assert!(!Error::RequestFailed("timeout".into()).is_benign());
    }
}
