//! Provider-specific error types
//!
//! ProviderError는 원격 모델 호출 관련 세부 에러를 관리합니다.
//! clio_foundation::Error와의 변환을 지원합니다.

use clio_foundation::Error as FoundationError;
use thiserror::Error;

/// Errors that can occur during provider operations
#[derive(Error, Debug, Clone)]
pub enum ProviderError {
    /// API key is missing or rejected
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Request timed out (fixed 30s budget, not retried)
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Network error (connection failed, DNS, etc.)
    #[error("Network error: {0}")]
    Network(String),

    /// Server error (5xx)
    #[error("Server error: {0}")]
    ServerError(String),

    /// Non-success status that is not a server error
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Response body did not have the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ProviderError {
    /// HTTP 상태 코드 기반 에러 분류
    pub fn from_http_status(status: u16, body: &str) -> Self {
        match status {
            401 | 403 => Self::Authentication(format!("status {status}: {body}")),
            500..=599 => Self::ServerError(format!("status {status}: {body}")),
            _ => Self::RequestFailed(format!("status {status}: {body}")),
        }
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout(e.to_string())
        } else if e.is_connect() {
            Self::Network(e.to_string())
        } else {
            Self::RequestFailed(e.to_string())
        }
    }
}

// 파이프라인에서는 모든 요청 실패가 배치 에러 설명자로 수렴한다
impl From<ProviderError> for FoundationError {
    fn from(e: ProviderError) -> Self {
        FoundationError::RequestFailed(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_classification() {
        assert!(matches!(
            ProviderError::from_http_status(401, "bad key"),
            ProviderError::Authentication(_)
        ));
        assert!(matches!(
            ProviderError::from_http_status(503, "unavailable"),
            ProviderError::ServerError(_)
        ));
        assert!(matches!(
            ProviderError::from_http_status(404, "not found"),
            ProviderError::RequestFailed(_)
        ));
    }

    #[test]
    fn test_conversion_to_foundation_error() {
        let error: FoundationError = ProviderError::Timeout("30s elapsed".into()).into();
        assert!(error.to_string().starts_with("API request failed:"));
    }
}
