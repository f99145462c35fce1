//! Error types for charts
//!
//! 모든 에러를 중앙에서 관리

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// charts 에러 타입
///
/// 리스너 레지스트리 자체는 에러를 만들지 않습니다.
/// 차트 데이터, 렌더러, 설정 경계에서만 발생합니다.
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // 설정 관련
    // ========================================================================
    #[error("Configuration error: {0}")]
    Config(String),

    // ========================================================================
    // 차트 상태 관련
    // ========================================================================
    #[error("Already initialized: {0}")]
    AlreadyInitialized(String),

    #[error("Unsupported operation on realized chart: {0}")]
    Unsupported(String),

    // ========================================================================
    // 렌더러 관련
    // ========================================================================
    #[error("Render error: {0}")]
    Render(String),

    // ========================================================================
    // 일반
    // ========================================================================
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Validation error: {0}")]
    Validation(String),

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
    /// 사용자에게 보여줄 수 있는 에러인지 확인
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Error::NotFound(_)
                | Error::InvalidInput(_)
                | Error::Validation(_)
                | Error::Unsupported(_)
                | Error::AlreadyInitialized(_)
        )
    }

    /// 실현된 차트에서 허용되지 않는 연산 에러 생성 헬퍼
    pub fn unsupported(operation: impl Into<String>) -> Self {
        Error::Unsupported(operation.into())
    }

    /// 렌더러 에러 생성 헬퍼
    pub fn render(message: impl Into<String>) -> Self {
        Error::Render(message.into())
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
