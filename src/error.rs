//! # 에러 처리 모듈
//!
//! API 핸들러에서 발생할 수 있는 모든 에러 타입을 정의합니다.
//!
//! 이 모듈의 핵심:
//! - `AppError` 열거형(enum): 모든 에러 종류를 하나의 타입으로 통합
//! - `IntoResponse` 구현: 에러를 HTTP 응답으로 자동 변환
//!
//! ## 에러 분류
//! | 분류 | variant | HTTP |
//! |------|---------|------|
//! | 설정 에러 (API 키 없음) | `NotConfigured` | 503 |
//! | 검증 에러 (정제 후 빈 주제) | `Validation` | 422 |
//! | 할당량 에러 (세션당 호출 한도) | `QuotaExceeded` | 429 |
//! | 잘못된 요청 | `BadRequest` | 400 |
//!
//! 외부 서비스 에러는 여기까지 올라오지 않습니다.
//! 텍스트 생성 실패는 응답 본문의 에러 문자열로, 트렌드 조회 실패는 빈 목록으로 처리됩니다.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// 애플리케이션에서 발생할 수 있는 모든 에러 종류
///
/// 핸들러에서 `Result<T, AppError>`를 반환하면,
/// Axum이 자동으로 `IntoResponse`를 호출하여 HTTP 응답으로 변환합니다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 요청한 리소스를 찾을 수 없음 (HTTP 404)
    #[error("Resource not found")]
    NotFound,

    /// 잘못된 요청 (HTTP 400)
    /// {0}은 첫 번째 필드(String)를 참조하는 포맷 문법입니다.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// 입력값 검증 실패 (HTTP 422)
    /// 예: 정제(sanitize) 후 주제가 비어 있는 경우. 외부 호출은 일어나지 않습니다.
    #[error("{0}")]
    Validation(String),

    /// 세션당 생성 한도 초과 (HTTP 429)
    #[error("You've reached the limit of {limit} generations per session. Start a new session to reset.")]
    QuotaExceeded { limit: u32 },

    /// 텍스트 생성 서비스가 설정되지 않음 (HTTP 503)
    /// 카탈로그 조회 등 나머지 기능은 계속 사용할 수 있습니다.
    #[error("Content generation is disabled: GEMINI_API_KEY is not configured")]
    NotConfigured,

    /// 리소스 충돌 (HTTP 409)
    /// 예: 동시 세션 수 상한 도달
    #[error("Conflict: {0}")]
    Conflict(String),
}

impl AppError {
    /// 응답 JSON에 들어가는 기계용 에러 코드
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound => "not_found",
            AppError::BadRequest(_) => "bad_request",
            AppError::Validation(_) => "validation_error",
            AppError::QuotaExceeded { .. } => "quota_exceeded",
            AppError::NotConfigured => "not_configured",
            AppError::Conflict(_) => "conflict",
        }
    }

    /// 에러에 대응하는 HTTP 상태 코드
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::QuotaExceeded { .. } => StatusCode::TOO_MANY_REQUESTS,
            AppError::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Conflict(_) => StatusCode::CONFLICT,
        }
    }
}

impl IntoResponse for AppError {
    /// AppError를 HTTP 응답으로 변환합니다.
    ///
    /// 400/409는 접두어 없이 원래 메시지만, 나머지는 `Display` 문구를 그대로 씁니다.
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();

        let message = match self {
            AppError::BadRequest(ref msg) | AppError::Conflict(ref msg) => msg.clone(),
            ref other => other.to_string(),
        };

        // 결과: { "error": { "code": "quota_exceeded", "message": "..." } }
        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
