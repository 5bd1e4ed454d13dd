//! # 세션 미들웨어(추출기)
//!
//! `x-session-id` 헤더로 요청한 사람의 세션을 찾아 핸들러에 넘겨줍니다.
//!
//! ## 사용법
//! 핸들러 인자에 `current: CurrentSession`을 넣으면 Axum이 핸들러 실행 전에 자동으로 추출합니다.
//! - 헤더가 없거나 비어 있음 → 401 `missing_session`
//! - 모르는(끝났거나 정리된) 세션 → 404 `unknown_session`
//!
//! 추출할 때마다 세션의 마지막 요청 시각을 갱신하므로,
//! 계속 쓰이는 세션은 유휴 세션 정리 대상이 되지 않습니다.

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::routes::AppState;
use crate::store::SharedSession;

/// 세션 식별자를 담는 요청 헤더
pub const SESSION_HEADER: &str = "x-session-id";

/// 요청한 사람의 세션
#[derive(Clone)]
pub struct CurrentSession {
    pub id: String,
    pub session: SharedSession,
}

impl FromRequestParts<AppState> for CurrentSession {
    type Rejection = SessionError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let id = parts
            .headers
            .get(SESSION_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or(SessionError::MissingSession)?
            .to_string();

        let session = state
            .store
            .get(&id)
            .await
            .ok_or(SessionError::UnknownSession)?;
        session.lock().await.touch();

        Ok(CurrentSession { id, session })
    }
}

/// 세션 추출 실패. 응답 본문은 `AppError`와 같은 `{ "error": { code, message } }` 형태입니다.
#[derive(Debug)]
pub enum SessionError {
    MissingSession,
    UnknownSession,
}

impl IntoResponse for SessionError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            SessionError::MissingSession => (
                StatusCode::UNAUTHORIZED,
                "missing_session",
                "x-session-id header is required",
            ),
            SessionError::UnknownSession => (
                StatusCode::NOT_FOUND,
                "unknown_session",
                "Session not found or already ended",
            ),
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserProfile;
    use axum::http::Request;

    async fn extract(state: &AppState, header: Option<&str>) -> Result<CurrentSession, SessionError> {
        let mut builder = Request::builder().uri("/api/v1/session");
        if let Some(value) = header {
            builder = builder.header(SESSION_HEADER, value);
        }
        let (mut parts, _) = builder.body(()).unwrap().into_parts();
        CurrentSession::from_request_parts(&mut parts, state).await
    }

    #[tokio::test]
    async fn resolves_known_session() {
        let state = AppState::for_tests(None);
        let session = state.store.create(UserProfile::default(), 25).await.unwrap();
        let id = session.lock().await.id.clone();

        session.lock().await.last_seen = chrono::Utc::now() - chrono::Duration::hours(3);
        let current = extract(&state, Some(&id)).await.unwrap();
        assert_eq!(current.id, id);

        // 요청이 들어오면 유휴 상태가 풀려 정리되지 않습니다.
        assert_eq!(state.store.evict_idle(chrono::Utc::now()).await, 0);
        assert!(state.store.get(&id).await.is_some());
    }

    #[tokio::test]
    async fn missing_and_unknown_headers_are_rejected() {
        let state = AppState::for_tests(None);
        assert!(matches!(
            extract(&state, None).await,
            Err(SessionError::MissingSession)
        ));
        assert!(matches!(
            extract(&state, Some("  ")).await,
            Err(SessionError::MissingSession)
        ));
        assert!(matches!(
            extract(&state, Some("nope")).await,
            Err(SessionError::UnknownSession)
        ));
        assert_eq!(
            SessionError::UnknownSession.into_response().status(),
            StatusCode::NOT_FOUND
        );
    }
}
