//! # 헬스체크(Health Check) 핸들러
//!
//! 서버가 정상적으로 동작하는지 확인하는 엔드포인트입니다.
//!
//! ## 엔드포인트
//! - `GET /api/v1/health` → `{ "status": "ok", "generation_enabled": ..., "trends_enabled": ... }`
//!
//! 생성 기능이나 트렌드 조회가 꺼져 있어도 서버 자체는 정상이므로 항상 200입니다.

use axum::{extract::State, Json};
use serde_json::{json, Value};

use super::AppState;

/// `GET /health`: 서버 상태와 선택 기능의 활성 여부를 돌려줍니다.
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "generation_enabled": state.generator.is_some(),
        "trends_enabled": state.trends.is_enabled(),
        "active_sessions": state.store.len().await,
        "max_sessions": state.store.max_sessions(),
    }))
}
