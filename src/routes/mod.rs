//! # 라우트 핸들러 모듈
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 모아둔 모듈입니다.
//! Axum에서 핸들러는 HTTP 요청을 받아 응답을 반환하는 async 함수입니다.
//!
//! 각 하위 모듈:
//! - `catalog`: 세션 없이 조회하는 정적 콘텐츠
//! - `generate`: 텍스트 생성 (아이디어, 캡션, 트렌딩 기반 아이디어)
//! - `health`: 서버 상태 확인 (헬스체크)
//! - `sessions`: 세션 시작/종료, 프로필, 주차, 대시보드, 내보내기
//! - `trends`: 샘플 트렌딩 콘텐츠와 상승 검색어

pub mod catalog;
pub mod generate;
pub mod health;
pub mod sessions;
pub mod trends;

// 각 모듈의 핸들러 함수들을 재공개하여
// main.rs에서 `routes::create_session`처럼 바로 접근 가능하게 합니다.
pub use catalog::*;
pub use generate::*;
pub use health::*;
pub use sessions::*;
pub use trends::*;

use crate::models::UserProfile;
use crate::services::{generation::GenerationClient, trends::TrendLookup};
use crate::store::SessionStore;

/// 생성 기능이 꺼져 있을 때 세션 화면에 계속 띄우는 안내
pub const GENERATION_DISABLED_NOTICE: &str =
    "Content generation is disabled because GEMINI_API_KEY is not configured. Catalog features still work.";

/// 애플리케이션 공유 상태
///
/// 모든 요청 핸들러가 `State(state): State<AppState>`로 접근합니다.
/// 내부 필드가 모두 `Arc` 기반이라 clone해도 같은 저장소/클라이언트를 가리킵니다.
#[derive(Clone)]
pub struct AppState {
    pub store: SessionStore,
    /// API 키가 없으면 `None`
    pub generator: Option<GenerationClient>,
    pub trends: TrendLookup,
    /// 새 세션의 기본 프로필
    pub default_profile: UserProfile,
    pub max_api_calls: u32,
}

impl AppState {
    /// 세션 화면에 띄울 안내 문구
    pub fn notices(&self) -> Vec<String> {
        if self.generator.is_some() {
            Vec::new()
        } else {
            vec![GENERATION_DISABLED_NOTICE.to_string()]
        }
    }

    #[cfg(test)]
    pub fn for_tests(
        backend: Option<std::sync::Arc<dyn crate::services::generation::GenerationBackend>>,
    ) -> Self {
        Self {
            store: SessionStore::new(16, chrono::Duration::minutes(60)),
            generator: backend.map(GenerationClient::new),
            trends: TrendLookup::disabled(),
            default_profile: UserProfile::default(),
            max_api_calls: crate::services::rate_limit::DEFAULT_MAX_CALLS,
        }
    }
}
