//! # 대시보드 세션 모델 정의
//!
//! 한 사용자의 대시보드 사용 기간(세션) 동안 유지되는 상태와,
//! 세션 관련 API의 요청/응답 구조체들을 정의합니다.
//!
//! ## 세션 흐름
//! 1. `POST /session`으로 세션 시작 → 설정의 기본 프로필, 호출 횟수 0, 1주차
//! 2. 프로필 수정, 주차 선택, 콘텐츠 생성 등으로 상태가 바뀜
//! 3. `DELETE /session`으로 종료하면 상태는 버려짐 (영구 저장 없음)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ContentIdea, Lifestyle, TrendTopic, TrendingContent, UserProfile, YogaStyle};
use crate::services::prompt::{ContentType, IdeaCategory, Mood};
use crate::services::rate_limit::RateLimiter;

/// 세션 하나가 독점하는 상태
///
/// 여러 세션이 이 값을 공유하지 않습니다. 저장소(`store::SessionStore`)가
/// 세션마다 `Arc<Mutex<SessionState>>`를 하나씩 만들어 격리합니다.
#[derive(Debug, Clone, Serialize)]
pub struct SessionState {
    /// 세션 식별자 (UUIDv7)
    pub id: String,
    pub created_at: DateTime<Utc>,
    /// 마지막 요청 시각. 오래 쓰이지 않은 세션은 저장소가 버립니다.
    pub last_seen: DateTime<Utc>,
    pub profile: UserProfile,
    /// 세션당 외부 생성 호출 한도
    pub limiter: RateLimiter,
    /// 현재 선택된 주차 (1~4)
    pub current_week: u8,
    /// 마지막으로 생성된 아이디어 텍스트 (내보내기 대상)
    pub generated_content: Option<String>,
    /// `generated_content`를 만들 때 사용한 주제
    pub generated_topic: Option<String>,
    /// 마지막 상승 토픽 조회 결과
    pub cached_trend_results: Option<Vec<TrendTopic>>,
    /// 마지막으로 불러온 샘플 트렌딩 콘텐츠
    pub trending_samples: Option<Vec<TrendingContent>>,
}

impl SessionState {
    pub fn new(id: String, profile: UserProfile, max_calls: u32) -> Self {
        let now = Utc::now();
        Self {
            id,
            created_at: now,
            last_seen: now,
            profile,
            limiter: RateLimiter::new(max_calls),
            current_week: 1,
            generated_content: None,
            generated_topic: None,
            cached_trend_results: None,
            trending_samples: None,
        }
    }

    pub fn touch(&mut self) {
        self.last_seen = Utc::now();
    }
}

/// `GET /session` 응답
#[derive(Debug, Serialize)]
pub struct SessionSnapshot {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub profile: UserProfile,
    pub current_week: u8,
    pub api_call_count: u32,
    pub max_api_calls: u32,
    pub remaining_calls: u32,
    pub has_generated_content: bool,
    /// 설정 문제 등 계속 보여줘야 하는 안내 문구
    pub notices: Vec<String>,
}

impl SessionSnapshot {
    pub fn from_state(state: &SessionState, notices: Vec<String>) -> Self {
        Self {
            id: state.id.clone(),
            created_at: state.created_at,
            profile: state.profile.clone(),
            current_week: state.current_week,
            api_call_count: state.limiter.count(),
            max_api_calls: state.limiter.max(),
            remaining_calls: state.limiter.remaining(),
            has_generated_content: state.generated_content.is_some(),
            notices,
        }
    }
}

/// 프로필 수정 요청: `PUT /session/profile`
///
/// 분류값은 문자열로 받아 알 수 없는 값이면 기본값으로 대체합니다.
#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub name: String,
    pub followers: u32,
    pub yoga_style: Option<String>,
    pub lifestyle: Option<String>,
}

impl UpdateProfileRequest {
    pub fn into_profile(self) -> UserProfile {
        UserProfile {
            name: self.name.trim().to_string(),
            followers: self.followers,
            yoga_style: self
                .yoga_style
                .as_deref()
                .map(YogaStyle::parse_or_default)
                .unwrap_or_default(),
            lifestyle: self
                .lifestyle
                .as_deref()
                .map(Lifestyle::parse_or_default)
                .unwrap_or_default(),
        }
    }
}

/// 주차 선택 요청: `PUT /session/week`
#[derive(Debug, Deserialize)]
pub struct SelectWeekRequest {
    pub week: u8,
}

/// 아이디어 생성 요청: `POST /session/ideas`
#[derive(Debug, Deserialize)]
pub struct GenerateIdeasRequest {
    pub category: IdeaCategory,
    /// `category`가 `custom`일 때만 사용
    pub custom_topic: Option<String>,
    /// 3~8, 없으면 5
    pub count: Option<u8>,
}

/// 캡션 생성 요청: `POST /session/caption`
#[derive(Debug, Deserialize)]
pub struct GenerateCaptionRequest {
    pub topic: String,
    #[serde(default)]
    pub mood: Mood,
    #[serde(default)]
    pub content_type: ContentType,
}

/// 트렌딩 샘플 기반 아이디어 생성 요청: `POST /session/viral-ideas`
#[derive(Debug, Deserialize)]
pub struct GenerateViralIdeasRequest {
    pub sub_niche: String,
}

/// 생성 결과
///
/// 외부 서비스 실패는 HTTP 에러가 아니라 `ok: false`와 함께
/// `content`에 에러 문자열을 담아 돌려줍니다.
#[derive(Debug, Serialize)]
pub struct GenerationResponse {
    pub ok: bool,
    pub content: String,
    pub remaining_calls: u32,
}

/// 대시보드 요약: `GET /session/dashboard`
#[derive(Debug, Serialize)]
pub struct Dashboard {
    pub greeting: String,
    pub followers: u32,
    /// 다음 마일스톤 목표. 모두 달성했으면 `None`
    pub next_goal: Option<u32>,
    pub current_week: u8,
    pub week_theme: &'static str,
    pub posts_per_week: u8,
    pub quick_ideas: &'static [ContentIdea],
    pub content_todo: &'static [&'static str],
    pub engagement_todo: &'static [&'static str],
    pub remaining_calls: u32,
    /// 매번 바뀌는 응원 문구
    pub encouragement: &'static str,
    pub notices: Vec<String>,
}

/// 상승 검색어 조회 쿼리: `GET /session/trends?keyword=`
#[derive(Debug, Deserialize)]
pub struct TrendsQuery {
    pub keyword: Option<String>,
}

/// 상승 검색어 조회 결과
#[derive(Debug, Serialize)]
pub struct TrendsResponse {
    pub keyword: String,
    pub enabled: bool,
    pub topics: Vec<TrendTopic>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_starts_at_defaults() {
        let state = SessionState::new("s1".into(), UserProfile::default(), 25);
        assert_eq!(state.current_week, 1);
        assert_eq!(state.limiter.count(), 0);
        assert_eq!(state.limiter.remaining(), 25);
        assert!(state.generated_content.is_none());
        assert!(state.cached_trend_results.is_none());
    }

    #[test]
    fn profile_update_falls_back_on_unknown_enums() {
        let req = UpdateProfileRequest {
            name: "  Sarah ".into(),
            followers: 800,
            yoga_style: Some("hot yoga".into()),
            lifestyle: Some("Stay-at-home parent".into()),
        };
        let profile = req.into_profile();
        assert_eq!(profile.name, "Sarah");
        assert_eq!(profile.yoga_style, YogaStyle::GeneralVinyasa);
        assert_eq!(profile.lifestyle, Lifestyle::StayAtHome);
    }
}
