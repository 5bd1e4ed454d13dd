//! # 대시보드 세션 API 라우트 핸들러
//!
//! 세션 시작/조회/종료와, 세션 프로필을 기준으로 카탈로그를 골라 주는 핸들러들입니다.
//!
//! ## 엔드포인트 목록
//! | 메서드 | 경로 | 핸들러 | 설명 |
//! |--------|------|--------|------|
//! | POST | /api/v1/session | `create_session` | 새 세션 시작 |
//! | GET | /api/v1/session | `get_session` | 세션 요약 |
//! | DELETE | /api/v1/session | `end_session` | 세션 종료 |
//! | PUT | /api/v1/session/profile | `update_profile` | 프로필 교체 |
//! | PUT | /api/v1/session/week | `select_week` | 주차 선택 |
//! | GET | /api/v1/session/dashboard | `dashboard` | 대시보드 요약 |
//! | GET | /api/v1/session/milestones | `session_milestones` | 마일스톤 진행 |
//! | GET | /api/v1/session/schedule | `session_schedule` | 포스팅 일정 |
//! | GET | /api/v1/session/hashtags | `session_hashtags` | 해시태그 전략 |
//! | GET | /api/v1/session/export | `export_ideas` | 마지막 아이디어 HTML 다운로드 |
//!
//! `POST /session`을 제외한 모든 요청은 `x-session-id` 헤더가 필요합니다.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;

use super::AppState;
use crate::{
    error::AppError,
    middleware::CurrentSession,
    models::*,
    services::{catalog, export},
};

const CONTENT_TODO: [&str; 3] = [
    "Post 1 Reel",
    "Add 2-3 Stories",
    "Reply to comments within 1 hour",
];

const ENGAGEMENT_TODO: [&str; 3] = [
    "Comment on 10 yoga accounts",
    "Engage with 10 potential students",
    "Connect with 10 similar creators",
];

/// 새 세션을 시작합니다.
///
/// `POST /api/v1/session` → 201 + 세션 요약
///
/// 프로필은 설정의 기본값, 호출 횟수 0, 1주차로 시작합니다.
/// 응답의 `id`를 이후 요청의 `x-session-id` 헤더로 보내면 됩니다.
pub async fn create_session(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<SessionSnapshot>), AppError> {
    let session = state
        .store
        .create(state.default_profile.clone(), state.max_api_calls)
        .await?;
    let snapshot = SessionSnapshot::from_state(&*session.lock().await, state.notices());
    Ok((StatusCode::CREATED, Json(snapshot)))
}

/// `GET /api/v1/session`: 남은 호출 수와 안내 문구를 포함한 세션 요약
pub async fn get_session(
    State(state): State<AppState>,
    current: CurrentSession,
) -> Json<SessionSnapshot> {
    let session = current.session.lock().await;
    Json(SessionSnapshot::from_state(&session, state.notices()))
}

/// `DELETE /api/v1/session`: 세션 상태를 버립니다. 되돌릴 수 없습니다.
pub async fn end_session(State(state): State<AppState>, current: CurrentSession) -> StatusCode {
    state.store.remove(&current.id).await;
    StatusCode::NO_CONTENT
}

/// `PUT /api/v1/session/profile`: 프로필 전체를 교체합니다.
///
/// 모르는 요가 스타일/라이프스타일은 기본값으로 바뀝니다.
/// 팔로워 수가 음수이거나 숫자가 아니면 JSON 파싱 단계에서 거절됩니다.
pub async fn update_profile(
    current: CurrentSession,
    Json(req): Json<UpdateProfileRequest>,
) -> Json<UserProfile> {
    let mut session = current.session.lock().await;
    session.profile = req.into_profile();
    Json(session.profile.clone())
}

/// `PUT /api/v1/session/week` + `{ "week": 2 }`: 현재 주차를 바꾸고 그 주 계획을 돌려줍니다.
pub async fn select_week(
    current: CurrentSession,
    Json(req): Json<SelectWeekRequest>,
) -> Result<Json<&'static WeeklyPlan>, AppError> {
    if !(1..=4).contains(&req.week) {
        return Err(AppError::BadRequest(format!(
            "week must be between 1 and 4, got {}",
            req.week
        )));
    }

    let mut session = current.session.lock().await;
    session.current_week = req.week;
    Ok(Json(catalog::weekly_plan(u32::from(req.week))))
}

/// `GET /api/v1/session/dashboard`
pub async fn dashboard(State(state): State<AppState>, current: CurrentSession) -> Json<Dashboard> {
    let session = current.session.lock().await;
    let profile = &session.profile;
    let plan = catalog::weekly_plan(u32::from(session.current_week));
    let milestones = catalog::growth_milestones(profile.followers);

    Json(Dashboard {
        greeting: match profile.display_name() {
            Some(name) => format!("Welcome back, {name}! 🌸"),
            None => "Welcome back! 🌸".to_string(),
        },
        followers: profile.followers,
        next_goal: milestones.next_milestone().map(|m| m.target),
        current_week: session.current_week,
        week_theme: plan.theme,
        posts_per_week: catalog::posting_schedule(profile.lifestyle).posts_per_week,
        quick_ideas: &plan.ideas[..plan.ideas.len().min(3)],
        content_todo: &CONTENT_TODO,
        engagement_todo: &ENGAGEMENT_TODO,
        remaining_calls: session.limiter.remaining(),
        encouragement: catalog::encouragement(),
        notices: state.notices(),
    })
}

/// `GET /api/v1/session/milestones`: 프로필 팔로워 수 기준 마일스톤 진행 현황
pub async fn session_milestones(current: CurrentSession) -> Json<GrowthProgress> {
    let followers = current.session.lock().await.profile.followers;
    Json(catalog::growth_milestones(followers).progress())
}

/// `GET /api/v1/session/schedule`: 프로필 라이프스타일에 맞는 포스팅 일정
pub async fn session_schedule(current: CurrentSession) -> Json<&'static PostingSchedule> {
    let lifestyle = current.session.lock().await.profile.lifestyle;
    Json(catalog::posting_schedule(lifestyle))
}

/// `GET /api/v1/session/hashtags`: 프로필 팔로워 수에 맞는 해시태그 전략
pub async fn session_hashtags(current: CurrentSession) -> Json<&'static HashtagStrategy> {
    let followers = current.session.lock().await.profile.followers;
    Json(catalog::hashtag_strategy(followers))
}

/// `GET /api/v1/session/export`: 마지막으로 생성한 아이디어를 HTML 파일로 내려받습니다.
///
/// 아직 생성한 아이디어가 없으면 404.
pub async fn export_ideas(current: CurrentSession) -> Result<Response, AppError> {
    let session = current.session.lock().await;
    let content = session.generated_content.as_deref().ok_or(AppError::NotFound)?;
    let topic = session.generated_topic.as_deref().unwrap_or("yoga");

    let today = Utc::now().date_naive();
    let html = export::render_export(content, topic, today);
    let file_name = export::export_file_name(topic, today);

    Ok((
        [
            (header::CONTENT_TYPE, "text/html; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file_name),
            ),
        ],
        html,
    )
        .into_response())
}
