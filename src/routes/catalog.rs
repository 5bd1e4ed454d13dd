//! # 카탈로그 조회 핸들러
//!
//! 세션 없이 볼 수 있는 정적 콘텐츠입니다. 모두 실패하지 않는 순수 조회이며,
//! 범위를 벗어난 값은 카탈로그의 기본값 규칙(1주차, 기본 라이프스타일 등)을 따릅니다.
//!
//! ## 엔드포인트
//! - `GET /api/v1/catalog/weeks/{week}`
//! - `GET /api/v1/catalog/milestones?followers=`
//! - `GET /api/v1/catalog/schedules/{lifestyle}`
//! - `GET /api/v1/catalog/tactics`
//! - `GET /api/v1/catalog/formats`
//! - `GET /api/v1/catalog/hashtags?followers=`
//! - `GET /api/v1/catalog/calendar?month=`
//! - `GET /api/v1/catalog/hooks`

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};

use super::AppState;
use crate::{models::*, services::catalog};

#[derive(Debug, Deserialize)]
pub struct FollowersQuery {
    pub followers: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct CalendarQuery {
    pub month: Option<String>,
}

/// 주차를 문자열로 받아 숫자가 아니거나(`-1`, `two`) 범위를 넘으면 1주차를 돌려줍니다.
pub async fn catalog_week(Path(week): Path<String>) -> Json<&'static WeeklyPlan> {
    let week = week.trim().parse::<u32>().unwrap_or(1);
    Json(catalog::weekly_plan(week))
}

/// 팔로워 수를 주지 않으면 설정의 기본 프로필 값을 씁니다.
pub async fn catalog_milestones(
    State(state): State<AppState>,
    Query(query): Query<FollowersQuery>,
) -> Json<GrowthProgress> {
    let followers = query.followers.unwrap_or(state.default_profile.followers);
    Json(catalog::growth_milestones(followers).progress())
}

pub async fn catalog_schedule(Path(lifestyle): Path<String>) -> Json<&'static PostingSchedule> {
    Json(catalog::posting_schedule_for_key(&lifestyle))
}

pub async fn catalog_tactics() -> Json<&'static [EngagementTactic]> {
    Json(catalog::engagement_tactics())
}

pub async fn catalog_formats() -> Json<&'static [ContentFormat]> {
    Json(catalog::content_formats())
}

pub async fn catalog_hashtags(
    State(state): State<AppState>,
    Query(query): Query<FollowersQuery>,
) -> Json<&'static HashtagStrategy> {
    let followers = query.followers.unwrap_or(state.default_profile.followers);
    Json(catalog::hashtag_strategy(followers))
}

/// 월 이름을 주지 않으면 이번 달 (예: "March")
pub async fn catalog_calendar(Query(query): Query<CalendarQuery>) -> Json<ContentCalendar> {
    let month = query
        .month
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| Utc::now().format("%B").to_string());
    Json(catalog::content_calendar(&month))
}

pub async fn catalog_hooks() -> Json<Value> {
    Json(json!({
        "hooks": catalog::content_hooks(),
        "categories": catalog::content_categories(),
    }))
}
