//! # 트렌드 라우트 핸들러
//!
//! ## 엔드포인트
//! - `GET  /api/v1/catalog/trending?sub_niche=&limit=` → 샘플 트렌딩 콘텐츠 (세션 불필요)
//! - `POST /api/v1/session/trending`                   → 샘플을 새로 뽑아 세션에 저장
//! - `GET  /api/v1/session/trends?keyword=`            → 상승 검색어 (세션에 캐시)
//!
//! 트렌딩 콘텐츠는 **실측이 아닌 샘플 데이터**라서 응답에 항상 `"sample": true`를 붙입니다.
//! 상승 검색어 조회는 실패해도 빈 목록을 돌려줄 뿐 에러 응답을 만들지 않습니다.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use super::{generate::DEFAULT_TRENDING_LIMIT, AppState};
use crate::{middleware::CurrentSession, models::*, services::catalog, services::sanitizer};

/// 상승 검색어 기본 키워드
pub const DEFAULT_TREND_KEYWORD: &str = "yoga poses";

#[derive(Debug, Deserialize)]
pub struct TrendingQuery {
    pub sub_niche: Option<String>,
    pub limit: Option<usize>,
}

fn trending_body(sub_niche: &str, items: &[TrendingContent]) -> Value {
    json!({
        "sample": true,
        "sub_niche": sub_niche,
        "angles": catalog::niche_angles(sub_niche),
        "items": items,
    })
}

/// `GET /catalog/trending`
pub async fn catalog_trending(Query(query): Query<TrendingQuery>) -> Json<Value> {
    let sub_niche = query.sub_niche.unwrap_or_else(|| "general".to_string());
    let limit = query.limit.unwrap_or(DEFAULT_TRENDING_LIMIT);
    let items = catalog::trending_content(&sub_niche, limit);
    Json(trending_body(&sub_niche, &items))
}

/// `POST /session/trending`: 화면의 "새로고침" 버튼. 이전 샘플을 덮어씁니다.
pub async fn refresh_trending(current: CurrentSession) -> Json<Value> {
    let items = catalog::trending_content("general", DEFAULT_TRENDING_LIMIT);
    let body = trending_body("general", &items);
    current.session.lock().await.trending_samples = Some(items);
    Json(body)
}

/// `GET /session/trends?keyword=yoga+poses`
///
/// 외부 조회 동안에는 세션을 잠그지 않고, 결과를 받은 뒤에만 캐시에 씁니다.
pub async fn session_trends(
    State(state): State<AppState>,
    current: CurrentSession,
    Query(query): Query<TrendsQuery>,
) -> Json<TrendsResponse> {
    let keyword = query
        .keyword
        .as_deref()
        .and_then(sanitizer::sanitize_topic)
        .map(|k| k.into_inner())
        .unwrap_or_else(|| DEFAULT_TREND_KEYWORD.to_string());

    let topics = state.trends.rising_topics(&keyword).await;
    current.session.lock().await.cached_trend_results = Some(topics.clone());

    Json(TrendsResponse {
        keyword,
        enabled: state.trends.is_enabled(),
        topics,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::trends::{TrendError, TrendLookup, TrendSource};
    use async_trait::async_trait;
    use std::sync::Arc;

    struct OneRising;

    #[async_trait]
    impl TrendSource for OneRising {
        async fn rising_queries(&self, keyword: &str) -> Result<Vec<RisingQuery>, TrendError> {
            Ok(vec![RisingQuery {
                query: format!("{keyword} for runners"),
                growth: TrendGrowth::Label("Breakout".into()),
            }])
        }
    }

    async fn session_in(state: &AppState) -> CurrentSession {
        let session = state.store.create(UserProfile::default(), 25).await.unwrap();
        let id = session.lock().await.id.clone();
        CurrentSession { id, session }
    }

    #[tokio::test]
    async fn catalog_trending_is_labelled_sample() {
        let Json(body) = catalog_trending(Query(TrendingQuery {
            sub_niche: Some("sleep".into()),
            limit: Some(2),
        }))
        .await;
        assert_eq!(body["sample"], true);
        assert_eq!(body["items"].as_array().unwrap().len(), 2);
        assert_eq!(body["angles"][0], "bedtime yoga");
    }

    #[tokio::test]
    async fn refresh_stores_samples_in_session() {
        let state = AppState::for_tests(None);
        let current = session_in(&state).await;
        refresh_trending(current.clone()).await;
        let session = current.session.lock().await;
        assert_eq!(
            session.trending_samples.as_ref().map(Vec::len),
            Some(DEFAULT_TRENDING_LIMIT)
        );
    }

    #[tokio::test]
    async fn disabled_lookup_caches_empty_result() {
        let state = AppState::for_tests(None);
        let current = session_in(&state).await;
        let Json(res) = session_trends(
            State(state.clone()),
            current.clone(),
            Query(TrendsQuery { keyword: None }),
        )
        .await;
        assert_eq!(res.keyword, DEFAULT_TREND_KEYWORD);
        assert!(!res.enabled);
        assert!(res.topics.is_empty());
        assert_eq!(
            current.session.lock().await.cached_trend_results,
            Some(Vec::new())
        );
    }

    #[tokio::test]
    async fn rising_topics_are_scored_and_cached() {
        let mut state = AppState::for_tests(None);
        state.trends = TrendLookup::new(Arc::new(OneRising));
        let current = session_in(&state).await;

        let Json(res) = session_trends(
            State(state.clone()),
            current.clone(),
            Query(TrendsQuery {
                keyword: Some("chair yoga".into()),
            }),
        )
        .await;
        assert_eq!(res.topics.len(), 1);
        assert_eq!(res.topics[0].topic, "chair yoga for runners");
        assert_eq!(res.topics[0].viral_potential, 95);
        assert!(current.session.lock().await.cached_trend_results.is_some());
    }
}
