//! # YogaGlow 웹 서버 진입점
//!
//! 요가 강사의 인스타그램 콘텐츠 계획을 돕는 대시보드 백엔드입니다.
//!
//! 이 파일이 수행하는 작업:
//! 1. 환경변수(.env) 로딩
//! 2. 로깅(tracing) 초기화
//! 3. 설정 검증 (잘못된 숫자 설정이면 여기서 종료)
//! 4. 텍스트 생성 클라이언트와 트렌드 조회기 준비 (설정이 없으면 비활성)
//! 5. 세션 저장소와 유휴 세션 정리 작업 시작
//! 6. API 라우터 설정
//! 7. HTTP 서버 시작

mod config;
mod error;
mod middleware;
mod models;
mod routes;
mod services;
mod store;

use anyhow::Result;
use axum::{
    routing::{get, post, put},
    Router,
};
use config::Config;
use routes::*;
use services::{
    generation::{GeminiBackend, GenerationClient},
    trends::{GoogleTrendsSource, TrendLookup},
};
use std::{path::Path, sync::Arc, time::Duration};
use store::SessionStore;
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// 트렌드 조회는 부가 기능이라 생성 요청보다 짧게 기다립니다.
const TRENDS_TIMEOUT: Duration = Duration::from_secs(15);

/// 오래 쓰이지 않은 세션을 정리하는 주기
const SESSION_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() -> Result<()> {
    // .env 파일이 없어도 에러 없이 넘어갑니다.
    dotenvy::dotenv().ok();

    // RUST_LOG가 없으면 yogaglow, tower_http, axum 모듈을 debug 레벨로
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "yogaglow=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    tracing::info!("Starting YogaGlow server on {}:{}", config.host, config.port);

    // ── 텍스트 생성 클라이언트 ──
    // API 키가 없으면 None: 생성 요청은 503, 나머지 기능은 그대로 동작
    let generator = match &config.gemini_api_key {
        Some(key) => {
            let backend = GeminiBackend::new(
                key.clone(),
                config.gemini_model.clone(),
                config.gemini_base_url.clone(),
                Duration::from_secs(config.generation_timeout_secs),
            )?;
            tracing::info!("Content generation enabled (model: {})", config.gemini_model);
            Some(GenerationClient::new(Arc::new(backend)))
        }
        None => None,
    };

    // ── 트렌드 조회기 ──
    let trends = if config.trends_enabled {
        let source = GoogleTrendsSource::new(config.trends_base_url.clone(), TRENDS_TIMEOUT)?;
        TrendLookup::new(Arc::new(source))
    } else {
        tracing::info!("Trend lookup disabled");
        TrendLookup::disabled()
    };

    let store = SessionStore::new(
        config.max_sessions,
        chrono::Duration::minutes(i64::from(config.session_idle_minutes)),
    );

    // ── 세션 정리 작업 ──
    // 세션을 끝내지 않고 떠난 사용자의 자리를 주기적으로 비웁니다.
    let sweeper = store.clone();
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(SESSION_SWEEP_INTERVAL);
        loop {
            ticker.tick().await;
            sweeper.evict_idle(chrono::Utc::now()).await;
        }
    });

    let state = AppState {
        store,
        generator,
        trends,
        default_profile: config.default_profile.clone(),
        max_api_calls: config.max_api_calls_per_session,
    };

    // 세션 관련 라우트 (x-session-id 헤더 필요, POST /session 제외)
    let session_routes = Router::new()
        .route(
            "/session",
            get(get_session).post(create_session).delete(end_session),
        )
        .route("/session/profile", put(update_profile))
        .route("/session/week", put(select_week))
        .route("/session/dashboard", get(dashboard))
        .route("/session/milestones", get(session_milestones))
        .route("/session/schedule", get(session_schedule))
        .route("/session/hashtags", get(session_hashtags))
        .route("/session/ideas", post(generate_ideas))
        .route("/session/caption", post(generate_caption))
        .route("/session/trending", post(refresh_trending))
        .route("/session/viral-ideas", post(generate_viral_ideas))
        .route("/session/trends", get(session_trends))
        .route("/session/export", get(export_ideas));

    // 세션 없이 볼 수 있는 정적 콘텐츠
    // axum 0.8의 경로 파라미터 문법은 `{name}`입니다.
    let catalog_routes = Router::new()
        .route("/catalog/weeks/{week}", get(catalog_week))
        .route("/catalog/milestones", get(catalog_milestones))
        .route("/catalog/schedules/{lifestyle}", get(catalog_schedule))
        .route("/catalog/tactics", get(catalog_tactics))
        .route("/catalog/formats", get(catalog_formats))
        .route("/catalog/hashtags", get(catalog_hashtags))
        .route("/catalog/trending", get(catalog_trending))
        .route("/catalog/calendar", get(catalog_calendar))
        .route("/catalog/hooks", get(catalog_hooks));

    let api_routes = Router::new()
        .merge(session_routes)
        .merge(catalog_routes)
        .route("/health", get(health_check))
        .with_state(state);

    // 개발 편의를 위해 모든 출처 허용. x-session-id 같은 커스텀 헤더도 통과시킵니다.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // 빌드된 프론트엔드가 있으면 같은 서버에서 서빙 (SPA라서 없는 경로는 index.html)
    let frontend_dist = Path::new(&config.frontend_dist);
    let app = if frontend_dist.exists() {
        tracing::info!("Serving frontend static files from {}", config.frontend_dist);

        let serve_dir = ServeDir::new(frontend_dist)
            .not_found_service(ServeFile::new(frontend_dist.join("index.html")));

        Router::new()
            .nest("/api/v1", api_routes)
            .fallback_service(serve_dir)
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    } else {
        tracing::warn!("Frontend dist directory not found, serving API only");

        Router::new()
            .nest("/api/v1", api_routes)
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    };

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
