//! # 애플리케이션 설정(Configuration) 모듈
//!
//! 환경변수에서 서버 설정값을 읽어오는 모듈입니다.
//! `.env` 파일이나 시스템 환경변수에서 값을 가져옵니다.
//!
//! 설정 항목:
//! - `GEMINI_API_KEY`: 텍스트 생성 API 키 (없으면 생성 기능만 꺼짐)
//! - `GEMINI_MODEL`, `GEMINI_BASE_URL`, `GENERATION_TIMEOUT_SECS`: 생성 서비스 연결
//! - `TRENDS_ENABLED`, `TRENDS_BASE_URL`: 검색 트렌드 조회
//! - `MAX_API_CALLS_PER_SESSION`, `MAX_SESSIONS`, `SESSION_IDLE_MINUTES`: 세션 한도와 정리 기준
//! - `USER_NAME`, `USER_FOLLOWERS`, `USER_YOGA_STYLE`, `USER_LIFESTYLE`: 새 세션의 기본 프로필
//! - `HOST`, `PORT`, `FRONTEND_DIST`: 서버 바인딩과 정적 파일
//!
//! ## 검증 규칙
//! - 숫자 항목은 음이 아닌 정수여야 하며, 값이 있는데 잘못되었으면 시작을 중단합니다.
//!   (`PORT`만 예외로, 잘못된 값이면 3000을 씁니다.)
//! - 분류값(요가 스타일, 라이프스타일)은 허용 목록에 없으면 경고 후 기본값을 씁니다.

use secrecy::SecretString;
use std::env;
use std::str::FromStr;

use crate::models::{Lifestyle, UserProfile, YogaStyle};
use crate::services::rate_limit::DEFAULT_MAX_CALLS;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-pro";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_TRENDS_BASE_URL: &str = "https://trends.google.com";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// 숫자여야 하는 항목에 숫자가 아닌 값(음수 포함)이 들어옴
    #[error("{key} must be a non-negative integer, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },
}

/// 애플리케이션 전체 설정을 담는 구조체
///
/// 서버 시작 시 환경변수에서 한 번 읽어온 후 `AppState`를 만드는 데 쓰입니다.
#[derive(Debug, Clone)]
pub struct Config {
    /// `SecretString`은 `Debug` 출력에서 값을 가립니다.
    pub gemini_api_key: Option<SecretString>,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub generation_timeout_secs: u64,
    pub trends_enabled: bool,
    pub trends_base_url: String,
    pub max_api_calls_per_session: u32,
    pub max_sessions: usize,
    /// 이 시간(분) 동안 요청이 없는 세션은 버려집니다.
    pub session_idle_minutes: u32,
    /// 새 세션이 시작할 때의 프로필
    pub default_profile: UserProfile,
    pub host: String,
    pub port: u16,
    pub frontend_dist: String,
}

impl Config {
    /// 환경변수에서 설정값을 읽어 Config 인스턴스를 생성합니다.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 키 → 값 조회 함수로 설정을 만듭니다. 테스트에서는 환경변수 대신 맵을 넘깁니다.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // 빈 문자열은 "설정 안 됨"으로 취급
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let text = |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_string());

        let gemini_api_key = get("GEMINI_API_KEY").map(SecretString::from);
        if gemini_api_key.is_none() {
            tracing::warn!("GEMINI_API_KEY is not set, content generation is disabled");
        }

        let yoga_style = match get("USER_YOGA_STYLE") {
            Some(value) => YogaStyle::from_key(&value).unwrap_or_else(|| {
                tracing::warn!(
                    "Unknown USER_YOGA_STYLE {:?}, using {}",
                    value,
                    YogaStyle::default().label()
                );
                YogaStyle::default()
            }),
            None => YogaStyle::default(),
        };

        let lifestyle = match get("USER_LIFESTYLE") {
            Some(value) => Lifestyle::from_key(&value).unwrap_or_else(|| {
                tracing::warn!(
                    "Unknown USER_LIFESTYLE {:?}, using {}",
                    value,
                    Lifestyle::default().key()
                );
                Lifestyle::default()
            }),
            None => Lifestyle::default(),
        };

        let trends_enabled = match get("TRENDS_ENABLED") {
            Some(value) => parse_flag(&value).unwrap_or_else(|| {
                tracing::warn!("Unknown TRENDS_ENABLED {:?}, using true", value);
                true
            }),
            None => true,
        };

        Ok(Self {
            gemini_api_key,
            gemini_model: text("GEMINI_MODEL", DEFAULT_GEMINI_MODEL),
            gemini_base_url: text("GEMINI_BASE_URL", DEFAULT_GEMINI_BASE_URL),
            generation_timeout_secs: number(&get, "GENERATION_TIMEOUT_SECS", 120)?,
            trends_enabled,
            trends_base_url: text("TRENDS_BASE_URL", DEFAULT_TRENDS_BASE_URL),
            max_api_calls_per_session: number(
                &get,
                "MAX_API_CALLS_PER_SESSION",
                DEFAULT_MAX_CALLS,
            )?,
            max_sessions: number(&get, "MAX_SESSIONS", 1000)?,
            session_idle_minutes: number(&get, "SESSION_IDLE_MINUTES", 60)?,
            default_profile: UserProfile {
                name: text("USER_NAME", ""),
                followers: number(&get, "USER_FOLLOWERS", 260)?,
                yoga_style,
                lifestyle,
            },
            host: text("HOST", "0.0.0.0"),
            // 포트는 파싱 실패 시 기본값
            port: get("PORT")
                .and_then(|value| value.parse().ok())
                .unwrap_or(3000),
            frontend_dist: text("FRONTEND_DIST", "../frontend/dist"),
        })
    }
}

/// 값이 없으면 기본값, 있으면 반드시 음이 아닌 정수
fn number<T, G>(get: &G, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    G: Fn(&str) -> Option<String>,
{
    match get(key) {
        None => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { key, value }),
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();
        assert!(config.gemini_api_key.is_none());
        assert_eq!(config.gemini_model, "gemini-2.5-pro");
        assert_eq!(config.max_api_calls_per_session, 25);
        assert_eq!(config.max_sessions, 1000);
        assert_eq!(config.session_idle_minutes, 60);
        assert_eq!(config.default_profile.followers, 260);
        assert_eq!(config.default_profile.name, "");
        assert_eq!(config.default_profile.lifestyle, Lifestyle::FullTimeJob);
        assert!(config.trends_enabled);
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn invalid_numbers_abort() {
        for (key, value) in [
            ("USER_FOLLOWERS", "-5"),
            ("USER_FOLLOWERS", "lots"),
            ("MAX_API_CALLS_PER_SESSION", "2.5"),
            ("MAX_SESSIONS", "-1"),
            ("SESSION_IDLE_MINUTES", "soon"),
        ] {
            let err = config_from(&[(key, value)]).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidNumber { key: k, .. } if k == key));
        }
    }

    #[test]
    fn unknown_enums_fall_back() {
        let config = config_from(&[
            ("USER_YOGA_STYLE", "Hot Yoga"),
            ("USER_LIFESTYLE", "astronaut"),
            ("TRENDS_ENABLED", "maybe"),
        ])
        .unwrap();
        assert_eq!(config.default_profile.yoga_style, YogaStyle::GeneralVinyasa);
        assert_eq!(config.default_profile.lifestyle, Lifestyle::FullTimeJob);
        assert!(config.trends_enabled);
    }

    #[test]
    fn reads_explicit_values() {
        let config = config_from(&[
            ("GEMINI_API_KEY", "abc"),
            ("USER_NAME", " Sarah "),
            ("USER_FOLLOWERS", "800"),
            ("USER_LIFESTYLE", "stay_at_home"),
            ("USER_YOGA_STYLE", "desk yoga"),
            ("TRENDS_ENABLED", "off"),
            ("PORT", "not-a-port"),
        ])
        .unwrap();
        assert!(config.gemini_api_key.is_some());
        assert_eq!(config.default_profile.name, "Sarah");
        assert_eq!(config.default_profile.followers, 800);
        assert_eq!(config.default_profile.lifestyle, Lifestyle::StayAtHome);
        assert!(!config.trends_enabled);
        assert_eq!(config.port, 3000);
    }
}
