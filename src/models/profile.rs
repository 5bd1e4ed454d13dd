//! # 사용자 프로필 모델
//!
//! 세션 동안 유지되는 요가 강사 프로필과 고정된 분류값(enum)을 정의합니다.
//!
//! 분류값은 두 가지 형태의 문자열을 모두 받아들입니다:
//! - 키(key): `full_time_job`, `desk_yoga` 처럼 snake_case
//! - 표시 이름(label): `Working full-time job`, `Desk Yoga` 처럼 화면에 보이는 이름
//!
//! 알 수 없는 값은 에러가 아니라 문서화된 기본값으로 대체됩니다.

use serde::{Deserialize, Serialize};

/// 요가 스타일(포커스)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YogaStyle {
    /// 기본값
    #[default]
    GeneralVinyasa,
    BeginnerFriendly,
    Flexibility,
    StressRelief,
    DeskYoga,
    YogaForSleep,
}

impl YogaStyle {
    pub const ALL: [YogaStyle; 6] = [
        YogaStyle::GeneralVinyasa,
        YogaStyle::BeginnerFriendly,
        YogaStyle::Flexibility,
        YogaStyle::StressRelief,
        YogaStyle::DeskYoga,
        YogaStyle::YogaForSleep,
    ];

    pub fn key(self) -> &'static str {
        match self {
            YogaStyle::GeneralVinyasa => "general_vinyasa",
            YogaStyle::BeginnerFriendly => "beginner_friendly",
            YogaStyle::Flexibility => "flexibility",
            YogaStyle::StressRelief => "stress_relief",
            YogaStyle::DeskYoga => "desk_yoga",
            YogaStyle::YogaForSleep => "yoga_for_sleep",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            YogaStyle::GeneralVinyasa => "General/Vinyasa",
            YogaStyle::BeginnerFriendly => "Beginner-Friendly",
            YogaStyle::Flexibility => "Flexibility",
            YogaStyle::StressRelief => "Stress Relief",
            YogaStyle::DeskYoga => "Desk Yoga",
            YogaStyle::YogaForSleep => "Yoga for Sleep",
        }
    }

    /// 키나 표시 이름으로 찾습니다 (대소문자 무시). 없으면 `None`.
    pub fn from_key(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL.into_iter().find(|style| {
            style.key().eq_ignore_ascii_case(value) || style.label().eq_ignore_ascii_case(value)
        })
    }

    /// 알 수 없는 값이면 기본값(`General/Vinyasa`)을 돌려줍니다.
    pub fn parse_or_default(value: &str) -> Self {
        Self::from_key(value).unwrap_or_default()
    }
}

/// 생활 방식: 현실적인 포스팅 일정을 고르는 기준입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lifestyle {
    /// 기본값
    #[default]
    FullTimeJob,
    StayAtHome,
    TeachingClasses,
    /// 전용 일정이 없어 `FullTimeJob` 일정을 씁니다.
    FullTimeCreator,
}

impl Lifestyle {
    pub const ALL: [Lifestyle; 4] = [
        Lifestyle::FullTimeJob,
        Lifestyle::StayAtHome,
        Lifestyle::TeachingClasses,
        Lifestyle::FullTimeCreator,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Lifestyle::FullTimeJob => "full_time_job",
            Lifestyle::StayAtHome => "stay_at_home",
            Lifestyle::TeachingClasses => "teaching_classes",
            Lifestyle::FullTimeCreator => "full_time_creator",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Lifestyle::FullTimeJob => "Working full-time job",
            Lifestyle::StayAtHome => "Stay-at-home parent",
            Lifestyle::TeachingClasses => "Teaching yoga classes",
            Lifestyle::FullTimeCreator => "Full-time creator",
        }
    }

    pub fn from_key(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL.into_iter().find(|lifestyle| {
            lifestyle.key().eq_ignore_ascii_case(value)
                || lifestyle.label().eq_ignore_ascii_case(value)
        })
    }

    /// 알 수 없는 값이면 기본값(`full_time_job`)을 돌려줍니다.
    pub fn parse_or_default(value: &str) -> Self {
        Self::from_key(value).unwrap_or_default()
    }
}

/// 세션 동안 유지되는 사용자 프로필
///
/// `followers`는 `u32`이므로 JSON으로 음수나 소수가 들어오면
/// 역직렬화 단계에서 거부됩니다 (Axum이 422를 반환).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// 표시 이름 (비어 있을 수 있음)
    #[serde(default)]
    pub name: String,
    /// 현재 팔로워 수
    pub followers: u32,
    #[serde(default)]
    pub yoga_style: YogaStyle,
    #[serde(default)]
    pub lifestyle: Lifestyle,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: String::new(),
            followers: 260,
            yoga_style: YogaStyle::default(),
            lifestyle: Lifestyle::default(),
        }
    }
}

impl UserProfile {
    /// 대시보드 인사말에 쓸 이름. 비어 있으면 `None`.
    pub fn display_name(&self) -> Option<&str> {
        Some(self.name.trim()).filter(|name| !name.is_empty())
    }
}
