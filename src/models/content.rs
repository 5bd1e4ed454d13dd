//! # 콘텐츠 카탈로그 모델 정의
//!
//! 정적으로 작성된 콘텐츠 아이디어, 포맷, 해시태그 전략, 포스팅 일정,
//! 성장 마일스톤, 참여(engagement) 전략을 표현하는 구조체들입니다.
//!
//! 카탈로그 데이터는 모두 프로그램에 내장된 `'static` 값이므로
//! 문자열 필드가 `String`이 아니라 `&'static str`입니다.
//! 응답으로만 나가므로 `Serialize`만 derive합니다.

use serde::Serialize;

use super::Lifestyle;

/// 하나의 콘텐츠 아이디어 (릴스/스토리 한 편)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentIdea {
    pub title: &'static str,
    /// 첫 3초에 시청자를 붙잡는 문장
    pub hook: &'static str,
    /// `type`은 Rust 예약어이므로 필드 이름은 `kind`, JSON 키는 `type`
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// 줄바꿈(`\n`)으로 구분된 촬영 단계
    pub script: &'static str,
    pub duration: &'static str,
    pub difficulty: &'static str,
    pub equipment: &'static str,
    pub best_time: &'static str,
    pub hashtags: &'static [&'static str],
}

/// 주차별 콘텐츠 계획 (1~4주차)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyPlan {
    pub week: u8,
    pub theme: &'static str,
    pub focus: &'static str,
    pub ideas: &'static [ContentIdea],
}

/// 검증된 콘텐츠 포맷 템플릿
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentFormat {
    pub name: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
    pub difficulty: &'static str,
    pub viral_potential: &'static str,
}

/// 팔로워 성장 마일스톤 한 단계
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Milestone {
    pub target: u32,
    pub timeframe: &'static str,
    pub what_changes: &'static str,
    pub celebration: &'static str,
    pub unlock: &'static str,
}

/// 현재 팔로워 수와 고정된 마일스톤 사다리
///
/// 마일스톤 목록은 `current`와 무관하게 항상 같습니다.
/// 달성 여부 계산은 이 구조체의 메서드가 담당합니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrowthMilestones {
    pub current: u32,
    pub milestones: &'static [Milestone],
    pub remember: &'static str,
}

impl GrowthMilestones {
    /// 현재 팔로워 수가 목표 이상이면 달성
    pub fn is_achieved(&self, milestone: &Milestone) -> bool {
        self.current >= milestone.target
    }

    /// 아직 달성하지 못한 첫 번째 마일스톤
    pub fn next_milestone(&self) -> Option<&'static Milestone> {
        self.milestones.iter().find(|m| m.target > self.current)
    }

    /// 다음 목표까지의 진행률 (0.0 ~ 100.0). 모든 목표를 달성했으면 100.
    pub fn percent_to_next(&self) -> f64 {
        match self.next_milestone() {
            Some(next) => (f64::from(self.current) / f64::from(next.target) * 100.0).min(100.0),
            None => 100.0,
        }
    }

    /// 마일스톤마다 달성/다음 목표 여부를 붙인 진행 현황
    pub fn progress(&self) -> GrowthProgress {
        let next_target = self.next_milestone().map(|m| m.target);
        GrowthProgress {
            current: self.current,
            next_target,
            percent_to_next: self.percent_to_next(),
            milestones: self
                .milestones
                .iter()
                .map(|milestone| MilestoneProgress {
                    milestone,
                    achieved: self.is_achieved(milestone),
                    is_next: Some(milestone.target) == next_target,
                })
                .collect(),
            remember: self.remember,
        }
    }
}

/// 마일스톤 하나의 진행 상태
#[derive(Debug, Clone, Serialize)]
pub struct MilestoneProgress {
    #[serde(flatten)]
    pub milestone: &'static Milestone,
    pub achieved: bool,
    pub is_next: bool,
}

/// 성장 로드맵 화면에 필요한 전체 진행 현황
#[derive(Debug, Clone, Serialize)]
pub struct GrowthProgress {
    pub current: u32,
    pub next_target: Option<u32>,
    pub percent_to_next: f64,
    pub milestones: Vec<MilestoneProgress>,
    pub remember: &'static str,
}

/// 요일별 포스팅 항목
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleEntry {
    pub day: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub time: &'static str,
    pub note: &'static str,
}

/// 생활 방식별 현실적인 포스팅 일정 (월요일~일요일)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostingSchedule {
    pub lifestyle: Lifestyle,
    pub name: &'static str,
    pub posts_per_week: u8,
    pub reels_per_week: u8,
    pub stories_per_day: &'static str,
    pub days: [ScheduleEntry; 7],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tip: Option<&'static str>,
}

/// 참여(engagement) 전략
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngagementTactic {
    pub tactic: &'static str,
    pub description: &'static str,
    pub time: &'static str,
    pub impact: &'static str,
}

/// 팔로워 수 구간. 구간은 겹치지 않습니다: `[0, 500)`, `[500, 1000)`, `[1000, ∞)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HashtagBand {
    MicroNiche,
    GrowthExpansion,
    AuthorityBuilding,
}

/// 해시태그 크기 분류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BucketKind {
    SmallNiche,
    MediumNiche,
    LargeBroad,
    MegaDiscovery,
    Branded,
    Trending,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HashtagBucket {
    pub kind: BucketKind,
    pub count: u8,
    pub range: &'static str,
    pub examples: &'static [&'static str],
}

/// 계정 규모에 맞춘 해시태그 전략
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HashtagStrategy {
    pub band: HashtagBand,
    pub strategy: &'static str,
    pub total_hashtags: &'static str,
    pub mix: &'static [HashtagBucket],
    pub tip: &'static str,
}

/// 트렌딩 콘텐츠 예시 한 건
///
/// **실측 데이터가 아닙니다.** 고정된 템플릿에 템플릿별 범위 안에서
/// 무작위로 뽑은 지표를 붙인 샘플입니다. `sample` 필드는 항상 `true`이며,
/// 화면과 테스트 모두 이를 분석 결과로 취급하면 안 됩니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendingContent {
    pub platform: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub title: &'static str,
    pub hook: &'static str,
    pub views: u32,
    pub likes: u32,
    pub comments: u32,
    pub shares: u32,
    pub saves: u32,
    pub engagement_rate: f64,
    pub duration_secs: u32,
    pub posted_days_ago: u32,
    pub viral_score: u8,
    pub content_pattern: &'static str,
    pub why_viral: &'static str,
    pub creator_follower_count: u32,
    pub creator_type: &'static str,
    pub sample: bool,
}

/// 한 달치 콘텐츠 목표
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyGoals {
    pub reels: u32,
    pub stories: u32,
    pub lives: u32,
    pub collaborations: u32,
    pub comments_given: u32,
}

/// 월간 콘텐츠 캘린더 템플릿 (4주 계획 묶음)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentCalendar {
    pub month: String,
    pub theme: &'static str,
    pub weekly_rhythm: [&'static WeeklyPlan; 4],
    pub monthly_goals: MonthlyGoals,
    pub content_pillars: &'static [&'static str],
}
