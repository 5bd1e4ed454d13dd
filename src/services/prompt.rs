//! # 프롬프트 작성(Prompt Composer)
//!
//! 사용자 프로필, 카탈로그 데이터, 정제된 주제로 텍스트 생성 서비스에 보낼
//! 지시문을 만듭니다. 모두 결정적인 순수 문자열 조합입니다.
//!
//! 자유 입력에서 온 값은 `SanitizedText`로만 받습니다.
//! 이 타입은 `sanitizer` 모듈을 거쳐야만 만들 수 있으므로
//! 정제되지 않은 원본 입력이 프롬프트에 끼어들 수 없습니다.

use serde::{Deserialize, Serialize};

use super::sanitizer::SanitizedText;
use crate::models::{TrendingContent, UserProfile};

/// 아이디어 개수 범위
pub const MIN_IDEA_COUNT: u8 = 3;
pub const MAX_IDEA_COUNT: u8 = 8;
pub const DEFAULT_IDEA_COUNT: u8 = 5;

/// 캡션 분위기
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Professional,
    #[default]
    WarmAndFriendly,
    Playful,
    Peaceful,
    Motivating,
}

impl Mood {
    pub fn label(self) -> &'static str {
        match self {
            Mood::Professional => "Professional",
            Mood::WarmAndFriendly => "Warm & Friendly",
            Mood::Playful => "Playful",
            Mood::Peaceful => "Peaceful",
            Mood::Motivating => "Motivating",
        }
    }
}

/// 캡션을 붙일 게시물 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    #[default]
    Tutorial,
    Motivational,
    PersonalStory,
    QuickTip,
    BehindTheScenes,
}

impl ContentType {
    pub fn label(self) -> &'static str {
        match self {
            ContentType::Tutorial => "Tutorial",
            ContentType::Motivational => "Motivational",
            ContentType::PersonalStory => "Personal Story",
            ContentType::QuickTip => "Quick Tip",
            ContentType::BehindTheScenes => "Behind the Scenes",
        }
    }
}

/// 아이디어 생성 화면의 카테고리
///
/// `Custom`을 제외하면 코드에 박힌 서브 니치를 쓰므로 정제가 필요 없습니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdeaCategory {
    MorningYoga,
    StressRelief,
    DeskStretches,
    BedtimeYoga,
    Tips,
    BeginnerFlows,
    Custom,
}

impl IdeaCategory {
    /// 미리 정의된 서브 니치. `Custom`은 `None`.
    pub fn preset_niche(self) -> Option<&'static str> {
        match self {
            IdeaCategory::MorningYoga => Some("morning yoga"),
            IdeaCategory::StressRelief => Some("stress relief yoga"),
            IdeaCategory::DeskStretches => Some("desk yoga"),
            IdeaCategory::BedtimeYoga => Some("sleep yoga"),
            IdeaCategory::Tips => Some("yoga tips"),
            IdeaCategory::BeginnerFlows => Some("beginner yoga"),
            IdeaCategory::Custom => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            IdeaCategory::MorningYoga => "Morning Yoga",
            IdeaCategory::StressRelief => "Stress Relief",
            IdeaCategory::DeskStretches => "Desk Stretches",
            IdeaCategory::BedtimeYoga => "Bedtime Yoga",
            IdeaCategory::Tips => "Tips",
            IdeaCategory::BeginnerFlows => "Beginner Flows",
            IdeaCategory::Custom => "Custom",
        }
    }
}

/// 아이디어 생성 프롬프트
pub fn compose_idea_prompt(sub_niche: &SanitizedText, profile: &UserProfile, count: u8) -> String {
    format!(
        r#"You are a warm, supportive content coach helping a yoga instructor grow their Instagram.

**About this creator:**
- Current followers: ~{followers}
- Lifestyle: {lifestyle}
- Focus area: {sub_niche}

**Generate {count} content ideas that are:**
1. Achievable with just a smartphone
2. Require minimal editing
3. Can be filmed in 15-30 minutes
4. Authentic and connection-building

**For each idea provide:**

🎬 **Title**: (Catchy but genuine)
🪝 **Hook Script**: (First 3 seconds)
📝 **Full Script/Steps**: (Easy-to-follow)
⏱️ **Duration**: (Optimal length)
📱 **Filming Tips**: (Lighting, angles)
✨ **Why This Works**: (Simple explanation)
#️⃣ **Hashtags**: (5 hashtags)
🌟 **Difficulty**: Easy / Medium

Keep your tone warm, encouraging, and practical!"#,
        followers = profile.followers,
        lifestyle = profile.lifestyle.label(),
        sub_niche = sub_niche,
        count = count,
    )
}

/// 캡션 생성 프롬프트
pub fn compose_caption_prompt(topic: &SanitizedText, mood: Mood, content_type: ContentType) -> String {
    format!(
        "Write a {mood} Instagram caption for a yoga instructor about: {topic}. Type: {content_type}. 150-250 words, use 2-3 emojis, end with engagement question.",
        mood = mood.label().to_lowercase(),
        topic = topic,
        content_type = content_type.label(),
    )
}

/// 트렌딩 샘플을 요약해 초보 강사용 아이디어 5개를 요청하는 프롬프트
///
/// 샘플은 최대 5개까지만 사용합니다.
pub fn compose_viral_analysis_prompt(samples: &[TrendingContent], sub_niche: &SanitizedText) -> String {
    let summaries: Vec<String> = samples
        .iter()
        .take(5)
        .enumerate()
        .map(|(i, sample)| {
            format!(
                "\nVideo {index}:\n- Views: {views}\n- Engagement: {rate}%\n- Hook: {hook}\n- Format: {pattern}\n- Why it worked: {why}\n- Creator size: {creator}\n",
                index = i + 1,
                views = group_thousands(sample.views),
                rate = sample.engagement_rate,
                hook = sample.hook,
                pattern = sample.content_pattern,
                why = sample.why_viral,
                creator = sample.creator_type,
            )
        })
        .collect();

    format!(
        r#"You are a supportive content strategist helping a yoga instructor who is just starting their Instagram journey (around 100 followers).

Based on these viral yoga videos in the {sub_niche} niche:
{summaries}

Generate 5 BEGINNER-FRIENDLY content ideas that:
1. Can be filmed with just a phone (no fancy equipment)
2. Are doable for someone with limited time
3. Follow proven viral patterns but feel authentic
4. Will help build a genuine community

For each idea provide:
- 🎬 **Title**: Catchy but not clickbaity
- 🪝 **Hook (first 3 seconds)**: What you'll say/show to stop the scroll
- 📝 **Simple Script**: Step-by-step what to do (keep it simple!)
- ⏱️ **Duration**: How long the video should be
- 🎯 **Why This Works**: Brief explanation
- 📱 **Filming Tip**: One practical tip for shooting this
- #️⃣ **Hashtags**: 5 hashtags (mix of small and medium)

Keep the tone encouraging, warm, and practical. Remember: this person is juggling a lot and needs content ideas that feel achievable, not overwhelming.
"#,
        sub_niche = sub_niche,
        summaries = summaries.join("\n"),
    )
}

/// 123456 → "123,456"
fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
