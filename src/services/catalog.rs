//! # 콘텐츠 카탈로그
//!
//! 직접 작성한 정적 콘텐츠 표(table)와 그 조회 함수들입니다.
//! 모든 함수는 작은 입력값(주차, 팔로워 수, 생활 방식)에 대한 순수 함수이며
//! 실패하지 않습니다. 범위를 벗어난 입력은 기본값으로 대체됩니다.
//!
//! | 함수 | 범위 밖 입력 |
//! |------|--------------|
//! | `weekly_plan` | 1~4 이외 → 1주차 |
//! | `posting_schedule_for_key` | 모르는 키 → `full_time_job` |
//! | `niche_angles` | 모르는 서브 니치 → `general` |
//!
//! `trending_content`만 예외적으로 무작위 값을 사용합니다.
//! 이 값은 **실측이 아닌 샘플 데이터**입니다 (`TrendingContent::sample`).

use rand::Rng;

use crate::models::*;

// ── 주차별 콘텐츠 계획 ──

static WEEK_1_IDEAS: [ContentIdea; 3] = [
    ContentIdea {
        title: "Meet Your Yoga Guide",
        hook: "Hi! I'm [Name] and I help busy people find peace through yoga 🧘‍♀️",
        kind: "Introduction Reel",
        script: "1. Warm smile + wave\n2. Share your yoga journey (15 sec)\n3. What you'll share on this page\n4. Invite them to follow for daily calm",
        duration: "30-45 sec",
        difficulty: "Easy",
        equipment: "Phone + natural light",
        best_time: "Tuesday or Wednesday 7-9am",
        hashtags: &["#yogateacher", "#yogajourney", "#yogalife", "#yogainstructor", "#yogacommunity"],
    },
    ContentIdea {
        title: "Why I Started Teaching Yoga",
        hook: "3 years ago I couldn't touch my toes. Now I teach yoga.",
        kind: "Story Reel",
        script: "1. Hook showing you teaching\n2. Flashback to your beginning\n3. Your transformation moment\n4. How you want to help others",
        duration: "45-60 sec",
        difficulty: "Medium",
        equipment: "Phone + photos from past",
        best_time: "Sunday 6-8pm",
        hashtags: &["#yogastory", "#yogajourney", "#yogateacherlife", "#yogainspiration", "#yogamotivation"],
    },
    ContentIdea {
        title: "My Favorite Morning Pose",
        hook: "This one pose changed my mornings forever ☀️",
        kind: "Tutorial",
        script: "1. Show the pose beautifully\n2. Name it\n3. Quick 'why it works'\n4. Demo with cues\n5. Invite them to try",
        duration: "20-30 sec",
        difficulty: "Easy",
        equipment: "Yoga mat + phone",
        best_time: "Monday 6-8am",
        hashtags: &["#morningyoga", "#yogapose", "#yogaeveryday", "#morningroutine", "#yogaflow"],
    },
];

static WEEK_2_IDEAS: [ContentIdea; 3] = [
    ContentIdea {
        title: "Desk Worker's Relief",
        hook: "Your shoulders are carrying stress right now. Let's fix that.",
        kind: "Follow-Along",
        script: "1. Acknowledge the pain point\n2. 3 simple seated stretches\n3. Neck release\n4. Shoulder rolls\n5. Deep breath together",
        duration: "45-60 sec",
        difficulty: "Easy",
        equipment: "Chair (no mat needed!)",
        best_time: "Wednesday 12-2pm",
        hashtags: &["#deskyoga", "#officeyoga", "#stressrelief", "#shoulderpain", "#workfromhome"],
    },
    ContentIdea {
        title: "Can't Sleep? Try This",
        hook: "Do this in bed tonight. You'll thank me tomorrow.",
        kind: "Tutorial",
        script: "1. Cozy setup (dim lights)\n2. 3 gentle poses in bed\n3. Breathing technique\n4. Whisper 'goodnight'",
        duration: "40-50 sec",
        difficulty: "Easy",
        equipment: "Bed + soft lighting",
        best_time: "Thursday 8-10pm",
        hashtags: &["#sleepyoga", "#yogaforsleep", "#bedtimeyoga", "#insomnia", "#relaxingyoga"],
    },
    ContentIdea {
        title: "Back Pain SOS",
        hook: "If your lower back aches, stop what you're doing and try this",
        kind: "Problem-Solution",
        script: "1. Show common back pain stance\n2. Cat-cow sequence\n3. Child's pose\n4. Gentle twist\n5. 'How does that feel?'",
        duration: "50-60 sec",
        difficulty: "Easy",
        equipment: "Yoga mat + phone",
        best_time: "Friday 5-7pm",
        hashtags: &["#backpain", "#lowbackpain", "#yogaforbackpain", "#painrelief", "#gentleyoga"],
    },
];

static WEEK_3_IDEAS: [ContentIdea; 3] = [
    ContentIdea {
        title: "Yoga Myth Buster",
        hook: "No, you don't need to be flexible to do yoga. Here's why...",
        kind: "Educational",
        script: "1. State the myth\n2. Show why it's wrong\n3. Encouraging truth\n4. 'Drop a 🙋‍♀️ if you believed this'",
        duration: "30-40 sec",
        difficulty: "Easy",
        equipment: "Phone only",
        best_time: "Tuesday 7-9am",
        hashtags: &["#yogamyths", "#yogaforall", "#beginneryoga", "#yogafacts", "#yogaeverybody"],
    },
    ContentIdea {
        title: "This or That?",
        hook: "Morning yoga 🌅 or Evening yoga 🌙? Comment below!",
        kind: "Engagement",
        script: "1. Show both options\n2. Quick demo of each\n3. Share your preference\n4. Ask for theirs",
        duration: "25-35 sec",
        difficulty: "Easy",
        equipment: "Phone + mat",
        best_time: "Saturday 9-11am",
        hashtags: &["#thisorthat", "#yogapoll", "#yogacommunity", "#morningyoga", "#eveningyoga"],
    },
    ContentIdea {
        title: "Behind the Scenes",
        hook: "What actually happens before I film a yoga video...",
        kind: "Relatable/Funny",
        script: "1. The 'perfect' final shot\n2. Reality: messy room, retakes, dog interrupting\n3. Laugh at yourself\n4. 'We're all human'",
        duration: "30-45 sec",
        difficulty: "Easy",
        equipment: "Phone + bloopers",
        best_time: "Sunday 10am-12pm",
        hashtags: &["#yogabts", "#yogablooper", "#realyoga", "#yogahumor", "#behindthescenes"],
    },
];

static WEEK_4_IDEAS: [ContentIdea; 3] = [
    ContentIdea {
        title: "Pose Breakdown",
        hook: "You're doing Warrior II wrong. Here's the fix.",
        kind: "Educational",
        script: "1. Common mistake demo\n2. 'Here's what's happening'\n3. Correct alignment\n4. Pro tip\n5. 'Tag someone who needs this'",
        duration: "40-50 sec",
        difficulty: "Medium",
        equipment: "Mat + good angle",
        best_time: "Monday 6-8am",
        hashtags: &["#yogaalignment", "#yogacorrection", "#yogateachertips", "#yogabasics", "#properform"],
    },
    ContentIdea {
        title: "Breathwork 101",
        hook: "Breathe with me. Just 30 seconds. I promise you need this.",
        kind: "Follow-Along",
        script: "1. Soft voice intro\n2. Guide through 4-7-8 breath\n3. 3 rounds together\n4. 'How do you feel?'\n5. Save for later reminder",
        duration: "45-60 sec",
        difficulty: "Easy",
        equipment: "Phone + quiet space",
        best_time: "Wednesday 7-9pm",
        hashtags: &["#breathwork", "#pranayama", "#anxietyrelief", "#calmingbreath", "#478breathing"],
    },
    ContentIdea {
        title: "Beginner to Advanced",
        hook: "3 levels of downward dog. Which one are you?",
        kind: "Progression",
        script: "1. Beginner version (bent knees ok!)\n2. Intermediate\n3. Advanced variation\n4. 'All are valid. Where are you today?'",
        duration: "35-45 sec",
        difficulty: "Medium",
        equipment: "Mat + tripod",
        best_time: "Friday 4-6pm",
        hashtags: &["#yogaprogression", "#downwarddog", "#yogalevels", "#yogaforall", "#yogajourney"],
    },
];

static WEEKLY_PLANS: [WeeklyPlan; 4] = [
    WeeklyPlan {
        week: 1,
        theme: "Introduce Yourself",
        focus: "Let people know who you are and what you teach",
        ideas: &WEEK_1_IDEAS,
    },
    WeeklyPlan {
        week: 2,
        theme: "Solve a Problem",
        focus: "Address pain points your audience has",
        ideas: &WEEK_2_IDEAS,
    },
    WeeklyPlan {
        week: 3,
        theme: "Build Connection",
        focus: "Create content that encourages engagement",
        ideas: &WEEK_3_IDEAS,
    },
    WeeklyPlan {
        week: 4,
        theme: "Establish Expertise",
        focus: "Show your knowledge while staying approachable",
        ideas: &WEEK_4_IDEAS,
    },
];

/// 주차별 콘텐츠 계획. 1~4 이외의 값은 1주차 계획을 돌려줍니다.
pub fn weekly_plan(week: u32) -> &'static WeeklyPlan {
    match week {
        1..=4 => &WEEKLY_PLANS[(week - 1) as usize],
        _ => &WEEKLY_PLANS[0],
    }
}

// ── 콘텐츠 포맷 ──

static CONTENT_FORMATS: [ContentFormat; 8] = [
    ContentFormat {
        name: "Quick Tutorial",
        duration: "15-30 sec",
        description: "Single pose breakdown with alignment tips",
        difficulty: "Easy to create",
        viral_potential: "High",
    },
    ContentFormat {
        name: "Follow-Along Flow",
        duration: "30-60 sec",
        description: "Short sequence viewers can do immediately",
        difficulty: "Medium",
        viral_potential: "Very High",
    },
    ContentFormat {
        name: "Before/After",
        duration: "15-20 sec",
        description: "Flexibility journey or posture transformation",
        difficulty: "Easy",
        viral_potential: "High",
    },
    ContentFormat {
        name: "Myth Buster",
        duration: "20-40 sec",
        description: "Common yoga misconceptions debunked",
        difficulty: "Easy",
        viral_potential: "Medium-High",
    },
    ContentFormat {
        name: "Day in My Life",
        duration: "30-60 sec",
        description: "Morning routine featuring your practice",
        difficulty: "Medium",
        viral_potential: "High",
    },
    ContentFormat {
        name: "Pose Progression",
        duration: "20-45 sec",
        description: "Beginner → Advanced versions of a pose",
        difficulty: "Easy",
        viral_potential: "Very High",
    },
    ContentFormat {
        name: "Problem → Solution",
        duration: "30-45 sec",
        description: "Target specific pain point (back pain, stress, etc.)",
        difficulty: "Easy",
        viral_potential: "Very High",
    },
    ContentFormat {
        name: "Calming ASMR",
        duration: "15-30 sec",
        description: "Peaceful visuals with soothing audio",
        difficulty: "Easy",
        viral_potential: "Medium",
    },
];

pub fn content_formats() -> &'static [ContentFormat] {
    &CONTENT_FORMATS
}

// ── 훅(hook) 문구와 카테고리 ──

static CONTENT_HOOKS: [&str; 15] = [
    "Try this if your back hurts from sitting all day...",
    "The pose that changed my mornings ☀️",
    "POV: You finally found a yoga routine you'll stick to",
    "5 minutes is all you need 🧘‍♀️",
    "Stop scrolling and breathe with me...",
    "Your hip flexors will thank you later",
    "The stretch nobody taught you in gym class",
    "Unwind your day in 60 seconds",
    "Beginner-friendly flow (no equipment needed)",
    "This pose targets the stress you hold in your shoulders",
    "Watch till the end for the best stretch of your life",
    "Your body is asking for this right now",
    "The perfect wind-down before bed 🌙",
    "This one pose can change everything",
    "Repeat after me: I deserve this moment",
];

static CONTENT_CATEGORIES: [&str; 12] = [
    "Morning Flow",
    "Beginner Poses",
    "Flexibility",
    "Stress Relief",
    "Desk Yoga",
    "Yoga for Sleep",
    "Core Strength",
    "Back Pain Relief",
    "Quick Routines",
    "Meditation",
    "Breathwork",
    "Yoga Philosophy",
];

/// 검증된 훅 문구 목록
pub fn content_hooks() -> &'static [&'static str] {
    &CONTENT_HOOKS
}

/// 요가 콘텐츠 카테고리 목록
pub fn content_categories() -> &'static [&'static str] {
    &CONTENT_CATEGORIES
}

// ── 해시태그 전략 ──

static MICRO_NICHE_MIX: [HashtagBucket; 4] = [
    HashtagBucket {
        kind: BucketKind::SmallNiche,
        count: 10,
        range: "1K-50K posts",
        examples: &["#yogaathome", "#gentleyogaflow", "#beginneryogapractice", "#deskstretches", "#morningyogaflow"],
    },
    HashtagBucket {
        kind: BucketKind::MediumNiche,
        count: 8,
        range: "50K-500K posts",
        examples: &["#yogaforbeginners", "#yogaeverydamnday", "#yogatips", "#yogainspiration", "#yogalife"],
    },
    HashtagBucket {
        kind: BucketKind::LargeBroad,
        count: 5,
        range: "500K-2M posts",
        examples: &["#yoga", "#yogapractice", "#yogalove", "#instayoga", "#yogajourney"],
    },
    HashtagBucket {
        kind: BucketKind::MegaDiscovery,
        count: 2,
        range: "2M+ posts (for Explore)",
        examples: &["#wellness", "#selfcare"],
    },
];

static GROWTH_EXPANSION_MIX: [HashtagBucket; 4] = [
    HashtagBucket { kind: BucketKind::SmallNiche, count: 8, range: "5K-100K posts", examples: &[] },
    HashtagBucket { kind: BucketKind::MediumNiche, count: 10, range: "100K-500K posts", examples: &[] },
    HashtagBucket { kind: BucketKind::LargeBroad, count: 8, range: "500K-2M posts", examples: &[] },
    HashtagBucket { kind: BucketKind::MegaDiscovery, count: 4, range: "2M+ posts", examples: &[] },
];

static AUTHORITY_MIX: [HashtagBucket; 4] = [
    HashtagBucket { kind: BucketKind::Branded, count: 2, range: "Your own hashtags", examples: &[] },
    HashtagBucket { kind: BucketKind::MediumNiche, count: 8, range: "100K-1M posts", examples: &[] },
    HashtagBucket { kind: BucketKind::LargeBroad, count: 10, range: "1M+ posts", examples: &[] },
    HashtagBucket { kind: BucketKind::Trending, count: 5, range: "Current trending tags", examples: &[] },
];

static HASHTAG_STRATEGIES: [HashtagStrategy; 3] = [
    HashtagStrategy {
        band: HashtagBand::MicroNiche,
        strategy: "Micro-Niche Focus",
        total_hashtags: "20-25",
        mix: &MICRO_NICHE_MIX,
        tip: "Focus on smaller hashtags where you can actually rank! Big hashtags bury small accounts.",
    },
    HashtagStrategy {
        band: HashtagBand::GrowthExpansion,
        strategy: "Growth Expansion",
        total_hashtags: "20-30",
        mix: &GROWTH_EXPANSION_MIX,
        tip: "You can start competing in medium-sized hashtags now!",
    },
    HashtagStrategy {
        band: HashtagBand::AuthorityBuilding,
        strategy: "Authority Building",
        total_hashtags: "15-25",
        mix: &AUTHORITY_MIX,
        tip: "Time to create your own branded hashtag for community!",
    },
];

/// 팔로워 수 → 해시태그 구간. `<500`, `500..1000`, `>=1000`
pub fn hashtag_band(followers: u32) -> HashtagBand {
    match followers {
        0..=499 => HashtagBand::MicroNiche,
        500..=999 => HashtagBand::GrowthExpansion,
        _ => HashtagBand::AuthorityBuilding,
    }
}

pub fn hashtag_strategy(followers: u32) -> &'static HashtagStrategy {
    match hashtag_band(followers) {
        HashtagBand::MicroNiche => &HASHTAG_STRATEGIES[0],
        HashtagBand::GrowthExpansion => &HASHTAG_STRATEGIES[1],
        HashtagBand::AuthorityBuilding => &HASHTAG_STRATEGIES[2],
    }
}

// ── 포스팅 일정 ──

const fn entry(
    day: &'static str,
    kind: &'static str,
    time: &'static str,
    note: &'static str,
) -> ScheduleEntry {
    ScheduleEntry { day, kind, time, note }
}

static POSTING_SCHEDULES: [PostingSchedule; 3] = [
    PostingSchedule {
        lifestyle: Lifestyle::FullTimeJob,
        name: "Working Professional",
        posts_per_week: 3,
        reels_per_week: 2,
        stories_per_day: "1-2",
        days: [
            entry("Monday", "Story", "7:00 AM", "Share morning practice moment"),
            entry("Tuesday", "Reel", "6:30 AM", "Tutorial or tip"),
            entry("Wednesday", "Story", "12:30 PM", "Midday stretch reminder"),
            entry("Thursday", "Reel", "7:00 PM", "Follow-along flow"),
            entry("Friday", "Story", "5:30 PM", "Weekend yoga plans question"),
            entry("Saturday", "Reel", "9:00 AM", "Longer sequence or lifestyle"),
            entry("Sunday", "Rest", "-", "Batch film for next week"),
        ],
        tip: Some("Film 4-6 reels on Sunday. Edit throughout the week."),
    },
    PostingSchedule {
        lifestyle: Lifestyle::StayAtHome,
        name: "Flexible Schedule",
        posts_per_week: 5,
        reels_per_week: 4,
        stories_per_day: "3-5",
        days: [
            entry("Monday", "Reel", "7:00 AM", "Start week with energy"),
            entry("Tuesday", "Story", "Multiple", "Day in the life"),
            entry("Wednesday", "Reel", "12:00 PM", "Midweek motivation"),
            entry("Thursday", "Reel", "6:00 PM", "Educational content"),
            entry("Friday", "Story", "4:00 PM", "Weekend prep"),
            entry("Saturday", "Reel", "9:00 AM", "Community flow"),
            entry("Sunday", "Rest/Light", "-", "Plan & reflect"),
        ],
        tip: None,
    },
    PostingSchedule {
        lifestyle: Lifestyle::TeachingClasses,
        name: "Active Yoga Teacher",
        posts_per_week: 4,
        reels_per_week: 3,
        stories_per_day: "2-4",
        days: [
            entry("Monday", "Story", "Post-class", "Share class energy"),
            entry("Tuesday", "Reel", "11:00 AM", "Quick tip"),
            entry("Wednesday", "Story", "Throughout", "Teaching moments"),
            entry("Thursday", "Reel", "7:00 PM", "Student success story"),
            entry("Friday", "Reel", "6:00 AM", "Weekend class promo"),
            entry("Saturday", "Story", "Live moments", "Class atmosphere"),
            entry("Sunday", "Rest", "-", "Recharge & batch film"),
        ],
        tip: Some("Your real classes are content goldmines! (With student permission)"),
    },
];

/// 전용 일정이 없는 라이프스타일(`FullTimeCreator`)은 기본(`full_time_job`) 일정.
pub fn posting_schedule(lifestyle: Lifestyle) -> &'static PostingSchedule {
    match lifestyle {
        Lifestyle::FullTimeJob | Lifestyle::FullTimeCreator => &POSTING_SCHEDULES[0],
        Lifestyle::StayAtHome => &POSTING_SCHEDULES[1],
        Lifestyle::TeachingClasses => &POSTING_SCHEDULES[2],
    }
}

/// 문자열 키로 일정 조회. 모르는 키는 기본(`full_time_job`) 일정.
pub fn posting_schedule_for_key(key: &str) -> &'static PostingSchedule {
    posting_schedule(Lifestyle::parse_or_default(key))
}

// ── 참여 전략 ──

static ENGAGEMENT_TACTICS: [EngagementTactic; 6] = [
    EngagementTactic {
        tactic: "The 10-10-10 Rule",
        description: "Before posting: Engage with 10 accounts in your niche, 10 potential students, 10 similar-sized creators",
        time: "30 min before posting",
        impact: "High",
    },
    EngagementTactic {
        tactic: "Comment Back Within 1 Hour",
        description: "Reply to every comment in the first hour. This signals to Instagram your content is engaging.",
        time: "First 60 minutes",
        impact: "Very High",
    },
    EngagementTactic {
        tactic: "Save-Worthy Content",
        description: "Create content people want to come back to: sequences, tips they'll reference later",
        time: "Content planning",
        impact: "Very High",
    },
    EngagementTactic {
        tactic: "Story Engagement Stickers",
        description: "Use polls, questions, quizzes in stories. Example: 'Morning or evening practice?'",
        time: "Daily stories",
        impact: "High",
    },
    EngagementTactic {
        tactic: "Collaboration with Similar Accounts",
        description: "Find yoga accounts with 100-1000 followers for shoutout trades or joint lives",
        time: "Weekly outreach",
        impact: "High",
    },
    EngagementTactic {
        tactic: "Respond to DMs with Voice Notes",
        description: "Voice replies feel personal and build genuine connections with followers",
        time: "Daily",
        impact: "Medium-High",
    },
];

pub fn engagement_tactics() -> &'static [EngagementTactic] {
    &ENGAGEMENT_TACTICS
}

// ── 성장 마일스톤 ──

static MILESTONES: [Milestone; 6] = [
    Milestone {
        target: 250,
        timeframe: "4-6 weeks",
        what_changes: "You'll start seeing consistent engagement",
        celebration: "🎉 You've built your first community!",
        unlock: "Your hashtags start working better",
    },
    Milestone {
        target: 500,
        timeframe: "2-3 months",
        what_changes: "Reels start getting pushed to Explore more",
        celebration: "🎉 Halfway to 1K!",
        unlock: "Brands might start noticing you",
    },
    Milestone {
        target: 1000,
        timeframe: "4-6 months",
        what_changes: "You unlock Link in Stories!",
        celebration: "🎉 You're officially a micro-influencer!",
        unlock: "Link stickers, better analytics, collabs easier",
    },
    Milestone {
        target: 2500,
        timeframe: "6-9 months",
        what_changes: "Consistent viral potential",
        celebration: "🎉 You have a real audience!",
        unlock: "Can start thinking about monetization",
    },
    Milestone {
        target: 5000,
        timeframe: "9-12 months",
        what_changes: "Significant organic reach",
        celebration: "🎉 You're building a brand!",
        unlock: "Paid partnerships become viable",
    },
    Milestone {
        target: 10000,
        timeframe: "12-18 months",
        what_changes: "Authority status in niche",
        celebration: "🎉 10K Club! You made it!",
        unlock: "Swipe up (legacy), Creator Fund eligibility",
    },
];

const GROWTH_REMINDER: &str = "Growth isn't linear. Some weeks you'll gain 50 followers, others you'll lose 10. That's normal! Focus on serving your community, not the numbers.";

/// 고정된 마일스톤 사다리. 목표값은 오름차순입니다.
pub fn growth_milestones(current_followers: u32) -> GrowthMilestones {
    GrowthMilestones {
        current: current_followers,
        milestones: &MILESTONES,
        remember: GROWTH_REMINDER,
    }
}

static ENCOURAGEMENTS: [&str; 3] = [
    "Your next follower is looking for exactly what you teach 💫",
    "Every expert was once a beginner 🌱",
    "Your authenticity is your superpower ✨",
];

pub fn encouragements() -> &'static [&'static str] {
    &ENCOURAGEMENTS
}

/// 대시보드에 띄울 응원 문구 하나를 무작위로 고릅니다.
pub fn encouragement_with<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    let quotes = encouragements();
    quotes[rng.gen_range(0..quotes.len())]
}

pub fn encouragement() -> &'static str {
    encouragement_with(&mut rand::thread_rng())
}

// ── 트렌딩 콘텐츠 (샘플 데이터) ──

static NICHE_ANGLES: [(&str, [&str; 3]); 6] = [
    ("general", ["morning yoga", "beginner yoga", "stress relief yoga"]),
    ("beginners", ["yoga for beginners", "first yoga poses", "gentle yoga"]),
    ("flexibility", ["flexibility yoga", "hip opener yoga", "stretching yoga"]),
    ("stress", ["anxiety relief yoga", "calming yoga", "meditation yoga"]),
    ("desk_workers", ["desk yoga", "office yoga", "posture yoga"]),
    ("sleep", ["bedtime yoga", "sleep yoga", "relaxing yoga"]),
];

/// 서브 니치 → 검색 각도(angle). 모르는 서브 니치는 `general`.
pub fn niche_angles(sub_niche: &str) -> &'static [&'static str] {
    let key = sub_niche.trim();
    NICHE_ANGLES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(key))
        .map(|(_, angles)| &angles[..])
        .unwrap_or(&NICHE_ANGLES[0].1[..])
}

/// 샘플 템플릿 하나: 고정 필드 + 지표별 범위
struct TrendingTemplate {
    title: &'static str,
    hook: &'static str,
    views: (u32, u32),
    likes: (u32, u32),
    comments: (u32, u32),
    shares: (u32, u32),
    saves: (u32, u32),
    engagement_rate: (f64, f64),
    duration_secs: u32,
    posted_days_ago: (u32, u32),
    viral_score: (u8, u8),
    content_pattern: &'static str,
    why_viral: &'static str,
    creator_follower_count: (u32, u32),
    creator_type: &'static str,
}

static TRENDING_TEMPLATES: [TrendingTemplate; 5] = [
    TrendingTemplate {
        title: "Morning Stretch Routine",
        hook: "Try this if your back hurts from sitting all day...",
        views: (45_000, 180_000),
        likes: (3_500, 15_000),
        comments: (120, 800),
        shares: (800, 3_500),
        saves: (2_000, 8_000),
        engagement_rate: (8.5, 18.0),
        duration_secs: 28,
        posted_days_ago: (1, 7),
        viral_score: (72, 92),
        content_pattern: "Problem → Solution",
        why_viral: "Addresses universal pain point + actionable solution",
        creator_follower_count: (800, 15_000),
        creator_type: "Small creator (like you!)",
    },
    TrendingTemplate {
        title: "5-Minute Desk Break",
        hook: "Your hip flexors will thank you later",
        views: (35_000, 120_000),
        likes: (2_800, 10_000),
        comments: (90, 500),
        shares: (600, 2_500),
        saves: (1_500, 6_000),
        engagement_rate: (7.5, 15.0),
        duration_secs: 45,
        posted_days_ago: (1, 7),
        viral_score: (68, 88),
        content_pattern: "Follow-Along Flow",
        why_viral: "Relatable for remote workers + easy to follow",
        creator_follower_count: (500, 8_000),
        creator_type: "Small creator (like you!)",
    },
    TrendingTemplate {
        title: "Beginner Pose Tutorial",
        hook: "The pose that changed my mornings ☀️",
        views: (55_000, 200_000),
        likes: (4_500, 18_000),
        comments: (150, 900),
        shares: (900, 4_000),
        saves: (3_000, 12_000),
        engagement_rate: (9.0, 20.0),
        duration_secs: 22,
        posted_days_ago: (1, 5),
        viral_score: (78, 95),
        content_pattern: "Quick Tutorial",
        why_viral: "Clear value + personal touch + short duration",
        creator_follower_count: (1_200, 20_000),
        creator_type: "Growing creator",
    },
    TrendingTemplate {
        title: "Sleep Better Tonight",
        hook: "The perfect wind-down before bed 🌙",
        views: (60_000, 250_000),
        likes: (5_000, 22_000),
        comments: (200, 1_200),
        shares: (1_200, 5_500),
        saves: (4_000, 15_000),
        engagement_rate: (10.0, 22.0),
        duration_secs: 35,
        posted_days_ago: (1, 6),
        viral_score: (82, 96),
        content_pattern: "Problem → Solution",
        why_viral: "High save rate (people bookmark for later) + universal need",
        creator_follower_count: (2_000, 25_000),
        creator_type: "Growing creator",
    },
    TrendingTemplate {
        title: "Flexibility Progress",
        hook: "POV: You finally found a yoga routine you'll stick to",
        views: (80_000, 350_000),
        likes: (7_000, 30_000),
        comments: (300, 1_800),
        shares: (1_800, 7_000),
        saves: (5_000, 20_000),
        engagement_rate: (11.0, 25.0),
        duration_secs: 18,
        posted_days_ago: (1, 4),
        viral_score: (85, 98),
        content_pattern: "Before/After",
        why_viral: "Inspirational + relatable + visual transformation",
        creator_follower_count: (3_000, 40_000),
        creator_type: "Established creator",
    },
];

impl TrendingTemplate {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> TrendingContent {
        let rate = rng.gen_range(self.engagement_rate.0..=self.engagement_rate.1);
        TrendingContent {
            platform: "Instagram",
            kind: "Reel",
            title: self.title,
            hook: self.hook,
            views: rng.gen_range(self.views.0..=self.views.1),
            likes: rng.gen_range(self.likes.0..=self.likes.1),
            comments: rng.gen_range(self.comments.0..=self.comments.1),
            shares: rng.gen_range(self.shares.0..=self.shares.1),
            saves: rng.gen_range(self.saves.0..=self.saves.1),
            // 소수점 한 자리로 반올림
            engagement_rate: (rate * 10.0).round() / 10.0,
            duration_secs: self.duration_secs,
            posted_days_ago: rng.gen_range(self.posted_days_ago.0..=self.posted_days_ago.1),
            viral_score: rng.gen_range(self.viral_score.0..=self.viral_score.1),
            content_pattern: self.content_pattern,
            why_viral: self.why_viral,
            creator_follower_count: rng
                .gen_range(self.creator_follower_count.0..=self.creator_follower_count.1),
            creator_type: self.creator_type,
            sample: true,
        }
    }
}

/// 샘플 트렌딩 콘텐츠를 최대 `limit`개 만듭니다.
///
/// 실측값이 아니라 템플릿별 고정 범위에서 뽑은 **시연용 데이터**입니다.
/// `sub_niche`는 현재 템플릿 선택에 영향을 주지 않으며, 검색 각도는 `niche_angles`로 따로 조회합니다.
pub fn trending_content_with<R: Rng + ?Sized>(
    rng: &mut R,
    _sub_niche: &str,
    limit: usize,
) -> Vec<TrendingContent> {
    TRENDING_TEMPLATES
        .iter()
        .take(limit)
        .map(|template| template.sample(rng))
        .collect()
}

pub fn trending_content(sub_niche: &str, limit: usize) -> Vec<TrendingContent> {
    trending_content_with(&mut rand::thread_rng(), sub_niche, limit)
}

// ── 월간 캘린더 ──

static CONTENT_PILLARS: [&str; 4] = [
    "Educational (40%) - Teach something valuable",
    "Inspirational (30%) - Motivate and encourage",
    "Personal (20%) - Show your personality",
    "Promotional (10%) - Your classes/offerings",
];

/// 한 달치 캘린더 템플릿 (1~4주차 계획 + 월간 목표 + 콘텐츠 기둥)
pub fn content_calendar(month: &str) -> ContentCalendar {
    ContentCalendar {
        month: month.to_string(),
        theme: "Foundation Building",
        weekly_rhythm: [weekly_plan(1), weekly_plan(2), weekly_plan(3), weekly_plan(4)],
        monthly_goals: MonthlyGoals {
            reels: 8,
            stories: 30,
            lives: 1,
            collaborations: 2,
            comments_given: 300,
        },
        content_pillars: &CONTENT_PILLARS,
    }
}
