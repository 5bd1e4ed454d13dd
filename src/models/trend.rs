//! # 검색 트렌드 모델
//!
//! 트렌드 조회(`services::trends`)가 만들어 내는 일회성 데이터입니다.
//! 세션에 캐시될 수는 있지만 영구 저장되지 않습니다.

use serde::{Deserialize, Serialize};

/// 트렌드 서비스가 보고한 성장 지표
///
/// 서비스에 따라 숫자(상승률)로 오기도 하고 `"Breakout"` 같은 문자열로 오기도 합니다.
/// `#[serde(untagged)]`: JSON에서 정수 또는 문자열 그대로 표현됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TrendGrowth {
    Value(u64),
    Label(String),
}

/// 트렌드 서비스가 돌려준 가공 전 상승 검색어 한 건
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RisingQuery {
    pub query: String,
    pub growth: TrendGrowth,
}

/// 필터링과 점수 계산을 거친 상승 토픽
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendTopic {
    pub topic: String,
    pub growth: TrendGrowth,
    /// 0~100 사이의 합성 점수
    pub viral_potential: u8,
}
