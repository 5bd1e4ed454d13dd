//! # 검색 트렌드 조회
//!
//! 키워드 하나에 대해 최근 3개월 동안 급상승한 관련 검색어를 가져와
//! 관련 없는 주제를 거르고 간단한 점수를 붙입니다.
//!
//! 이 기능은 부가 정보입니다. 비활성화, 네트워크 오류, 응답 형식 변경 등
//! 어떤 실패든 빈 목록으로 바뀌고 사용자에게는 드러나지 않습니다.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;

use crate::models::{RisingQuery, TrendGrowth, TrendTopic};

/// 조회 기간
pub const TREND_WINDOW: &str = "today 3-m";
/// 원본 행 중 앞에서부터 살펴볼 개수
pub const MAX_ROWS_CONSIDERED: usize = 15;
/// 최종 결과 최대 개수
pub const MAX_TOPICS: usize = 8;

/// 요가와 무관한 전자제품 검색어를 거르는 단어들
const BLOCKED_TERMS: [&str; 11] = [
    "lenovo", "laptop", "tablet", "thinkpad", "battery", "charger", "deal", "specs", "price",
    "windows", "keyboard",
];

#[derive(Debug, thiserror::Error)]
pub enum TrendError {
    #[error("trend request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("malformed trend payload: {0}")]
    Payload(String),
}

impl From<serde_json::Error> for TrendError {
    fn from(err: serde_json::Error) -> Self {
        TrendError::Payload(err.to_string())
    }
}

/// 키워드의 급상승 검색어(가공 전)를 돌려주는 소스
#[async_trait]
pub trait TrendSource: Send + Sync {
    async fn rising_queries(&self, keyword: &str) -> Result<Vec<RisingQuery>, TrendError>;
}

/// Google Trends 웹 API
///
/// `explore`로 위젯 토큰을 받은 뒤 `relatedsearches`로 급상승 목록을 조회합니다.
/// 두 응답 모두 JSON 앞에 `)]}'` 같은 접두어가 붙어 있어 첫 `{`부터 파싱합니다.
pub struct GoogleTrendsSource {
    client: Client,
    base_url: String,
}

impl GoogleTrendsSource {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, TrendError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    async fn get_json(&self, path: &str, query: &[(&str, &str)]) -> Result<Value, TrendError> {
        let text = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .query(&[("hl", "en-US"), ("tz", "360")])
            .query(query)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(serde_json::from_str(strip_json_prefix(&text)?)?)
    }
}

#[derive(Deserialize)]
struct ExploreResponse {
    #[serde(default)]
    widgets: Vec<ExploreWidget>,
}

#[derive(Deserialize)]
struct ExploreWidget {
    #[serde(default)]
    id: String,
    #[serde(default)]
    token: String,
    #[serde(default)]
    request: Value,
}

#[derive(Deserialize)]
struct RankedKeyword {
    query: String,
    #[serde(default)]
    value: u64,
    #[serde(rename = "formattedValue", default)]
    formatted_value: String,
}

#[async_trait]
impl TrendSource for GoogleTrendsSource {
    async fn rising_queries(&self, keyword: &str) -> Result<Vec<RisingQuery>, TrendError> {
        let explore_req = json!({
            "comparisonItem": [{ "keyword": keyword, "time": TREND_WINDOW, "geo": "" }],
            "category": 0,
            "property": "",
        })
        .to_string();

        let explore: ExploreResponse = serde_json::from_value(
            self.get_json("/trends/api/explore", &[("req", explore_req.as_str())])
                .await?,
        )?;

        let widget = explore
            .widgets
            .into_iter()
            .find(|w| w.id.contains("RELATED_QUERIES"))
            .ok_or_else(|| TrendError::Payload("no related queries widget".into()))?;

        let widget_req = widget.request.to_string();
        let related = self
            .get_json(
                "/trends/api/widgetdata/relatedsearches",
                &[("req", widget_req.as_str()), ("token", widget.token.as_str())],
            )
            .await?;

        parse_rising_list(&related)
    }
}

/// 첫 `{` 앞의 접두어를 떼어냅니다.
fn strip_json_prefix(text: &str) -> Result<&str, TrendError> {
    text.find('{')
        .map(|start| &text[start..])
        .ok_or_else(|| TrendError::Payload("no JSON object in response".into()))
}

/// `default.rankedList[1]`이 급상승(rising) 목록입니다. `[0]`은 상위(top) 목록.
fn parse_rising_list(payload: &Value) -> Result<Vec<RisingQuery>, TrendError> {
    let rows = payload
        .pointer("/default/rankedList/1/rankedKeyword")
        .cloned()
        .ok_or_else(|| TrendError::Payload("missing rising list".into()))?;
    let rows: Vec<RankedKeyword> = serde_json::from_value(rows)?;

    Ok(rows
        .into_iter()
        .map(|row| RisingQuery {
            growth: if row.formatted_value.contains("Breakout") {
                TrendGrowth::Label(row.formatted_value)
            } else {
                TrendGrowth::Value(row.value)
            },
            query: row.query,
        })
        .collect())
}

/// 성장 지표 → 0~100 점수
pub fn score_growth(growth: &TrendGrowth) -> u8 {
    match growth {
        TrendGrowth::Label(label) if label.contains("Breakout") => 95,
        TrendGrowth::Value(value) => scale(*value),
        TrendGrowth::Label(label)
            if !label.is_empty() && label.chars().all(|c| c.is_ascii_digit()) =>
        {
            label.parse::<u64>().map(scale).unwrap_or(100)
        }
        TrendGrowth::Label(_) => 50,
    }
}

fn scale(value: u64) -> u8 {
    // 결과는 항상 100 이하
    (50 + value / 10).min(100) as u8
}

/// 앞의 15행만 보고, 차단 단어가 들어간 주제를 빼고, 최대 8개를 남깁니다.
pub fn filter_and_score(rows: Vec<RisingQuery>) -> Vec<TrendTopic> {
    rows.into_iter()
        .take(MAX_ROWS_CONSIDERED)
        .filter(|row| {
            let lowered = row.query.to_lowercase();
            !BLOCKED_TERMS.iter().any(|term| lowered.contains(term))
        })
        .take(MAX_TOPICS)
        .map(|row| TrendTopic {
            viral_potential: score_growth(&row.growth),
            topic: row.query,
            growth: row.growth,
        })
        .collect()
}

/// 핸들러가 쓰는 트렌드 조회기. 소스가 없으면 비활성 상태입니다.
#[derive(Clone, Default)]
pub struct TrendLookup {
    source: Option<Arc<dyn TrendSource>>,
}

impl TrendLookup {
    pub fn new(source: Arc<dyn TrendSource>) -> Self {
        Self {
            source: Some(source),
        }
    }

    pub fn disabled() -> Self {
        Self { source: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.source.is_some()
    }

    /// 실패하면 빈 목록
    pub async fn rising_topics(&self, keyword: &str) -> Vec<TrendTopic> {
        let Some(source) = &self.source else {
            return Vec::new();
        };

        match source.rising_queries(keyword).await {
            Ok(rows) => filter_and_score(rows),
            Err(err) => {
                tracing::debug!("trend lookup for {:?} failed: {}", keyword, err);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(query: &str, growth: TrendGrowth) -> RisingQuery {
        RisingQuery {
            query: query.into(),
            growth,
        }
    }

    struct Fixed(Vec<RisingQuery>);

    #[async_trait]
    impl TrendSource for Fixed {
        async fn rising_queries(&self, _keyword: &str) -> Result<Vec<RisingQuery>, TrendError> {
            Ok(self.0.clone())
        }
    }

    struct Broken;

    #[async_trait]
    impl TrendSource for Broken {
        async fn rising_queries(&self, _keyword: &str) -> Result<Vec<RisingQuery>, TrendError> {
            Err(TrendError::Payload("unexpected shape".into()))
        }
    }

    #[test]
    fn scores_breakout_numeric_and_other() {
        assert_eq!(score_growth(&TrendGrowth::Label("Breakout".into())), 95);
        assert_eq!(score_growth(&TrendGrowth::Value(250)), 75);
        assert_eq!(score_growth(&TrendGrowth::Value(5000)), 100);
        assert_eq!(score_growth(&TrendGrowth::Label("120".into())), 62);
        assert_eq!(score_growth(&TrendGrowth::Label("+40%".into())), 50);
    }

    #[test]
    fn drops_blocked_terms_case_insensitively() {
        let topics = filter_and_score(vec![
            row("Lenovo Yoga 7", TrendGrowth::Value(300)),
            row("wall yoga", TrendGrowth::Label("Breakout".into())),
            row("yoga laptop DEAL", TrendGrowth::Value(90)),
        ]);
        assert_eq!(topics.len(), 1);
        assert_eq!(topics[0].topic, "wall yoga");
        assert_eq!(topics[0].viral_potential, 95);
    }

    #[test]
    fn only_first_fifteen_rows_and_at_most_eight_topics() {
        let mut rows: Vec<RisingQuery> = (0..10)
            .map(|i| row(&format!("thinkpad {i}"), TrendGrowth::Value(10)))
            .collect();
        rows.extend((0..10).map(|i| row(&format!("yoga flow {i}"), TrendGrowth::Value(10))));

        // 15행 중 유효한 행은 5개뿐
        let topics = filter_and_score(rows);
        assert_eq!(topics.len(), 5);
        assert!(topics.iter().all(|t| t.topic.starts_with("yoga flow")));

        let many: Vec<RisingQuery> = (0..20)
            .map(|i| row(&format!("pose {i}"), TrendGrowth::Value(i)))
            .collect();
        let topics = filter_and_score(many);
        assert_eq!(topics.len(), MAX_TOPICS);
        assert!(topics.iter().all(|t| t.viral_potential <= 100));
    }

    #[test]
    fn parses_rising_list_from_payload() {
        let raw = r#")]}',
{"default":{"rankedList":[
  {"rankedKeyword":[{"query":"top one","value":100,"formattedValue":"100"}]},
  {"rankedKeyword":[
    {"query":"wall pilates yoga","value":250,"formattedValue":"+250%"},
    {"query":"somatic yoga","value":31200,"formattedValue":"Breakout"}
  ]}
]}}"#;
        let payload: Value = serde_json::from_str(strip_json_prefix(raw).unwrap()).unwrap();
        let rows = parse_rising_list(&payload).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].growth, TrendGrowth::Value(250));
        assert_eq!(rows[1].growth, TrendGrowth::Label("Breakout".into()));
    }

    #[test]
    fn malformed_payload_is_an_error() {
        assert!(strip_json_prefix("<html>rate limited</html>").is_err());
        assert!(parse_rising_list(&json!({"default": {"rankedList": []}})).is_err());
    }

    #[tokio::test]
    async fn lookup_filters_source_rows() {
        let lookup = TrendLookup::new(Arc::new(Fixed(vec![
            row("chair yoga", TrendGrowth::Value(400)),
            row("tablet stand", TrendGrowth::Value(400)),
        ])));
        let topics = lookup.rising_topics("yoga poses").await;
        assert_eq!(topics.len(), 1);
        assert_eq!(topics[0].viral_potential, 90);
    }

    #[tokio::test]
    async fn failures_and_disabled_yield_empty() {
        assert!(TrendLookup::new(Arc::new(Broken))
            .rising_topics("yoga poses")
            .await
            .is_empty());
        let disabled = TrendLookup::disabled();
        assert!(!disabled.is_enabled());
        assert!(disabled.rising_topics("yoga poses").await.is_empty());
    }
}
