//! # 텍스트 생성 클라이언트
//!
//! 완성된 프롬프트를 외부 생성 서비스(Gemini)에 보내고 텍스트를 받아옵니다.
//!
//! - `GenerationBackend`: 실제 전송 계층. 테스트에서는 가짜 구현으로 교체합니다.
//! - `GenerationClient`: 핸들러가 쓰는 얇은 래퍼. 재시도하지 않습니다.
//!
//! `generate()`는 실패를 `"Error: ..."` 문자열로 돌려주므로 화면에 그대로 보여줄 수 있고,
//! 구분이 필요한 호출자는 `try_generate()`로 `Result`를 받습니다.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("generation service returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("generation service returned no text")]
    EmptyResponse,
}

impl GenerationError {
    /// 화면에 그대로 보여줄 실패 문구: `"Error: <사유>"`
    pub fn inline_message(&self) -> String {
        format!("Error: {self}")
    }
}

/// 프롬프트 한 개 → 텍스트 한 개
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, GenerationError>;
}

/// Gemini `generateContent` 호출
pub struct GeminiBackend {
    client: Client,
    api_key: SecretString,
    model: String,
    base_url: String,
}

impl GeminiBackend {
    pub fn new(
        api_key: SecretString,
        model: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, GenerationError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_key,
            model: model.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[derive(Serialize)]
struct GeminiRequest<'a> {
    contents: [GeminiContent<'a>; 1],
}

#[derive(Serialize)]
struct GeminiContent<'a> {
    role: &'static str,
    parts: [GeminiTextPart<'a>; 1],
}

#[derive(Serialize)]
struct GeminiTextPart<'a> {
    text: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiCandidate {
    #[serde(default)]
    content: GeminiResponseContent,
}

#[derive(Debug, Default, Deserialize)]
struct GeminiResponseContent {
    #[serde(default)]
    parts: Vec<GeminiResponsePart>,
}

#[derive(Debug, Default, Deserialize)]
struct GeminiResponsePart {
    #[serde(default)]
    text: Option<String>,
}

impl GeminiResponse {
    /// 첫 번째 후보의 텍스트 조각을 이어 붙입니다.
    fn into_text(self) -> Option<String> {
        let candidate = self.candidates.into_iter().next()?;
        let text: String = candidate
            .content
            .parts
            .into_iter()
            .filter_map(|part| part.text)
            .collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[async_trait]
impl GenerationBackend for GeminiBackend {
    async fn complete(&self, prompt: &str) -> Result<String, GenerationError> {
        let body = GeminiRequest {
            contents: [GeminiContent {
                role: "user",
                parts: [GeminiTextPart { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", self.api_key.expose_secret())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GeminiResponse = response.json().await?;
        parsed.into_text().ok_or(GenerationError::EmptyResponse)
    }
}

/// 핸들러가 공유하는 생성 클라이언트
#[derive(Clone)]
pub struct GenerationClient {
    backend: Arc<dyn GenerationBackend>,
}

impl GenerationClient {
    pub fn new(backend: Arc<dyn GenerationBackend>) -> Self {
        Self { backend }
    }

    /// 한 번만 호출하고, 실패하면 `"Error: <사유>"`를 돌려줍니다.
    pub async fn generate(&self, prompt: &str) -> String {
        self.try_generate(prompt)
            .await
            .unwrap_or_else(|err| err.inline_message())
    }

    pub async fn try_generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let result = self.backend.complete(prompt).await;
        if let Err(err) = &result {
            tracing::warn!("generation call failed: {}", err);
        }
        result
    }
}
