use super::LlmClient;
use crate::model::LlmResponse;
use async_trait::async_trait;
use serde_json::json;

const CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

pub struct OpenAIClient {
    pub model: String,
    pub api_key: String,
    pub temperature: f32,
    client: reqwest::Client,
}

impl OpenAIClient {
    pub fn new(model: String, api_key: String, temperature: f32) -> Self {
        Self {
            model,
            api_key,
            temperature,
            client: reqwest::Client::new(),
        }
    }

    /// Client configured for reproducible scoring: default judge model,
    /// temperature pinned to zero. Configured once per run.
    pub fn deterministic(api_key: String) -> Self {
        Self::new(DEFAULT_MODEL.to_string(), api_key, 0.0)
    }
}

#[async_trait]
impl LlmClient for OpenAIClient {
    async fn complete(&self, system: &str, user: &str) -> anyhow::Result<LlmResponse> {
        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": system },
                { "role": "user", "content": user },
            ],
            "temperature": self.temperature,
        });

        let resp = self
            .client
            .post(CHAT_COMPLETIONS_URL)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let error_text = resp.text().await.unwrap_or_else(|_| String::new());
            anyhow::bail!("OpenAI chat API error: {}", error_text);
        }

        let json: serde_json::Value = resp.json().await?;

        let text = json
            .pointer("/choices/0/message/content")
            .and_then(|v| v.as_str())
            .ok_or_else(|| anyhow::anyhow!("OpenAI API response missing content"))?
            .to_string();

        Ok(LlmResponse {
            text,
            provider: "openai".to_string(),
            model: self.model.clone(),
        })
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }
}
