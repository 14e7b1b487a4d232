//! Google Gemini API provider.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::error::FilmiError;
use crate::models::GoogleModel;
use crate::types::*;

use super::http::shared_client;
use super::{ModelProvider, ProviderRequest, ProviderResponse};

/// Public Gemini REST endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

pub struct GoogleProvider {
    model: GoogleModel,
    api_key: String,
    base_url: String,
}

impl GoogleProvider {
    pub fn new(model: GoogleModel, api_key: String, base_url: Option<String>) -> Self {
        let base_url = base_url
            .map(|u| u.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self {
            model,
            api_key,
            base_url,
        }
    }

    fn build_request_body(&self, request: &ProviderRequest) -> serde_json::Value {
        let mut body = serde_json::json!({
            "contents": [{
                "role": "user",
                "parts": [{"text": request.prompt}],
            }]
        });

        let mut gen_config = serde_json::Map::new();
        if let Some(max) = request.settings.max_tokens {
            gen_config.insert("maxOutputTokens".into(), max.into());
        }
        if let Some(temp) = request.settings.temperature {
            gen_config.insert("temperature".into(), temp.into());
        }
        if let Some(top_p) = request.settings.top_p {
            gen_config.insert("topP".into(), top_p.into());
        }
        if let Some(top_k) = request.settings.top_k {
            gen_config.insert("topK".into(), top_k.into());
        }
        if !gen_config.is_empty() {
            if let Some(obj) = body.as_object_mut() {
                obj.insert("generationConfig".into(), serde_json::Value::Object(gen_config));
            }
        }

        body
    }
}

#[async_trait]
impl ModelProvider for GoogleProvider {
    fn provider_name(&self) -> &str {
        "google"
    }

    fn model_id(&self) -> &str {
        self.model.as_str()
    }

    async fn generate_content(
        &self,
        request: &ProviderRequest,
    ) -> Result<ProviderResponse, FilmiError> {
        let body = self.build_request_body(request);
        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url,
            self.model.as_str()
        );

        debug!(model = self.model.as_str(), "Google generate_content");

        let resp = shared_client()
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        let status = resp.status().as_u16();
        if status != 200 {
            let body_text = resp.text().await.unwrap_or_default();
            return Err(super::http::status_to_error(status, &body_text));
        }

        let body_text = resp.text().await?;
        let data: GeminiResponse = serde_json::from_str(&body_text)?;
        Ok(data.into())
    }
}

// Internal Gemini response types

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    prompt_feedback: Option<SafetyFeedback>,
    usage_metadata: Option<GeminiUsage>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiCandidate {
    content: Option<GeminiContent>,
    finish_reason: Option<String>,
    #[serde(default)]
    safety_ratings: Vec<SafetyRating>,
}

#[derive(Deserialize)]
struct GeminiContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Deserialize)]
struct GeminiPart {
    text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiUsage {
    #[serde(default)]
    prompt_token_count: u32,
    #[serde(default)]
    candidates_token_count: u32,
    #[serde(default)]
    total_token_count: u32,
}

impl From<GeminiResponse> for ProviderResponse {
    fn from(data: GeminiResponse) -> Self {
        let usage = data
            .usage_metadata
            .map(|u| Usage {
                input_tokens: u.prompt_token_count,
                output_tokens: u.candidates_token_count,
                total_tokens: u.total_token_count,
            })
            .unwrap_or_default();

        let mut response = ProviderResponse {
            prompt_feedback: data.prompt_feedback,
            usage,
            ..Default::default()
        };

        if let Some(candidate) = data.candidates.into_iter().next() {
            let texts: Vec<String> = candidate
                .content
                .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
                .unwrap_or_default();
            if !texts.is_empty() {
                response.text = Some(texts.concat());
            }
            response.finish_reason = candidate
                .finish_reason
                .as_deref()
                .map(FinishReason::from_gemini);
            response.candidate_safety_ratings = candidate.safety_ratings;
        }

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> GoogleProvider {
        GoogleProvider::new(GoogleModel::Gemini20Flash, "test-key".into(), None)
    }

    #[test]
    fn body_carries_prompt_as_single_user_turn() {
        let request = ProviderRequest::new("Tell me a joke", GenerationSettings::default());
        let body = provider().build_request_body(&request);
        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "Tell me a joke");
        assert!(body.get("generationConfig").is_none());
    }

    #[test]
    fn body_includes_only_set_generation_fields() {
        let settings = GenerationSettings::builder()
            .temperature(0.5)
            .max_tokens(256)
            .build();
        let body = provider().build_request_body(&ProviderRequest::new("hi", settings));
        let config = &body["generationConfig"];
        assert_eq!(config["temperature"], 0.5);
        assert_eq!(config["maxOutputTokens"], 256);
        assert!(config.get("topP").is_none());
        assert!(config.get("topK").is_none());
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let provider = GoogleProvider::new(
            GoogleModel::GeminiPro,
            "k".into(),
            Some("http://localhost:9000/v1beta/".into()),
        );
        assert_eq!(provider.base_url, "http://localhost:9000/v1beta");
    }

    #[test]
    fn text_parts_are_concatenated() {
        let data: GeminiResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{
                "content": {"parts": [{"text": "1. Joke A\n"}, {"text": "2. Joke B"}], "role": "model"},
                "finishReason": "STOP"
            }],
            "usageMetadata": {"promptTokenCount": 12, "candidatesTokenCount": 30, "totalTokenCount": 42}
        }))
        .unwrap();
        let response = ProviderResponse::from(data);
        assert_eq!(response.text.as_deref(), Some("1. Joke A\n2. Joke B"));
        assert_eq!(response.finish_reason, Some(FinishReason::Stop));
        assert_eq!(response.usage.total_tokens, 42);
    }

    #[test]
    fn prompt_block_has_no_candidates() {
        let data: GeminiResponse = serde_json::from_value(serde_json::json!({
            "promptFeedback": {
                "blockReason": "SAFETY",
                "safetyRatings": [
                    {"category": "HARM_CATEGORY_HARASSMENT", "probability": "HIGH"}
                ]
            }
        }))
        .unwrap();
        let response = ProviderResponse::from(data);
        assert!(response.text.is_none());
        let feedback = response.prompt_feedback.unwrap();
        assert_eq!(feedback.safety_ratings[0].category, HarmCategory::Harassment);
    }

    #[test]
    fn candidate_without_content_keeps_ratings() {
        let data: GeminiResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{
                "finishReason": "SAFETY",
                "safetyRatings": [
                    {"category": "HARM_CATEGORY_DANGEROUS_CONTENT", "probability": "HIGH"}
                ]
            }]
        }))
        .unwrap();
        let response = ProviderResponse::from(data);
        assert!(response.text.is_none());
        assert_eq!(response.finish_reason, Some(FinishReason::ContentFilter));
        assert_eq!(response.candidate_safety_ratings.len(), 1);
    }
}
