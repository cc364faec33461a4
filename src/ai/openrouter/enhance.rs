//! Best-effort text enrichment backed by OpenRouter chat completions.
//!
//! Every operation degrades instead of failing: provider or parse errors
//! are logged and the caller receives a deterministic fallback value.

use super::client::OpenRouterHttpClient;
use super::types::{ChatCompletionRequest, ChatMessage, Role};
use crate::ai::EnhancementService;
use crate::models::{Enrichment, ViralAnalysis};
use crate::{prompts, Error, Result};
use async_trait::async_trait;
use std::time::Duration;

const CHAT_MODEL: &str = "openai/gpt-4o-mini";

pub struct OpenRouterClient {
    http: OpenRouterHttpClient,
}

impl OpenRouterClient {
    pub fn new(api_key: String) -> Self {
        Self::new_with_client(api_key, reqwest::Client::new())
    }

    pub fn new_with_client(api_key: String, client: reqwest::Client) -> Self {
        Self {
            http: OpenRouterHttpClient::new_with_client(api_key, Duration::from_secs(30), client),
        }
    }

    #[cfg(test)]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.http = self.http.with_base_url(base_url);
        self
    }

    async fn request_text(
        &self,
        system: String,
        user: String,
        temperature: f32,
        max_tokens: u32,
    ) -> Result<String> {
        let request = ChatCompletionRequest {
            model: CHAT_MODEL.to_string(),
            messages: vec![
                ChatMessage {
                    role: Role::System,
                    content: system,
                },
                ChatMessage {
                    role: Role::User,
                    content: user,
                },
            ],
            temperature: Some(temperature),
            max_tokens: Some(max_tokens),
        };

        let response = self.http.chat_completion(request).await?;

        response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or_else(|| Error::Parse("No content in chat completion response".to_string()))
    }
}

/// Drop the markdown code fences models sometimes wrap JSON answers in.
fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_string()
}

#[async_trait]
impl EnhancementService for OpenRouterClient {
    async fn enhance_prompt(&self, prompt: &str, mood: &str) -> Enrichment<String> {
        let user = prompts::render(prompts::ENHANCE_USER, &[("prompt", prompt), ("mood", mood)]);

        match self
            .request_text(prompts::ENHANCE_SYSTEM.to_string(), user, 0.8, 300)
            .await
        {
            Ok(text) => Enrichment::Enhanced(text),
            Err(e) => {
                tracing::error!("Prompt enhancement failed: {}", e);
                Enrichment::Fallback(prompt.to_string())
            }
        }
    }

    async fn analyze_viral_potential(
        &self,
        title: &str,
        description: &str,
    ) -> Enrichment<ViralAnalysis> {
        let user = prompts::render(
            prompts::VIRAL_USER,
            &[("title", title), ("description", description)],
        );

        let analysis = self
            .request_text(prompts::VIRAL_SYSTEM.to_string(), user, 0.3, 500)
            .await
            .and_then(|text| {
                serde_json::from_str(&strip_code_fences(&text)).map_err(|e| {
                    Error::Parse(format!("Invalid viral analysis payload: {}", e))
                })
            });

        match analysis {
            Ok(parsed) => Enrichment::Enhanced(parsed),
            Err(e) => {
                tracing::error!("Viral analysis failed: {}", e);
                Enrichment::Fallback(ViralAnalysis::fallback())
            }
        }
    }

    async fn enrich_spiritual_content(&self, content: &str) -> Enrichment<String> {
        let user = prompts::render(prompts::SPIRIT_USER, &[("content", content)]);

        match self
            .request_text(prompts::SPIRIT_SYSTEM.to_string(), user, 0.7, 400)
            .await
        {
            Ok(text) => Enrichment::Enhanced(text),
            Err(e) => {
                tracing::error!("Spiritual enrichment failed: {}", e);
                Enrichment::Fallback(content.to_string())
            }
        }
    }

    fn is_available(&self) -> bool {
        !self.http.api_key.is_empty()
    }
}
