//! Gemini-backed cover artwork collaborator.
//!
//! Talks to two models over one connection pool: a text model that polishes
//! the deterministic base prompt, and an image model that renders the final
//! square artwork as inline base64 data.

use super::client::GeminiHttpClient;
use crate::ai::CoverArtService;
use crate::models::Track;
use crate::{prompts, Error, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

const ENHANCE_MODEL: &str = "gemini-2.5-pro";
const IMAGE_MODEL: &str = "gemini-2.5-flash-image";

#[derive(Debug, Serialize)]
struct EnhanceRequest {
    system_instruction: Option<Content>,
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct ImageRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: ImageGenerationConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ImageGenerationConfig {
    response_modalities: Vec<String>,
    image_config: ImageConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ImageConfig {
    aspect_ratio: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<Part>,
}

/// Untagged union of text and inline media content parts.
///
/// Variant order matters for `#[serde(untagged)]` decoding.
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

pub struct GeminiCoverClient {
    chat_http: GeminiHttpClient,
    image_http: GeminiHttpClient,
}

impl GeminiCoverClient {
    pub fn new(api_key: String) -> Self {
        Self::new_with_client(api_key, reqwest::Client::new())
    }

    pub fn new_with_client(api_key: String, client: reqwest::Client) -> Self {
        Self {
            chat_http: GeminiHttpClient::new_with_client(
                api_key.clone(),
                ENHANCE_MODEL.to_string(),
                Duration::from_secs(30),
                client.clone(),
            ),
            image_http: GeminiHttpClient::new_with_client(
                api_key,
                IMAGE_MODEL.to_string(),
                Duration::from_secs(120),
                client,
            ),
        }
    }

    #[cfg(test)]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.chat_http = self.chat_http.with_base_url(base_url.clone());
        self.image_http = self.image_http.with_base_url(base_url);
        self
    }

    fn extract_text(response: &GenerateContentResponse) -> Option<String> {
        response.candidates.first().and_then(|c| {
            c.content.parts.iter().find_map(|p| match p {
                Part::Text { text } if !text.trim().is_empty() => Some(text.clone()),
                _ => None,
            })
        })
    }
}

#[async_trait]
impl CoverArtService for GeminiCoverClient {
    async fn enhance_cover_prompt(&self, track: &Track, base_prompt: &str) -> Result<String> {
        let user = prompts::render(
            prompts::COVER_USER,
            &[
                ("title", &track.title),
                ("artist", track.artist_name()),
                ("prompt", base_prompt),
            ],
        );

        let request = EnhanceRequest {
            system_instruction: Some(Content {
                role: None,
                parts: vec![Part::Text {
                    text: prompts::COVER_SYSTEM.to_string(),
                }],
            }),
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part::Text { text: user }],
            }],
        };

        let response: GenerateContentResponse = self.chat_http.generate_content(&request).await?;

        Self::extract_text(&response)
            .ok_or_else(|| Error::Parse("No text in Gemini enhancement response".to_string()))
    }

    async fn generate_cover_image(&self, prompt: &str, output_path: &Path) -> Result<()> {
        let request = ImageRequest {
            contents: vec![Content {
                role: None,
                parts: vec![Part::Text {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: ImageGenerationConfig {
                response_modalities: vec!["IMAGE".to_string()],
                image_config: ImageConfig {
                    aspect_ratio: "1:1".to_string(),
                },
            },
        };

        let response: GenerateContentResponse = self.image_http.generate_content(&request).await?;

        let image_data = response
            .candidates
            .first()
            .and_then(|c| {
                c.content.parts.iter().find_map(|p| match p {
                    Part::InlineData { inline_data } => Some(inline_data),
                    _ => None,
                })
            })
            .ok_or_else(|| Error::Parse("No image data in Gemini response".to_string()))?;

        tracing::debug!(
            "Gemini returned cover image with mime_type: {}",
            image_data.mime_type
        );

        use base64::Engine as _;
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(&image_data.data)
            .map_err(|e| Error::Parse(format!("Failed to decode Gemini base64 image: {}", e)))?;

        fs::write(output_path, &bytes)?;

        Ok(())
    }
}
