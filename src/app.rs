//! Application wiring: configured provider clients behind one facade.

use crate::ai::{EnhancementService, GeminiCoverClient, OpenRouterClient};
use crate::cover::{cover_styles, CoverGenerator};
use crate::models::{Config, CoverStyle, Enrichment, Track, ViralAnalysis};
use crate::{Error, Result};

/// Coordinates text enrichment and cover generation for the CLI.
pub struct App {
    enhancer: Box<dyn EnhancementService>,
    covers: Option<CoverGenerator>,
}

impl App {
    /// Construct an app from environment configuration (`Config::from_env`).
    pub fn from_env() -> Self {
        Self::from_config(Config::from_env())
    }

    pub fn from_config(config: Config) -> Self {
        // Reuse one HTTP connection pool across provider clients.
        let http_client = reqwest::Client::new();

        let enhancer: Box<dyn EnhancementService> = Box::new(OpenRouterClient::new_with_client(
            config.openrouter_api_key,
            http_client.clone(),
        ));

        let covers = config.gemini_api_key.map(|api_key| {
            CoverGenerator::new(
                Box::new(GeminiCoverClient::new_with_client(api_key, http_client)),
                config.cover_output_dir,
            )
        });

        Self { enhancer, covers }
    }

    /// Build an app from concrete service dependencies.
    ///
    /// This is primarily useful for integration tests and harnesses that
    /// need to inject mocks.
    pub fn with_services(
        enhancer: Box<dyn EnhancementService>,
        covers: Option<CoverGenerator>,
    ) -> Self {
        Self { enhancer, covers }
    }

    pub async fn enhance(&self, prompt: &str, mood: &str) -> Enrichment<String> {
        self.enhancer.enhance_prompt(prompt, mood).await
    }

    pub async fn analyze(&self, title: &str, description: &str) -> Enrichment<ViralAnalysis> {
        self.enhancer.analyze_viral_potential(title, description).await
    }

    pub async fn spirit(&self, content: &str) -> Enrichment<String> {
        self.enhancer.enrich_spiritual_content(content).await
    }

    /// Generate cover artwork for a track. Requires Gemini credentials.
    pub async fn cover(&self, track: &Track, style: &str) -> Result<String> {
        let covers = self.covers.as_ref().ok_or_else(|| {
            Error::Config("Gemini credentials not configured, GEMINI_API_KEY required".to_string())
        })?;
        covers.generate_cover(track, style).await
    }

    pub fn styles(&self) -> Vec<CoverStyle> {
        cover_styles()
    }

    /// Provider credential status, without any network traffic.
    pub fn status(&self) -> AppStatus {
        AppStatus {
            enhancement_available: self.enhancer.is_available(),
            cover_generation_configured: self.covers.is_some(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppStatus {
    pub enhancement_available: bool,
    pub cover_generation_configured: bool,
}
