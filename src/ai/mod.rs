//! AI provider integration for text enrichment and cover artwork
//!
//! Provides interfaces to OpenRouter's chat completions API for prompt and
//! content enrichment, and to Gemini for cover art generation.

pub mod gemini;
pub mod mock;
pub mod openrouter;

pub use gemini::GeminiCoverClient;
pub use mock::{MockCoverArtClient, MockEnhancementClient};
pub use openrouter::OpenRouterClient;

use crate::models::{Enrichment, Track, ViralAnalysis};
use crate::Result;
use async_trait::async_trait;
use std::path::Path;

/// Best-effort text enrichment. Implementations never fail the caller:
/// every method degrades to a deterministic fallback value.
#[async_trait]
pub trait EnhancementService: Send + Sync {
    async fn enhance_prompt(&self, prompt: &str, mood: &str) -> Enrichment<String>;
    async fn analyze_viral_potential(
        &self,
        title: &str,
        description: &str,
    ) -> Enrichment<ViralAnalysis>;
    async fn enrich_spiritual_content(&self, content: &str) -> Enrichment<String>;
    /// Reports whether credentials are present. Makes no network calls.
    fn is_available(&self) -> bool;
}

/// Cover artwork collaborator: prompt polish plus image rendering.
#[async_trait]
pub trait CoverArtService: Send + Sync {
    async fn enhance_cover_prompt(&self, track: &Track, base_prompt: &str) -> Result<String>;
    async fn generate_cover_image(&self, prompt: &str, output_path: &Path) -> Result<()>;
}
