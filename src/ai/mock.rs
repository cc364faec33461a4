use super::{CoverArtService, EnhancementService};
use crate::models::{Enrichment, PlatformScores, Track, ViralAnalysis};
use crate::{Error, Result};
use async_trait::async_trait;
use std::path::Path;
use std::sync::{Arc, Mutex};

// Tiny valid 1x1 PNG used as the default rendered cover.
const TINY_PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, // PNG signature
    0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52, // IHDR chunk
    0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, // 1x1 pixel
    0x08, 0x02, 0x00, 0x00, 0x00, 0x90, 0x77, 0x53, 0xDE, 0x00, 0x00, 0x00, 0x0C, 0x49,
    0x44, 0x41, // IDAT chunk
    0x54, 0x08, 0x99, 0x63, 0xF8, 0xCF, 0xC0, 0x00, 0x00, 0x00, 0x01, 0x00, 0x01, 0xE2,
    0x25, 0x00, 0xBC, 0x00, 0x00, 0x00, 0x00, 0x49, 0x45, 0x4E, // IEND chunk
    0x44, 0xAE, 0x42, 0x60, 0x82,
];

fn default_analysis() -> ViralAnalysis {
    ViralAnalysis {
        viral_score: 82,
        strengths: vec!["Catchy hook".to_string()],
        improvements: vec!["Tighten the intro".to_string()],
        platforms: PlatformScores {
            tiktok: 85,
            instagram: 78,
            youtube: 80,
            spotify: 88,
        },
        best_time_to_post: "Saturday 9 PM".to_string(),
        target_audience: vec!["Progressive trance fans".to_string()],
        hashtag_suggestions: vec!["#trancefamily".to_string()],
    }
}

#[derive(Clone)]
pub struct MockEnhancementClient {
    prompt_responses: Arc<Mutex<Vec<String>>>,
    analysis_responses: Arc<Mutex<Vec<ViralAnalysis>>>,
    spirit_responses: Arc<Mutex<Vec<String>>>,
    available: Arc<Mutex<bool>>,
    should_fail: Arc<Mutex<bool>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockEnhancementClient {
    pub fn new() -> Self {
        Self {
            prompt_responses: Arc::new(Mutex::new(Vec::new())),
            analysis_responses: Arc::new(Mutex::new(Vec::new())),
            spirit_responses: Arc::new(Mutex::new(Vec::new())),
            available: Arc::new(Mutex::new(true)),
            should_fail: Arc::new(Mutex::new(false)),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_prompt_response(self, response: String) -> Self {
        self.prompt_responses.lock().unwrap().push(response);
        self
    }

    pub fn with_analysis_response(self, response: ViralAnalysis) -> Self {
        self.analysis_responses.lock().unwrap().push(response);
        self
    }

    pub fn with_spirit_response(self, response: String) -> Self {
        self.spirit_responses.lock().unwrap().push(response);
        self
    }

    pub fn with_availability(self, available: bool) -> Self {
        *self.available.lock().unwrap() = available;
        self
    }

    /// Force every operation onto its fallback path.
    pub fn with_failure(self, should_fail: bool) -> Self {
        *self.should_fail.lock().unwrap() = should_fail;
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    fn bump_count(&self) -> usize {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;
        *count
    }
}

impl Default for MockEnhancementClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EnhancementService for MockEnhancementClient {
    async fn enhance_prompt(&self, prompt: &str, mood: &str) -> Enrichment<String> {
        let count = self.bump_count();

        if *self.should_fail.lock().unwrap() {
            return Enrichment::Fallback(prompt.to_string());
        }

        let responses = self.prompt_responses.lock().unwrap();
        if responses.is_empty() {
            // Default mock response
            Enrichment::Enhanced(format!("Enhanced for {} mood: {}", mood, prompt))
        } else {
            let index = (count - 1) % responses.len();
            Enrichment::Enhanced(responses[index].clone())
        }
    }

    async fn analyze_viral_potential(
        &self,
        _title: &str,
        _description: &str,
    ) -> Enrichment<ViralAnalysis> {
        let count = self.bump_count();

        if *self.should_fail.lock().unwrap() {
            return Enrichment::Fallback(ViralAnalysis::fallback());
        }

        let responses = self.analysis_responses.lock().unwrap();
        if responses.is_empty() {
            Enrichment::Enhanced(default_analysis())
        } else {
            let index = (count - 1) % responses.len();
            Enrichment::Enhanced(responses[index].clone())
        }
    }

    async fn enrich_spiritual_content(&self, content: &str) -> Enrichment<String> {
        let count = self.bump_count();

        if *self.should_fail.lock().unwrap() {
            return Enrichment::Fallback(content.to_string());
        }

        let responses = self.spirit_responses.lock().unwrap();
        if responses.is_empty() {
            Enrichment::Enhanced(format!("{} sous la lumière de Jerusalem", content))
        } else {
            let index = (count - 1) % responses.len();
            Enrichment::Enhanced(responses[index].clone())
        }
    }

    fn is_available(&self) -> bool {
        *self.available.lock().unwrap()
    }
}

#[derive(Clone)]
pub struct MockCoverArtClient {
    enhance_responses: Arc<Mutex<Vec<String>>>,
    enhance_should_fail: Arc<Mutex<bool>>,
    image_should_fail: Arc<Mutex<bool>>,
    image_prompts: Arc<Mutex<Vec<String>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockCoverArtClient {
    pub fn new() -> Self {
        Self {
            enhance_responses: Arc::new(Mutex::new(Vec::new())),
            enhance_should_fail: Arc::new(Mutex::new(false)),
            image_should_fail: Arc::new(Mutex::new(false)),
            image_prompts: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_enhance_response(self, response: String) -> Self {
        self.enhance_responses.lock().unwrap().push(response);
        self
    }

    pub fn with_enhance_failure(self, should_fail: bool) -> Self {
        *self.enhance_should_fail.lock().unwrap() = should_fail;
        self
    }

    pub fn with_image_failure(self, should_fail: bool) -> Self {
        *self.image_should_fail.lock().unwrap() = should_fail;
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Prompts passed to `generate_cover_image`, in call order.
    pub fn image_prompts(&self) -> Vec<String> {
        self.image_prompts.lock().unwrap().clone()
    }
}

impl Default for MockCoverArtClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CoverArtService for MockCoverArtClient {
    async fn enhance_cover_prompt(&self, track: &Track, _base_prompt: &str) -> Result<String> {
        let count = {
            let mut count = self.call_count.lock().unwrap();
            *count += 1;
            *count
        };

        if *self.enhance_should_fail.lock().unwrap() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "Mock enhancement failure",
            )));
        }

        let responses = self.enhance_responses.lock().unwrap();
        if responses.is_empty() {
            // Default mock response
            Ok(format!("Polished cover prompt for \"{}\"", track.title))
        } else {
            let index = (count - 1) % responses.len();
            Ok(responses[index].clone())
        }
    }

    async fn generate_cover_image(&self, prompt: &str, output_path: &Path) -> Result<()> {
        {
            let mut count = self.call_count.lock().unwrap();
            *count += 1;
        }

        self.image_prompts.lock().unwrap().push(prompt.to_string());

        if *self.image_should_fail.lock().unwrap() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "Mock image generation failure",
            )));
        }

        std::fs::write(output_path, TINY_PNG)?;
        Ok(())
    }
}
