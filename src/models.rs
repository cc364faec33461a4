//! Data models and structures
//!
//! Defines the core data structures for tracks, viral analysis, cover
//! styles, and runtime configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub id: i64,
    pub title: String,
    pub artist: Option<Artist>,
    pub audio_features: Option<AudioFeatures>,
    pub tags: Option<Vec<String>>,
}

impl Track {
    /// Artist display name, or the placeholder used for untagged uploads.
    pub fn artist_name(&self) -> &str {
        self.artist
            .as_ref()
            .map(|artist| artist.name.as_str())
            .unwrap_or("Unknown Artist")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioFeatures {
    pub bpm: Option<f32>,
    pub energy: Option<f32>,
    pub valence: Option<f32>,
}

/// A selectable cover art style, as presented to the UI.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CoverStyle {
    pub id: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ViralAnalysis {
    pub viral_score: u8,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub platforms: PlatformScores,
    pub best_time_to_post: String,
    pub target_audience: Vec<String>,
    pub hashtag_suggestions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlatformScores {
    pub tiktok: u8,
    pub instagram: u8,
    pub youtube: u8,
    pub spotify: u8,
}

impl ViralAnalysis {
    /// Neutral scores served when the analysis call cannot be completed.
    pub fn fallback() -> Self {
        Self {
            viral_score: 75,
            strengths: vec![
                "Strong emotional impact".to_string(),
                "Good trance progression".to_string(),
            ],
            improvements: vec![
                "Add more vocal hooks".to_string(),
                "Optimize for social media".to_string(),
            ],
            platforms: PlatformScores {
                tiktok: 80,
                instagram: 75,
                youtube: 85,
                spotify: 90,
            },
            best_time_to_post: "Friday 6-8 PM".to_string(),
            target_audience: vec![
                "Trance lovers".to_string(),
                "Festival goers".to_string(),
            ],
            hashtag_suggestions: vec![
                "#trance".to_string(),
                "#viral".to_string(),
                "#uplifting".to_string(),
            ],
        }
    }
}

/// Outcome of a best-effort enrichment call.
///
/// `Enhanced` carries a model-produced value, `Fallback` the deterministic
/// stand-in served when the provider is unavailable or returns garbage.
/// Callers always get a usable value either way.
#[derive(Debug, Clone, PartialEq)]
pub enum Enrichment<T> {
    Enhanced(T),
    Fallback(T),
}

impl<T> Enrichment<T> {
    pub fn value(&self) -> &T {
        match self {
            Enrichment::Enhanced(value) | Enrichment::Fallback(value) => value,
        }
    }

    pub fn into_inner(self) -> T {
        match self {
            Enrichment::Enhanced(value) | Enrichment::Fallback(value) => value,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Enrichment::Fallback(_))
    }
}

// Configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub openrouter_api_key: String,
    pub gemini_api_key: Option<String>,
    pub cover_output_dir: PathBuf,
}

impl Config {
    /// Read configuration from `.env` and the process environment.
    ///
    /// A missing `OPENROUTER_API_KEY` is tolerated: enhancement calls then
    /// fail fast and return their fallbacks. `GEMINI_API_KEY` only matters
    /// once cover generation is requested.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let openrouter_api_key = match std::env::var("OPENROUTER_API_KEY") {
            Ok(key) if !key.is_empty() => key,
            _ => {
                tracing::warn!("OPENROUTER_API_KEY not set; enhancement will serve fallbacks");
                String::new()
            }
        };

        Self {
            openrouter_api_key,
            gemini_api_key: std::env::var("GEMINI_API_KEY")
                .ok()
                .filter(|key| !key.is_empty()),
            cover_output_dir: std::env::var("COVER_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(crate::cover::DEFAULT_OUTPUT_DIR)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_deserializes_app_payload() {
        let json = r#"{
            "id": 42,
            "title": "Geulah Sunrise",
            "artist": { "name": "DJ Nachman" },
            "audioFeatures": { "bpm": 140.0, "energy": 0.9, "valence": 0.8 },
            "tags": ["uplifting", "spiritual"]
        }"#;

        let track: Track = serde_json::from_str(json).unwrap();
        assert_eq!(track.id, 42);
        assert_eq!(track.artist_name(), "DJ Nachman");
        assert_eq!(track.audio_features.unwrap().bpm, Some(140.0));
        assert_eq!(track.tags.unwrap().len(), 2);
    }

    #[test]
    fn test_track_optional_fields_default_to_none() {
        let track: Track = serde_json::from_str(r#"{"id": 1, "title": "Untitled"}"#).unwrap();
        assert!(track.artist.is_none());
        assert!(track.audio_features.is_none());
        assert!(track.tags.is_none());
        assert_eq!(track.artist_name(), "Unknown Artist");
    }

    #[test]
    fn test_viral_analysis_uses_camel_case_keys() {
        let analysis = ViralAnalysis::fallback();
        let json = serde_json::to_string(&analysis).unwrap();
        assert!(json.contains("\"viralScore\":75"));
        assert!(json.contains("\"bestTimeToPost\":\"Friday 6-8 PM\""));
        assert!(json.contains("\"hashtagSuggestions\""));

        let deserialized: ViralAnalysis = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, analysis);
    }

    #[test]
    fn test_viral_analysis_fallback_values() {
        let analysis = ViralAnalysis::fallback();
        assert_eq!(analysis.viral_score, 75);
        assert_eq!(analysis.platforms.spotify, 90);
        assert_eq!(analysis.strengths[0], "Strong emotional impact");
        assert_eq!(analysis.hashtag_suggestions, vec!["#trance", "#viral", "#uplifting"]);
    }

    #[test]
    fn test_enrichment_accessors() {
        let enhanced = Enrichment::Enhanced("better".to_string());
        assert!(!enhanced.is_fallback());
        assert_eq!(enhanced.value(), "better");
        assert_eq!(enhanced.into_inner(), "better");

        let fallback = Enrichment::Fallback("original".to_string());
        assert!(fallback.is_fallback());
        assert_eq!(fallback.into_inner(), "original");
    }
}
