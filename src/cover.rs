//! Cover artwork generation for tracks.
//!
//! Builds a deterministic art prompt from track attributes and a style
//! template, then drives a [`CoverArtService`] collaborator to polish the
//! prompt and render the image to disk. Prompt polish is best-effort;
//! rendering is not.

use crate::ai::CoverArtService;
use crate::models::{CoverStyle, Track};
use crate::{Error, Result};
use chrono::Utc;
use std::fs;
use std::path::PathBuf;
use tracing::{error, info, warn};

/// Directory covers land in when no override is configured.
pub const DEFAULT_OUTPUT_DIR: &str = "generated_covers";

struct StyleTemplate {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    color_scheme: &'static str,
    base_elements: &'static [&'static str],
}

// Adding a style means adding a row here.
const STYLE_TEMPLATES: &[StyleTemplate] = &[
    StyleTemplate {
        id: "neon",
        name: "Neon",
        description: "Vibrant purple/blue geometric patterns with cyberpunk aesthetic",
        color_scheme: "vibrant neon purple and electric blue gradient",
        base_elements: &[
            "geometric patterns",
            "digital grid overlay",
            "glowing edges",
            "cyberpunk aesthetic",
            "3D elements",
        ],
    },
    StyleTemplate {
        id: "ethereal",
        name: "Ethereal",
        description: "Soft auroras, Jerusalem themes, celestial atmosphere with gold accents",
        color_scheme: "soft aurora colors, heavenly light",
        base_elements: &[
            "flowing light streams",
            "celestial atmosphere",
            "gold accents",
            "divine radiance",
            "Jerusalem skyline silhouette",
        ],
    },
];

/// The selectable cover styles, in catalog order.
pub fn cover_styles() -> Vec<CoverStyle> {
    STYLE_TEMPLATES
        .iter()
        .map(|template| CoverStyle {
            id: template.id.to_string(),
            name: template.name.to_string(),
            description: template.description.to_string(),
        })
        .collect()
}

/// Build the deterministic base prompt for a track and style.
///
/// Unknown style IDs contribute no color scheme or base elements; the
/// audio-feature additions still apply. Absent features fall back to
/// typical trance values (energy 0.7, valence 0.5, 138 BPM).
pub fn build_cover_prompt(track: &Track, style: &str) -> String {
    let features = track.audio_features.as_ref();
    let energy = features.and_then(|f| f.energy).unwrap_or(0.7);
    let valence = features.and_then(|f| f.valence).unwrap_or(0.5);
    let bpm = features.and_then(|f| f.bpm).unwrap_or(138.0);

    let template = STYLE_TEMPLATES.iter().find(|t| t.id == style);
    let color_scheme = template.map(|t| t.color_scheme).unwrap_or("");
    let mut elements: Vec<&str> = template
        .map(|t| t.base_elements.to_vec())
        .unwrap_or_default();

    if energy > 0.8 {
        elements.extend(["dynamic motion blur", "intense lighting"]);
    } else if energy < 0.4 {
        elements.extend(["soft gradients", "peaceful atmosphere"]);
    }

    if valence > 0.7 {
        elements.extend(["uplifting rays", "bright highlights"]);
    } else if valence < 0.3 {
        elements.extend(["deep shadows", "moody lighting"]);
    }

    if bpm >= 150.0 {
        elements.extend(["high contrast", "sharp edges"]);
    } else if bpm <= 128.0 {
        elements.extend(["smooth transitions", "organic shapes"]);
    }

    format!(
        "Album cover for \"{}\" by {}, {}, {}, 3000x3000 resolution, professional music artwork, high quality, square format, modern electronic music design",
        track.title,
        track.artist_name(),
        color_scheme,
        elements.join(", ")
    )
}

fn sanitize_title(title: &str) -> String {
    title
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Generates cover artwork for tracks and persists it under `output_dir`.
pub struct CoverGenerator {
    art: Box<dyn CoverArtService>,
    output_dir: PathBuf,
}

impl CoverGenerator {
    pub fn new(art: Box<dyn CoverArtService>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            art,
            output_dir: output_dir.into(),
        }
    }

    /// Render cover artwork for `track` and return its web-relative path.
    ///
    /// The collaborator's prompt polish is best-effort: on failure the base
    /// prompt is used as-is. Image rendering failures are fatal and surface
    /// as [`Error::CoverArt`].
    pub async fn generate_cover(&self, track: &Track, style: &str) -> Result<String> {
        let base_prompt = build_cover_prompt(track, style);

        let prompt = match self.art.enhance_cover_prompt(track, &base_prompt).await {
            Ok(enhanced) => enhanced,
            Err(e) => {
                warn!("Cover prompt enhancement failed, using base prompt: {}", e);
                base_prompt
            }
        };

        fs::create_dir_all(&self.output_dir)?;

        let filename = format!(
            "{}_{}.png",
            sanitize_title(&track.title),
            Utc::now().timestamp_millis()
        );
        let image_path = self.output_dir.join(&filename);

        self.art
            .generate_cover_image(&prompt, &image_path)
            .await
            .map_err(|e| {
                error!("Cover image generation failed: {}", e);
                Error::CoverArt(e.to_string())
            })?;

        let dir_label = self
            .output_dir
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(DEFAULT_OUTPUT_DIR);
        let relative_path = format!("/{}/{}", dir_label, filename);

        info!(
            "Generated cover for \"{}\" at {}",
            track.title, relative_path
        );
        Ok(relative_path)
    }
}
