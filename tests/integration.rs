use viral_trance_ai::{
    ai::{EnhancementService, MockCoverArtClient, MockEnhancementClient},
    app::App,
    cover::{build_cover_prompt, cover_styles, CoverGenerator},
    models::{Artist, AudioFeatures, PlatformScores, Track, ViralAnalysis},
    Error,
};

fn create_test_track() -> Track {
    Track {
        id: 42,
        title: "Geulah Sunrise".to_string(),
        artist: Some(Artist {
            name: "DJ Nachman".to_string(),
        }),
        audio_features: Some(AudioFeatures {
            bpm: Some(140.0),
            energy: Some(0.9),
            valence: Some(0.8),
        }),
        tags: Some(vec!["uplifting".to_string(), "spiritual".to_string()]),
    }
}

#[tokio::test]
async fn test_full_cover_workflow_with_mocks() {
    let temp = tempfile::tempdir().unwrap();
    let output_dir = temp.path().join("generated_covers");

    let art = MockCoverArtClient::new()
        .with_enhance_response("A radiant sunrise over Jerusalem, gold accents".to_string());
    let art_probe = art.clone();

    let generator = CoverGenerator::new(Box::new(art), &output_dir);

    let web_path = generator
        .generate_cover(&create_test_track(), "ethereal")
        .await
        .unwrap();

    // Web-relative path, sanitized filename
    assert!(web_path.starts_with("/generated_covers/Geulah_Sunrise_"));
    assert!(web_path.ends_with(".png"));

    // The polished prompt reached the image model
    assert_eq!(
        art_probe.image_prompts(),
        vec!["A radiant sunrise over Jerusalem, gold accents".to_string()]
    );

    // And the rendered image exists on disk
    let filename = web_path.rsplit('/').next().unwrap();
    let bytes = std::fs::read(output_dir.join(filename)).unwrap();
    assert!(bytes.starts_with(&[0x89, 0x50, 0x4E, 0x47]));
}

#[tokio::test]
async fn test_cover_workflow_survives_enhancement_outage() {
    let temp = tempfile::tempdir().unwrap();
    let output_dir = temp.path().join("covers");

    let art = MockCoverArtClient::new().with_enhance_failure(true);
    let art_probe = art.clone();

    let track = create_test_track();
    let generator = CoverGenerator::new(Box::new(art), &output_dir);

    let web_path = generator.generate_cover(&track, "neon").await.unwrap();
    assert!(web_path.starts_with("/covers/"));

    // The deterministic base prompt was used instead
    assert_eq!(
        art_probe.image_prompts(),
        vec![build_cover_prompt(&track, "neon")]
    );
}

#[tokio::test]
async fn test_cover_workflow_fails_without_rendered_image() {
    let temp = tempfile::tempdir().unwrap();
    let output_dir = temp.path().join("covers");

    let generator = CoverGenerator::new(
        Box::new(MockCoverArtClient::new().with_image_failure(true)),
        &output_dir,
    );

    let err = generator
        .generate_cover(&create_test_track(), "neon")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::CoverArt(_)));

    // And nothing was written to the output directory
    assert_eq!(std::fs::read_dir(&output_dir).unwrap().count(), 0);
}

#[tokio::test]
async fn test_enhancement_fallbacks_echo_inputs() {
    let client = MockEnhancementClient::new().with_failure(true);

    let enhanced = client.enhance_prompt("original prompt", "euphoric").await;
    assert!(enhanced.is_fallback());
    assert_eq!(enhanced.value(), "original prompt");

    let spirit = client.enrich_spiritual_content("original content").await;
    assert!(spirit.is_fallback());
    assert_eq!(spirit.value(), "original content");

    let analysis = client.analyze_viral_potential("Title", "Description").await;
    assert!(analysis.is_fallback());
    assert_eq!(analysis.value(), &ViralAnalysis::fallback());
}

#[tokio::test]
async fn test_multiple_enhancements_cycle_responses() {
    let client = MockEnhancementClient::new()
        .with_prompt_response("Euphoric version".to_string())
        .with_prompt_response("Dark version".to_string());

    let first = client.enhance_prompt("base", "euphoric").await;
    let second = client.enhance_prompt("base", "dark").await;

    assert_eq!(first.value(), "Euphoric version");
    assert_eq!(second.value(), "Dark version");
    assert_eq!(client.get_call_count(), 2);
}

#[tokio::test]
async fn test_app_cover_requires_gemini_credentials() {
    let app = App::with_services(Box::new(MockEnhancementClient::new()), None);

    let err = app.cover(&create_test_track(), "neon").await.unwrap_err();
    assert!(matches!(err, Error::Config(_)));
    assert!(err.to_string().contains("GEMINI_API_KEY"));
}

#[tokio::test]
async fn test_app_end_to_end_with_mocks() {
    let temp = tempfile::tempdir().unwrap();

    let custom_analysis = ViralAnalysis {
        viral_score: 93,
        strengths: vec!["Massive drop".to_string()],
        improvements: vec![],
        platforms: PlatformScores {
            tiktok: 97,
            instagram: 90,
            youtube: 85,
            spotify: 88,
        },
        best_time_to_post: "Thursday 8 PM".to_string(),
        target_audience: vec!["Festival goers".to_string()],
        hashtag_suggestions: vec!["#geulah".to_string()],
    };

    let app = App::with_services(
        Box::new(
            MockEnhancementClient::new()
                .with_prompt_response("Enhanced anthem".to_string())
                .with_analysis_response(custom_analysis.clone()),
        ),
        Some(CoverGenerator::new(
            Box::new(MockCoverArtClient::new()),
            temp.path().join("generated_covers"),
        )),
    );

    let enhanced = app.enhance("anthem", "euphoric").await;
    assert!(!enhanced.is_fallback());
    assert_eq!(enhanced.value(), "Enhanced anthem");

    let analysis = app.analyze("Geulah Sunrise", "Uplifting trance").await;
    assert_eq!(analysis.value(), &custom_analysis);

    let web_path = app.cover(&create_test_track(), "ethereal").await.unwrap();
    assert!(web_path.starts_with("/generated_covers/"));

    assert_eq!(app.styles().len(), 2);

    let status = app.status();
    assert!(status.enhancement_available);
    assert!(status.cover_generation_configured);
}

#[tokio::test]
async fn test_track_payload_drives_cover_prompt() {
    // Shape the web app sends for a track
    let json = r#"{
        "id": 7,
        "title": "Night Drive",
        "artist": { "name": "Trancer" },
        "audioFeatures": { "bpm": 152.0, "energy": 0.85, "valence": 0.5 }
    }"#;

    let track: Track = serde_json::from_str(json).unwrap();
    let prompt = build_cover_prompt(&track, "neon");

    assert!(prompt.contains("\"Night Drive\" by Trancer"));
    assert!(prompt.contains("high contrast, sharp edges"));
}

#[test]
fn test_cover_styles_catalog_is_stable() {
    let first = cover_styles();
    let second = cover_styles();
    assert_eq!(first, second);
    assert_eq!(first[0].id, "neon");
    assert_eq!(first[1].id, "ethereal");
}

#[test]
fn test_viral_analysis_fallback_matches_api_contract() {
    let json = serde_json::to_value(ViralAnalysis::fallback()).unwrap();

    assert_eq!(json["viralScore"], 75);
    assert_eq!(json["platforms"]["tiktok"], 80);
    assert_eq!(json["bestTimeToPost"], "Friday 6-8 PM");
    assert_eq!(json["targetAudience"][0], "Trance lovers");
}
