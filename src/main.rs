use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use viral_trance_ai::app::App;
use viral_trance_ai::models::{Artist, AudioFeatures, Track};

#[derive(Debug, Parser)]
#[command(name = "viral-trance-ai")]
#[command(about = "AI enrichment and cover generation for Viral Trance Creator")]
struct CliArgs {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rewrite a track prompt for maximum viral impact
    Enhance {
        prompt: String,
        /// Mood the enhanced prompt should aim for.
        #[arg(long, default_value = "euphoric")]
        mood: String,
    },
    /// Score a track's viral potential across platforms
    Analyze {
        title: String,
        description: String,
    },
    /// Weave spiritual themes into track content
    Spirit { content: String },
    /// Generate cover artwork for a track
    Cover {
        #[arg(long)]
        title: String,
        #[arg(long)]
        artist: Option<String>,
        #[arg(long)]
        bpm: Option<f32>,
        #[arg(long)]
        energy: Option<f32>,
        #[arg(long)]
        valence: Option<f32>,
        /// Track ID in the application database.
        #[arg(long, default_value_t = 0)]
        id: i64,
        #[arg(long, default_value = "neon")]
        style: String,
    },
    /// List the available cover styles
    Styles,
    /// Report provider credential status
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "viral_trance_ai=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = CliArgs::parse();
    let app = App::from_env();

    match run(&app, args.command).await {
        Ok(()) => Ok(()),
        Err(e) => {
            error!("Command failed: {}", e);
            std::process::exit(1);
        }
    }
}

async fn run(app: &App, command: Command) -> viral_trance_ai::Result<()> {
    match command {
        Command::Enhance { prompt, mood } => {
            let result = app.enhance(&prompt, &mood).await;
            if result.is_fallback() {
                info!("Enhancement unavailable, returning the original prompt");
            }
            println!("{}", result.into_inner());
        }
        Command::Analyze { title, description } => {
            let result = app.analyze(&title, &description).await;
            if result.is_fallback() {
                info!("Viral analysis unavailable, returning default scores");
            }
            println!("{}", serde_json::to_string_pretty(result.value())?);
        }
        Command::Spirit { content } => {
            let result = app.spirit(&content).await;
            if result.is_fallback() {
                info!("Spiritual enrichment unavailable, returning the original content");
            }
            println!("{}", result.into_inner());
        }
        Command::Cover {
            title,
            artist,
            bpm,
            energy,
            valence,
            id,
            style,
        } => {
            let track = Track {
                id,
                title,
                artist: artist.map(|name| Artist { name }),
                audio_features: Some(AudioFeatures { bpm, energy, valence }),
                tags: None,
            };
            let path = app.cover(&track, &style).await?;
            println!("{}", path);
        }
        Command::Styles => {
            for style in app.styles() {
                println!("{}: {} - {}", style.id, style.name, style.description);
            }
        }
        Command::Status => {
            let status = app.status();
            println!(
                "OpenRouter enhancement: {}",
                if status.enhancement_available {
                    "available"
                } else {
                    "unavailable (OPENROUTER_API_KEY not set)"
                }
            );
            println!(
                "Gemini cover generation: {}",
                if status.cover_generation_configured {
                    "configured"
                } else {
                    "not configured (GEMINI_API_KEY not set)"
                }
            );
        }
    }
    Ok(())
}
