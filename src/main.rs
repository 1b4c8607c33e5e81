//! Tubeloader - YouTube downloader demo
//!
//! A desktop mock of a video/playlist downloader. URLs are classified as
//! they are typed; "downloads" wait a fixed delay and produce a fabricated
//! history entry. Nothing is fetched and nothing is written to disk.

use anyhow::{anyhow, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tubeloader::{app, classify, AppSettings, DownloadController, History, VideoQuality};

#[derive(Parser)]
#[command(version, about = "YouTube downloader demo")]
struct Args {
    /// Print how a URL is classified and exit
    #[arg(long, value_name = "URL")]
    classify: Option<String>,

    /// Run one simulated download headlessly and print the record as JSON
    #[arg(long, value_name = "URL")]
    simulate: Option<String>,

    /// Quality for --simulate (highest, high, medium, low, audio)
    #[arg(long, value_parser = parse_quality)]
    quality: Option<VideoQuality>,

    /// Seed for titles, thumbnails and ids
    #[arg(long)]
    seed: Option<u64>,

    /// Config file (defaults to <config dir>/tubeloader/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn parse_quality(tag: &str) -> Result<VideoQuality, String> {
    VideoQuality::from_tag(tag).ok_or_else(|| format!("unknown quality '{}'", tag))
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut settings = AppSettings::load_or_default(args.config.as_deref())?;
    if let Some(quality) = args.quality {
        settings.quality = quality;
    }

    if let Some(url) = args.classify {
        let result = classify(&url);
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if let Some(url) = args.simulate {
        // Run headless inside a temporary Tokio runtime
        let rt = tokio::runtime::Runtime::new()?;
        return rt.block_on(simulate_cli(url, settings, args.seed));
    }

    app::run(settings)
}

async fn simulate_cli(url: String, settings: AppSettings, seed: Option<u64>) -> Result<()> {
    let mut controller = match seed {
        Some(seed) => DownloadController::seeded(&settings, seed),
        None => DownloadController::new(&settings),
    };
    let mut history = History::new();

    let classification = controller.update_url(url.as_str());
    eprintln!("Detected type: {}", classification.category.label());

    let record = controller
        .submit(&mut history)
        .await
        .map_err(|e| anyhow!("{}: {}", e, url))?;

    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}
