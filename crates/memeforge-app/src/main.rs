// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Memeforge — put a quote on a picture.
//
// Entry point. Initialises logging, loads configuration, builds the resource
// snapshot for whatever the user left out, and composes one meme.

mod generate;
mod resources;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser;
use memeforge_core::human_errors::humanize_error;
use memeforge_core::{EngineConfig, MemeforgeError};
use memeforge_document::Ingestor;
use memeforge_render::MemeEngine;
use rand::SeedableRng;
use rand::rngs::StdRng;

use generate::{MemeRequest, generate_meme};
use resources::Resources;

#[derive(Parser, Debug)]
#[command(name = "memeforge", version, about = "Generate a meme from a quote and an image")]
struct Cli {
    /// Image to draw on. A random image from the image directory otherwise.
    #[arg(long)]
    path: Option<PathBuf>,

    /// Quote body. A random quote from the quote files otherwise.
    #[arg(long)]
    body: Option<String>,

    /// Quote author. Required with --body.
    #[arg(long)]
    author: Option<String>,

    /// Output width in pixels.
    #[arg(long)]
    width: Option<u32>,

    /// Directory for generated images.
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// JSON configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the effective configuration (file plus flags) to this path and
    /// exit without generating anything.
    #[arg(long, value_name = "FILE")]
    save_config: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Memeforge starting");

    match run(Cli::parse()) {
        Ok(path) => {
            println!("{}", path.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<PathBuf> {
    let mut config = match &cli.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    if let Some(dir) = cli.output_dir {
        config.output_dir = dir;
    }
    if let Some(width) = cli.width {
        config.image_width = width;
    }
    if let Some(path) = cli.save_config {
        config.validate()?;
        config.save(&path)?;
        tracing::info!(path = %path.display(), "Configuration written");
        return Ok(path);
    }

    let request = MemeRequest {
        image: cli.path,
        body: cli.body,
        author: cli.author,
        width: cli.width,
    };
    // Reject a lone --body before touching the quote files.
    request.quote()?;

    let mut resources = Resources::default();
    if request.needs_random_image() {
        resources = resources.with_images(&config.image_dir);
    }
    if request.needs_random_quote() {
        let ingestor = Ingestor::from_config(&config);
        tracing::debug!(?ingestor, "Quote readers ready");
        resources = resources.with_quotes(&ingestor, &config.quote_files);
    }
    tracing::debug!(
        quotes = resources.quotes().len(),
        images = resources.images().len(),
        "Resource snapshot built"
    );

    let mut engine = MemeEngine::from_config(&config).with_context(|| {
        format!("cannot prepare output directory {}", config.output_dir.display())
    })?;
    let path = generate_meme(&request, &resources, &mut engine, &mut StdRng::from_entropy())?;
    Ok(path)
}

/// Print an error for a person rather than a log collector.
fn report(err: &anyhow::Error) {
    match err.downcast_ref::<MemeforgeError>() {
        Some(domain) => {
            let human = humanize_error(domain);
            eprintln!("error: {}", human.message);
            eprintln!("  {}", human.suggestion);
            tracing::debug!(error = %domain, severity = ?human.severity, "Generation failed");
        }
        None => eprintln!("error: {err:#}"),
    }
}
