//! # card-news
//!
//! Renders the card news home page to static HTML.
//!
//! ## Usage
//!
//! ```bash
//! # Built-in dataset to stdout
//! card-news
//!
//! # Own dataset, written to a file
//! card-news --data news.json --output index.html
//! ```

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use card_news::config::CardNewsConfig;
use card_news::types::{load_news, temp_news};
use card_news::{RenderOptions, render_document, render_fragment};

#[derive(Parser, Debug)]
#[command(name = "card-news")]
#[command(about = "Render the card news home page to static HTML")]
#[command(version)]
struct Args {
    /// JSON dataset (array of {id, title, description, category})
    #[arg(short, long, value_name = "FILE")]
    data: Option<PathBuf>,

    /// Write HTML to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Emit only the page fragment, without the document shell
    #[arg(long)]
    fragment: bool,

    /// Do not inline the stylesheet
    #[arg(long)]
    no_inline_css: bool,

    /// Config file (default: ./card-news.toml when present)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn load_config(args: &Args) -> Result<CardNewsConfig> {
    match &args.config {
        Some(path) => CardNewsConfig::load_from_path(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => Ok(CardNewsConfig::load(Path::new("."))),
    }
}

fn run(args: Args) -> Result<()> {
    let config = load_config(&args)?;
    debug!(?config, "resolved configuration");

    let news = match args.data.as_ref().or(config.data.as_ref()) {
        Some(path) => load_news(path).context("loading news dataset")?,
        None => temp_news(),
    };

    let options = RenderOptions {
        styles: config.home_styles(),
        inline_css: config.inline_css && !args.no_inline_css,
    };

    let html = if args.fragment {
        render_fragment(&news, &options)
    } else {
        render_document(&news, &options)
    };

    match args.output.as_ref().or(config.output.as_ref()) {
        Some(path) => {
            std::fs::write(path, &html)
                .with_context(|| format!("writing {}", path.display()))?;
            info!(path = %path.display(), cards = news.len(), bytes = html.len(), "page written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(html.as_bytes())
                .and_then(|()| stdout.write_all(b"\n"))
                .context("writing to stdout")?;
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[card-news] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
