//! Command-line arguments.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

/// Render a JSON card document to PNG.
#[derive(Debug, Parser)]
#[command(name = "statcard", version, about)]
pub struct Args {
    /// Card document (JSON).
    #[arg(short, long)]
    pub document: PathBuf,

    /// Output PNG path.
    #[arg(short, long, default_value = "card.png")]
    pub output: PathBuf,

    /// Renderer config (JSON). Defaults apply when omitted.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Font asset as NAME=PATH. Repeatable.
    #[arg(long = "font", value_parser = parse_asset)]
    pub fonts: Vec<(String, PathBuf)>,

    /// Image asset as NAME=PATH. Repeatable.
    #[arg(long = "image", value_parser = parse_asset)]
    pub images: Vec<(String, PathBuf)>,

    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_asset(value: &str) -> Result<(String, PathBuf)> {
    let (name, path) = value
        .split_once('=')
        .with_context(|| format!("expected NAME=PATH, got '{value}'"))?;
    if name.is_empty() {
        anyhow::bail!("asset name is empty in '{value}'");
    }
    Ok((name.to_string(), PathBuf::from(path)))
}
