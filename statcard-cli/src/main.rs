//! statcard - render a card document to PNG.

mod cli;
mod logging;

use std::fs;

use anyhow::{Context, Result};
use clap::Parser;
use statcard::{AssetCache, CardDocument, RenderConfig, Renderer};

use crate::cli::Args;
use crate::logging::setup_logging;

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    let config = match &args.config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            RenderConfig::from_json(&json)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => RenderConfig::default(),
    };

    let mut builder = AssetCache::builder();
    for (name, path) in &args.fonts {
        builder = builder.font_file(name.as_str(), path)?;
    }
    for (name, path) in &args.images {
        builder = builder.image_file(name.as_str(), path)?;
    }
    let assets = builder.build();

    let json = fs::read_to_string(&args.document)
        .with_context(|| format!("reading document {}", args.document.display()))?;
    let card = CardDocument::from_json(&json)
        .and_then(|doc| doc.build(&assets))
        .with_context(|| format!("building card from {}", args.document.display()))?;

    let png = Renderer::new(config)
        .render_png(&card)
        .context("rendering card")?;
    fs::write(&args.output, &png)
        .with_context(|| format!("writing {}", args.output.display()))?;

    tracing::info!(output = %args.output.display(), bytes = png.len(), "card written");
    Ok(())
}
