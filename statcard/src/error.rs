//! Error types for tree construction, asset loading and rendering.

use std::path::PathBuf;

use thiserror::Error;

/// Failure while building a node tree. Raised eagerly by constructors.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("text node \"{0}\" has no font")]
    MissingFont(String),

    #[error("image node has no pixels ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    #[error("invalid style: {field} = {value}")]
    InvalidStyle { field: &'static str, value: f32 },

    #[error("image decode error: {0}")]
    ImageDecode(#[from] image::ImageError),

    #[error("unknown {kind} asset: {name}")]
    UnknownAsset { kind: &'static str, name: String },

    #[error("card document error: {0}")]
    Document(#[from] serde_json::Error),
}

/// Failure while loading fonts or images into the asset cache.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("font '{name}' could not be parsed: {reason}")]
    Font { name: String, reason: String },

    #[error("image '{name}' could not be decoded: {source}")]
    Image {
        name: String,
        #[source]
        source: image::ImageError,
    },

    #[error("io error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failure while rendering a tree. The first error aborts the whole render.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("buffer {width}x{height} exceeds the maximum dimension {max}")]
    BufferTooLarge { width: f32, height: f32, max: u32 },

    #[error("node resolved to a non-finite size")]
    NonFiniteSize,

    #[error("tree is deeper than the configured limit of {limit}")]
    DepthLimit { limit: usize },

    #[error("png encode error: {0}")]
    Encode(#[from] image::ImageError),

    #[error("render task failed: {0}")]
    Join(String),
}
