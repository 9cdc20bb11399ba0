//! statcard: declarative layout and compositing for stat card images.
//!
//! A card is a tree of text, image and container nodes. Rendering runs three
//! passes over it:
//!
//! ```text
//! Node tree -> size resolution (post-order) -> positioning (per container) -> raster (depth-first)
//! ```
//!
//! and returns one RGBA buffer. The engine is stateless; fonts and images
//! come from an explicitly constructed [`AssetCache`].
//!
//! # Usage
//!
//! ```ignore
//! use statcard::{AssetCache, Node, Renderer, Style, JustifyContent};
//!
//! let assets = AssetCache::builder().font_file("bold", "fonts/bold.ttf")?.build();
//! let font = assets.font("bold", 24.0)?;
//! let card = Node::container(
//!     vec![
//!         Node::text("WN8", Style::new().font(font.clone()))?,
//!         Node::text("2,431", Style::new().font(font))?,
//!     ],
//!     Style::new().justify_content(JustifyContent::SpaceBetween).width(300.0),
//! )?;
//! let png = Renderer::default().render_png(&card)?;
//! ```

// Core primitives
pub mod error;
pub mod primitives;

// Tree model
pub mod font;
pub mod node;
pub mod style;

// Engine
pub mod layout;
pub mod raster;

// Collaborator-facing helpers
pub mod assets;
pub mod config;
pub mod document;

// Re-export core types
pub use assets::{AssetCache, AssetCacheBuilder};
pub use config::RenderConfig;
pub use document::CardDocument;
pub use error::{AssetError, BuildError, RenderError};
pub use font::{Font, FontFace, TextMetrics};
pub use layout::{LayoutBox, ResolvedSize, layout};
pub use node::Node;
pub use primitives::{Color, Point, Rect, Size};
pub use raster::{Renderer, render};
pub use style::{AlignItems, Direction, JustifyContent, Style};

pub use image::RgbaImage;
