//! JSON card documents.
//!
//! A card document describes a node tree by asset *name*: fonts and images
//! are resolved against an [`AssetCache`] when the document is built.
//!
//! ```json
//! {
//!   "type": "container",
//!   "style": { "direction": "vertical", "alignItems": "center", "gap": 4 },
//!   "children": [
//!     { "type": "image", "src": "wn8" },
//!     { "type": "text", "value": "2,431", "style": { "font": { "name": "bold", "size": 24 } } }
//!   ]
//! }
//! ```

use serde::Deserialize;

use crate::assets::AssetCache;
use crate::error::BuildError;
use crate::node::Node;
use crate::primitives::Color;
use crate::style::{AlignItems, Direction, JustifyContent, Style};

/// Font reference by asset name.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FontRef {
    pub name: String,
    pub size: f32,
}

/// Style as written in a document. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct StyleDocument {
    pub direction: Direction,
    pub align_items: AlignItems,
    pub justify_content: JustifyContent,
    pub gap: f32,
    pub padding_x: f32,
    pub padding_y: f32,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub background_color: Option<Color>,
    pub border_radius: f32,
    pub font: Option<FontRef>,
    pub font_color: Option<Color>,
    pub debug: bool,
}

impl StyleDocument {
    fn build(&self, assets: &AssetCache) -> Result<Style, BuildError> {
        let font = match &self.font {
            Some(font) => Some(assets.font(&font.name, font.size)?),
            None => None,
        };
        Ok(Style {
            direction: self.direction,
            align_items: self.align_items,
            justify_content: self.justify_content,
            gap: self.gap,
            padding_x: self.padding_x,
            padding_y: self.padding_y,
            width: self.width,
            height: self.height,
            background_color: self.background_color,
            border_radius: self.border_radius,
            font,
            font_color: self.font_color,
            debug: self.debug,
        })
    }
}

/// One node of a card document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CardDocument {
    Container {
        #[serde(default)]
        style: StyleDocument,
        #[serde(default)]
        children: Vec<CardDocument>,
    },
    Text {
        value: String,
        #[serde(default)]
        style: StyleDocument,
    },
    Image {
        src: String,
        #[serde(default)]
        style: StyleDocument,
    },
}

impl CardDocument {
    pub fn from_json(json: &str) -> Result<Self, BuildError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Resolve assets and build the node tree.
    pub fn build(&self, assets: &AssetCache) -> Result<Node, BuildError> {
        match self {
            CardDocument::Container { style, children } => {
                let children = children
                    .iter()
                    .map(|child| child.build(assets))
                    .collect::<Result<Vec<_>, _>>()?;
                Node::container(children, style.build(assets)?)
            }
            CardDocument::Text { value, style } => Node::text(value.clone(), style.build(assets)?),
            CardDocument::Image { src, style } => Node::image(assets.image(src)?, style.build(assets)?),
        }
    }
}
