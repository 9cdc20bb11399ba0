//! Layout tree nodes.
//!
//! A tree is built once per card, validated eagerly at construction, and is
//! never mutated by layout or rendering. Parents own their children outright.

use std::sync::Arc;

use image::RgbaImage;

use crate::error::BuildError;
use crate::font::Font;
use crate::style::Style;

/// A text leaf.
#[derive(Debug, Clone)]
pub struct TextNode {
    pub(crate) value: String,
    pub(crate) font: Font,
    pub(crate) style: Style,
}

impl TextNode {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn font(&self) -> &Font {
        &self.font
    }
}

/// An image leaf. Pixels are shared so large icons are not copied per card.
#[derive(Debug, Clone)]
pub struct ImageNode {
    pub(crate) pixels: Arc<RgbaImage>,
    pub(crate) style: Style,
}

impl ImageNode {
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }
}

/// A container with ordered children. Child order is layout and paint order.
#[derive(Debug, Clone)]
pub struct ContainerNode {
    pub(crate) children: Vec<Node>,
    pub(crate) style: Style,
}

/// A unit of the layout tree.
#[derive(Debug, Clone)]
pub enum Node {
    Text(TextNode),
    Image(ImageNode),
    Container(ContainerNode),
}

impl Node {
    /// Build a text leaf. The style must carry a font.
    pub fn text(value: impl Into<String>, style: Style) -> Result<Self, BuildError> {
        let value = value.into();
        style.validate()?;
        let Some(font) = style.font.clone() else {
            return Err(BuildError::MissingFont(value));
        };
        Ok(Node::Text(TextNode { value, font, style }))
    }

    /// Build an image leaf from decoded pixels.
    pub fn image(pixels: impl Into<Arc<RgbaImage>>, style: Style) -> Result<Self, BuildError> {
        let pixels = pixels.into();
        style.validate()?;
        if pixels.width() == 0 || pixels.height() == 0 {
            return Err(BuildError::EmptyImage {
                width: pixels.width(),
                height: pixels.height(),
            });
        }
        Ok(Node::Image(ImageNode { pixels, style }))
    }

    /// Decode an encoded image (PNG, JPEG, ...) and build an image leaf.
    pub fn image_from_bytes(bytes: &[u8], style: Style) -> Result<Self, BuildError> {
        let pixels = image::load_from_memory(bytes)?.to_rgba8();
        Self::image(pixels, style)
    }

    /// Build a container. Zero children is legal.
    pub fn container(
        children: impl IntoIterator<Item = Node>,
        style: Style,
    ) -> Result<Self, BuildError> {
        style.validate()?;
        Ok(Node::Container(ContainerNode {
            children: children.into_iter().collect(),
            style,
        }))
    }

    pub fn style(&self) -> &Style {
        match self {
            Node::Text(t) => &t.style,
            Node::Image(i) => &i.style,
            Node::Container(c) => &c.style,
        }
    }

    /// Children in layout order. Leaves have none.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Container(c) => &c.children,
            _ => &[],
        }
    }

    /// Short name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Text(_) => "text",
            Node::Image(_) => "image",
            Node::Container(_) => "container",
        }
    }

    /// Depth of the deepest leaf; a lone leaf has depth 1.
    pub fn depth(&self) -> usize {
        1 + self.children().iter().map(Node::depth).max().unwrap_or(0)
    }
}
