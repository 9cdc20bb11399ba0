//! Raster compositor.
//!
//! Paints a laid-out tree into one RGBA buffer. Each node is painted into
//! its own buffer sized to its box (clip, background, then content) and
//! composited into its parent at its layout offset, depth-first in child
//! order.
//!
//! Rendering is a pure function of the tree and the config: no locks, no
//! shared mutable state, so independent trees can render on any number of
//! threads at once.

pub mod canvas;
pub mod mask;

use std::io::Cursor;

use image::{ImageFormat, RgbaImage};

use crate::config::RenderConfig;
use crate::error::RenderError;
use crate::layout::{self, LayoutBox};
use crate::node::Node;
use crate::primitives::{Color, Rect};

use canvas::Canvas;

/// Renders node trees to pixel buffers.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Lay out and paint a tree.
    pub fn render(&self, node: &Node) -> Result<RgbaImage, RenderError> {
        if let Some(limit) = self.config.max_depth {
            if node.depth() > limit {
                return Err(RenderError::DepthLimit { limit });
            }
        }

        let root = layout::layout(node);
        let span = tracing::debug_span!(
            "render",
            width = root.rect.width,
            height = root.rect.height,
            nodes = root.node_count()
        );
        let _enter = span.enter();

        let image = self.paint(node, &root)?;
        tracing::debug!(width = image.width(), height = image.height(), "rendered");
        Ok(image)
    }

    /// Render and encode as PNG.
    pub fn render_png(&self, node: &Node) -> Result<Vec<u8>, RenderError> {
        let image = self.render(node)?;
        let mut bytes = Vec::new();
        image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }

    /// Render on tokio's blocking pool so async callers are not stalled.
    pub async fn render_detached(&self, node: Node) -> Result<RgbaImage, RenderError> {
        let renderer = self.clone();
        tokio::task::spawn_blocking(move || renderer.render(&node))
            .await
            .map_err(|e| RenderError::Join(e.to_string()))?
    }

    /// Render independent trees in parallel. Results keep input order; the
    /// first failure in input order is returned.
    pub async fn render_all(&self, nodes: Vec<Node>) -> Result<Vec<RgbaImage>, RenderError> {
        let handles: Vec<_> = nodes
            .into_iter()
            .map(|node| {
                let renderer = self.clone();
                tokio::task::spawn_blocking(move || renderer.render(&node))
            })
            .collect();

        let mut results = Vec::with_capacity(handles.len());
        for handle in handles {
            results.push(handle.await.map_err(|e| RenderError::Join(e.to_string()))?);
        }
        results.into_iter().collect()
    }

    fn allocate(&self, rect: Rect) -> Result<Canvas, RenderError> {
        if !rect.size().is_finite() {
            return Err(RenderError::NonFiniteSize);
        }
        let max = self.config.max_dimension;
        if rect.width > max as f32 || rect.height > max as f32 {
            return Err(RenderError::BufferTooLarge {
                width: rect.width,
                height: rect.height,
                max,
            });
        }
        let width = rect.width.ceil() as u32;
        let height = rect.height.ceil() as u32;
        if width == 0 || height == 0 {
            tracing::debug!(width, height, "zero-area node");
        } else {
            tracing::trace!(width, height, "allocate buffer");
        }
        Ok(Canvas::new(width, height))
    }

    fn paint(&self, node: &Node, layout: &LayoutBox) -> Result<RgbaImage, RenderError> {
        let mut canvas = self.allocate(layout.rect)?;
        let style = node.style();

        if style.border_radius > 0.0 {
            canvas.clip_rounded(style.border_radius);
        }
        if let Some(background) = style.background_color {
            canvas.fill(background);
        }

        let pad_x = style.padding_x.round() as i64;
        let pad_y = style.padding_y.round() as i64;

        match node {
            Node::Text(text) => {
                let color = style.font_color.unwrap_or(Color::WHITE);
                for glyph in text.font.glyph_run(&text.value) {
                    canvas.draw_glyph(pad_x, pad_y, &glyph, color);
                }
            }
            Node::Image(image) => {
                canvas.draw_image(pad_x, pad_y, &image.pixels);
            }
            Node::Container(container) => {
                for (child, child_layout) in container.children.iter().zip(&layout.children) {
                    let buffer = self.paint(child, child_layout)?;
                    let x = child_layout.offset.x.round() as i64;
                    let y = child_layout.offset.y.round() as i64;
                    canvas.draw_image(x, y, &buffer);
                    if style.debug {
                        let outline = Rect::from_origin_size(
                            child_layout.offset,
                            child_layout.rect.size(),
                        );
                        canvas.stroke_rect(outline, self.config.debug_color);
                    }
                }
            }
        }

        Ok(canvas.into_image())
    }
}

/// Render with the default configuration.
pub fn render(node: &Node) -> Result<RgbaImage, RenderError> {
    Renderer::default().render(node)
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{Font, FontFace};
    use crate::style::Style;
    use image::Rgba;

    fn solid(w: u32, h: u32, color: Color) -> RgbaImage {
        RgbaImage::from_pixel(w, h, color.to_rgba8())
    }

    #[test]
    fn leaf_image_renders_at_native_size() {
        let node = Node::image(solid(6, 4, Color::GREEN), Style::new()).unwrap();
        let image = render(&node).unwrap();
        assert_eq!(image.dimensions(), (6, 4));
        assert!(image.pixels().all(|p| p.0 == [0, 255, 0, 255]));
    }

    #[test]
    fn children_are_composited_at_offsets() {
        let node = Node::container(
            vec![
                Node::image(solid(2, 2, Color::RED), Style::new()).unwrap(),
                Node::image(solid(2, 2, Color::BLUE), Style::new()).unwrap(),
            ],
            Style::new().gap(1.0).padding(1.0, 1.0).background(Color::BLACK),
        )
        .unwrap();
        let image = render(&node).unwrap();
        assert_eq!(image.dimensions(), (7, 4));
        assert_eq!(image.get_pixel(0, 0).0, [0, 0, 0, 255]);
        assert_eq!(image.get_pixel(1, 1).0, [255, 0, 0, 255]);
        assert_eq!(image.get_pixel(3, 1).0, [0, 0, 0, 255]);
        assert_eq!(image.get_pixel(4, 2).0, [0, 0, 255, 255]);
    }

    #[test]
    fn translucent_child_blends_over_background() {
        let node = Node::container(
            vec![Node::image(solid(1, 1, Color::WHITE.with_alpha(0.0)), Style::new()).unwrap()],
            Style::new().background(Color::RED),
        )
        .unwrap();
        let image = render(&node).unwrap();
        assert_eq!(image.get_pixel(0, 0).0, [255, 0, 0, 255]);
    }

    #[test]
    fn text_paints_glyph_cells_in_font_color() {
        let font = Font::new(FontFace::block(0.5, 0.75, 0.25), 20.0);
        let node = Node::text("a", Style::new().font(font).font_color(Color::RED)).unwrap();
        let image = render(&node).unwrap();
        assert_eq!(image.dimensions(), (10, 20));
        assert_eq!(image.get_pixel(0, 0).0, [255, 0, 0, 255]);
        // One-pixel gap after each cell.
        assert_eq!(image.get_pixel(9, 0)[3], 0);
    }

    #[test]
    fn debug_outlines_children() {
        let node = Node::container(
            vec![Node::image(solid(4, 4, Color::TRANSPARENT), Style::new()).unwrap()],
            Style::new().padding(2.0, 2.0).debug(true),
        )
        .unwrap();
        let image = render(&node).unwrap();
        assert_eq!(*image.get_pixel(2, 2), Color::MAGENTA.to_rgba8());
        assert_eq!(image.get_pixel(3, 3)[3], 0);
        assert_eq!(image.get_pixel(0, 0)[3], 0);
    }

    #[test]
    fn oversized_box_is_an_error() {
        let renderer = Renderer::new(RenderConfig {
            max_dimension: 64,
            ..RenderConfig::default()
        });
        let node = Node::container(Vec::new(), Style::new().size(65.0, 10.0)).unwrap();
        assert!(matches!(
            renderer.render(&node),
            Err(RenderError::BufferTooLarge { max: 64, .. })
        ));
    }

    #[test]
    fn depth_limit_is_opt_in() {
        let mut node = Node::container(Vec::new(), Style::new()).unwrap();
        for _ in 0..10 {
            node = Node::container(vec![node], Style::new()).unwrap();
        }
        assert!(render(&node).is_ok());

        let strict = Renderer::new(RenderConfig {
            max_depth: Some(5),
            ..RenderConfig::default()
        });
        assert!(matches!(
            strict.render(&node),
            Err(RenderError::DepthLimit { limit: 5 })
        ));
    }

    #[test]
    fn empty_tree_renders_empty_buffer() {
        let node = Node::container(Vec::new(), Style::new()).unwrap();
        let image = render(&node).unwrap();
        assert_eq!(image.dimensions(), (0, 0));
    }

    #[test]
    fn png_has_signature() {
        let node = Node::image(solid(3, 3, Color::BLUE), Style::new()).unwrap();
        let bytes = Renderer::default().render_png(&node).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(decoded.get_pixel(1, 1), &Rgba([0, 0, 255, 255]));
    }
}
