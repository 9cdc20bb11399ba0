//! Bottom-up size resolution.
//!
//! Each node's box is derived from its content: text from font metrics,
//! images from their pixel dimensions, containers from their children. An
//! explicit width/height may grow a text or container box but never shrinks
//! it below content plus padding.

use crate::node::Node;
use crate::primitives::Size;
use crate::style::{Direction, JustifyContent, Style};

/// Resolved box of one node. Computed fresh on every layout.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ResolvedSize {
    /// Intrinsic content size, before padding and explicit overrides.
    pub content_width: f32,
    pub content_height: f32,
    /// Final box size.
    pub total_width: f32,
    pub total_height: f32,
}

impl ResolvedSize {
    #[inline]
    pub fn total(&self) -> Size {
        Size::new(self.total_width, self.total_height)
    }

    #[inline]
    pub fn content(&self) -> Size {
        Size::new(self.content_width, self.content_height)
    }
}

/// Main-axis length of a size.
#[inline]
pub(crate) fn main_of(size: Size, direction: Direction) -> f32 {
    if direction.is_vertical() { size.height } else { size.width }
}

/// Cross-axis length of a size.
#[inline]
pub(crate) fn cross_of(size: Size, direction: Direction) -> f32 {
    if direction.is_vertical() { size.width } else { size.height }
}

/// Build a size from main/cross lengths.
#[inline]
pub(crate) fn from_axes(main: f32, cross: f32, direction: Direction) -> Size {
    if direction.is_vertical() {
        Size::new(cross, main)
    } else {
        Size::new(main, cross)
    }
}

/// A node's resolved size together with its children's, mirroring the tree.
#[derive(Debug, Clone)]
pub(crate) struct SizedNode {
    pub size: ResolvedSize,
    pub children: Vec<SizedNode>,
}

/// Final length of one axis: content plus both paddings, grown to the
/// explicit length if one is set.
#[inline]
fn grow_to_explicit(explicit: Option<f32>, content: f32, padding: f32) -> f32 {
    let natural = content + 2.0 * padding;
    match explicit {
        Some(px) => px.max(natural),
        None => natural,
    }
}

/// Resolve sizes for a whole tree (post-order).
pub(crate) fn resolve(node: &Node) -> SizedNode {
    let style = node.style();
    match node {
        Node::Text(text) => {
            let metrics = text.font.measure(&text.value);
            leaf(style, Size::new(metrics.width, metrics.height()))
        }
        Node::Image(image) => {
            let native = Size::new(image.pixels.width() as f32, image.pixels.height() as f32);
            // An explicit size replaces the box outright; pixels are not resampled.
            let total_width = style
                .explicit_width()
                .unwrap_or(native.width + 2.0 * style.padding_x);
            let total_height = style
                .explicit_height()
                .unwrap_or(native.height + 2.0 * style.padding_y);
            SizedNode {
                size: ResolvedSize {
                    content_width: native.width,
                    content_height: native.height,
                    total_width,
                    total_height,
                },
                children: Vec::new(),
            }
        }
        Node::Container(container) => {
            let children: Vec<SizedNode> = container.children.iter().map(resolve).collect();
            let direction = style.direction;

            let mut main = 0.0f32;
            let mut cross = 0.0f32;
            for child in &children {
                main += main_of(child.size.total(), direction);
                cross = cross.max(cross_of(child.size.total(), direction));
            }
            if children.len() > 1 {
                main += style.gap * (children.len() - 1) as f32;
            }

            let content = from_axes(main, cross, direction);
            let mut sized = leaf(style, content);

            // SpaceEvenly lays children out as uniform cells, so the box must
            // hold n cells of the largest child. Content size stays the sum.
            if style.justify_content == JustifyContent::SpaceEvenly && !children.is_empty() {
                let n = children.len() as f32;
                let largest = children
                    .iter()
                    .map(|c| main_of(c.size.total(), direction))
                    .fold(0.0f32, f32::max);
                let padding = main_of(Size::new(style.padding_x, style.padding_y), direction);
                let cells = n * largest + style.gap * (n - 1.0) + 2.0 * padding;
                if direction.is_vertical() {
                    sized.size.total_height = sized.size.total_height.max(cells);
                } else {
                    sized.size.total_width = sized.size.total_width.max(cells);
                }
            }

            SizedNode { children, ..sized }
        }
    }
}

fn leaf(style: &Style, content: Size) -> SizedNode {
    let total_width = grow_to_explicit(style.explicit_width(), content.width, style.padding_x);
    let total_height = grow_to_explicit(style.explicit_height(), content.height, style.padding_y);

    let overflow_x = style.explicit_width().is_some_and(|w| w < total_width);
    let overflow_y = style.explicit_height().is_some_and(|h| h < total_height);
    if overflow_x || overflow_y {
        tracing::trace!(
            content_width = content.width,
            content_height = content.height,
            "content exceeds explicit size, box grown to fit"
        );
    }

    SizedNode {
        size: ResolvedSize {
            content_width: content.width,
            content_height: content.height,
            total_width,
            total_height,
        },
        children: Vec::new(),
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{Font, FontFace};
    use image::RgbaImage;

    fn font() -> Font {
        // 10px advance, 20px line box at size 20
        Font::new(FontFace::block(0.5, 0.75, 0.25), 20.0)
    }

    fn text(s: &str) -> Node {
        Node::text(s, Style::new().font(font())).unwrap()
    }

    fn image(w: u32, h: u32) -> Node {
        Node::image(RgbaImage::new(w, h), Style::new()).unwrap()
    }

    #[test]
    fn text_uses_font_metrics() {
        let sized = resolve(&text("abc"));
        assert_eq!(sized.size.content(), Size::new(30.0, 20.0));
        assert_eq!(sized.size.total(), Size::new(30.0, 20.0));
    }

    #[test]
    fn text_padding_adds_twice() {
        let node = Node::text("ab", Style::new().font(font()).padding(3.0, 2.0)).unwrap();
        let sized = resolve(&node);
        assert_eq!(sized.size.total(), Size::new(26.0, 24.0));
    }

    #[test]
    fn image_uses_native_dimensions() {
        let sized = resolve(&image(40, 30));
        assert_eq!(sized.size.total(), Size::new(40.0, 30.0));
    }

    #[test]
    fn image_override_replaces_box() {
        let node = Node::image(RgbaImage::new(40, 40), Style::new().size(16.0, 16.0)).unwrap();
        let sized = resolve(&node);
        assert_eq!(sized.size.content(), Size::new(40.0, 40.0));
        assert_eq!(sized.size.total(), Size::new(16.0, 16.0));
    }

    #[test]
    fn horizontal_content_width_sums_children_and_gaps() {
        for n in 0..5usize {
            let children: Vec<Node> = (0..n).map(|i| image(10 + i as u32, 5)).collect();
            let expected: f32 = (0..n).map(|i| (10 + i) as f32).sum::<f32>()
                + 7.0 * n.saturating_sub(1) as f32;
            let node = Node::container(children, Style::new().gap(7.0)).unwrap();
            let sized = resolve(&node);
            assert_eq!(sized.size.content_width, expected, "n = {n}");
        }
    }

    #[test]
    fn vertical_cross_is_max_child() {
        let node = Node::container(
            vec![image(40, 40), text("Label0")],
            Style::new().vertical().gap(4.0),
        )
        .unwrap();
        let sized = resolve(&node);
        assert_eq!(sized.size.content_width, 60.0);
        assert_eq!(sized.size.content_height, 40.0 + 4.0 + 20.0);
    }

    #[test]
    fn explicit_size_grows_but_never_shrinks() {
        let grown = Node::container(vec![image(10, 10)], Style::new().size(100.0, 50.0)).unwrap();
        assert_eq!(resolve(&grown).size.total(), Size::new(100.0, 50.0));

        let clamped = Node::container(vec![image(80, 80)], Style::new().size(20.0, 20.0)).unwrap();
        let sized = resolve(&clamped);
        assert_eq!(sized.size.total(), Size::new(80.0, 80.0));
    }

    #[test]
    fn explicit_size_includes_padding() {
        let node = Node::container(
            vec![image(10, 10)],
            Style::new().padding(5.0, 5.0).width(100.0),
        )
        .unwrap();
        let sized = resolve(&node);
        assert_eq!(sized.size.total_width, 100.0);
        assert_eq!(sized.size.total_height, 20.0);
    }

    #[test]
    fn space_evenly_box_holds_uniform_cells() {
        let node = Node::container(
            vec![image(10, 5), image(30, 5), image(10, 5)],
            Style::new()
                .justify_content(JustifyContent::SpaceEvenly)
                .gap(4.0)
                .padding(3.0, 0.0),
        )
        .unwrap();
        let sized = resolve(&node);
        assert_eq!(sized.size.content_width, 10.0 + 30.0 + 10.0 + 8.0);
        assert_eq!(sized.size.total_width, 3.0 * 30.0 + 8.0 + 6.0);
    }

    #[test]
    fn space_evenly_vertical_grows_height() {
        let node = Node::container(
            vec![image(5, 10), image(5, 20)],
            Style::new().vertical().justify_content(JustifyContent::SpaceEvenly),
        )
        .unwrap();
        assert_eq!(resolve(&node).size.total(), Size::new(5.0, 40.0));
    }

    #[test]
    fn space_evenly_respects_larger_explicit_width() {
        let node = Node::container(
            vec![image(10, 5), image(30, 5)],
            Style::new().justify_content(JustifyContent::SpaceEvenly).width(200.0),
        )
        .unwrap();
        assert_eq!(resolve(&node).size.total_width, 200.0);
    }

    #[test]
    fn empty_container_is_zero_content() {
        let node = Node::container(Vec::new(), Style::new().gap(10.0)).unwrap();
        let sized = resolve(&node);
        assert_eq!(sized.size.content(), Size::ZERO);
        assert_eq!(sized.size.total(), Size::ZERO);
    }
}
