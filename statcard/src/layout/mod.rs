//! Layout for statcard trees.
//!
//! ```text
//! Node tree -> resolve() sizes (post-order) -> arrange() offsets (pre-order) -> LayoutBox tree
//! ```
//!
//! The result mirrors the node tree one box per node and is consumed by the
//! compositor. Nothing is cached between calls.

pub mod position;
pub mod size;

pub use position::{MainPlacement, align_cross, distribute_main};
pub use size::ResolvedSize;

use crate::node::Node;
use crate::primitives::{Point, Rect, Size};

use size::{SizedNode, cross_of, from_axes, main_of};

/// The laid-out box of one node.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutBox {
    /// Sizes from the resolver.
    pub size: ResolvedSize,
    /// Offset from the parent's top-left corner.
    pub offset: Point,
    /// Absolute box in root coordinates. Its size is the box the node is
    /// painted at, which can exceed `size.total_*` for a child stretched by
    /// a `SpaceEvenly` parent.
    pub rect: Rect,
    pub children: Vec<LayoutBox>,
}

impl LayoutBox {
    /// Total number of boxes in this subtree.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(LayoutBox::node_count).sum::<usize>()
    }
}

/// Lay out a tree with its root at the origin.
pub fn layout(node: &Node) -> LayoutBox {
    let sized = size::resolve(node);
    let root_size = sized.size.total();
    arrange(node, &sized, Point::ORIGIN, Point::ORIGIN, root_size)
}

/// Position `node`'s children inside a box of `assigned` size at `origin`.
fn arrange(
    node: &Node,
    sized: &SizedNode,
    offset: Point,
    origin: Point,
    assigned: Size,
) -> LayoutBox {
    let style = node.style();
    let children = node.children();

    let mut boxes = Vec::with_capacity(children.len());
    if !children.is_empty() {
        let direction = style.direction;
        let padding = Size::new(style.padding_x, style.padding_y);
        let main_padding = main_of(padding, direction);
        let cross_padding = cross_of(padding, direction);

        let available_main = main_of(assigned, direction) - 2.0 * main_padding;
        let available_cross = cross_of(assigned, direction) - 2.0 * cross_padding;

        let lengths: Vec<f32> = sized
            .children
            .iter()
            .map(|c| main_of(c.size.total(), direction))
            .collect();
        let placements =
            position::distribute_main(style.justify_content, available_main, &lengths, style.gap);

        for ((child, child_sized), placement) in
            children.iter().zip(&sized.children).zip(placements)
        {
            let child_cross = cross_of(child_sized.size.total(), direction);
            let cross = position::align_cross(style.align_items, available_cross, child_cross);

            let local = from_axes(
                main_padding + placement.offset,
                cross_padding + cross,
                direction,
            );
            let child_offset = Point::new(local.width, local.height);
            let child_assigned = from_axes(placement.length, child_cross, direction);

            boxes.push(arrange(
                child,
                child_sized,
                child_offset,
                origin + child_offset,
                child_assigned,
            ));
        }
    }

    LayoutBox {
        size: sized.size,
        offset,
        rect: Rect::from_origin_size(origin, assigned),
        children: boxes,
    }
}

// =========================================================================
// Tests
// =========================================================================
