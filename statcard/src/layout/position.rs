//! Main-axis distribution and cross-axis alignment.
//!
//! Axis-agnostic: callers pass main-axis lengths in and get local offsets
//! (relative to the padded content origin) back, so rows and columns share
//! one implementation.

use crate::style::{AlignItems, JustifyContent};

/// Where one child lands on the main axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MainPlacement {
    /// Offset from the start of the content area.
    pub offset: f32,
    /// Main-axis length the child is laid out at. Equals the child's own
    /// length except under `SpaceEvenly`.
    pub length: f32,
}

/// Distribute children along the main axis.
///
/// `available` is the container's main length minus both paddings. Extra
/// space is what is left after the children and their gaps; the spacing
/// modes never place children closer than `gap`. `SpaceBetween` alone
/// measures its free space against the children without gaps, so the last
/// child lands flush with the far edge. Overflowing content is not clipped:
/// free space bottoms out at zero and children run past the end.
pub fn distribute_main(
    justify: JustifyContent,
    available: f32,
    lengths: &[f32],
    gap: f32,
) -> Vec<MainPlacement> {
    let n = lengths.len();
    if n == 0 {
        return Vec::new();
    }

    // SpaceEvenly lays every child out as a uniform cell.
    let cells: Vec<f32> = if justify == JustifyContent::SpaceEvenly {
        let largest = lengths.iter().copied().fold(0.0f32, f32::max);
        vec![largest; n]
    } else {
        lengths.to_vec()
    };

    let sum: f32 = cells.iter().sum();
    let packed = sum + gap * (n - 1) as f32;
    let extra = (available - packed).max(0.0);

    let (start, spacing) = match justify {
        JustifyContent::Start => (0.0, gap),
        JustifyContent::Center => (extra / 2.0, gap),
        JustifyContent::End => (extra, gap),
        JustifyContent::SpaceBetween => {
            if n > 1 {
                let free = (available - sum).max(0.0);
                (0.0, gap.max(free / (n - 1) as f32))
            } else {
                // A lone child has nothing to space against.
                (extra / 2.0, gap)
            }
        }
        JustifyContent::SpaceAround | JustifyContent::SpaceEvenly => {
            let slot = extra / (n + 1) as f32;
            (slot, gap.max(slot))
        }
    };

    let mut cursor = start;
    cells
        .into_iter()
        .map(|length| {
            let placement = MainPlacement { offset: cursor, length };
            cursor += length + spacing;
            placement
        })
        .collect()
}

/// Cross-axis offset of a child within the content area.
///
/// Children larger than the area are not clipped; `Center` and `End` may
/// yield negative offsets.
#[inline]
pub fn align_cross(align: AlignItems, available: f32, child: f32) -> f32 {
    match align {
        AlignItems::Start => 0.0,
        AlignItems::Center => (available - child) / 2.0,
        AlignItems::End => available - child,
    }
}

// =========================================================================
// Tests
// =========================================================================
