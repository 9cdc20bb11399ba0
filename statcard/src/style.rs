//! Layout and paint parameters for a node.
//!
//! `Style` is a plain record with builder setters. Unset fields resolve to
//! the defaults documented on each field.

use serde::{Deserialize, Serialize};

use crate::error::BuildError;
use crate::font::Font;
use crate::primitives::Color;

/// Direction children flow in (the main axis).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    #[default]
    Horizontal,
    Vertical,
}

impl Direction {
    #[inline]
    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Vertical)
    }
}

/// Alignment on the cross axis (perpendicular to flow).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AlignItems {
    #[default]
    Start,
    Center,
    End,
}

/// Distribution of children along the main axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum JustifyContent {
    /// Pack children at the start.
    #[default]
    Start,
    /// Center children as a group.
    Center,
    /// Pack children at the end.
    End,
    /// First child at the start, last child at the end.
    SpaceBetween,
    /// Equal slots before, between and after children.
    SpaceAround,
    /// Like `SpaceAround`, and every child is stretched to the largest
    /// child's main-axis size.
    SpaceEvenly,
}

/// Style of one node.
#[derive(Debug, Clone, Default)]
pub struct Style {
    /// Main axis. Default: horizontal.
    pub direction: Direction,
    /// Cross-axis alignment. Default: start.
    pub align_items: AlignItems,
    /// Main-axis distribution. Default: start.
    pub justify_content: JustifyContent,
    /// Space between adjacent children.
    pub gap: f32,
    /// Horizontal padding, applied on both left and right.
    pub padding_x: f32,
    /// Vertical padding, applied on both top and bottom.
    pub padding_y: f32,
    /// Explicit box width. `None` or `0` means auto.
    pub width: Option<f32>,
    /// Explicit box height. `None` or `0` means auto.
    pub height: Option<f32>,
    pub background_color: Option<Color>,
    /// Corner radius of the clip. `0` disables rounding.
    pub border_radius: f32,
    /// Text leaves only.
    pub font: Option<Font>,
    /// Text leaves only. `None` paints white.
    pub font_color: Option<Color>,
    /// Outline every child's box. Does not affect layout.
    pub debug: bool,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn horizontal(self) -> Self {
        self.direction(Direction::Horizontal)
    }

    pub fn vertical(self) -> Self {
        self.direction(Direction::Vertical)
    }

    pub fn align_items(mut self, align: AlignItems) -> Self {
        self.align_items = align;
        self
    }

    pub fn justify_content(mut self, justify: JustifyContent) -> Self {
        self.justify_content = justify;
        self
    }

    pub fn gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }

    /// Set both paddings.
    pub fn padding(mut self, horizontal: f32, vertical: f32) -> Self {
        self.padding_x = horizontal;
        self.padding_y = vertical;
        self
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn size(self, width: f32, height: f32) -> Self {
        self.width(width).height(height)
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    pub fn border_radius(mut self, radius: f32) -> Self {
        self.border_radius = radius;
        self
    }

    pub fn font(mut self, font: Font) -> Self {
        self.font = Some(font);
        self
    }

    pub fn font_color(mut self, color: Color) -> Self {
        self.font_color = Some(color);
        self
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Explicit width, treating `0` as auto.
    #[inline]
    pub fn explicit_width(&self) -> Option<f32> {
        self.width.filter(|w| *w > 0.0)
    }

    /// Explicit height, treating `0` as auto.
    #[inline]
    pub fn explicit_height(&self) -> Option<f32> {
        self.height.filter(|h| *h > 0.0)
    }

    /// Reject negative or non-finite numeric fields.
    pub(crate) fn validate(&self) -> Result<(), BuildError> {
        let fields = [
            ("gap", Some(self.gap)),
            ("paddingX", Some(self.padding_x)),
            ("paddingY", Some(self.padding_y)),
            ("borderRadius", Some(self.border_radius)),
            ("width", self.width),
            ("height", self.height),
        ];
        for (field, value) in fields {
            if let Some(value) = value {
                if !value.is_finite() || value < 0.0 {
                    return Err(BuildError::InvalidStyle { field, value });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let style = Style::new();
        assert_eq!(style.direction, Direction::Horizontal);
        assert_eq!(style.justify_content, JustifyContent::Start);
        assert_eq!(style.align_items, AlignItems::Start);
        assert_eq!(style.gap, 0.0);
        assert_eq!(style.padding_x, 0.0);
        assert_eq!(style.explicit_width(), None);
        assert!(style.background_color.is_none());
        assert_eq!(style.border_radius, 0.0);
        assert!(!style.debug);
    }

    #[test]
    fn zero_size_means_auto() {
        let style = Style::new().size(0.0, 50.0);
        assert_eq!(style.explicit_width(), None);
        assert_eq!(style.explicit_height(), Some(50.0));
    }

    #[test]
    fn validate_rejects_negative_and_nan() {
        assert!(Style::new().gap(4.0).validate().is_ok());
        assert!(matches!(
            Style::new().gap(-1.0).validate(),
            Err(BuildError::InvalidStyle { field: "gap", .. })
        ));
        assert!(matches!(
            Style::new().width(f32::NAN).validate(),
            Err(BuildError::InvalidStyle { field: "width", .. })
        ));
    }
}
