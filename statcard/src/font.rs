//! Font faces, text measurement and glyph rasterization.
//!
//! Uses fontdue for outline fonts. A string is treated as one pre-shaped run:
//! glyphs advance left to right with pair kerning, no line breaking and no
//! bidi reordering.

use std::fmt;
use std::sync::Arc;

/// A loaded font face.
#[derive(Clone)]
pub enum FontFace {
    /// A parsed TrueType/OpenType font.
    Outline(Arc<fontdue::Font>),
    /// A metrics-only monospace face. Values are fractions of the font size.
    /// Paints each visible character as a solid cell.
    Block { advance: f32, ascent: f32, descent: f32 },
}

impl FontFace {
    /// Parse a font from TTF/OTF bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, String> {
        fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map(|font| FontFace::Outline(Arc::new(font)))
            .map_err(|e| e.to_string())
    }

    /// A block face with the given em-relative metrics.
    pub fn block(advance: f32, ascent: f32, descent: f32) -> Self {
        FontFace::Block { advance, ascent, descent }
    }
}

impl fmt::Debug for FontFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontFace::Outline(font) => f
                .debug_struct("Outline")
                .field("glyphs", &font.glyph_count())
                .finish(),
            FontFace::Block { advance, ascent, descent } => f
                .debug_struct("Block")
                .field("advance", advance)
                .field("ascent", ascent)
                .field("descent", descent)
                .finish(),
        }
    }
}

/// Measured extent of a text run, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextMetrics {
    /// Sum of advance widths (plus kerning).
    pub width: f32,
    /// Distance from the top of the line box to the baseline.
    pub ascent: f32,
    /// Distance from the baseline to the bottom of the line box (positive).
    pub descent: f32,
}

impl TextMetrics {
    /// Line box height: ascent plus descender.
    #[inline]
    pub fn height(&self) -> f32 {
        self.ascent + self.descent
    }
}

/// A rasterized glyph positioned relative to the top-left of its text box.
#[derive(Debug, Clone)]
pub struct PositionedGlyph {
    pub x: i32,
    pub y: i32,
    pub width: usize,
    pub height: usize,
    /// Row-major 8-bit coverage, `width * height` bytes.
    pub coverage: Vec<u8>,
}

/// A font face at a pixel size. Cheap to clone.
#[derive(Debug, Clone)]
pub struct Font {
    face: FontFace,
    size: f32,
}

impl Font {
    pub fn new(face: FontFace, size: f32) -> Self {
        Self { face, size }
    }

    pub fn face(&self) -> &FontFace {
        &self.face
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    /// Vertical metrics for this size: (ascent, descent), both positive.
    fn line_metrics(&self) -> (f32, f32) {
        match &self.face {
            FontFace::Outline(font) => font
                .horizontal_line_metrics(self.size)
                .map(|m| (m.ascent, -m.descent))
                .unwrap_or((self.size, 0.0)),
            FontFace::Block { ascent, descent, .. } => (ascent * self.size, descent * self.size),
        }
    }

    /// Measure a string as a single run.
    pub fn measure(&self, text: &str) -> TextMetrics {
        let (ascent, descent) = self.line_metrics();
        let width = match &self.face {
            FontFace::Outline(font) => {
                let mut width = 0.0;
                let mut prev: Option<char> = None;
                for ch in text.chars() {
                    if let Some(p) = prev {
                        width += font.horizontal_kern(p, ch, self.size).unwrap_or(0.0);
                    }
                    width += font.metrics(ch, self.size).advance_width;
                    prev = Some(ch);
                }
                width
            }
            FontFace::Block { advance, .. } => text.chars().count() as f32 * advance * self.size,
        };
        TextMetrics { width, ascent, descent }
    }

    /// Rasterize a string into positioned coverage bitmaps.
    ///
    /// The baseline sits at `ascent` below the top of the text box.
    pub fn glyph_run(&self, text: &str) -> Vec<PositionedGlyph> {
        let (ascent, descent) = self.line_metrics();
        let mut glyphs = Vec::with_capacity(text.len());
        let mut pen_x = 0.0f32;

        match &self.face {
            FontFace::Outline(font) => {
                let mut prev: Option<char> = None;
                for ch in text.chars() {
                    if let Some(p) = prev {
                        pen_x += font.horizontal_kern(p, ch, self.size).unwrap_or(0.0);
                    }
                    let (metrics, coverage) = font.rasterize(ch, self.size);
                    if metrics.width > 0 && metrics.height > 0 {
                        let (x, y) = outline_origin(pen_x, ascent, &metrics);
                        glyphs.push(PositionedGlyph {
                            x,
                            y,
                            width: metrics.width,
                            height: metrics.height,
                            coverage,
                        });
                    }
                    pen_x += metrics.advance_width;
                    prev = Some(ch);
                }
            }
            FontFace::Block { advance, .. } => {
                let cell = advance * self.size;
                let width = (cell - 1.0).round().max(1.0) as usize;
                let height = (ascent + descent).round().max(1.0) as usize;
                for ch in text.chars() {
                    if !ch.is_whitespace() {
                        glyphs.push(PositionedGlyph {
                            x: pen_x.round() as i32,
                            y: 0,
                            width,
                            height,
                            coverage: vec![u8::MAX; width * height],
                        });
                    }
                    pen_x += cell;
                }
            }
        }

        glyphs
    }
}

/// Top-left of an outline glyph bitmap within the text box, for a pen at
/// `pen_x` on a baseline `ascent` below the top. fontdue's `ymin` is the
/// offset of the bitmap bottom from the baseline, negative for descenders.
fn outline_origin(pen_x: f32, ascent: f32, metrics: &fontdue::Metrics) -> (i32, i32) {
    let top = ascent - (metrics.height as f32 + metrics.ymin as f32);
    (
        (pen_x + metrics.xmin as f32).round() as i32,
        top.round() as i32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(size: f32) -> Font {
        Font::new(FontFace::block(0.5, 0.75, 0.25), size)
    }

    #[test]
    fn block_measure_is_monospace() {
        let m = block(20.0).measure("120%");
        assert_eq!(m.width, 40.0);
        assert_eq!(m.ascent, 15.0);
        assert_eq!(m.descent, 5.0);
        assert_eq!(m.height(), 20.0);
    }

    #[test]
    fn empty_string_has_zero_width_but_line_height() {
        let m = block(20.0).measure("");
        assert_eq!(m.width, 0.0);
        assert_eq!(m.height(), 20.0);
    }

    #[test]
    fn block_glyph_run_skips_whitespace() {
        let run = block(20.0).glyph_run("a b");
        assert_eq!(run.len(), 2);
        assert_eq!(run[0].x, 0);
        assert_eq!(run[1].x, 20);
        assert_eq!(run[0].width, 9);
        assert_eq!(run[0].height, 20);
        assert!(run[0].coverage.iter().all(|&c| c == u8::MAX));
    }

    fn outline_metrics(xmin: i32, ymin: i32, width: usize, height: usize) -> fontdue::Metrics {
        fontdue::Metrics {
            xmin,
            ymin,
            width,
            height,
            advance_width: width as f32 + 2.0,
            advance_height: 0.0,
            bounds: fontdue::OutlineBounds {
                xmin: xmin as f32,
                ymin: ymin as f32,
                width: width as f32,
                height: height as f32,
            },
        }
    }

    #[test]
    fn outline_glyph_sits_on_the_baseline() {
        // 'x' shape: 10 tall, bottom on the baseline.
        let (x, y) = outline_origin(12.0, 15.0, &outline_metrics(1, 0, 8, 10));
        assert_eq!((x, y), (13, 5));
    }

    #[test]
    fn outline_descender_drops_below_the_baseline() {
        // 'g' shape: 14 tall, bottom 4px below the baseline.
        let (_, y) = outline_origin(0.0, 15.0, &outline_metrics(0, -4, 8, 14));
        assert_eq!(y, 5);
        // Bottom edge lands inside the descent band of a 15 + 5 line box.
        assert_eq!(y + 14, 19);
    }

    #[test]
    fn outline_ascender_reaches_the_top() {
        let (_, y) = outline_origin(0.0, 15.0, &outline_metrics(0, 0, 6, 15));
        assert_eq!(y, 0);
    }

    #[test]
    fn garbage_bytes_are_rejected() {
        assert!(FontFace::from_bytes(b"definitely not a font").is_err());
    }
}
