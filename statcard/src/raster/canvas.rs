//! A single node's pixel buffer with an optional rounded clip.
//!
//! Every draw goes through [`Canvas::blend`], which scales the source alpha
//! by the clip coverage and composites with src-over. Nothing is ever
//! overwritten.

use image::{Pixel, Rgba, RgbaImage};

use crate::font::PositionedGlyph;
use crate::primitives::{Color, Rect};

use super::mask::RoundedMask;

pub struct Canvas {
    image: RgbaImage,
    clip: Option<RoundedMask>,
}

impl Canvas {
    /// A fully transparent canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
            clip: None,
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Clip all following draws to a rounded rect covering the canvas.
    pub fn clip_rounded(&mut self, radius: f32) {
        self.clip = Some(RoundedMask::new(self.width(), self.height(), radius));
    }

    /// Composite one pixel. `coverage` scales the source alpha (0.0-1.0).
    #[inline]
    pub fn blend(&mut self, x: i64, y: i64, source: Rgba<u8>, coverage: f32) {
        if x < 0 || y < 0 || x >= self.width() as i64 || y >= self.height() as i64 {
            return;
        }
        let (x, y) = (x as u32, y as u32);
        let clip = self.clip.as_ref().map_or(1.0, |mask| mask.at(x, y));
        let alpha = source[3] as f32 * coverage * clip;
        if alpha <= 0.0 {
            return;
        }
        let mut src = source;
        src[3] = alpha.round().min(255.0) as u8;
        if src[3] == 0 {
            return;
        }
        self.image.get_pixel_mut(x, y).blend(&src);
    }

    /// Fill the whole (clipped) canvas.
    pub fn fill(&mut self, color: Color) {
        let pixel = color.to_rgba8();
        for y in 0..self.height() as i64 {
            for x in 0..self.width() as i64 {
                self.blend(x, y, pixel, 1.0);
            }
        }
    }

    /// Draw a glyph's coverage bitmap with its top-left at (`x`, `y`).
    pub fn draw_glyph(&mut self, x: i64, y: i64, glyph: &PositionedGlyph, color: Color) {
        let pixel = color.to_rgba8();
        let gx = x + glyph.x as i64;
        let gy = y + glyph.y as i64;
        for row in 0..glyph.height {
            for col in 0..glyph.width {
                let c = glyph.coverage[row * glyph.width + col];
                if c > 0 {
                    self.blend(gx + col as i64, gy + row as i64, pixel, c as f32 / 255.0);
                }
            }
        }
    }

    /// Composite another buffer with its top-left at (`x`, `y`).
    pub fn draw_image(&mut self, x: i64, y: i64, source: &RgbaImage) {
        for (sx, sy, pixel) in source.enumerate_pixels() {
            if pixel[3] > 0 {
                self.blend(x + sx as i64, y + sy as i64, *pixel, 1.0);
            }
        }
    }

    /// One-pixel outline just inside `rect`.
    pub fn stroke_rect(&mut self, rect: Rect, color: Color) {
        let pixel = color.to_rgba8();
        let left = rect.x.round() as i64;
        let top = rect.y.round() as i64;
        let right = rect.right().round() as i64 - 1;
        let bottom = rect.bottom().round() as i64 - 1;
        if right < left || bottom < top {
            return;
        }
        for x in left..=right {
            self.blend(x, top, pixel, 1.0);
            if bottom != top {
                self.blend(x, bottom, pixel, 1.0);
            }
        }
        for y in (top + 1)..bottom {
            self.blend(left, y, pixel, 1.0);
            if right != left {
                self.blend(right, y, pixel, 1.0);
            }
        }
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}
