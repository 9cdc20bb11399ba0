//! Rounded-rectangle clip coverage.
//!
//! Coverage comes from the signed distance to the rounded rect, sampled at
//! pixel centers with a one-pixel antialiasing ramp.

/// Per-pixel coverage (0.0-1.0) of a rounded rectangle filling a buffer.
#[derive(Debug, Clone)]
pub struct RoundedMask {
    width: u32,
    height: u32,
    coverage: Vec<f32>,
}

impl RoundedMask {
    /// Build a mask for a `width x height` buffer. The radius is clamped to
    /// half the shorter side.
    pub fn new(width: u32, height: u32, radius: f32) -> Self {
        let half_w = width as f32 / 2.0;
        let half_h = height as f32 / 2.0;
        let radius = radius.clamp(0.0, half_w.min(half_h));

        let mut coverage = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                let px = x as f32 + 0.5 - half_w;
                let py = y as f32 + 0.5 - half_h;
                let d = rounded_rect_sdf(px, py, half_w, half_h, radius);
                coverage.push((0.5 - d).clamp(0.0, 1.0));
            }
        }

        Self { width, height, coverage }
    }

    /// Coverage at a pixel; zero outside the buffer.
    #[inline]
    pub fn at(&self, x: u32, y: u32) -> f32 {
        if x >= self.width || y >= self.height {
            return 0.0;
        }
        self.coverage[(y * self.width + x) as usize]
    }
}

/// Signed distance from a point (relative to the rect center) to a rounded
/// rect with the given half extents. Negative inside.
#[inline]
fn rounded_rect_sdf(px: f32, py: f32, half_w: f32, half_h: f32, radius: f32) -> f32 {
    let qx = px.abs() - (half_w - radius);
    let qy = py.abs() - (half_h - radius);
    let outside = (qx.max(0.0).powi(2) + qy.max(0.0).powi(2)).sqrt();
    let inside = qx.max(qy).min(0.0);
    outside + inside - radius
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_are_cut_and_center_is_full() {
        let mask = RoundedMask::new(100, 60, 20.0);
        assert_eq!(mask.at(0, 0), 0.0);
        assert_eq!(mask.at(99, 0), 0.0);
        assert_eq!(mask.at(0, 59), 0.0);
        assert_eq!(mask.at(99, 59), 0.0);
        assert_eq!(mask.at(50, 30), 1.0);
        // Straight edges are not rounded.
        assert_eq!(mask.at(50, 0), 1.0);
        assert_eq!(mask.at(0, 30), 1.0);
    }

    #[test]
    fn zero_radius_covers_everything() {
        let mask = RoundedMask::new(8, 8, 0.0);
        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(mask.at(x, y), 1.0);
            }
        }
    }

    #[test]
    fn out_of_bounds_is_uncovered() {
        let mask = RoundedMask::new(4, 4, 1.0);
        assert_eq!(mask.at(4, 0), 0.0);
    }

    #[test]
    fn huge_radius_is_clamped() {
        let mask = RoundedMask::new(10, 10, 500.0);
        assert_eq!(mask.at(5, 5), 1.0);
        assert_eq!(mask.at(0, 0), 0.0);
    }
}
