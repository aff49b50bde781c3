// Parallax starfield state.
//
// Platform-free: the web frontend feeds it the viewport size and a random
// source, then paints `stars()` and calls `step()` once per animation frame.

use glam::DVec2;
use rand::Rng;

/// Viewport area (px²) per star.
pub const STAR_DENSITY_DIVISOR: f64 = 18_000.0;
/// Upper bound on the number of stars regardless of viewport size.
pub const STAR_CAP: usize = 220;

pub const DEPTH_MIN: f64 = 0.4;
pub const DEPTH_SPAN: f64 = 0.6;
pub const RADIUS_MIN: f64 = 0.3;
pub const RADIUS_SPAN: f64 = 1.5;

/// Horizontal drift per frame for a star at depth 1.0.
pub const DRIFT_PER_FRAME: f64 = 0.05;
/// Distance past the right edge before a star wraps, and its re-entry offset.
pub const WRAP_MARGIN: f64 = 2.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    pub pos: DVec2,
    /// Depth factor; drives both opacity and speed.
    pub z: f64,
    pub r: f64,
}

/// Number of stars for a `width` x `height` viewport.
#[inline]
pub fn star_count(width: f64, height: f64) -> usize {
    let raw = (width * height / STAR_DENSITY_DIVISOR).floor();
    if !raw.is_finite() || raw <= 0.0 {
        return 0;
    }
    (raw as usize).min(STAR_CAP)
}

#[derive(Clone, Debug, Default)]
pub struct StarField {
    width: f64,
    height: f64,
    stars: Vec<Star>,
}

impl StarField {
    pub fn new<R: Rng + ?Sized>(width: f64, height: f64, rng: &mut R) -> Self {
        let mut field = Self::default();
        field.resize(width, height, rng);
        field
    }

    /// Regenerate the whole star set for a new viewport size.
    pub fn resize<R: Rng + ?Sized>(&mut self, width: f64, height: f64, rng: &mut R) {
        let n = star_count(width, height);
        let stars = (0..n)
            .map(|_| Star {
                pos: DVec2::new(rng.gen::<f64>() * width, rng.gen::<f64>() * height),
                z: rng.gen::<f64>() * DEPTH_SPAN + DEPTH_MIN,
                r: rng.gen::<f64>() * RADIUS_SPAN + RADIUS_MIN,
            })
            .collect();
        // swap in the finished set in one assignment
        self.width = width;
        self.height = height;
        self.stars = stars;
    }

    /// Advance every star by one frame, wrapping at the right edge.
    pub fn step(&mut self) {
        let limit = self.width + WRAP_MARGIN;
        for s in &mut self.stars {
            s.pos.x += DRIFT_PER_FRAME * s.z;
            if s.pos.x > limit {
                s.pos.x = -WRAP_MARGIN;
            }
        }
    }

    #[inline]
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    #[inline]
    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }
}

/// Fill colour for a star at depth `z`.
pub fn star_fill(z: f64) -> String {
    format!("rgba(200,210,255,{})", z)
}
