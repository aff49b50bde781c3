use std::time::Duration;

/// Timing curves shared by the typer, reveal and popover transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    Linear,
    OutQuad,
    InOutQuad,
}

impl Easing {
    /// Map linear progress `t` in \[0, 1\] onto the curve.
    #[inline]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

/// Linear progress of `elapsed` through `duration`, saturating at 1.
#[inline]
pub fn progress(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f64() / duration.as_secs_f64()).min(1.0)
}

/// A from/to value interpolation over a fixed duration.
#[derive(Clone, Copy, Debug)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub duration: Duration,
    pub easing: Easing,
}

impl Tween {
    pub fn value_at(&self, elapsed: Duration) -> f64 {
        let e = self.easing.apply(progress(elapsed, self.duration));
        self.from + (self.to - self.from) * e
    }

    #[inline]
    pub fn is_done(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }
}
