// One-shot scroll reveal bookkeeping and the staggered entrance curve.

use super::easing::{Easing, Tween};
use std::time::Duration;

pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -10% 0px";
pub const REVEAL_THRESHOLD: f64 = 0.1;

pub const REVEAL_DURATION: Duration = Duration::from_millis(700);
pub const REVEAL_STAGGER: Duration = Duration::from_millis(40);
pub const REVEAL_START_DELAY: Duration = Duration::from_millis(80);
pub const REVEAL_OFFSET_PX: f64 = 20.0;

/// Tracks which observed sections have already been revealed.
#[derive(Clone, Debug, Default)]
pub struct RevealTracker {
    revealed: Vec<bool>,
}

impl RevealTracker {
    pub fn new(sections: usize) -> Self {
        Self {
            revealed: vec![false; sections],
        }
    }

    /// Returns true exactly once per section: the first intersecting report.
    pub fn on_intersection(&mut self, section: usize, intersecting: bool) -> bool {
        if !intersecting {
            return false;
        }
        match self.revealed.get_mut(section) {
            Some(done) if !*done => {
                *done = true;
                true
            }
            _ => false,
        }
    }

    pub fn is_revealed(&self, section: usize) -> bool {
        self.revealed.get(section).copied().unwrap_or(false)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|r| **r).count()
    }
}

/// Start delay of the `i`-th animated child.
#[inline]
pub fn stagger_delay(i: usize) -> Duration {
    REVEAL_START_DELAY + REVEAL_STAGGER * i as u32
}

/// Total time until the last of `count` children settles.
pub fn total_duration(count: usize) -> Duration {
    if count == 0 {
        return Duration::ZERO;
    }
    stagger_delay(count - 1) + REVEAL_DURATION
}

/// Opacity and vertical offset (px) of child `i` at `elapsed` since reveal.
pub fn child_style_at(i: usize, elapsed: Duration) -> (f64, f64) {
    let local = elapsed.saturating_sub(stagger_delay(i));
    let opacity = Tween {
        from: 0.0,
        to: 1.0,
        duration: REVEAL_DURATION,
        easing: Easing::OutQuad,
    };
    let offset = Tween {
        from: REVEAL_OFFSET_PX,
        to: 0.0,
        ..opacity
    };
    (opacity.value_at(local), offset.value_at(local))
}
