// Frame-stepped animations, independent of how frames are scheduled.

use std::time::Duration;

/// Something advanced once per display frame.
pub trait FrameTick {
    /// Returns false once there is nothing left to animate.
    fn frame(&mut self, dt: Duration) -> bool;
}

/// Time-driven tween with per-frame and completion callbacks.
pub struct Animation<U, C>
where
    U: FnMut(Duration),
    C: FnOnce(),
{
    elapsed: Duration,
    total: Duration,
    on_update: U,
    on_complete: Option<C>,
}

impl<U, C> Animation<U, C>
where
    U: FnMut(Duration),
    C: FnOnce(),
{
    pub fn new(total: Duration, on_update: U, on_complete: C) -> Self {
        Self {
            elapsed: Duration::ZERO,
            total,
            on_update,
            on_complete: Some(on_complete),
        }
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.on_complete.is_none()
    }
}

impl<U, C> FrameTick for Animation<U, C>
where
    U: FnMut(Duration),
    C: FnOnce(),
{
    fn frame(&mut self, dt: Duration) -> bool {
        if self.is_finished() {
            return false;
        }
        self.elapsed = (self.elapsed + dt).min(self.total);
        (self.on_update)(self.elapsed);
        if self.elapsed < self.total {
            return true;
        }
        if let Some(done) = self.on_complete.take() {
            done();
        }
        false
    }
}
