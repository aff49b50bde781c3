// Typed/erased rotating role title.
//
// `RoleTyper` is a three-phase state machine advanced by elapsed time:
// typing reveals the role character by character, holding keeps it fully
// shown, erasing shrinks it back to nothing and moves to the next role.

use super::easing::{progress, Easing};
use std::time::Duration;

pub const ROLES: &[&str] = &[
    "Embedded IoT Developer",
    "VLSI Methodology Intern",
    "UVM • SystemVerilog Enthusiast",
    "Full‑Stack Web Developer",
];

#[derive(Clone, Copy, Debug)]
pub struct TyperTiming {
    pub type_duration: Duration,
    pub hold_duration: Duration,
    pub erase_duration: Duration,
    pub easing: Easing,
}

impl Default for TyperTiming {
    fn default() -> Self {
        Self {
            type_duration: Duration::from_millis(1300),
            hold_duration: Duration::from_millis(1100),
            erase_duration: Duration::from_millis(700),
            easing: Easing::InOutQuad,
        }
    }
}

impl TyperTiming {
    fn cycle(&self) -> Duration {
        self.type_duration + self.hold_duration + self.erase_duration
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Holding,
    Erasing,
}

pub struct RoleTyper {
    roles: &'static [&'static str],
    timing: TyperTiming,
    index: usize,
    phase: Phase,
    phase_elapsed: Duration,
}

impl RoleTyper {
    pub fn new(roles: &'static [&'static str], timing: TyperTiming) -> Self {
        Self {
            roles,
            timing,
            index: 0,
            phase: Phase::Typing,
            phase_elapsed: Duration::ZERO,
        }
    }

    /// Number of completed type/erase cycles.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_role(&self) -> &'static str {
        if self.roles.is_empty() {
            return "";
        }
        self.roles[self.index % self.roles.len()]
    }

    fn phase_duration(&self) -> Duration {
        match self.phase {
            Phase::Typing => self.timing.type_duration,
            Phase::Holding => self.timing.hold_duration,
            Phase::Erasing => self.timing.erase_duration,
        }
    }

    fn next_phase(&mut self) {
        self.phase = match self.phase {
            Phase::Typing => Phase::Holding,
            Phase::Holding => Phase::Erasing,
            Phase::Erasing => {
                self.index = self.index.wrapping_add(1);
                Phase::Typing
            }
        };
    }

    /// Advance by `dt` and return the prefix that should be displayed.
    pub fn advance(&mut self, dt: Duration) -> &'static str {
        if self.roles.is_empty() {
            return "";
        }
        self.phase_elapsed += dt;
        if self.timing.cycle().is_zero() {
            return "";
        }
        loop {
            let dur = self.phase_duration();
            if self.phase_elapsed < dur {
                break;
            }
            self.phase_elapsed -= dur;
            self.next_phase();
        }
        self.visible()
    }

    /// Prefix for the current phase and elapsed time, without advancing.
    pub fn visible(&self) -> &'static str {
        let role = self.current_role();
        let len = role.chars().count();
        let t = self
            .timing
            .easing
            .apply(progress(self.phase_elapsed, self.phase_duration()));
        let n = match self.phase {
            Phase::Typing => (t * len as f64).round() as usize,
            Phase::Holding => len,
            Phase::Erasing => (len as f64 - t * len as f64).round() as usize,
        };
        char_prefix(role, n)
    }
}

/// First `n` characters of `s` (whole string if shorter).
pub fn char_prefix(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((byte, _)) => &s[..byte],
        None => s,
    }
}
