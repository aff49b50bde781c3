// Skill popover state machine and placement geometry.

use fnv::FnvHashMap;
use std::time::Duration;

/// Width assumed for horizontal clamping, independent of the rendered width.
pub const POPOVER_ASSUMED_WIDTH: f64 = 340.0;
pub const VIEWPORT_MARGIN: f64 = 10.0;
pub const CHIP_GAP: f64 = 12.0;
/// Below this much room under the chip, placing above is considered.
pub const MIN_SPACE_BELOW: f64 = 120.0;
pub const ARROW_LEFT_MAX: f64 = 140.0;
pub const ARROW_TOP_BELOW: f64 = -6.0;
pub const ARROW_INSET_ABOVE: f64 = 4.0;

pub const SHOW_DURATION: Duration = Duration::from_millis(160);
pub const HIDE_DURATION: Duration = Duration::from_millis(120);

pub const SKILL_DESCRIPTIONS: &[(&str, &str)] = &[
    ("python", "Scripting, data handling, and quick prototyping. Used in the eco‑mobility project and for tooling."),
    ("embedded-c", "Bare‑metal microcontroller programming. Built the Gas Leakage Detector (sensors, GSM, interrupts)."),
    ("systemverilog", "Verification (UVM), writing testbenches, assertions, and functional coverage for ALU verification."),
    ("verilog", "RTL design basics and simulation as part of VLSI methodology internship."),
    ("sql", "Designing schema, writing queries for analytics dashboards."),
    ("html", "Semantic structure and accessibility for responsive web UIs."),
    ("css", "Modern layouts, responsive design, theming, and animations."),
    ("javascript", "Front‑end interactivity, API integration, and data visualization."),
    ("git", "Branching strategies, PR workflows, and code reviews."),
    ("docker", "Containerization for reproducible dev environments."),
    ("vscode", "Daily editor with extensions for linting, debugging, and productivity."),
];

pub fn skill_descriptions() -> FnvHashMap<&'static str, &'static str> {
    SKILL_DESCRIPTIONS.iter().copied().collect()
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Above,
    Below,
}

impl Side {
    pub fn transform_origin(self) -> &'static str {
        match self {
            Side::Above => "bottom left",
            Side::Below => "top left",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub left: f64,
    pub top: f64,
    pub side: Side,
    pub arrow_left: f64,
    pub arrow_top: f64,
}

/// Position a popover of `popover_height` next to `chip`.
pub fn place(chip: Rect, viewport: Viewport, popover_height: f64, prefer_above: bool) -> Placement {
    let max_left = viewport.width - POPOVER_ASSUMED_WIDTH;
    let left = chip.left.max(VIEWPORT_MARGIN).min(max_left);

    let space_below = viewport.height - chip.bottom();
    let space_above = chip.top;
    let above = prefer_above || (space_below < MIN_SPACE_BELOW && space_above > space_below);

    let (side, top, arrow_top) = if above {
        (
            Side::Above,
            chip.top - (popover_height + CHIP_GAP),
            popover_height - ARROW_INSET_ABOVE,
        )
    } else {
        (
            Side::Below,
            (chip.bottom() + CHIP_GAP).max(VIEWPORT_MARGIN),
            ARROW_TOP_BELOW,
        )
    };

    Placement {
        left,
        top,
        side,
        arrow_left: (chip.width / 2.0).min(ARROW_LEFT_MAX),
        arrow_top,
    }
}

/// What the DOM layer should do in response to an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PopoverAction<C> {
    Show { chip: C, description: &'static str },
    Hide,
    Reposition(C),
    Ignore,
}

/// `closed` when `active` is `None`, `open(chip)` otherwise.
#[derive(Clone, Debug)]
pub struct PopoverState<C> {
    descriptions: FnvHashMap<&'static str, &'static str>,
    active: Option<C>,
}

impl<C: Copy + PartialEq> PopoverState<C> {
    pub fn new(descriptions: FnvHashMap<&'static str, &'static str>) -> Self {
        Self {
            descriptions,
            active: None,
        }
    }

    #[inline]
    pub fn active(&self) -> Option<C> {
        self.active
    }

    pub fn description(&self, key: &str) -> Option<&'static str> {
        self.descriptions.get(key).copied()
    }

    /// Click, Enter or Space on `chip` carrying skill `key`.
    pub fn activate(&mut self, chip: C, key: Option<&str>) -> PopoverAction<C> {
        if self.active == Some(chip) {
            self.active = None;
            return PopoverAction::Hide;
        }
        let Some(description) = key.and_then(|k| self.description(k)) else {
            return PopoverAction::Ignore;
        };
        self.active = Some(chip);
        PopoverAction::Show { chip, description }
    }

    pub fn outside_click(&mut self) -> PopoverAction<C> {
        self.close()
    }

    pub fn scroll(&mut self) -> PopoverAction<C> {
        self.close()
    }

    pub fn resize(&self) -> PopoverAction<C> {
        match self.active {
            Some(chip) => PopoverAction::Reposition(chip),
            None => PopoverAction::Ignore,
        }
    }

    fn close(&mut self) -> PopoverAction<C> {
        match self.active.take() {
            Some(_) => PopoverAction::Hide,
            None => PopoverAction::Ignore,
        }
    }
}
