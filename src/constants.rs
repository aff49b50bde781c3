/// DOM contract and presentation constants for the web frontend.
///
/// Tuning that belongs to the effect logic itself (densities, timings,
/// geometry) lives next to that logic in `core`; this file only names the
/// page elements and classes the frontend reads and writes.
// Element ids
pub const STARS_CANVAS_ID: &str = "stars";
pub const THEME_TOGGLE_ID: &str = "themeToggle";
pub const YEAR_ID: &str = "year";

// Selectors
pub const TYPED_SELECTOR: &str = ".typed";
pub const REVEAL_SECTION_SELECTOR: &str = ".reveal-on-scroll";
pub const REVEAL_CHILD_SELECTOR: &str =
    ".card, .experience, .edu, .contact-tile, .pill, .chip, p, ul, h3, h4";
pub const CHIP_SELECTOR: &str = ".chip[data-skill]";
pub const SKILL_ATTRIBUTE: &str = "data-skill";

// Classes
pub const LIGHT_CLASS: &str = "light";
pub const REVEALED_CLASS: &str = "revealed";
pub const POPOVER_CLASS: &str = "skill-popover";

// Media queries
pub const PREFERS_LIGHT_QUERY: &str = "(prefers-color-scheme: light)";

// Popover transitions
pub const POPOVER_SHOW_FROM_OFFSET_PX: f64 = 6.0;
pub const POPOVER_SHOW_FROM_SCALE: f64 = 0.98;
