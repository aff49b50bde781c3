//! Platform-free logic for the page effects. Nothing here touches web-sys,
//! so the same files compile into the host-side tests.

pub mod animation;
pub mod easing;
pub mod popover;
pub mod reveal;
pub mod starfield;
pub mod theme;
pub mod typer;

pub use popover::{place, PopoverAction, PopoverState, Rect, Viewport};
pub use reveal::RevealTracker;
pub use theme::{PreferenceStore, Theme, ThemeToggle};
pub use typer::{RoleTyper, TyperTiming, ROLES};
