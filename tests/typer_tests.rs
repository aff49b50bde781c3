// Host-side tests for the role typer and easing curves.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod easing {
        include!("../src/core/easing.rs");
    }
    pub mod typer {
        include!("../src/core/typer.rs");
    }
}

use self::core::easing::*;
use self::core::typer::*;
use std::time::Duration;

const ROLES_AB: &[&str] = &["ab", "wxyz"];

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[test]
fn easing_endpoints_and_midpoint() {
    for e in [Easing::Linear, Easing::OutQuad, Easing::InOutQuad] {
        assert_eq!(e.apply(0.0), 0.0);
        assert_eq!(e.apply(1.0), 1.0);
    }
    assert!((Easing::InOutQuad.apply(0.5) - 0.5).abs() < 1e-12);
    assert!((Easing::OutQuad.apply(0.5) - 0.75).abs() < 1e-12);
    assert!((Easing::InOutQuad.apply(0.25) - 0.125).abs() < 1e-12);
}

#[test]
fn easing_is_monotonic() {
    for e in [Easing::Linear, Easing::OutQuad, Easing::InOutQuad] {
        let mut prev = e.apply(0.0);
        for i in 1..=100 {
            let v = e.apply(i as f64 / 100.0);
            assert!(v >= prev, "{e:?} not monotonic at {i}");
            prev = v;
        }
    }
}

#[test]
fn tween_saturates_at_target() {
    let t = Tween {
        from: 20.0,
        to: 0.0,
        duration: ms(700),
        easing: Easing::OutQuad,
    };
    assert_eq!(t.value_at(Duration::ZERO), 20.0);
    assert_eq!(t.value_at(ms(700)), 0.0);
    assert_eq!(t.value_at(ms(5_000)), 0.0);
    assert!(t.is_done(ms(700)));
    assert!(!t.is_done(ms(699)));
}

#[test]
fn typing_starts_empty_and_ends_full() {
    let mut typer = RoleTyper::new(ROLES, TyperTiming::default());
    assert_eq!(typer.advance(Duration::ZERO), "");
    assert_eq!(typer.advance(ms(1300)), ROLES[0]);
    assert_eq!(typer.phase(), Phase::Holding);
}

#[test]
fn typing_reveals_growing_prefixes() {
    let mut typer = RoleTyper::new(ROLES, TyperTiming::default());
    let mut prev = 0;
    for _ in 0..130 {
        let shown = typer.advance(ms(10));
        let n = shown.chars().count();
        assert!(n >= prev);
        assert!(ROLES[0].starts_with(shown));
        prev = n;
    }
    assert_eq!(prev, ROLES[0].chars().count());
}

#[test]
fn hold_keeps_full_text_then_erase_empties() {
    let timing = TyperTiming::default();
    let mut typer = RoleTyper::new(ROLES_AB, timing);
    typer.advance(timing.type_duration);
    assert_eq!(typer.advance(ms(1_000)), "ab");
    assert_eq!(typer.advance(ms(100)), "ab");
    assert_eq!(typer.phase(), Phase::Erasing);
    assert_eq!(typer.advance(timing.erase_duration), "");
    assert_eq!(typer.phase(), Phase::Typing);
    assert_eq!(typer.index(), 1);
    assert_eq!(typer.current_role(), "wxyz");
}

#[test]
fn erase_shrinks_monotonically() {
    let timing = TyperTiming::default();
    let mut typer = RoleTyper::new(ROLES_AB, timing);
    typer.advance(timing.type_duration + timing.hold_duration);
    assert_eq!(typer.phase(), Phase::Erasing);
    let mut prev = 2;
    for _ in 0..69 {
        let n = typer.advance(ms(10)).chars().count();
        assert!(n <= prev);
        prev = n;
    }
}

#[test]
fn roles_cycle_by_index_modulo_length() {
    let timing = TyperTiming::default();
    let cycle = timing.type_duration + timing.hold_duration + timing.erase_duration;
    let mut typer = RoleTyper::new(ROLES, timing);
    for n in 0..10 {
        assert_eq!(typer.index(), n);
        assert_eq!(typer.current_role(), ROLES[n % ROLES.len()]);
        typer.advance(cycle);
    }
}

#[test]
fn large_step_crosses_several_phases() {
    let timing = TyperTiming::default();
    let mut typer = RoleTyper::new(ROLES_AB, timing);
    // one full cycle plus the whole typing phase of the next role
    let shown = typer.advance(ms(3_100 + 1_300));
    assert_eq!(shown, "wxyz");
    assert_eq!(typer.index(), 1);
    assert_eq!(typer.phase(), Phase::Holding);
}

#[test]
fn prefixes_count_characters_not_bytes() {
    assert_eq!(char_prefix("UVM • SV", 5), "UVM •");
    assert_eq!(char_prefix("Full‑Stack", 5), "Full‑");
    assert_eq!(char_prefix("ab", 10), "ab");
    assert_eq!(char_prefix("ab", 0), "");
}

#[test]
fn empty_role_list_shows_nothing() {
    let mut typer = RoleTyper::new(&[], TyperTiming::default());
    assert_eq!(typer.advance(ms(5_000)), "");
    assert_eq!(typer.current_role(), "");
}
