// Host-side tests for frame-stepped animations.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod animation {
    include!("../src/core/animation.rs");
}

use animation::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[test]
fn completes_once_after_reaching_total_with_uneven_steps() {
    let updates = Rc::new(RefCell::new(Vec::new()));
    let completed = Rc::new(Cell::new(0));
    let seen = updates.clone();
    let done = completed.clone();
    let mut anim = Animation::new(
        ms(120),
        move |elapsed| seen.borrow_mut().push(elapsed),
        move || done.set(done.get() + 1),
    );

    assert!(anim.frame(ms(17)));
    assert!(anim.frame(ms(33)));
    assert!(anim.frame(ms(9)));
    assert_eq!(completed.get(), 0);
    assert!(anim.elapsed() < ms(120));

    // overshoots the total; elapsed is clamped
    assert!(!anim.frame(ms(100)));
    assert_eq!(anim.elapsed(), ms(120));
    assert_eq!(completed.get(), 1);
    assert!(anim.is_finished());

    assert!(!anim.frame(ms(16)));
    assert!(!anim.frame(ms(16)));
    assert_eq!(completed.get(), 1);
    assert_eq!(anim.elapsed(), ms(120));

    let updates = updates.borrow();
    assert_eq!(*updates, vec![ms(17), ms(50), ms(59), ms(120)]);
}

#[test]
fn exact_landing_on_total_completes() {
    let completed = Rc::new(Cell::new(false));
    let done = completed.clone();
    let mut anim = Animation::new(ms(160), |_| {}, move || done.set(true));
    assert!(anim.frame(ms(80)));
    assert!(!completed.get());
    assert!(!anim.frame(ms(80)));
    assert!(completed.get());
}

#[test]
fn zero_length_animation_completes_on_first_frame() {
    let completed = Rc::new(Cell::new(0));
    let done = completed.clone();
    let mut anim = Animation::new(Duration::ZERO, |_| {}, move || done.set(done.get() + 1));
    assert!(!anim.frame(ms(16)));
    assert!(!anim.frame(ms(16)));
    assert_eq!(completed.get(), 1);
}
