use crate::core::animation::Animation;
pub use crate::core::animation::FrameTick;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Perpetual requestAnimationFrame loop. The closure keeps itself alive.
pub fn start_loop<T: FrameTick + 'static>(frame_ctx: Rc<RefCell<T>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let mut last_instant = Instant::now();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let now = Instant::now();
        let dt = now - last_instant;
        last_instant = now;
        if !frame_ctx.borrow_mut().frame(dt) {
            return;
        }
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Finite animation: one self-freeing callback per frame until `frame` returns false.
pub fn run_until_done<T: FrameTick + 'static>(ctx: T) {
    schedule(Rc::new(RefCell::new(ctx)), Instant::now());
}

fn schedule<T: FrameTick + 'static>(ctx: Rc<RefCell<T>>, last: Instant) {
    let Some(w) = web::window() else {
        return;
    };
    let cb = Closure::once_into_js(move || {
        let now = Instant::now();
        if ctx.borrow_mut().frame(now - last) {
            schedule(ctx, now);
        }
    });
    _ = w.request_animation_frame(cb.unchecked_ref());
}

/// Run `on_update(elapsed)` every frame for `total`, then `on_complete`.
pub fn animate(
    total: Duration,
    mut on_update: impl FnMut(Duration) + 'static,
    on_complete: impl FnOnce() + 'static,
) {
    on_update(Duration::ZERO);
    run_until_done(Animation::new(total, on_update, on_complete));
}
