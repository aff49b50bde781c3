use crate::constants::{REVEALED_CLASS, REVEAL_CHILD_SELECTOR, REVEAL_SECTION_SELECTOR};
use crate::core::reveal::{child_style_at, total_duration, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};
use crate::core::RevealTracker;
use crate::dom;
use crate::frame;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

fn animate_children(section: &web::Element) {
    let children: Vec<web::HtmlElement> =
        dom::elements(section.query_selector_all(REVEAL_CHILD_SELECTOR))
            .into_iter()
            .filter_map(|el| el.dyn_into::<web::HtmlElement>().ok())
            .collect();
    if children.is_empty() {
        return;
    }
    let total = total_duration(children.len());
    frame::animate(
        total,
        move |elapsed| {
            for (i, child) in children.iter().enumerate() {
                let (opacity, offset) = child_style_at(i, elapsed);
                dom::set_style(child, "opacity", &format!("{opacity:.3}"));
                dom::set_style(child, "transform", &format!("translateY({offset:.2}px)"));
            }
        },
        || {},
    );
}

fn reveal(section: &web::Element) {
    _ = section.class_list().add_1(REVEALED_CLASS);
    animate_children(section);
}

pub fn init(document: &web::Document) {
    let sections = dom::elements(document.query_selector_all(REVEAL_SECTION_SELECTOR));
    if sections.is_empty() {
        log::debug!("[reveal] no {REVEAL_SECTION_SELECTOR} sections");
        return;
    }
    let tracker = Rc::new(RefCell::new(RevealTracker::new(sections.len())));
    let targets = Rc::new(sections);

    let targets_cb = targets.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(index) = targets_cb.iter().position(|s| *s == target) else {
                    continue;
                };
                if tracker
                    .borrow_mut()
                    .on_intersection(index, entry.is_intersecting())
                {
                    reveal(&target);
                    observer.unobserve(&target);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer = match web::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    ) {
        Ok(o) => o,
        Err(e) => {
            log::warn!("[reveal] IntersectionObserver unavailable: {:?}", e);
            return;
        }
    };
    callback.forget();
    for s in targets.iter() {
        observer.observe(s);
    }
    log::info!("[reveal] observing {} sections", targets.len());
}
