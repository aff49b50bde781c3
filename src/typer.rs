use crate::constants::TYPED_SELECTOR;
use crate::core::{RoleTyper, TyperTiming, ROLES};
use crate::frame::{self, FrameTick};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use web_sys as web;

struct TyperContext {
    el: web::Element,
    typer: RoleTyper,
    shown: &'static str,
}

impl FrameTick for TyperContext {
    fn frame(&mut self, dt: Duration) -> bool {
        let text = self.typer.advance(dt);
        if text != self.shown {
            self.el.set_text_content(Some(text));
            self.shown = text;
        }
        true
    }
}

pub fn init(document: &web::Document) {
    let Some(el) = document.query_selector(TYPED_SELECTOR).ok().flatten() else {
        log::warn!("[typer] missing {TYPED_SELECTOR}; role typer disabled");
        return;
    };
    el.set_text_content(Some(""));
    log::info!("[typer] cycling {} roles", ROLES.len());
    frame::start_loop(Rc::new(RefCell::new(TyperContext {
        el,
        typer: RoleTyper::new(ROLES, TyperTiming::default()),
        shown: "",
    })));
}
