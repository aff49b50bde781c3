use crate::constants::STARS_CANVAS_ID;
use crate::core::starfield::{star_fill, StarField};
use crate::dom;
use crate::frame::{self, FrameTick};
use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::JsCast;
use web_sys as web;

struct StarfieldContext {
    ctx: web::CanvasRenderingContext2d,
    field: StarField,
}

impl FrameTick for StarfieldContext {
    fn frame(&mut self, _dt: Duration) -> bool {
        let (width, height) = self.field.size();
        self.ctx.clear_rect(0.0, 0.0, width, height);
        for s in self.field.stars() {
            self.ctx.set_fill_style_str(&star_fill(s.z));
            self.ctx.begin_path();
            _ = self.ctx.arc(s.pos.x, s.pos.y, s.r, 0.0, TAU);
            self.ctx.fill();
        }
        self.field.step();
        true
    }
}

fn context_2d(canvas: &web::HtmlCanvasElement) -> Option<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into::<web::CanvasRenderingContext2d>().ok())
}

pub fn init(document: &web::Document) {
    let Some(canvas) = document
        .get_element_by_id(STARS_CANVAS_ID)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
    else {
        log::warn!("[stars] missing #{STARS_CANVAS_ID}; starfield disabled");
        return;
    };
    let Some(ctx) = context_2d(&canvas) else {
        log::warn!("[stars] 2d context unavailable");
        return;
    };

    let vp = dom::sync_canvas_to_viewport(&canvas);
    let field = StarField::new(vp.width, vp.height, &mut rand::thread_rng());
    log::info!("[stars] {} stars for {}x{}", field.stars().len(), vp.width, vp.height);
    let state = Rc::new(RefCell::new(StarfieldContext { ctx, field }));

    let state_resize = state.clone();
    dom::add_window_listener("resize", false, move |_: web::Event| {
        let vp = dom::sync_canvas_to_viewport(&canvas);
        state_resize
            .borrow_mut()
            .field
            .resize(vp.width, vp.height, &mut rand::thread_rng());
    });

    frame::start_loop(state);
}
