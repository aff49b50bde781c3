use crate::constants::{
    CHIP_SELECTOR, POPOVER_CLASS, POPOVER_SHOW_FROM_OFFSET_PX, POPOVER_SHOW_FROM_SCALE,
    SKILL_ATTRIBUTE,
};
use crate::core::easing::{Easing, Tween};
use crate::core::popover::{skill_descriptions, HIDE_DURATION, SHOW_DURATION};
use crate::core::{place, PopoverAction, PopoverState};
use crate::dom;
use crate::frame;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const CLOSING_ATTRIBUTE: &str = "data-closing";

/// The chips plus the single live popover element, if any.
struct Popovers {
    document: web::Document,
    state: PopoverState<usize>,
    chips: Vec<web::Element>,
    element: Option<web::HtmlElement>,
    closing: Option<web::HtmlElement>,
}

impl Popovers {
    fn handle(&mut self, action: PopoverAction<usize>) {
        match action {
            PopoverAction::Show { chip, description } => self.show(chip, description),
            PopoverAction::Hide => self.hide(),
            PopoverAction::Reposition(chip) => {
                if let (Some(pop), Some(chip)) = (&self.element, self.chips.get(chip)) {
                    apply_placement(pop, chip, false);
                }
            }
            PopoverAction::Ignore => {}
        }
    }

    fn activate(&mut self, chip: usize) {
        let key = self
            .chips
            .get(chip)
            .and_then(|c| c.get_attribute(SKILL_ATTRIBUTE));
        let action = self.state.activate(chip, key.as_deref());
        if action == PopoverAction::Ignore {
            log::debug!("[popover] no description for {:?}", key);
        }
        self.handle(action);
    }

    fn contains(&self, target: Option<web::EventTarget>) -> bool {
        match (&self.element, target) {
            (Some(pop), Some(t)) => pop.contains(t.dyn_ref::<web::Node>()),
            _ => false,
        }
    }

    fn show(&mut self, chip: usize, description: &str) {
        // a new popover supersedes the old one, including any hide in flight
        for old in [self.element.take(), self.closing.take()].into_iter().flatten() {
            old.remove();
        }
        let Some(chip_el) = self.chips.get(chip) else {
            return;
        };
        let Some(pop) = build_popover(&self.document, chip_el, description) else {
            return;
        };
        apply_placement(&pop, chip_el, false);
        dom::set_style(&pop, "opacity", "0");
        dom::set_style(&pop, "transform", "scale(0.96)");
        transition_in(&pop);
        self.element = Some(pop);
    }

    fn hide(&mut self) {
        let Some(pop) = self.element.take() else {
            return;
        };
        _ = pop.set_attribute(CLOSING_ATTRIBUTE, "");
        self.closing = Some(pop.clone());
        let from = pop
            .style()
            .get_property_value("opacity")
            .ok()
            .and_then(|v| v.parse::<f64>().ok())
            .unwrap_or(1.0);
        let fade = Tween {
            from,
            to: 0.0,
            duration: HIDE_DURATION,
            easing: Easing::Linear,
        };
        let pop_done = pop.clone();
        frame::animate(
            HIDE_DURATION,
            move |elapsed| dom::set_style(&pop, "opacity", &format!("{:.3}", fade.value_at(elapsed))),
            move || pop_done.remove(),
        );
    }
}

fn build_popover(
    document: &web::Document,
    chip: &web::Element,
    description: &str,
) -> Option<web::HtmlElement> {
    let pop = document
        .create_element("div")
        .ok()?
        .dyn_into::<web::HtmlElement>()
        .ok()?;
    pop.set_class_name(POPOVER_CLASS);
    let title = document.create_element("h5").ok()?;
    title.set_text_content(chip.text_content().as_deref());
    let body = document.create_element("p").ok()?;
    body.set_text_content(Some(description));
    _ = pop.append_child(&title);
    _ = pop.append_child(&body);
    document.body()?.append_child(&pop).ok()?;
    Some(pop)
}

fn apply_placement(pop: &web::HtmlElement, chip: &web::Element, prefer_above: bool) {
    let p = place(
        dom::client_rect(chip),
        dom::viewport(),
        pop.offset_height() as f64,
        prefer_above,
    );
    dom::set_style(pop, "transform-origin", p.side.transform_origin());
    dom::set_style(pop, "--arrowTop", &format!("{}px", p.arrow_top));
    dom::set_style(pop, "left", &format!("{}px", p.left));
    dom::set_style(pop, "top", &format!("{}px", p.top));
    dom::set_style(pop, "--arrowLeft", &format!("{}px", p.arrow_left));
    dom::set_style(pop, "--arrowDisplay", "block");
}

fn transition_in(pop: &web::HtmlElement) {
    let opacity = Tween {
        from: 0.0,
        to: 1.0,
        duration: SHOW_DURATION,
        easing: Easing::OutQuad,
    };
    let offset = Tween {
        from: POPOVER_SHOW_FROM_OFFSET_PX,
        to: 0.0,
        ..opacity
    };
    let scale = Tween {
        from: POPOVER_SHOW_FROM_SCALE,
        to: 1.0,
        ..opacity
    };
    let pop = pop.clone();
    frame::animate(
        SHOW_DURATION,
        move |elapsed| {
            if pop.has_attribute(CLOSING_ATTRIBUTE) {
                return;
            }
            dom::set_style(&pop, "opacity", &format!("{:.3}", opacity.value_at(elapsed)));
            dom::set_style(
                &pop,
                "transform",
                &format!(
                    "translateY({:.2}px) scale({:.4})",
                    offset.value_at(elapsed),
                    scale.value_at(elapsed)
                ),
            );
        },
        || {},
    );
}

fn wire_chip(popovers: &Rc<RefCell<Popovers>>, index: usize, chip: &web::Element) {
    let on_click = popovers.clone();
    let click = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        ev.stop_propagation();
        on_click.borrow_mut().activate(index);
    }) as Box<dyn FnMut(_)>);
    _ = chip.add_event_listener_with_callback("click", click.as_ref().unchecked_ref());
    click.forget();

    let on_key = popovers.clone();
    let keydown = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        let key = ev.key();
        if key == "Enter" || key == " " {
            ev.prevent_default();
            on_key.borrow_mut().activate(index);
        }
    }) as Box<dyn FnMut(_)>);
    _ = chip.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref());
    keydown.forget();
}

pub fn init(document: &web::Document) {
    let chips = dom::elements(document.query_selector_all(CHIP_SELECTOR));
    if chips.is_empty() {
        log::debug!("[popover] no {CHIP_SELECTOR} chips");
        return;
    }
    log::info!("[popover] wiring {} chips", chips.len());
    let popovers = Rc::new(RefCell::new(Popovers {
        document: document.clone(),
        state: PopoverState::new(skill_descriptions()),
        chips: chips.clone(),
        element: None,
        closing: None,
    }));
    for (i, chip) in chips.iter().enumerate() {
        wire_chip(&popovers, i, chip);
    }

    let on_doc_click = popovers.clone();
    let doc_click = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let mut p = on_doc_click.borrow_mut();
        if p.contains(ev.target()) {
            return;
        }
        let action = p.state.outside_click();
        p.handle(action);
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("click", doc_click.as_ref().unchecked_ref());
    doc_click.forget();

    let on_scroll = popovers.clone();
    dom::add_window_listener("scroll", true, move |_: web::Event| {
        let mut p = on_scroll.borrow_mut();
        let action = p.state.scroll();
        p.handle(action);
    });

    dom::add_window_listener("resize", false, move |_: web::Event| {
        let mut p = popovers.borrow_mut();
        let action = p.state.resize();
        p.handle(action);
    });
}
