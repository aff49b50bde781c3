use crate::constants::{LIGHT_CLASS, PREFERS_LIGHT_QUERY, THEME_TOGGLE_ID};
use crate::core::{PreferenceStore, Theme, ThemeToggle};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// `localStorage`, or nothing when the browser refuses access.
pub struct LocalStorage(Option<web::Storage>);

impl LocalStorage {
    pub fn open(window: &web::Window) -> Self {
        Self(window.local_storage().ok().flatten())
    }
}

impl PreferenceStore for LocalStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.0.as_ref()?.get_item(key).ok().flatten()
    }

    fn save(&mut self, key: &str, value: &str) {
        match &self.0 {
            Some(s) => {
                if let Err(e) = s.set_item(key, value) {
                    log::warn!("[theme] persist failed: {:?}", e);
                }
            }
            None => log::debug!("[theme] no storage; {key}={value} not persisted"),
        }
    }
}

fn prefers_light(window: &web::Window) -> bool {
    window
        .match_media(PREFERS_LIGHT_QUERY)
        .ok()
        .flatten()
        .map(|m| m.matches())
        .unwrap_or(false)
}

fn apply(document: &web::Document, theme: Theme) {
    if let Some(root) = document.document_element() {
        _ = root.class_list().toggle_with_force(LIGHT_CLASS, theme.is_light());
    }
}

pub fn init(window: &web::Window, document: &web::Document) {
    let toggle = ThemeToggle::new(LocalStorage::open(window), prefers_light(window));
    apply(document, toggle.theme());
    log::info!("[theme] initial={}", toggle.theme().as_str());

    let toggle = Rc::new(RefCell::new(toggle));
    let doc = document.clone();
    let wired = dom::add_click_listener(document, THEME_TOGGLE_ID, move || {
        let theme = toggle.borrow_mut().toggle();
        apply(&doc, theme);
    });
    if !wired {
        log::warn!("[theme] missing #{THEME_TOGGLE_ID}; toggle disabled");
    }
}
