#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod frame;
mod popover;
mod reveal;
mod starfield;
mod theme;
mod typer;

fn stamp_year(document: &web::Document) {
    match document.get_element_by_id(constants::YEAR_ID) {
        Some(el) => {
            let year = js_sys::Date::new_0().get_full_year();
            el.set_text_content(Some(&year.to_string()));
        }
        None => log::debug!("[year] missing #{}", constants::YEAR_ID),
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Each component owns its own slice of the page; a missing element only
    // disables that one.
    starfield::init(&document);
    typer::init(&document);
    theme::init(&window, &document);
    stamp_year(&document);
    reveal::init(&document);
    popover::init(&document);

    Ok(())
}
