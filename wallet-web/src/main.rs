//! Browser Wallet Connection Page
//!
//! Captures the wallet's public address via the injected provider and relays
//! it to the host application's callback server. Nothing here signs or
//! submits anything; a wallet only has to be present and reachable.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

mod app;
mod pages;
mod services;
mod state;
mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Panic messages end up in the browser console instead of "unreachable".
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("wallet connection page starting");

    hide_loading_screen();

    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Hide the static loading placeholder once the WASM module is running.
fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    if let Some(loading) = document.get_element_by_id("leptos-loading") {
        if let Some(element) = loading.dyn_ref::<HtmlElement>() {
            let _ = element.class_list().add_1("hidden");
        }
        let _ = loading.set_attribute("style", "display: none;");
    } else {
        log::warn!("loading element not found");
    }
}
