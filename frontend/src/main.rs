use log::{error, info};
use wasm_bindgen::JsValue;
use web_sys::Document;

mod config;
mod dom;
mod styles;
mod components {
    pub mod active_link;
    pub mod contact_form;
    pub mod count_up;
    pub mod faq;
    pub mod hero;
    pub mod layout;
    pub mod lazy_images;
    pub mod navigation;
    pub mod notice;
    pub mod scroll_header;
    pub mod smooth_scroll;
}

use components::{
    active_link, contact_form, count_up, faq, hero, layout, lazy_images, navigation, scroll_header,
    smooth_scroll,
};

type Initializer = fn(&Document) -> Result<(), JsValue>;

fn run_all(document: &Document, initializers: &[(&str, Initializer)]) {
    for (name, init) in initializers {
        if let Err(e) = init(document) {
            error!("failed to initialize {}: {:?}", name, e);
        }
    }
}

/// Everything that needs the parsed markup.
fn on_ready(document: &Document) {
    layout::init_scroll_reveal();
    let initializers: [(&str, Initializer); 7] = [
        ("navigation", navigation::init),
        ("scroll header", scroll_header::init),
        ("count-up", count_up::init),
        ("faq", faq::init),
        ("smooth scroll", smooth_scroll::init),
        ("contact form", contact_form::init),
        ("lazy images", lazy_images::init),
    ];
    run_all(document, &initializers);
    info!("Landing page ready");
}

fn when_ready(document: &Document) -> Result<(), JsValue> {
    if document.ready_state() == "loading" {
        let doc = document.clone();
        dom::listen(document, "DOMContentLoaded", move |_| on_ready(&doc))
    } else {
        on_ready(document);
        Ok(())
    }
}

fn when_loaded(document: &Document) -> Result<(), JsValue> {
    if document.ready_state() == "complete" {
        hero::fade_in(document);
        return Ok(());
    }
    let window = dom::window()?;
    let doc = document.clone();
    dom::listen(&window, "load", move |_| hero::fade_in(&doc))
}

fn print_banner() {
    gloo_console::log!(format!("%c{}", config::BANNER_TITLE), config::BANNER_TITLE_STYLE);
    gloo_console::log!(config::BANNER_CONTACT);
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting landing page");
    let document = match dom::document() {
        Ok(document) => document,
        Err(e) => {
            error!("no document to attach to: {:?}", e);
            return;
        }
    };

    if let Err(e) = styles::install(&document) {
        error!("failed to install notice styles: {:?}", e);
    }
    let initializers: [(&str, Initializer); 4] = [
        ("page ready", when_ready),
        ("page load", when_loaded),
        ("active link", active_link::init),
        ("resize refresh", layout::init_resize_refresh),
    ];
    run_all(&document, &initializers);
    print_banner();
}
