use log::{info, warn};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::config::{AOS_DURATION_MS, AOS_EASING, AOS_OFFSET_PX, AOS_ONCE};
use crate::dom;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = AOS, js_name = init)]
    fn aos_init(options: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_namespace = AOS, js_name = refresh)]
    fn aos_refresh() -> Result<(), JsValue>;
}

/// Options handed to the scroll-reveal library.
#[derive(Debug, Serialize, PartialEq)]
pub struct AosOptions {
    pub duration: u32,
    pub once: bool,
    pub offset: u32,
    pub easing: &'static str,
}

impl Default for AosOptions {
    fn default() -> Self {
        AosOptions {
            duration: AOS_DURATION_MS,
            once: AOS_ONCE,
            offset: AOS_OFFSET_PX,
            easing: AOS_EASING,
        }
    }
}

pub fn init_scroll_reveal() {
    let options = match serde_wasm_bindgen::to_value(&AosOptions::default()) {
        Ok(options) => options,
        Err(e) => {
            warn!("could not build AOS options: {}", e);
            return;
        }
    };
    match aos_init(&options) {
        Ok(()) => info!("Scroll reveal initialized"),
        Err(e) => warn!("AOS unavailable, skipping scroll reveal: {:?}", e),
    }
}

pub fn init_resize_refresh(_document: &Document) -> Result<(), JsValue> {
    let window = dom::window()?;
    dom::listen(&window, "resize", |_| {
        if let Err(e) = aos_refresh() {
            log::debug!("AOS refresh skipped: {:?}", e);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_match_page_animation_settings() {
        let json = serde_json::to_value(AosOptions::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "duration": 1000,
                "once": true,
                "offset": 100,
                "easing": "ease-in-out"
            })
        );
    }
}
