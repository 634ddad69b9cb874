use log::info;
use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::config::{
    HEADER_COMPACT_PADDING, HEADER_COMPACT_SHADOW, HEADER_COMPACT_THRESHOLD,
    HEADER_DEFAULT_PADDING, HEADER_DEFAULT_SHADOW,
};
use crate::dom;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderStyle {
    Default,
    Compact,
}

impl HeaderStyle {
    pub fn for_offset(scroll_y: f64) -> Self {
        if scroll_y > HEADER_COMPACT_THRESHOLD {
            HeaderStyle::Compact
        } else {
            HeaderStyle::Default
        }
    }

    /// (box-shadow, padding)
    pub fn declarations(self) -> (&'static str, &'static str) {
        match self {
            HeaderStyle::Compact => (HEADER_COMPACT_SHADOW, HEADER_COMPACT_PADDING),
            HeaderStyle::Default => (HEADER_DEFAULT_SHADOW, HEADER_DEFAULT_PADDING),
        }
    }
}

pub fn init(document: &Document) -> Result<(), JsValue> {
    let Some(header) = dom::html_by_id(document, "header") else {
        return Ok(());
    };
    let window = dom::window()?;
    let window_clone = window.clone();

    dom::listen(&window, "scroll", move |_| {
        let scroll_y = window_clone.scroll_y().unwrap_or(0.0);
        let (shadow, padding) = HeaderStyle::for_offset(scroll_y).declarations();
        dom::set_style(&header, "box-shadow", shadow);
        dom::set_style(&header, "padding", padding);
    })?;

    info!("Scroll header attached");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_exclusive() {
        assert_eq!(HeaderStyle::for_offset(0.0), HeaderStyle::Default);
        assert_eq!(HeaderStyle::for_offset(50.0), HeaderStyle::Default);
        assert_eq!(HeaderStyle::for_offset(50.5), HeaderStyle::Compact);
        assert_eq!(HeaderStyle::for_offset(1200.0), HeaderStyle::Compact);
    }

    #[test]
    fn compact_style_tightens_padding() {
        assert_eq!(
            HeaderStyle::Compact.declarations(),
            ("0 4px 20px rgba(0,0,0,0.15)", "10px 0")
        );
        assert_eq!(
            HeaderStyle::Default.declarations(),
            ("0 2px 10px rgba(0,0,0,0.1)", "15px 0")
        );
    }
}
