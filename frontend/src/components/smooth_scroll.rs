use log::info;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::dom;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnchorAction<'a> {
    /// Bare `#` or empty href: swallow the click.
    Suppress,
    /// Treat the href as a selector for the scroll target.
    Resolve(&'a str),
}

impl<'a> AnchorAction<'a> {
    pub fn from_href(href: &'a str) -> Self {
        if href.is_empty() || href == "#" {
            AnchorAction::Suppress
        } else {
            AnchorAction::Resolve(href)
        }
    }
}

/// Scroll position that puts the target's top just under the fixed header.
pub fn scroll_target(target_offset_top: i32, header_height: i32) -> f64 {
    f64::from(target_offset_top - header_height)
}

fn scroll_to(target: &HtmlElement, document: &Document) -> Result<(), JsValue> {
    let header_height = dom::html_by_id(document, "header").map_or(0, |h| h.offset_height());
    let options = ScrollToOptions::new();
    options.set_top(scroll_target(target.offset_top(), header_height));
    options.set_behavior(ScrollBehavior::Smooth);
    dom::window()?.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

pub fn init(document: &Document) -> Result<(), JsValue> {
    let links = dom::query_all(document, "a[href^=\"#\"]")?;

    for link in &links {
        let link_el = link.clone();
        let document = document.clone();
        dom::listen(link, "click", move |event| {
            let href = link_el.get_attribute("href").unwrap_or_default();
            let selector = match AnchorAction::from_href(&href) {
                AnchorAction::Suppress => {
                    event.prevent_default();
                    return;
                }
                AnchorAction::Resolve(selector) => selector,
            };

            // An unparseable selector behaves like a missing target.
            let target = document
                .query_selector(selector)
                .ok()
                .flatten()
                .and_then(|t| t.dyn_into::<HtmlElement>().ok());
            if let Some(target) = target {
                event.prevent_default();
                if let Err(e) = scroll_to(&target, &document) {
                    log::error!("smooth scroll to {} failed: {:?}", selector, e);
                }
            }
        })?;
    }

    info!("Smooth scroll attached to {} anchors", links.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_and_empty_hrefs_are_suppressed() {
        assert_eq!(AnchorAction::from_href("#"), AnchorAction::Suppress);
        assert_eq!(AnchorAction::from_href(""), AnchorAction::Suppress);
    }

    #[test]
    fn fragment_hrefs_resolve_as_selectors() {
        assert_eq!(AnchorAction::from_href("#contact"), AnchorAction::Resolve("#contact"));
    }

    #[test]
    fn target_sits_below_the_header() {
        assert_eq!(scroll_target(1200, 80), 1120.0);
        assert_eq!(scroll_target(30, 80), -50.0);
        assert_eq!(scroll_target(500, 0), 500.0);
    }
}
