use log::info;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement};

use crate::config::{ACCENT_COLOR, SECTION_ACTIVATION_OFFSET};
use crate::dom;

/// Id of the last section (in document order) whose top, less the activation
/// offset, has been scrolled past. Empty when none qualifies.
pub fn current_section<'a, I>(sections: I, scroll_y: f64) -> String
where
    I: IntoIterator<Item = (Option<&'a str>, f64)>,
{
    let mut current = "";
    for (id, top) in sections {
        if scroll_y >= top - SECTION_ACTIVATION_OFFSET {
            current = id.unwrap_or("");
        }
    }
    current.to_string()
}

pub fn is_current_link(href: Option<&str>, current: &str) -> bool {
    match (href, current) {
        (_, "") | (None, _) => false,
        (Some(href), current) => href.strip_prefix('#') == Some(current),
    }
}

fn highlight(document: &Document, scroll_y: f64) -> Result<(), JsValue> {
    let sections = dom::query_all(document, ".section, .hero")?;
    let placed: Vec<(Option<String>, f64)> = sections
        .iter()
        .filter_map(|s| s.dyn_ref::<HtmlElement>())
        .map(|s| (s.get_attribute("id"), f64::from(s.offset_top())))
        .collect();
    let current = current_section(placed.iter().map(|(id, top)| (id.as_deref(), *top)), scroll_y);

    for link in dom::query_all(document, ".nav-link")? {
        let is_current = is_current_link(link.get_attribute("href").as_deref(), &current);
        dom::set_active(&link, is_current);
        if let Some(link) = link.dyn_ref::<HtmlElement>() {
            dom::set_style(link, "color", if is_current { ACCENT_COLOR } else { "" });
        }
    }
    Ok(())
}

pub fn init(document: &Document) -> Result<(), JsValue> {
    let window = dom::window()?;
    let window_clone = window.clone();
    let document = document.clone();

    dom::listen(&window, "scroll", move |_| {
        let scroll_y = window_clone.page_y_offset().unwrap_or(0.0);
        if let Err(e) = highlight(&document, scroll_y) {
            log::error!("active link update failed: {:?}", e);
        }
    })?;

    info!("Active link highlighting attached");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: [(Option<&str>, f64); 4] = [
        (Some("home"), 0.0),
        (Some("intro"), 800.0),
        (None, 1400.0),
        (Some("contact"), 2000.0),
    ];

    #[test]
    fn top_of_page_selects_hero() {
        assert_eq!(current_section(PAGE, 0.0), "home");
    }

    #[test]
    fn section_activates_two_hundred_pixels_early() {
        assert_eq!(current_section(PAGE, 599.0), "home");
        assert_eq!(current_section(PAGE, 600.0), "intro");
    }

    #[test]
    fn last_qualifying_section_wins() {
        assert_eq!(current_section(PAGE, 5000.0), "contact");
    }

    #[test]
    fn section_without_id_clears_current() {
        assert_eq!(current_section(PAGE, 1300.0), "");
    }

    #[test]
    fn nothing_qualifies_before_first_section() {
        let sections = [(Some("about"), 900.0)];
        assert_eq!(current_section(sections, 100.0), "");
    }

    #[test]
    fn links_match_on_fragment() {
        assert!(is_current_link(Some("#intro"), "intro"));
        assert!(!is_current_link(Some("#home"), "intro"));
        assert!(!is_current_link(Some("intro"), "intro"));
        assert!(!is_current_link(None, "intro"));
    }

    #[test]
    fn empty_current_matches_no_link() {
        assert!(!is_current_link(Some("#"), ""));
        assert!(!is_current_link(Some(""), ""));
    }
}
