use std::cell::Cell;
use std::rc::Rc;

use log::info;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Node};

use crate::dom;

/// Open/closed state of the mobile menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(self) -> Self {
        MenuState { open: !self.open }
    }

    pub fn close(self) -> Self {
        MenuState { open: false }
    }

    /// A document click closes the menu only when it lands outside both the
    /// menu and its toggle.
    pub fn on_document_click(self, inside_menu: bool, on_toggle: bool) -> Self {
        if self.open && !inside_menu && !on_toggle {
            self.close()
        } else {
            self
        }
    }
}

fn render(state: MenuState, toggle: &Element, menu: &Element) {
    dom::set_active(menu, state.is_open());
    dom::set_active(toggle, state.is_open());
}

fn contains(container: &Element, target: Option<&Node>) -> bool {
    target.map_or(false, |node| container.contains(Some(node)))
}

pub fn init(document: &Document) -> Result<(), JsValue> {
    let (Some(toggle), Some(menu)) = (
        document.get_element_by_id("nav-toggle"),
        document.get_element_by_id("nav-menu"),
    ) else {
        return Ok(());
    };

    // Seed from markup so a menu rendered open stays consistent.
    let state = Rc::new(Cell::new(MenuState { open: dom::is_active(&menu) }));

    {
        let state = state.clone();
        let (toggle_el, menu_el) = (toggle.clone(), menu.clone());
        dom::listen(&toggle, "click", move |_| {
            state.set(state.get().toggle());
            render(state.get(), &toggle_el, &menu_el);
        })?;
    }

    for link in dom::query_all(document, ".nav-link")? {
        let state = state.clone();
        let (toggle_el, menu_el) = (toggle.clone(), menu.clone());
        dom::listen(&link, "click", move |_| {
            state.set(state.get().close());
            render(state.get(), &toggle_el, &menu_el);
        })?;
    }

    {
        let state = state.clone();
        let (toggle_el, menu_el) = (toggle.clone(), menu.clone());
        dom::listen(document, "click", move |event| {
            let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
            let inside_menu = contains(&menu_el, target.as_ref());
            let on_toggle = contains(&toggle_el, target.as_ref());
            let next = state.get().on_document_click(inside_menu, on_toggle);
            if next != state.get() {
                state.set(next);
                render(next, &toggle_el, &menu_el);
            }
        })?;
    }

    info!("Navigation toggle attached");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_state() {
        let state = MenuState::default();
        assert!(state.toggle().is_open());
        assert!(!state.toggle().toggle().is_open());
    }

    #[test]
    fn outside_click_closes_open_menu() {
        let open = MenuState::default().toggle();
        assert!(!open.on_document_click(false, false).is_open());
    }

    #[test]
    fn clicks_inside_menu_or_on_toggle_keep_it_open() {
        let open = MenuState::default().toggle();
        assert!(open.on_document_click(true, false).is_open());
        assert!(open.on_document_click(false, true).is_open());
    }

    #[test]
    fn outside_click_on_closed_menu_is_noop() {
        let closed = MenuState::default();
        assert_eq!(closed.on_document_click(false, false), closed);
    }
}
