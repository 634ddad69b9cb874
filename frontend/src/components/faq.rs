use std::cell::Cell;
use std::rc::Rc;

use log::info;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::dom;

/// Which FAQ item, if any, is expanded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    pub fn with_open(open: Option<usize>) -> Self {
        Accordion { open }
    }

    pub fn open_item(self) -> Option<usize> {
        self.open
    }

    pub fn is_open(self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Closes everything, then reopens `index` unless it was the open one.
    pub fn click(self, index: usize) -> Self {
        if self.is_open(index) {
            Accordion { open: None }
        } else {
            Accordion { open: Some(index) }
        }
    }
}

fn render(state: Accordion, items: &[Element]) {
    for (i, item) in items.iter().enumerate() {
        dom::set_active(item, state.is_open(i));
    }
}

pub fn init(document: &Document) -> Result<(), JsValue> {
    let items = Rc::new(dom::query_all(document, ".faq-item")?);
    if items.is_empty() {
        return Ok(());
    }

    let initially_open = items.iter().position(dom::is_active);
    let state = Rc::new(Cell::new(Accordion::with_open(initially_open)));

    for (index, item) in items.iter().enumerate() {
        let Some(question) = item.query_selector(".faq-question")? else {
            continue;
        };
        let state = state.clone();
        let items = items.clone();
        dom::listen(&question, "click", move |_| {
            state.set(state.get().click(index));
            render(state.get(), &items);
        })?;
    }

    info!("FAQ accordion attached to {} items", items.len());
    Ok(())
}
