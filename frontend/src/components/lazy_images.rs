use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry};

use crate::dom;

/// Source to promote for an intersection update, if any. Once `data-src` is
/// gone there is nothing left to promote.
pub fn promotion(is_intersecting: bool, deferred: Option<String>) -> Option<String> {
    deferred.filter(|_| is_intersecting)
}

fn load(image: &Element, src: &str) -> Result<(), JsValue> {
    image.set_attribute("src", src)?;
    image.remove_attribute("data-src")
}

pub fn init(document: &Document) -> Result<(), JsValue> {
    let images = dom::query_all(document, "img[data-src]")?;
    if images.is_empty() {
        return Ok(());
    }

    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            let image = entry.target();
            if let Some(src) = promotion(entry.is_intersecting(), image.get_attribute("data-src")) {
                if let Err(e) = load(&image, &src) {
                    log::error!("lazy load of {} failed: {:?}", src, e);
                }
                observer.unobserve(&image);
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())?;
    for image in &images {
        observer.observe(image);
    }
    callback.forget();

    info!("Lazy loading {} images", images.len());
    Ok(())
}
