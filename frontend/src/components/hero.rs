use gloo_timers::callback::Timeout;
use web_sys::Document;

use crate::config::HERO_FADE_DELAY_MS;
use crate::dom;

/// Fades the hero copy in shortly after the page finishes loading.
pub fn fade_in(document: &Document) {
    let Some(hero) = dom::query_html(document, ".hero-content") else {
        return;
    };
    dom::set_style(&hero, "opacity", "0");
    Timeout::new(HERO_FADE_DELAY_MS, move || {
        dom::set_style(&hero, "transition", "opacity 1s ease");
        dom::set_style(&hero, "opacity", "1");
    })
    .forget();
}
