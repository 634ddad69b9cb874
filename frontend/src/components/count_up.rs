use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::{COUNT_UP_DURATION_MS, COUNT_UP_STEPS, STATS_VISIBILITY_THRESHOLD};
use crate::dom;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    Continue(i64),
    Done(i64),
}

impl Tick {
    pub fn value(self) -> i64 {
        match self {
            Tick::Continue(v) | Tick::Done(v) => v,
        }
    }
}

/// Stepped count from zero to `target`: `COUNT_UP_STEPS` equal increments,
/// floored in between, exact on the last step.
#[derive(Clone, Debug)]
pub struct CountUp {
    target: i64,
    step: u32,
}

impl CountUp {
    pub fn new(target: i64) -> Self {
        CountUp { target, step: 0 }
    }

    pub fn step_ms() -> u32 {
        COUNT_UP_DURATION_MS / COUNT_UP_STEPS
    }

    pub fn is_done(&self) -> bool {
        self.step >= COUNT_UP_STEPS
    }

    pub fn advance(&mut self) -> Tick {
        if self.is_done() {
            return Tick::Done(self.target);
        }
        self.step += 1;
        // Non-positive targets are reached by the first increment.
        if self.target <= 0 || self.is_done() {
            self.step = COUNT_UP_STEPS;
            return Tick::Done(self.target);
        }
        // Widened so huge targets cannot overflow; the quotient never exceeds target.
        let value = i128::from(self.target) * i128::from(self.step) / i128::from(COUNT_UP_STEPS);
        Tick::Continue(value as i64)
    }
}

/// Reads a leading integer the way `data-count="120+"` is meant: optional
/// whitespace, optional sign, then digits. Anything after is ignored and
/// digit runs too long for an i64 saturate.
pub fn parse_count(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (sign, rest) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };
    let digits: &str = &rest[..rest.bytes().take_while(u8::is_ascii_digit).count()];
    if digits.is_empty() {
        return None;
    }
    match digits.parse::<i64>() {
        Ok(n) => Some(sign * n),
        Err(_) if sign < 0 => Some(i64::MIN),
        Err(_) => Some(i64::MAX),
    }
}

/// Fires once per stats widget, no matter how often it re-enters view.
#[derive(Debug, Default)]
pub struct AnimationGate {
    animated: Cell<bool>,
}

impl AnimationGate {
    pub fn try_fire(&self) -> bool {
        !self.animated.replace(true)
    }
}

fn run(element: Element, mut counter: CountUp) {
    Timeout::new(CountUp::step_ms(), move || {
        let tick = counter.advance();
        element.set_text_content(Some(&tick.value().to_string()));
        if let Tick::Continue(_) = tick {
            run(element, counter);
        }
    })
    .forget();
}

fn animate_all(counters: &[Element]) {
    for element in counters {
        let raw = element.get_attribute("data-count").unwrap_or_default();
        match parse_count(&raw) {
            Some(target) => run(element.clone(), CountUp::new(target)),
            None => debug!("skipping stat without numeric data-count: {:?}", raw),
        }
    }
}

pub fn init(document: &Document) -> Result<(), JsValue> {
    let Some(stats) = document.query_selector(".intro-stats")? else {
        return Ok(());
    };
    let counters = dom::query_all(document, ".stat-number")?;
    let gate = Rc::new(AnimationGate::default());

    let callback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if entry.is_intersecting() && gate.try_fire() {
                info!("Stats in view, animating {} counters", counters.len());
                animate_all(&counters);
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(STATS_VISIBILITY_THRESHOLD));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(&stats);
    callback.forget();

    info!("Count-up observer attached");
    Ok(())
}
