use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, MouseEvent};
use yew::prelude::*;
use yew::AppHandle;

use crate::config::{NOTICE_AUTO_DISMISS_MS, NOTICE_FADE_MS, NOTICE_SUBTITLE, NOTICE_TITLE};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticePhase {
    Shown,
    FadingOut,
    Removed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeEvent {
    AutoDismiss,
    FadeComplete,
    BackdropClick,
}

impl NoticePhase {
    pub fn next(self, event: NoticeEvent) -> Self {
        match (self, event) {
            (NoticePhase::Removed, _) => NoticePhase::Removed,
            (_, NoticeEvent::BackdropClick) => NoticePhase::Removed,
            (NoticePhase::Shown, NoticeEvent::AutoDismiss) => NoticePhase::FadingOut,
            (NoticePhase::FadingOut, NoticeEvent::FadeComplete) => NoticePhase::Removed,
            (phase, _) => phase,
        }
    }

    /// Delay before the timed transition out of this phase, if any.
    pub fn timer(self) -> Option<(u32, NoticeEvent)> {
        match self {
            NoticePhase::Shown => Some((NOTICE_AUTO_DISMISS_MS, NoticeEvent::AutoDismiss)),
            NoticePhase::FadingOut => Some((NOTICE_FADE_MS, NoticeEvent::FadeComplete)),
            NoticePhase::Removed => None,
        }
    }
}

impl Reducible for NoticePhase {
    type Action = NoticeEvent;

    fn reduce(self: Rc<Self>, action: NoticeEvent) -> Rc<Self> {
        let next = self.next(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SuccessNoticeProps {
    pub on_closed: Callback<()>,
}

#[function_component(SuccessNotice)]
pub fn success_notice(props: &SuccessNoticeProps) -> Html {
    let phase = use_reducer(|| NoticePhase::Shown);

    {
        let dispatcher = phase.dispatcher();
        let on_closed = props.on_closed.clone();
        use_effect_with_deps(
            move |phase: &NoticePhase| {
                let timeout = phase.timer().map(|(delay, event)| {
                    Timeout::new(delay, move || dispatcher.dispatch(event))
                });
                if *phase == NoticePhase::Removed {
                    on_closed.emit(());
                }
                // Dropping the timeout cancels it if the notice goes away first.
                move || drop(timeout)
            },
            *phase,
        );
    }

    let on_backdrop = {
        let phase = phase.clone();
        Callback::from(move |_: MouseEvent| phase.dispatch(NoticeEvent::BackdropClick))
    };

    let fading = match *phase {
        NoticePhase::Removed => return html! {},
        NoticePhase::FadingOut => true,
        NoticePhase::Shown => false,
    };

    let overlay_style = format!(
        "position: fixed; top: 0; left: 0; width: 100%; height: 100%; background: rgba(0,0,0,0.5); z-index: 9999;{}",
        if fading { " opacity: 0;" } else { "" }
    );
    let message_style = format!(
        "position: fixed; top: 50%; left: 50%; transform: translate(-50%, -50%); background: white; padding: 40px; border-radius: 20px; box-shadow: 0 10px 50px rgba(0,0,0,0.3); z-index: 10000; text-align: center; animation: {} 0.3s ease;",
        if fading { "slideOut" } else { "slideIn" }
    );

    html! {
        <>
            <div class="success-overlay" style={overlay_style} onclick={on_backdrop}></div>
            <div class="success-message" style={message_style}>
                <div class="success-content">
                    <span class="success-icon">{"✓"}</span>
                    <p>{NOTICE_TITLE}</p>
                    <p class="success-sub">{NOTICE_SUBTITLE}</p>
                </div>
            </div>
        </>
    }
}

/// Holds at most one value, tagged with a generation id so that a stale
/// release cannot evict a newer occupant.
pub struct Slot<T> {
    generation: Cell<u64>,
    current: RefCell<Option<(u64, T)>>,
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Slot {
            generation: Cell::new(0),
            current: RefCell::new(None),
        }
    }
}

impl<T> Slot<T> {
    /// Starts a new generation and hands back the previous occupant.
    pub fn reserve(&self) -> (u64, Option<T>) {
        let id = self.generation.get() + 1;
        self.generation.set(id);
        let previous = self.current.borrow_mut().take().map(|(_, value)| value);
        (id, previous)
    }

    pub fn fill(&self, id: u64, value: T) {
        *self.current.borrow_mut() = Some((id, value));
    }

    pub fn release(&self, id: u64) -> Option<T> {
        let mut current = self.current.borrow_mut();
        if matches!(current.as_ref(), Some((held, _)) if *held == id) {
            current.take().map(|(_, value)| value)
        } else {
            None
        }
    }

    #[cfg(test)]
    pub fn is_occupied(&self) -> bool {
        self.current.borrow().is_some()
    }
}

struct MountedNotice {
    host: Element,
    app: AppHandle<SuccessNotice>,
}

impl MountedNotice {
    fn unmount(self) {
        self.app.destroy();
        self.host.remove();
    }
}

/// The post-submission confirmation: a backdrop plus a centered panel,
/// mounted into a fresh element on `<body>`. Only one is ever on screen.
#[derive(Clone, Default)]
pub struct TransientNotice {
    slot: Rc<Slot<MountedNotice>>,
}

impl TransientNotice {
    pub fn show(&self, document: &Document) -> Result<(), JsValue> {
        let (id, previous) = self.slot.reserve();
        if let Some(previous) = previous {
            debug!("replacing notice still on screen");
            previous.unmount();
        }

        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?;
        let host = document.create_element("div")?;
        host.set_class_name("success-notice");
        body.append_child(&host)?;

        let slot = Rc::downgrade(&self.slot);
        let on_closed = Callback::from(move |_: ()| {
            let slot = slot.clone();
            // Tear down on the next tick, outside the notice's own effect.
            Timeout::new(0, move || {
                if let Some(mounted) = slot.upgrade().and_then(|s| s.release(id)) {
                    mounted.unmount();
                }
            })
            .forget();
        });

        let app = yew::Renderer::<SuccessNotice>::with_root_and_props(
            host.clone(),
            SuccessNoticeProps { on_closed },
        )
        .render();
        self.slot.fill(id, MountedNotice { host, app });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_dismiss_fades_then_removes() {
        let phase = NoticePhase::Shown.next(NoticeEvent::AutoDismiss);
        assert_eq!(phase, NoticePhase::FadingOut);
        assert_eq!(phase.next(NoticeEvent::FadeComplete), NoticePhase::Removed);
    }

    #[test]
    fn backdrop_click_removes_without_fading() {
        assert_eq!(NoticePhase::Shown.next(NoticeEvent::BackdropClick), NoticePhase::Removed);
        assert_eq!(NoticePhase::FadingOut.next(NoticeEvent::BackdropClick), NoticePhase::Removed);
    }

    #[test]
    fn removed_is_terminal() {
        for event in [NoticeEvent::AutoDismiss, NoticeEvent::FadeComplete, NoticeEvent::BackdropClick] {
            assert_eq!(NoticePhase::Removed.next(event), NoticePhase::Removed);
        }
    }

    #[test]
    fn out_of_order_events_are_ignored() {
        assert_eq!(NoticePhase::Shown.next(NoticeEvent::FadeComplete), NoticePhase::Shown);
        assert_eq!(NoticePhase::FadingOut.next(NoticeEvent::AutoDismiss), NoticePhase::FadingOut);
    }

    #[test]
    fn timers_match_dismiss_schedule() {
        assert_eq!(NoticePhase::Shown.timer(), Some((3000, NoticeEvent::AutoDismiss)));
        assert_eq!(NoticePhase::FadingOut.timer(), Some((300, NoticeEvent::FadeComplete)));
        assert_eq!(NoticePhase::Removed.timer(), None);
    }

    #[test]
    fn slot_hands_back_previous_occupant() {
        let slot = Slot::default();
        let (first, previous) = slot.reserve();
        assert!(previous.is_none());
        slot.fill(first, "first");

        let (second, previous) = slot.reserve();
        assert_eq!(previous, Some("first"));
        slot.fill(second, "second");
        assert!(slot.is_occupied());
    }

    #[test]
    fn stale_release_keeps_current_occupant() {
        let slot = Slot::default();
        let (first, _) = slot.reserve();
        slot.fill(first, "first");
        let (second, _) = slot.reserve();
        slot.fill(second, "second");

        assert_eq!(slot.release(first), None);
        assert!(slot.is_occupied());
        assert_eq!(slot.release(second), Some("second"));
        assert!(!slot.is_occupied());
    }
}
