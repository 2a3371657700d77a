use gloo::events::EventListener;
use web_sys::{Event, HtmlElement};
use yew::prelude::*;

/// True while a finger rests on `node`.
#[hook]
pub fn use_touch_feedback(node: NodeRef) -> bool {
    let pressed = use_state(|| false);

    {
        let pressed = pressed.clone();
        use_effect_with(node, move |node| {
            let listeners = node.cast::<HtmlElement>().map(|el| {
                let press = {
                    let pressed = pressed.clone();
                    EventListener::new(&el, "touchstart", move |_e: &Event| pressed.set(true))
                };
                let release: Vec<EventListener> = ["touchend", "touchcancel"]
                    .into_iter()
                    .map(|kind| {
                        let pressed = pressed.clone();
                        EventListener::new(&el, kind, move |_e: &Event| pressed.set(false))
                    })
                    .collect();
                (press, release)
            });
            move || drop(listeners)
        });
    }

    *pressed
}
