use gloo::events::EventListener;
use web_sys::Event;
use yew::prelude::*;

use crate::state::TouchSignals;

/// Whether the device is primarily touch driven. Checked again on resize
/// since hybrids flip between tablet and desktop modes.
#[hook]
pub fn use_touch_device() -> bool {
    let is_touch = use_state(|| false);

    {
        let is_touch = is_touch.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|window| {
                let check = {
                    let window = window.clone();
                    move || {
                        let signals = TouchSignals::read(&window);
                        is_touch.set(signals.is_touch_device());
                    }
                };
                check();
                EventListener::new(&window, "resize", move |_e: &Event| check())
            });
            move || drop(listener)
        });
    }

    *is_touch
}
