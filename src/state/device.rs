// Touch-primary device classification
use wasm_bindgen::JsValue;
use web_sys::Window;

const COARSE_POINTER_QUERY: &str = "(pointer: coarse)";

/// Raw capability signals read from the browser.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TouchSignals {
    /// `"ontouchstart" in window`
    pub touch_events: bool,
    pub max_touch_points: i32,
    pub coarse_pointer: bool,
}

impl TouchSignals {
    pub fn is_touch_device(&self) -> bool {
        self.touch_events || self.max_touch_points > 0 || self.coarse_pointer
    }

    pub fn read(window: &Window) -> Self {
        let touch_events =
            js_sys::Reflect::has(window, &JsValue::from_str("ontouchstart")).unwrap_or(false);
        let max_touch_points = window.navigator().max_touch_points();
        let coarse_pointer = window
            .match_media(COARSE_POINTER_QUERY)
            .ok()
            .flatten()
            .map(|mq| mq.matches())
            .unwrap_or(false);
        Self {
            touch_events,
            max_touch_points,
            coarse_pointer,
        }
    }
}
