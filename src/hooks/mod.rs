//! Yew hooks binding the gesture state machines to DOM input events.
//!
//! Every hook owns its own state; listeners are attached when the target
//! mounts and removed on teardown. A `NodeRef` that never resolves to an
//! element leaves the hook inert.

pub mod device;
pub mod drag;
pub mod feedback;
pub mod pinch;
pub mod pointer;
pub mod swipe;

pub use device::use_touch_device;
pub use drag::{DragBinding, DragEvent, DragHandlers, use_drag_gesture};
pub use feedback::use_touch_feedback;
pub use pinch::{PinchHandlers, use_pinch_gesture};
pub use swipe::{SwipeBinding, SwipeEvent, SwipeHandlers, use_swipe_gesture};

#[cfg(all(test, target_arch = "wasm32"))]
pub(crate) mod test_support {
    use wasm_bindgen::JsCast;
    use web_sys::{Document, Event, EventTarget, HtmlElement, MouseEvent, MouseEventInit};

    pub fn document() -> Document {
        web_sys::window().unwrap().document().unwrap()
    }

    /// A fresh element that is not in the page, so nothing else listens on it.
    pub fn detached_div() -> HtmlElement {
        document().create_element("div").unwrap().unchecked_into()
    }

    pub fn mouse(kind: &str, x: i32, y: i32) -> MouseEvent {
        let init = MouseEventInit::new();
        init.set_bubbles(true);
        init.set_client_x(x);
        init.set_client_y(y);
        MouseEvent::new_with_mouse_event_init_dict(kind, &init).unwrap()
    }

    pub fn dispatch(target: &EventTarget, event: &Event) {
        target.dispatch_event(event).unwrap();
    }
}
