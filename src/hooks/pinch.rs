use gloo::events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, TouchEvent};
use yew::prelude::*;

use super::pointer::touch_points;
use crate::state::PinchDetector;

#[derive(Clone, Default, PartialEq)]
pub struct PinchHandlers {
    pub on_pinch_start: Option<Callback<f64>>,
    pub on_pinch: Option<Callback<f64>>,
    pub on_pinch_end: Option<Callback<f64>>,
}

/// Two-finger scale on `node`. Returns the live scale, 1.0 when idle.
#[hook]
pub fn use_pinch_gesture(node: NodeRef, handlers: PinchHandlers) -> f64 {
    let detector = use_mut_ref(PinchDetector::new);
    let handlers_ref = use_mut_ref(|| handlers.clone());
    *handlers_ref.borrow_mut() = handlers;
    let scale = use_state(|| 1.0_f64);

    {
        let detector = detector.clone();
        let handlers_ref = handlers_ref.clone();
        let scale = scale.clone();
        use_effect_with(node, move |node| {
            let listeners = match node.cast::<HtmlElement>() {
                Some(el) => attach(&el, detector.clone(), handlers_ref, scale),
                None => Vec::new(),
            };
            move || {
                drop(listeners);
                let _ = detector.borrow_mut().touch_end(0);
            }
        });
    }

    *scale
}

fn attach(
    el: &HtmlElement,
    detector: Rc<RefCell<PinchDetector>>,
    handlers: Rc<RefCell<PinchHandlers>>,
    scale: UseStateHandle<f64>,
) -> Vec<EventListener> {
    let on_start = {
        let detector = detector.clone();
        let handlers = handlers.clone();
        EventListener::new(el, "touchstart", move |e: &Event| {
            let Some(e) = e.dyn_ref::<TouchEvent>() else {
                return;
            };
            let started = detector.borrow_mut().touch_start(&touch_points(&e.touches()));
            if let Some(s) = started {
                log::debug!("pinch start");
                let cb = handlers.borrow().on_pinch_start.clone();
                if let Some(cb) = cb {
                    cb.emit(s);
                }
            }
        })
    };
    let on_move = {
        let detector = detector.clone();
        let handlers = handlers.clone();
        let scale = scale.clone();
        EventListener::new(el, "touchmove", move |e: &Event| {
            let Some(e) = e.dyn_ref::<TouchEvent>() else {
                return;
            };
            let moved = detector.borrow_mut().touch_move(&touch_points(&e.touches()));
            if let Some(s) = moved {
                scale.set(s);
                let cb = handlers.borrow().on_pinch.clone();
                if let Some(cb) = cb {
                    cb.emit(s);
                }
            }
        })
    };
    let end = Rc::new(move |e: &Event| {
        let remaining = match e.dyn_ref::<TouchEvent>() {
            Some(t) if e.type_() != "touchcancel" => t.touches().length() as usize,
            _ => 0,
        };
        let ended = detector.borrow_mut().touch_end(remaining);
        if let Some(s) = ended {
            log::debug!("pinch end at {s:.2}");
            scale.set(1.0);
            let cb = handlers.borrow().on_pinch_end.clone();
            if let Some(cb) = cb {
                cb.emit(s);
            }
        }
    });
    let on_end = {
        let end = end.clone();
        EventListener::new(el, "touchend", move |e: &Event| end(e))
    };
    let on_cancel = EventListener::new(el, "touchcancel", move |e: &Event| end(e));

    vec![on_start, on_move, on_end, on_cancel]
}
