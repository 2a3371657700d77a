use gloo::events::{EventListener, EventListenerOptions};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, HtmlElement, MouseEvent, TouchEvent};
use yew::prelude::*;

use super::pointer::{sample_mouse, sample_touch};
use crate::config::SwipeConfig;
use crate::model::{PointerSample, SwipeDirection, SwipeState};
use crate::state::{MouseGate, SwipeDetector, SwipeOutcome};
use crate::util::now_ms;

#[derive(Clone, Default, PartialEq)]
pub struct SwipeHandlers {
    pub on_swipe_left: Option<Callback<()>>,
    pub on_swipe_right: Option<Callback<()>>,
    pub on_swipe_up: Option<Callback<()>>,
    pub on_swipe_down: Option<Callback<()>>,
    pub on_swiping: Option<Callback<SwipeState>>,
    pub on_swipe_end: Option<Callback<SwipeState>>,
}

impl SwipeHandlers {
    fn directional(&self, dir: SwipeDirection) -> Option<&Callback<()>> {
        match dir {
            SwipeDirection::Left => self.on_swipe_left.as_ref(),
            SwipeDirection::Right => self.on_swipe_right.as_ref(),
            SwipeDirection::Up => self.on_swipe_up.as_ref(),
            SwipeDirection::Down => self.on_swipe_down.as_ref(),
            SwipeDirection::None => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SwipeEvent {
    Swiping(SwipeState),
    Ended(SwipeOutcome),
}

/// DOM listeners feeding one `SwipeDetector`. Dropping it removes them.
pub struct SwipeBinding {
    detector: Rc<RefCell<SwipeDetector>>,
    _listeners: Vec<EventListener>,
}

impl SwipeBinding {
    pub fn attach(target: &EventTarget, config: SwipeConfig, emit: Rc<dyn Fn(SwipeEvent)>) -> Self {
        let detector = Rc::new(RefCell::new(SwipeDetector::new(config)));
        let gate = Rc::new(RefCell::new(MouseGate::new()));

        let begin: Rc<dyn Fn(PointerSample)> = {
            let detector = detector.clone();
            Rc::new(move |sample| detector.borrow_mut().start(sample))
        };
        // Returns whether the native event should be cancelled.
        let track: Rc<dyn Fn(PointerSample) -> bool> = {
            let detector = detector.clone();
            let emit = emit.clone();
            Rc::new(move |sample| {
                let Some(mv) = detector.borrow_mut().move_to(sample) else {
                    return false;
                };
                emit(SwipeEvent::Swiping(mv.state));
                mv.prevent_default
            })
        };
        // `cancelled` covers touchcancel and the pointer leaving the element.
        let finish: Rc<dyn Fn(bool)> = {
            let detector = detector.clone();
            Rc::new(move |cancelled| {
                let ended = {
                    let mut d = detector.borrow_mut();
                    if cancelled { d.cancel(now_ms()) } else { d.end(now_ms()) }
                };
                if let Some(out) = ended {
                    emit(SwipeEvent::Ended(out));
                }
            })
        };

        let mut listeners = Vec::new();
        {
            let begin = begin.clone();
            let gate = gate.clone();
            listeners.push(EventListener::new(target, "touchstart", move |e: &Event| {
                gate.borrow_mut().touched(now_ms());
                if let Some(s) = e.dyn_ref::<TouchEvent>().and_then(sample_touch) {
                    begin(s);
                }
            }));
        }
        {
            let track = track.clone();
            let gate = gate.clone();
            let options = if config.prevent_scroll {
                EventListenerOptions::enable_prevent_default()
            } else {
                EventListenerOptions::default()
            };
            listeners.push(EventListener::new_with_options(target, "touchmove", options, move |e: &Event| {
                gate.borrow_mut().touched(now_ms());
                if let Some(s) = e.dyn_ref::<TouchEvent>().and_then(sample_touch) {
                    if track(s) {
                        e.prevent_default();
                    }
                }
            }));
        }
        for kind in ["touchend", "touchcancel"] {
            let finish = finish.clone();
            let gate = gate.clone();
            listeners.push(EventListener::new(target, kind, move |e: &Event| {
                gate.borrow_mut().touched(now_ms());
                finish(e.type_() == "touchcancel");
            }));
        }
        {
            let gate = gate.clone();
            listeners.push(EventListener::new(target, "mousedown", move |e: &Event| {
                let Some(e) = e.dyn_ref::<MouseEvent>() else {
                    return;
                };
                if e.button() != 0 {
                    return;
                }
                let sample = sample_mouse(e);
                if !gate.borrow().admits_sample(&sample) {
                    log::debug!("ignoring emulated mousedown");
                    return;
                }
                begin(sample);
            }));
        }
        listeners.push(EventListener::new_with_options(
            target,
            "mousemove",
            EventListenerOptions::enable_prevent_default(),
            move |e: &Event| {
                let Some(e) = e.dyn_ref::<MouseEvent>() else {
                    return;
                };
                if track(sample_mouse(e)) {
                    e.prevent_default();
                }
            },
        ));
        for kind in ["mouseup", "mouseleave"] {
            let finish = finish.clone();
            listeners.push(EventListener::new(target, kind, move |e: &Event| {
                finish(e.type_() == "mouseleave");
            }));
        }

        Self {
            detector,
            _listeners: listeners,
        }
    }

    pub fn state(&self) -> SwipeState {
        self.detector.borrow().state()
    }
}

impl Drop for SwipeBinding {
    fn drop(&mut self) {
        let _ = self.detector.borrow_mut().end(now_ms());
    }
}

/// Classifies swipes on `node` from touch or mouse input. Returns the live
/// swipe state (neutral outside a gesture).
#[hook]
pub fn use_swipe_gesture(node: NodeRef, handlers: SwipeHandlers, config: SwipeConfig) -> SwipeState {
    let handlers_ref = use_mut_ref(|| handlers.clone());
    *handlers_ref.borrow_mut() = handlers;
    let swiping = use_state(SwipeState::default);

    {
        let swiping = swiping.clone();
        use_effect_with((node, config), move |(node, config)| {
            let binding = node.cast::<HtmlElement>().map(|el| {
                let emit: Rc<dyn Fn(SwipeEvent)> = Rc::new(move |event| {
                    let h = handlers_ref.borrow().clone();
                    match event {
                        SwipeEvent::Swiping(st) => {
                            swiping.set(st);
                            if let Some(cb) = &h.on_swiping {
                                cb.emit(st);
                            }
                        }
                        SwipeEvent::Ended(out) => {
                            swiping.set(SwipeState::default());
                            if let Some(dir) = out.fired {
                                log::debug!("swipe {} ({:.0}px)", dir.label(), out.state.distance);
                                if let Some(cb) = h.directional(dir) {
                                    cb.emit(());
                                }
                            }
                            if let Some(cb) = &h.on_swipe_end {
                                cb.emit(out.state);
                            }
                        }
                    }
                });
                SwipeBinding::attach(&el, *config, emit)
            });
            move || drop(binding)
        });
    }

    *swiping
}

#[cfg(all(test, target_arch = "wasm32"))]
mod dom_tests {
    use super::*;
    use crate::hooks::test_support::{detached_div, dispatch, mouse};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn recorder() -> (Rc<RefCell<Vec<SwipeEvent>>>, Rc<dyn Fn(SwipeEvent)>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        (log, Rc::new(move |e| sink.borrow_mut().push(e)))
    }

    fn ends(log: &Rc<RefCell<Vec<SwipeEvent>>>) -> Vec<SwipeOutcome> {
        log.borrow()
            .iter()
            .filter_map(|e| match e {
                SwipeEvent::Ended(out) => Some(*out),
                SwipeEvent::Swiping(_) => None,
            })
            .collect()
    }

    #[wasm_bindgen_test]
    fn mouse_swipe_ends_once() {
        let el = detached_div();
        let (log, emit) = recorder();
        let binding = SwipeBinding::attach(&el, SwipeConfig::default(), emit);

        dispatch(&el, &mouse("mousedown", 300, 100));
        dispatch(&el, &mouse("mousemove", 120, 100));
        assert_eq!(binding.state().direction, SwipeDirection::Left);
        dispatch(&el, &mouse("mouseup", 120, 100));

        let ends = ends(&log);
        assert_eq!(ends.len(), 1);
        assert_eq!(ends[0].fired, Some(SwipeDirection::Left));
        assert_eq!(binding.state(), SwipeState::default());
    }

    #[wasm_bindgen_test]
    fn mouse_replayed_after_touch_is_ignored() {
        let el = detached_div();
        let (log, emit) = recorder();
        let binding = SwipeBinding::attach(&el, SwipeConfig::default(), emit);

        dispatch(&el, &web_sys::Event::new("touchend").unwrap());
        dispatch(&el, &mouse("mousedown", 300, 100));
        dispatch(&el, &mouse("mousemove", 120, 100));
        dispatch(&el, &mouse("mouseup", 120, 100));

        assert!(log.borrow().is_empty());
        assert_eq!(binding.state(), SwipeState::default());
    }

    #[wasm_bindgen_test]
    fn dropped_binding_stops_listening() {
        let el = detached_div();
        let (log, emit) = recorder();
        drop(SwipeBinding::attach(&el, SwipeConfig::default(), emit));

        dispatch(&el, &mouse("mousedown", 300, 100));
        dispatch(&el, &mouse("mousemove", 120, 100));
        dispatch(&el, &mouse("mouseup", 120, 100));

        assert!(log.borrow().is_empty());
    }
}
