use gloo::events::{EventListener, EventListenerOptions};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, EventTarget, HtmlElement, MouseEvent, TouchEvent};
use yew::prelude::*;

use super::pointer::{sample_mouse, sample_touch};
use crate::config::DragConfig;
use crate::model::{DragState, PointerSample};
use crate::state::{DragTracker, MouseGate};
use crate::util::now_ms;

#[derive(Clone, Default, PartialEq)]
pub struct DragHandlers {
    pub on_drag_start: Option<Callback<DragState>>,
    pub on_drag: Option<Callback<DragState>>,
    pub on_drag_end: Option<Callback<DragState>>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragEvent {
    Started(DragState),
    Moved(DragState),
    Ended(DragState),
}

type Session = Rc<RefCell<Option<Vec<EventListener>>>>;

/// DOM listeners feeding one `DragTracker`. Mouse move/up live on the
/// document and exist only while a mouse drag is in progress.
pub struct DragBinding {
    tracker: Rc<RefCell<DragTracker>>,
    mouse_session: Session,
    _listeners: Vec<EventListener>,
}

struct DocumentTargets {
    document: EventTarget,
    root: EventTarget,
}

impl DocumentTargets {
    fn current() -> Result<Self, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let root: EventTarget = match document.document_element() {
            Some(root) => root.into(),
            None => document.clone().into(),
        };
        Ok(Self {
            document: document.into(),
            root,
        })
    }

    fn subscribe(
        &self,
        tracker: &Rc<RefCell<DragTracker>>,
        track: &Rc<dyn Fn(PointerSample)>,
        finish: &Rc<dyn Fn()>,
    ) -> Vec<EventListener> {
        let tracker = tracker.clone();
        let track = track.clone();
        let on_move = EventListener::new_with_options(
            &self.document,
            "mousemove",
            EventListenerOptions::enable_prevent_default(),
            move |e: &Event| {
                let Some(e) = e.dyn_ref::<MouseEvent>() else {
                    return;
                };
                if tracker.borrow().is_dragging() {
                    e.prevent_default();
                    track(sample_mouse(e));
                }
            },
        );
        let up = finish.clone();
        let on_up = EventListener::new(&self.document, "mouseup", move |_e: &Event| up());
        let leave = finish.clone();
        let on_leave = EventListener::new(&self.root, "mouseleave", move |_e: &Event| leave());
        vec![on_move, on_up, on_leave]
    }
}

impl DragBinding {
    pub fn attach(target: &EventTarget, config: DragConfig, emit: Rc<dyn Fn(DragEvent)>) -> Result<Self, JsValue> {
        let document = Rc::new(DocumentTargets::current()?);
        let tracker = Rc::new(RefCell::new(DragTracker::new()));
        let gate = Rc::new(RefCell::new(MouseGate::new()));
        let mouse_session: Session = Rc::new(RefCell::new(None));

        let begin: Rc<dyn Fn(PointerSample)> = {
            let tracker = tracker.clone();
            let emit = emit.clone();
            Rc::new(move |sample| {
                let st = tracker.borrow_mut().start(sample);
                log::debug!("drag start at {:.0}", st.start_x);
                emit(DragEvent::Started(st));
            })
        };
        let track: Rc<dyn Fn(PointerSample)> = {
            let tracker = tracker.clone();
            let emit = emit.clone();
            Rc::new(move |sample| {
                let moved = tracker.borrow_mut().move_to(sample);
                if let Some(st) = moved {
                    emit(DragEvent::Moved(st));
                }
            })
        };
        let finish: Rc<dyn Fn()> = {
            let tracker = tracker.clone();
            let mouse_session = mouse_session.clone();
            Rc::new(move || {
                let session = mouse_session.borrow_mut().take();
                drop(session);
                let ended = tracker.borrow_mut().end();
                if let Some(last) = ended {
                    log::debug!("drag end, delta {:.0}", last.delta_x);
                    emit(DragEvent::Ended(last));
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
            let tracker = tracker.clone();
            let gate = gate.clone();
            listeners.push(EventListener::new_with_options(
                target,
                "touchmove",
                EventListenerOptions::enable_prevent_default(),
                move |e: &Event| {
                    gate.borrow_mut().touched(now_ms());
                    if let Some(s) = e.dyn_ref::<TouchEvent>().and_then(sample_touch) {
                        track(s);
                    }
                    if tracker.borrow().should_prevent_scroll(config.axis) {
                        e.prevent_default();
                    }
                },
            ));
        }
        for kind in ["touchend", "touchcancel"] {
            let finish = finish.clone();
            let gate = gate.clone();
            listeners.push(EventListener::new(target, kind, move |_e: &Event| {
                gate.borrow_mut().touched(now_ms());
                finish();
            }));
        }
        {
            let tracker = tracker.clone();
            let mouse_session = mouse_session.clone();
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
                // Drop any stale session first so listeners never stack.
                let stale = mouse_session.borrow_mut().take();
                drop(stale);
                begin(sample);
                let session = document.subscribe(&tracker, &track, &finish);
                *mouse_session.borrow_mut() = Some(session);
            }));
        }

        Ok(Self {
            tracker,
            mouse_session,
            _listeners: listeners,
        })
    }

    pub fn state(&self) -> DragState {
        self.tracker.borrow().state()
    }

    pub fn mouse_session_active(&self) -> bool {
        self.mouse_session.borrow().is_some()
    }
}

impl Drop for DragBinding {
    fn drop(&mut self) {
        let session = self.mouse_session.borrow_mut().take();
        drop(session);
        let _ = self.tracker.borrow_mut().end();
    }
}

/// Tracks drags on `node` from touch or mouse. A mouse drag follows the
/// pointer over the whole document until release.
#[hook]
pub fn use_drag_gesture(node: NodeRef, handlers: DragHandlers, config: DragConfig) -> DragState {
    let handlers_ref = use_mut_ref(|| handlers.clone());
    *handlers_ref.borrow_mut() = handlers;
    let drag_state = use_state(DragState::default);

    {
        let drag_state = drag_state.clone();
        use_effect_with((node, config), move |(node, config)| {
            let binding = node.cast::<HtmlElement>().and_then(|el| {
                let emit: Rc<dyn Fn(DragEvent)> = Rc::new(move |event| {
                    let h = handlers_ref.borrow().clone();
                    match event {
                        DragEvent::Started(st) => {
                            drag_state.set(st);
                            if let Some(cb) = &h.on_drag_start {
                                cb.emit(st);
                            }
                        }
                        DragEvent::Moved(st) => {
                            drag_state.set(st);
                            if let Some(cb) = &h.on_drag {
                                cb.emit(st);
                            }
                        }
                        DragEvent::Ended(last) => {
                            drag_state.set(DragState::default());
                            if let Some(cb) = &h.on_drag_end {
                                cb.emit(last);
                            }
                        }
                    }
                });
                DragBinding::attach(&el, *config, emit)
                    .map_err(|e| log::warn!("drag listeners not attached: {e:?}"))
                    .ok()
            });
            move || drop(binding)
        });
    }

    *drag_state
}

#[cfg(all(test, target_arch = "wasm32"))]
mod dom_tests {
    use super::*;
    use crate::hooks::test_support::{detached_div, dispatch, document, mouse};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn recorder() -> (Rc<RefCell<Vec<DragEvent>>>, Rc<dyn Fn(DragEvent)>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        (log, Rc::new(move |e| sink.borrow_mut().push(e)))
    }

    #[wasm_bindgen_test]
    fn document_moves_outside_a_drag_are_ignored() {
        let el = detached_div();
        let doc = document();
        let (log, emit) = recorder();
        let binding = DragBinding::attach(&el, DragConfig::default(), emit).unwrap();

        dispatch(&doc, &mouse("mousemove", 40, 0));
        assert!(log.borrow().is_empty());
        assert!(!binding.mouse_session_active());

        dispatch(&el, &mouse("mousedown", 100, 0));
        assert!(binding.mouse_session_active());
        dispatch(&doc, &mouse("mousemove", 60, 0));
        assert_eq!(binding.state().delta_x, -40.0);
        dispatch(&doc, &mouse("mouseup", 60, 0));
        assert!(!binding.mouse_session_active());
        assert!(!binding.state().is_dragging);

        dispatch(&doc, &mouse("mousemove", 10, 0));
        dispatch(&doc, &mouse("mouseup", 10, 0));

        let log = log.borrow();
        assert_eq!(log.len(), 3);
        assert!(matches!(log[0], DragEvent::Started(_)));
        assert!(matches!(log[1], DragEvent::Moved(_)));
        assert!(matches!(log[2], DragEvent::Ended(st) if st.delta_x == -40.0));
    }

    #[wasm_bindgen_test]
    fn mouse_replayed_after_touch_does_not_start_a_drag() {
        let el = detached_div();
        let (log, emit) = recorder();
        let binding = DragBinding::attach(&el, DragConfig::default(), emit).unwrap();

        dispatch(&el, &web_sys::Event::new("touchend").unwrap());
        dispatch(&el, &mouse("mousedown", 100, 0));

        assert!(log.borrow().is_empty());
        assert!(!binding.mouse_session_active());
    }

    #[wasm_bindgen_test]
    fn dropping_mid_drag_removes_document_listeners() {
        let el = detached_div();
        let doc = document();
        let (log, emit) = recorder();
        let binding = DragBinding::attach(&el, DragConfig::default(), emit).unwrap();

        dispatch(&el, &mouse("mousedown", 100, 0));
        drop(binding);
        dispatch(&doc, &mouse("mousemove", 20, 0));
        dispatch(&doc, &mouse("mouseup", 20, 0));
        dispatch(&el, &mouse("mousedown", 100, 0));

        let log = log.borrow();
        assert_eq!(log.len(), 1);
        assert!(matches!(log[0], DragEvent::Started(_)));
    }
}
