use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, KeyboardEvent};
use yew::prelude::*;

use crate::config::DragConfig;
use crate::hooks::{DragHandlers, use_drag_gesture, use_touch_device, use_touch_feedback};
use crate::model::{CarouselAction, CarouselState, DragState};

#[derive(Properties, PartialEq, Clone)]
pub struct CardProps {
    pub title: AttrValue,
    pub active: bool,
    pub width: f64,
}

#[function_component]
fn Card(props: &CardProps) -> Html {
    let card_ref = use_node_ref();
    let pressed = use_touch_feedback(card_ref.clone());
    let scale = match (props.active, pressed) {
        (_, true) => 0.97,
        (true, false) => 1.0,
        (false, false) => 0.95,
    };
    let opacity = if props.active { 1.0 } else { 0.7 };
    let width = if props.width > 0.0 {
        format!("width:{}px;", props.width)
    } else {
        "width:100%;".to_string()
    };
    html! {
        <div ref={card_ref} style={format!("{width} flex-shrink:0; height:160px; background:#161b22; border:1px solid #30363d; border-radius:12px; display:flex; align-items:center; justify-content:center; transform:scale({scale}); opacity:{opacity}; transition:transform 0.3s, opacity 0.3s;")}>
            { props.title.clone() }
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct CardCarouselProps {
    pub titles: Vec<AttrValue>,
    pub config: DragConfig,
    #[prop_or(16.0)]
    pub gap: f64,
    /// Visible sliver of the neighbouring cards, px per side.
    #[prop_or(40.0)]
    pub peek: f64,
    #[prop_or(true)]
    pub only_on_touch: bool,
    pub on_drag: Callback<DragState>,
}

/// Drag-to-scroll carousel on touch devices, a plain grid otherwise.
#[function_component]
pub fn CardCarousel(props: &CardCarouselProps) -> Html {
    let is_touch = use_touch_device();
    if props.only_on_touch && !is_touch {
        return html! {
            <div style="display:grid; grid-template-columns:repeat(auto-fill, minmax(220px, 1fr)); gap:16px;">
                { for props.titles.iter().map(|t| html! { <Card title={t.clone()} active={true} width={0.0} /> }) }
            </div>
        };
    }
    html! { <CarouselTrack ..props.clone() /> }
}

#[function_component]
fn CarouselTrack(props: &CardCarouselProps) -> Html {
    let container_ref = use_node_ref();
    let track_ref = use_node_ref();
    let carousel = use_reducer(|| CarouselState::new(props.titles.len(), props.gap));

    {
        let carousel = carousel.clone();
        use_effect_with(props.titles.len(), move |len| {
            carousel.dispatch(CarouselAction::SetLen(*len));
            || ()
        });
    }

    // Card width tracks the container.
    {
        let carousel = carousel.clone();
        let container_ref = container_ref.clone();
        let peek = props.peek;
        use_effect_with(peek, move |_| {
            let measure = move || {
                if let Some(el) = container_ref.cast::<HtmlElement>() {
                    let width = el.offset_width() as f64 - peek * 2.0;
                    carousel.dispatch(CarouselAction::Resize { card_width: width });
                }
            };
            measure();
            let listener = web_sys::window()
                .map(|win| EventListener::new(&win, "resize", move |_e: &Event| measure()));
            move || drop(listener)
        });
    }

    // Arrow keys
    {
        let carousel = carousel.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|win| {
                EventListener::new(&win, "keydown", move |e: &Event| {
                    let Some(e) = e.dyn_ref::<KeyboardEvent>() else {
                        return;
                    };
                    match e.key().as_str() {
                        "ArrowLeft" => carousel.dispatch(CarouselAction::Prev),
                        "ArrowRight" => carousel.dispatch(CarouselAction::Next),
                        _ => {}
                    }
                })
            });
            move || drop(listener)
        });
    }

    let handlers = DragHandlers {
        on_drag_start: Some(props.on_drag.clone()),
        on_drag: Some(props.on_drag.clone()),
        on_drag_end: {
            let carousel = carousel.clone();
            let cb = props.on_drag.clone();
            Some(Callback::from(move |st: DragState| {
                carousel.dispatch(CarouselAction::Release {
                    delta_x: st.delta_x,
                    velocity: st.velocity,
                });
                cb.emit(DragState::default());
            }))
        },
    };
    let drag = use_drag_gesture(track_ref.clone(), handlers, props.config);

    let offset = carousel.offset() + if drag.is_dragging { drag.delta_x } else { 0.0 };
    let transition = if drag.is_dragging {
        "none"
    } else {
        "transform 0.5s cubic-bezier(0.34, 1.56, 0.64, 1)"
    };
    let cursor = if drag.is_dragging { "grabbing" } else { "grab" };
    let prev_cb = {
        let carousel = carousel.clone();
        Callback::from(move |_| carousel.dispatch(CarouselAction::Prev))
    };
    let next_cb = {
        let carousel = carousel.clone();
        Callback::from(move |_| carousel.dispatch(CarouselAction::Next))
    };
    let dots = (0..carousel.len).map(|i| {
        let color = if i == carousel.active_index { "#58a6ff" } else { "#30363d" };
        let carousel = carousel.clone();
        let onclick = Callback::from(move |_| carousel.dispatch(CarouselAction::GoTo(i)));
        html! { <button {onclick} style={format!("width:10px; height:10px; padding:0; border-radius:50%; border:none; background:{color};")}></button> }
    });

    html! {
        <div style="position:relative;">
            <div ref={container_ref} style={format!("overflow:hidden; padding:0 {}px;", props.peek)}>
                <div ref={track_ref} style={format!("display:flex; gap:{}px; touch-action:pan-y; cursor:{cursor}; transform:translateX({offset}px); transition:{transition};", props.gap)}>
                    { for props.titles.iter().enumerate().map(|(i, t)| html! {
                        <Card title={t.clone()} active={i == carousel.active_index} width={carousel.card_width} />
                    }) }
                </div>
            </div>
            <div style="display:flex; justify-content:center; align-items:center; gap:8px; margin-top:12px;">
                <button onclick={prev_cb}>{"‹"}</button>
                { for dots }
                <button onclick={next_cb}>{"›"}</button>
            </div>
        </div>
    }
}
