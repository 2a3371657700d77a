use yew::prelude::*;

use crate::config::SwipeConfig;
use crate::hooks::{SwipeHandlers, use_swipe_gesture};
use crate::model::{SwipeDirection, SwipeState};

#[derive(Properties, PartialEq, Clone)]
pub struct SwipePadProps {
    pub config: SwipeConfig,
    pub on_swiping: Callback<SwipeState>,
    pub on_swipe: Callback<SwipeDirection>,
}

#[function_component]
pub fn SwipePad(props: &SwipePadProps) -> Html {
    let pad_ref = use_node_ref();
    let directional = |dir: SwipeDirection| {
        let cb = props.on_swipe.clone();
        Some(Callback::from(move |_| cb.emit(dir)))
    };
    let handlers = SwipeHandlers {
        on_swipe_left: directional(SwipeDirection::Left),
        on_swipe_right: directional(SwipeDirection::Right),
        on_swipe_up: directional(SwipeDirection::Up),
        on_swipe_down: directional(SwipeDirection::Down),
        on_swiping: Some(props.on_swiping.clone()),
        on_swipe_end: {
            let cb = props.on_swiping.clone();
            Some(Callback::from(move |_| cb.emit(SwipeState::default())))
        },
    };
    let live = use_swipe_gesture(pad_ref.clone(), handlers, props.config);

    let arrow = match live.direction {
        SwipeDirection::Left => "←",
        SwipeDirection::Right => "→",
        SwipeDirection::Up => "↑",
        SwipeDirection::Down => "↓",
        SwipeDirection::None => "·",
    };
    html! {
        <div ref={pad_ref} style="height:180px; border:1px dashed #30363d; border-radius:12px; display:flex; align-items:center; justify-content:center; font-size:48px; user-select:none; touch-action:pan-y;">
            { arrow }
        </div>
    }
}
