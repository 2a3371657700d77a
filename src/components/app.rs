use super::{
    card_carousel::CardCarousel, gesture_readout::GestureReadout, pinch_view::PinchView,
    settings_panel::SettingsPanel, swipe_pad::SwipePad,
};
use crate::config::GestureConfig;
use crate::hooks::use_touch_device;
use crate::model::{DragState, SwipeDirection, SwipeState};
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let config = use_state(GestureConfig::load);
    let is_touch = use_touch_device();
    let swipe = use_state(SwipeState::default);
    let last_swipe = use_state(|| None::<String>);
    let drag = use_state(DragState::default);
    let pinch_scale = use_state(|| 1.0_f64);

    // Persist config changes
    {
        let config = config.clone();
        use_effect_with(*config, move |cfg| {
            cfg.save();
            || ()
        });
    }

    let on_config = {
        let config = config.clone();
        Callback::from(move |cfg: GestureConfig| config.set(cfg))
    };
    let on_reset = {
        let config = config.clone();
        Callback::from(move |_| config.set(GestureConfig::default()))
    };
    let on_swiping = {
        let swipe = swipe.clone();
        Callback::from(move |st: SwipeState| swipe.set(st))
    };
    let on_swipe = {
        let last_swipe = last_swipe.clone();
        Callback::from(move |dir: SwipeDirection| last_swipe.set(Some(dir.label().to_string())))
    };
    let on_drag = {
        let drag = drag.clone();
        Callback::from(move |st: DragState| drag.set(st))
    };
    let on_scale = {
        let pinch_scale = pinch_scale.clone();
        Callback::from(move |s: f64| pinch_scale.set(s))
    };

    let titles: Vec<AttrValue> = ["Systems", "Parsers", "Networking", "Storage", "Tooling"]
        .into_iter()
        .map(AttrValue::from)
        .collect();

    html! {
        <div style="max-width:720px; margin:0 auto; padding:16px; display:flex; flex-direction:column; gap:16px; color:#e6edf3; background:#0e1116; font-family:sans-serif;">
            <GestureReadout
                is_touch_device={is_touch}
                swipe={*swipe}
                last_swipe={(*last_swipe).clone()}
                drag={*drag}
                pinch_scale={*pinch_scale}
            />
            <SwipePad config={config.swipe} {on_swiping} {on_swipe} />
            <CardCarousel {titles} config={config.drag} {on_drag} />
            <PinchView {on_scale} />
            <SettingsPanel config={*config} on_change={on_config} {on_reset} />
        </div>
    }
}
