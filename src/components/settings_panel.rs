use yew::prelude::*;

use crate::config::GestureConfig;
use crate::model::DragAxis;

#[derive(Properties, PartialEq, Clone)]
pub struct SettingsPanelProps {
    pub config: GestureConfig,
    pub on_change: Callback<GestureConfig>,
    pub on_reset: Callback<()>,
}

#[function_component]
pub fn SettingsPanel(props: &SettingsPanelProps) -> Html {
    let toggle_scroll_cb = {
        let cb = props.on_change.clone();
        let cfg = props.config;
        Callback::from(move |_| {
            let mut next = cfg;
            next.swipe.prevent_scroll = !next.swipe.prevent_scroll;
            cb.emit(next);
        })
    };
    let axis_button = |axis: DragAxis, label: &'static str| {
        let cb = props.on_change.clone();
        let cfg = props.config;
        let onclick = Callback::from(move |_| {
            let mut next = cfg;
            next.drag.axis = axis;
            cb.emit(next);
        });
        let weight = if props.config.drag.axis == axis { "font-weight:700;" } else { "" };
        html! { <button {onclick} style={weight}>{ label }</button> }
    };
    let reset_cb = {
        let cb = props.on_reset.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {<div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:12px 16px; display:flex; flex-direction:column; gap:10px;">
        <h3 style="margin:0; font-size:16px;">{"Gesture settings"}</h3>
        <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
            <input type="checkbox" checked={props.config.swipe.prevent_scroll} onclick={toggle_scroll_cb} />
            <span>{"Block page scroll on horizontal swipe"}</span>
        </label>
        <div style="display:flex; align-items:center; gap:6px;">
            <span>{"Drag axis"}</span>
            { axis_button(DragAxis::X, "x") }
            { axis_button(DragAxis::Y, "y") }
            { axis_button(DragAxis::Both, "both") }
        </div>
        <div style="font-size:11px; opacity:0.7;">
            { format!(
                "Swipe fires at {:.0}px or {:.1}px/ms.",
                props.config.swipe.distance_threshold, props.config.swipe.velocity_threshold
            ) }
        </div>
        <button onclick={reset_cb}>{"Restore defaults"}</button>
    </div>}
}
