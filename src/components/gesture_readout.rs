use yew::prelude::*;

use crate::model::{DragState, SwipeState};

#[derive(Properties, PartialEq, Clone)]
pub struct GestureReadoutProps {
    pub is_touch_device: bool,
    pub swipe: SwipeState,
    pub last_swipe: Option<String>,
    pub drag: DragState,
    pub pinch_scale: f64,
}

#[function_component]
pub fn GestureReadout(props: &GestureReadoutProps) -> Html {
    let row_style = "display:flex; align-items:center; gap:8px;";
    let label_style = "flex:1; font-weight:500;";
    let value_style =
        "min-width:120px; text-align:right; font-variant-numeric:tabular-nums; font-weight:600;";
    let swipe = format!(
        "{} {:.0}px {:.2}px/ms",
        props.swipe.direction.label(),
        props.swipe.distance,
        props.swipe.velocity
    );
    let drag = if props.drag.is_dragging {
        format!("Δx {:.0} v {:.2}", props.drag.delta_x, props.drag.velocity)
    } else {
        "idle".to_string()
    };
    html! {
        <div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; display:flex; flex-direction:column; gap:8px; font-size:14px;">
            <div style={row_style}>
                <span style={label_style}>{"Input"}</span>
                <span style={value_style}>{ if props.is_touch_device { "touch" } else { "mouse" } }</span>
            </div>
            <div style={row_style}>
                <span style={format!("{} color:#58a6ff;", label_style)}>{"Swipe"}</span>
                <span style={value_style}>{ swipe }</span>
            </div>
            <div style={row_style}>
                <span style={format!("{} color:#58a6ff;", label_style)}>{"Last swipe"}</span>
                <span style={value_style}>{ props.last_swipe.clone().unwrap_or_else(|| "-".into()) }</span>
            </div>
            <div style={row_style}>
                <span style={format!("{} color:#d4af37;", label_style)}>{"Drag"}</span>
                <span style={value_style}>{ drag }</span>
            </div>
            <div style={row_style}>
                <span style={format!("{} color:#3fb950;", label_style)}>{"Pinch"}</span>
                <span style={value_style}>{ format!("{:.2}×", props.pinch_scale) }</span>
            </div>
        </div>
    }
}
