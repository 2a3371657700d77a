use yew::prelude::*;

use crate::hooks::{PinchHandlers, use_pinch_gesture};

#[derive(Properties, PartialEq, Clone)]
pub struct PinchViewProps {
    pub on_scale: Callback<f64>,
}

/// Pinch surface; the committed zoom accumulates across gestures.
#[function_component]
pub fn PinchView(props: &PinchViewProps) -> Html {
    let surface_ref = use_node_ref();
    let zoom = use_state(|| 1.0_f64);
    let handlers = PinchHandlers {
        on_pinch_start: None,
        on_pinch: Some(props.on_scale.clone()),
        on_pinch_end: {
            let zoom = zoom.clone();
            let cb = props.on_scale.clone();
            Some(Callback::from(move |s: f64| {
                zoom.set((*zoom * s).clamp(0.25, 8.0));
                cb.emit(1.0);
            }))
        },
    };
    let live = use_pinch_gesture(surface_ref.clone(), handlers);
    let shown = (*zoom * live).clamp(0.25, 8.0);

    html! {
        <div ref={surface_ref} style="height:220px; overflow:hidden; border:1px solid #30363d; border-radius:12px; display:flex; align-items:center; justify-content:center; touch-action:none;">
            <div style={format!("width:80px; height:80px; border-radius:12px; background:#3fb950; transform:scale({shown:.3});")}></div>
        </div>
    }
}
