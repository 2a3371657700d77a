//! Touch and mouse gesture recognition for yew apps: swipe, drag and pinch
//! detectors, a touch-device detector, and the hooks that wire them to the DOM.

pub mod components;
pub mod config;
pub mod hooks;
pub mod model;
pub mod state;
pub mod util;

pub use config::{DragConfig, GestureConfig, SwipeConfig};
pub use model::{DragAxis, DragState, PinchState, PointerSample, SwipeDirection, SwipeState};
