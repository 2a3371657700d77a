pub mod device;
pub mod drag;
pub mod emulation;
pub mod pinch;
pub mod swipe;

pub use device::TouchSignals;
pub use drag::DragTracker;
pub use emulation::{EMULATED_MOUSE_WINDOW_MS, MouseGate};
pub use pinch::{PinchDetector, two_point_distance};
pub use swipe::{SwipeDetector, SwipeMove, SwipeOutcome};
