// Filters the compatibility mouse events a browser fires after a tap
use crate::model::PointerSample;

/// How long after the last touch event a mousedown is treated as emulated.
pub const EMULATED_MOUSE_WINDOW_MS: f64 = 500.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MouseGate {
    last_touch: Option<f64>,
}

impl MouseGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record any touch event on the target.
    pub fn touched(&mut self, t: f64) {
        self.last_touch = Some(t);
    }

    /// Whether a mousedown at `t` comes from a real mouse.
    pub fn admits(&self, t: f64) -> bool {
        match self.last_touch {
            Some(last) => t - last >= EMULATED_MOUSE_WINDOW_MS || t < last,
            None => true,
        }
    }

    pub fn admits_sample(&self, sample: &PointerSample) -> bool {
        self.admits(sample.t)
    }
}
