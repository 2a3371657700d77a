//! Tunables for the gesture hooks, persisted to localStorage as JSON.

use crate::model::DragAxis;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SWIPE_DISTANCE: f64 = 50.0;
pub const DEFAULT_SWIPE_VELOCITY: f64 = 0.3;
/// Horizontal travel (px) before a swipe starts cancelling native scroll.
pub const SCROLL_NOISE_PX: f64 = 10.0;

const STORAGE_KEY: &str = "gesture_config";

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwipeConfig {
    pub distance_threshold: f64,
    pub velocity_threshold: f64,
    pub prevent_scroll: bool,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            distance_threshold: DEFAULT_SWIPE_DISTANCE,
            velocity_threshold: DEFAULT_SWIPE_VELOCITY,
            prevent_scroll: false,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragConfig {
    pub axis: DragAxis,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    pub swipe: SwipeConfig,
    pub drag: DragConfig,
}

impl GestureConfig {
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    /// Reads the stored config, falling back to defaults when absent or unreadable.
    pub fn load() -> Self {
        web_sys::window()
            .and_then(|win| win.local_storage().ok().flatten())
            .and_then(|store| store.get_item(STORAGE_KEY).ok().flatten())
            .and_then(|raw| Self::from_json(&raw))
            .unwrap_or_default()
    }

    pub fn save(&self) {
        if let Some(win) = web_sys::window() {
            if let Ok(Some(store)) = win.local_storage() {
                match serde_json::to_string(self) {
                    Ok(s) => {
                        let _ = store.set_item(STORAGE_KEY, &s);
                    }
                    Err(e) => log::warn!("could not serialize gesture config: {e}"),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_thresholds() {
        let cfg = GestureConfig::default();
        assert_eq!(cfg.swipe.distance_threshold, 50.0);
        assert_eq!(cfg.swipe.velocity_threshold, 0.3);
        assert!(!cfg.swipe.prevent_scroll);
        assert_eq!(cfg.drag.axis, DragAxis::X);
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let cfg = GestureConfig::from_json(r#"{"swipe":{"prevent_scroll":true},"drag":{"axis":"both"}}"#)
            .unwrap();
        assert!(cfg.swipe.prevent_scroll);
        assert_eq!(cfg.swipe.distance_threshold, DEFAULT_SWIPE_DISTANCE);
        assert_eq!(cfg.drag.axis, DragAxis::Both);
    }

    #[test]
    fn corrupt_json_is_rejected() {
        assert!(GestureConfig::from_json("{not json").is_none());
        assert_eq!(GestureConfig::from_json("{}"), Some(GestureConfig::default()));
    }
}
