//! Core data types shared by the gesture detectors and the demo views.

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yew::Reducible;

/// One normalized input sample in client coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
    /// Milliseconds; only differences between samples matter.
    pub t: f64,
}

impl PointerSample {
    pub fn new(x: f64, y: f64, t: f64) -> Self {
        Self { x, y, t }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwipeDirection {
    Left,
    Right,
    Up,
    Down,
    #[default]
    None,
}

impl SwipeDirection {
    pub fn label(self) -> &'static str {
        match self {
            SwipeDirection::Left => "left",
            SwipeDirection::Right => "right",
            SwipeDirection::Up => "up",
            SwipeDirection::Down => "down",
            SwipeDirection::None => "none",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SwipeState {
    pub direction: SwipeDirection,
    /// Absolute displacement along the dominant axis.
    pub distance: f64,
    /// px/ms, measured from the start of the gesture.
    pub velocity: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DragAxis {
    #[default]
    X,
    Y,
    Both,
}

/// Snapshot handed to drag callbacks. The `*_y` fields extend the horizontal
/// record so vertical consumers have something to read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DragState {
    pub is_dragging: bool,
    pub start_x: f64,
    pub current_x: f64,
    pub delta_x: f64,
    /// Instantaneous horizontal px/ms between the last two samples.
    pub velocity: f64,
    pub start_y: f64,
    pub current_y: f64,
    pub delta_y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PinchState {
    pub scale: f64,
    pub initial_distance: f64,
}

impl Default for PinchState {
    fn default() -> Self {
        Self {
            scale: 1.0,
            initial_distance: 0.0,
        }
    }
}

// Carousel ---------------------------------------------------------------

/// Fraction of a card width a drag must cover to change cards.
pub const CAROUSEL_SNAP_FRACTION: f64 = 0.3;
/// Release velocity (px/ms) that changes cards regardless of distance.
pub const CAROUSEL_FLICK_VELOCITY: f64 = 0.5;

#[derive(Clone, Debug, PartialEq)]
pub struct CarouselState {
    pub active_index: usize,
    pub len: usize,
    pub card_width: f64,
    pub gap: f64,
}

pub enum CarouselAction {
    Next,
    Prev,
    GoTo(usize),
    SetLen(usize),
    Resize { card_width: f64 },
    Release { delta_x: f64, velocity: f64 },
}

impl CarouselState {
    pub fn new(len: usize, gap: f64) -> Self {
        Self {
            active_index: 0,
            len,
            card_width: 0.0,
            gap,
        }
    }

    /// Resting translation of the track for the active card.
    pub fn offset(&self) -> f64 {
        -(self.active_index as f64) * (self.card_width + self.gap)
    }

    fn last_index(&self) -> usize {
        self.len.saturating_sub(1)
    }
}

impl Reducible for CarouselState {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut s = (*self).clone();
        match action {
            CarouselAction::Next => {
                if s.active_index < s.last_index() {
                    s.active_index += 1;
                }
            }
            CarouselAction::Prev => {
                s.active_index = s.active_index.saturating_sub(1);
            }
            CarouselAction::GoTo(i) => {
                s.active_index = i.min(s.last_index());
            }
            CarouselAction::SetLen(n) => {
                s.len = n;
                s.active_index = s.active_index.min(s.last_index());
            }
            CarouselAction::Resize { card_width } => {
                s.card_width = card_width.max(0.0);
            }
            CarouselAction::Release { delta_x, velocity } => {
                let threshold = s.card_width * CAROUSEL_SNAP_FRACTION;
                if delta_x.abs() > threshold || velocity.abs() > CAROUSEL_FLICK_VELOCITY {
                    if delta_x < 0.0 && s.active_index < s.last_index() {
                        s.active_index += 1;
                    } else if delta_x > 0.0 && s.active_index > 0 {
                        s.active_index -= 1;
                    }
                }
            }
        }
        Rc::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel(len: usize, width: f64) -> Rc<CarouselState> {
        Rc::new(CarouselState::new(len, 16.0))
            .reduce(CarouselAction::Resize { card_width: width })
    }

    #[test]
    fn release_past_threshold_moves_to_next_card() {
        let c = carousel(3, 300.0).reduce(CarouselAction::Release {
            delta_x: -120.0,
            velocity: 0.1,
        });
        assert_eq!(c.active_index, 1);
        assert_eq!(c.offset(), -316.0);
    }

    #[test]
    fn short_slow_release_snaps_back() {
        let c = carousel(3, 300.0).reduce(CarouselAction::Release {
            delta_x: -60.0,
            velocity: -0.2,
        });
        assert_eq!(c.active_index, 0);
        assert_eq!(c.offset(), 0.0);
    }

    #[test]
    fn flick_changes_card_below_distance_threshold() {
        let c = carousel(3, 300.0)
            .reduce(CarouselAction::GoTo(1))
            .reduce(CarouselAction::Release {
                delta_x: 20.0,
                velocity: 0.8,
            });
        assert_eq!(c.active_index, 0);
    }

    #[test]
    fn release_is_clamped_at_the_ends() {
        let c = carousel(2, 300.0)
            .reduce(CarouselAction::Next)
            .reduce(CarouselAction::Release {
                delta_x: -250.0,
                velocity: 0.0,
            });
        assert_eq!(c.active_index, 1);
        let c = c.reduce(CarouselAction::Prev).reduce(CarouselAction::Prev);
        assert_eq!(c.active_index, 0);
    }

    #[test]
    fn shrinking_len_clamps_active_index() {
        let c = carousel(5, 100.0)
            .reduce(CarouselAction::GoTo(4))
            .reduce(CarouselAction::SetLen(2));
        assert_eq!(c.active_index, 1);
        let empty = c.reduce(CarouselAction::SetLen(0));
        assert_eq!(empty.active_index, 0);
    }

    #[test]
    fn neutral_pinch_state_has_unit_scale() {
        let p = PinchState::default();
        assert_eq!(p.scale, 1.0);
        assert_eq!(p.initial_distance, 0.0);
    }
}
