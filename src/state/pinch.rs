// Two-finger pinch scale tracking
use crate::model::PinchState;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
enum Phase {
    #[default]
    Idle,
    Active { initial_distance: f64, scale: f64 },
}

#[derive(Clone, Debug, Default)]
pub struct PinchDetector {
    phase: Phase,
}

/// Euclidean distance between the first two points, if there are exactly two.
pub fn two_point_distance(points: &[(f64, f64)]) -> Option<f64> {
    match points {
        [(x0, y0), (x1, y1)] => Some((x1 - x0).hypot(y1 - y0)),
        _ => None,
    }
}

impl PinchDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        matches!(self.phase, Phase::Active { .. })
    }

    pub fn state(&self) -> PinchState {
        match self.phase {
            Phase::Idle => PinchState::default(),
            Phase::Active {
                initial_distance,
                scale,
            } => PinchState {
                scale,
                initial_distance,
            },
        }
    }

    /// Arms the detector when exactly two touches are down. Returns the
    /// starting scale (always 1.0).
    pub fn touch_start(&mut self, points: &[(f64, f64)]) -> Option<f64> {
        let d = two_point_distance(points)?;
        if d <= 0.0 {
            return None;
        }
        self.phase = Phase::Active {
            initial_distance: d,
            scale: 1.0,
        };
        Some(1.0)
    }

    pub fn touch_move(&mut self, points: &[(f64, f64)]) -> Option<f64> {
        let Phase::Active {
            initial_distance,
            scale,
        } = &mut self.phase
        else {
            return None;
        };
        let d = two_point_distance(points)?;
        *scale = d / *initial_distance;
        Some(*scale)
    }

    /// Called on touchend/touchcancel with the number of touches still down.
    /// Ends the gesture once fewer than two remain, yielding the last scale.
    pub fn touch_end(&mut self, remaining: usize) -> Option<f64> {
        if remaining >= 2 {
            return None;
        }
        match std::mem::take(&mut self.phase) {
            Phase::Active { scale, .. } => Some(scale),
            Phase::Idle => None,
        }
    }
}
