// Swipe classification over a single down -> move* -> up sequence
use crate::config::{SCROLL_NOISE_PX, SwipeConfig};
use crate::model::{PointerSample, SwipeDirection, SwipeState};

/// Result of a move inside an active swipe.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeMove {
    pub state: SwipeState,
    /// Caller should cancel the native event (suppress scrolling).
    pub prevent_default: bool,
}

/// Result of releasing (or cancelling) an active swipe.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeOutcome {
    /// Direction whose callback fires, if the thresholds were met.
    pub fired: Option<SwipeDirection>,
    pub state: SwipeState,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
enum Phase {
    #[default]
    Idle,
    Active {
        start: PointerSample,
        current: SwipeState,
    },
}

#[derive(Clone, Debug, Default)]
pub struct SwipeDetector {
    config: SwipeConfig,
    phase: Phase,
}

fn velocity(distance: f64, elapsed_ms: f64) -> f64 {
    if elapsed_ms > 0.0 { distance / elapsed_ms } else { 0.0 }
}

impl SwipeDetector {
    pub fn new(config: SwipeConfig) -> Self {
        Self {
            config,
            phase: Phase::Idle,
        }
    }

    pub fn config(&self) -> SwipeConfig {
        self.config
    }

    pub fn set_config(&mut self, config: SwipeConfig) {
        self.config = config;
    }

    pub fn is_active(&self) -> bool {
        matches!(self.phase, Phase::Active { .. })
    }

    /// Live state of the current session, neutral when idle.
    pub fn state(&self) -> SwipeState {
        match self.phase {
            Phase::Active { current, .. } => current,
            Phase::Idle => SwipeState::default(),
        }
    }

    /// Begins a session, discarding any stale one.
    pub fn start(&mut self, sample: PointerSample) {
        self.phase = Phase::Active {
            start: sample,
            current: SwipeState::default(),
        };
    }

    pub fn move_to(&mut self, sample: PointerSample) -> Option<SwipeMove> {
        let Phase::Active { start, current } = &mut self.phase else {
            return None;
        };
        let dx = sample.x - start.x;
        let dy = sample.y - start.y;
        let (abs_x, abs_y) = (dx.abs(), dy.abs());

        let horizontal = abs_x > abs_y;
        let (direction, distance) = if horizontal {
            (if dx > 0.0 { SwipeDirection::Right } else { SwipeDirection::Left }, abs_x)
        } else if abs_y > 0.0 {
            (if dy > 0.0 { SwipeDirection::Down } else { SwipeDirection::Up }, abs_y)
        } else {
            (SwipeDirection::None, 0.0)
        };

        *current = SwipeState {
            direction,
            distance,
            velocity: velocity(distance, sample.t - start.t),
        };
        Some(SwipeMove {
            state: *current,
            prevent_default: self.config.prevent_scroll && horizontal && abs_x > SCROLL_NOISE_PX,
        })
    }

    /// Releases the session at time `t`. Velocity is re-based on the same
    /// start time used while moving.
    pub fn end(&mut self, t: f64) -> Option<SwipeOutcome> {
        let Phase::Active { start, current } = std::mem::take(&mut self.phase) else {
            return None;
        };
        let state = SwipeState {
            velocity: velocity(current.distance, t - start.t),
            ..current
        };
        let met = state.distance >= self.config.distance_threshold
            || state.velocity >= self.config.velocity_threshold;
        let fired = (met && state.direction != SwipeDirection::None).then_some(state.direction);
        Some(SwipeOutcome { fired, state })
    }

    /// Abnormal termination (touchcancel, pointer leaving) finalizes like a release.
    pub fn cancel(&mut self, t: f64) -> Option<SwipeOutcome> {
        self.end(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(x: f64, y: f64, t: f64) -> PointerSample {
        PointerSample::new(x, y, t)
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn left_swipe_scenario() {
        let mut d = SwipeDetector::default();
        d.start(s(100.0, 0.0, 0.0));
        let mv = d.move_to(s(40.0, 0.0, 200.0)).unwrap();
        assert_eq!(mv.state.direction, SwipeDirection::Left);
        assert!(close(mv.state.distance, 60.0));
        assert!(close(mv.state.velocity, 0.3));

        let out = d.end(200.0).unwrap();
        assert_eq!(out.fired, Some(SwipeDirection::Left));
        assert_eq!(out.state.direction, SwipeDirection::Left);
        assert!(close(out.state.distance, 60.0));
        assert!(close(out.state.velocity, 0.3));
        assert!(!d.is_active());
        assert_eq!(d.state(), SwipeState::default());
    }

    #[test]
    fn horizontal_sign_picks_the_callback() {
        for (end_x, expected) in [(170.0, SwipeDirection::Right), (30.0, SwipeDirection::Left)] {
            let mut d = SwipeDetector::default();
            d.start(s(100.0, 100.0, 0.0));
            d.move_to(s(120.0, 110.0, 300.0));
            d.move_to(s(end_x, 120.0, 2000.0));
            let out = d.end(2000.0).unwrap();
            assert_eq!(out.fired, Some(expected));
        }
    }

    #[test]
    fn vertical_swipe_fires_up_and_down() {
        let mut d = SwipeDetector::default();
        d.start(s(0.0, 200.0, 0.0));
        d.move_to(s(10.0, 120.0, 1000.0));
        assert_eq!(d.end(1000.0).unwrap().fired, Some(SwipeDirection::Up));

        d.start(s(0.0, 0.0, 0.0));
        d.move_to(s(5.0, 70.0, 1000.0));
        assert_eq!(d.end(1000.0).unwrap().fired, Some(SwipeDirection::Down));
    }

    #[test]
    fn short_slow_movement_only_ends() {
        let mut d = SwipeDetector::default();
        d.start(s(0.0, 0.0, 0.0));
        let mv = d.move_to(s(20.0, 5.0, 500.0)).unwrap();
        assert!(close(mv.state.velocity, 0.04));
        let out = d.end(600.0).unwrap();
        assert_eq!(out.fired, None);
        assert_eq!(out.state.direction, SwipeDirection::Right);
        assert!(d.end(700.0).is_none(), "swipe end must fire only once");
    }

    #[test]
    fn fast_flick_fires_below_distance_threshold() {
        let mut d = SwipeDetector::default();
        d.start(s(0.0, 0.0, 0.0));
        d.move_to(s(-30.0, 0.0, 50.0));
        let out = d.end(60.0).unwrap();
        assert_eq!(out.fired, Some(SwipeDirection::Left));
        assert!(close(out.state.velocity, 0.5));
    }

    #[test]
    fn move_without_session_is_ignored() {
        let mut d = SwipeDetector::default();
        assert!(d.move_to(s(10.0, 10.0, 5.0)).is_none());
        assert!(d.end(10.0).is_none());
    }

    #[test]
    fn zero_elapsed_time_gives_zero_velocity() {
        let mut d = SwipeDetector::default();
        d.start(s(0.0, 0.0, 100.0));
        let mv = d.move_to(s(0.0, 30.0, 100.0)).unwrap();
        assert_eq!(mv.state.velocity, 0.0);
        let out = d.end(100.0).unwrap();
        assert_eq!(out.fired, None);
    }

    #[test]
    fn tap_without_movement_has_no_direction() {
        let mut d = SwipeDetector::default();
        d.start(s(5.0, 5.0, 0.0));
        d.move_to(s(5.0, 5.0, 1.0));
        let out = d.end(1.0).unwrap();
        assert_eq!(out.state.direction, SwipeDirection::None);
        assert_eq!(out.fired, None);
    }

    #[test]
    fn new_start_discards_stale_session() {
        let mut d = SwipeDetector::default();
        d.start(s(0.0, 0.0, 0.0));
        d.move_to(s(200.0, 0.0, 100.0));
        d.start(s(500.0, 0.0, 1000.0));
        assert_eq!(d.state(), SwipeState::default());
        d.move_to(s(510.0, 0.0, 2000.0));
        assert_eq!(d.end(2000.0).unwrap().fired, None);
    }

    #[test]
    fn scroll_prevention_needs_flag_and_horizontal_travel() {
        let mut d = SwipeDetector::new(SwipeConfig {
            prevent_scroll: true,
            ..SwipeConfig::default()
        });
        d.start(s(0.0, 0.0, 0.0));
        assert!(!d.move_to(s(8.0, 0.0, 10.0)).unwrap().prevent_default);
        assert!(d.move_to(s(15.0, 3.0, 20.0)).unwrap().prevent_default);
        assert!(!d.move_to(s(15.0, 40.0, 30.0)).unwrap().prevent_default);

        let mut plain = SwipeDetector::default();
        plain.start(s(0.0, 0.0, 0.0));
        assert!(!plain.move_to(s(80.0, 0.0, 10.0)).unwrap().prevent_default);
    }

    #[test]
    fn cancel_finalizes_like_release() {
        let mut d = SwipeDetector::default();
        d.start(s(0.0, 0.0, 0.0));
        d.move_to(s(0.0, -90.0, 400.0));
        let out = d.cancel(450.0).unwrap();
        assert_eq!(out.fired, Some(SwipeDirection::Up));
        assert!(!d.is_active());
    }
}
