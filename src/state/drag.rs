// Drag session tracking for carousel-style drag-to-scroll
use crate::model::{DragAxis, DragState, PointerSample};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
enum Phase {
    #[default]
    Idle,
    Active {
        start: PointerSample,
        last: PointerSample,
        velocity: f64,
    },
}

#[derive(Clone, Debug, Default)]
pub struct DragTracker {
    phase: Phase,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Active { .. })
    }

    /// Snapshot of the session; all zero when idle.
    pub fn state(&self) -> DragState {
        match self.phase {
            Phase::Idle => DragState::default(),
            Phase::Active {
                start,
                last,
                velocity,
            } => DragState {
                is_dragging: true,
                start_x: start.x,
                current_x: last.x,
                delta_x: last.x - start.x,
                velocity,
                start_y: start.y,
                current_y: last.y,
                delta_y: last.y - start.y,
            },
        }
    }

    /// Starts a fresh session, replacing whatever was in progress.
    pub fn start(&mut self, sample: PointerSample) -> DragState {
        self.phase = Phase::Active {
            start: sample,
            last: sample,
            velocity: 0.0,
        };
        self.state()
    }

    pub fn move_to(&mut self, sample: PointerSample) -> Option<DragState> {
        let Phase::Active { last, velocity, .. } = &mut self.phase else {
            return None;
        };
        let elapsed = sample.t - last.t;
        *velocity = if elapsed > 0.0 {
            (sample.x - last.x) / elapsed
        } else {
            0.0
        };
        *last = sample;
        Some(self.state())
    }

    /// Finishes the session, returning the last computed state.
    pub fn end(&mut self) -> Option<DragState> {
        let last = self.state();
        match std::mem::take(&mut self.phase) {
            Phase::Active { .. } => Some(last),
            Phase::Idle => None,
        }
    }

    /// Whether native touch scrolling should be cancelled for the current
    /// movement. Cross-axis movement is left to the browser.
    pub fn should_prevent_scroll(&self, axis: DragAxis) -> bool {
        let Phase::Active { start, last, .. } = self.phase else {
            return false;
        };
        let dx = (last.x - start.x).abs();
        let dy = (last.y - start.y).abs();
        match axis {
            DragAxis::X => dx > dy,
            DragAxis::Y => dy > dx,
            DragAxis::Both => true,
        }
    }
}
