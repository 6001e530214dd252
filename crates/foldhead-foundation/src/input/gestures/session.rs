//! Per-gesture bookkeeping shared by the decision and drag paths.

use crate::input::types::PointerSample;

/// Coordinates remembered between Down and Up.
///
/// Two origins are kept on purpose. The intercept decision compares against
/// the Down point so the slop reflects total displacement; the live drag
/// compares against the previous sample so height tracks incremental motion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GestureSession {
    pub start_x: i32,
    pub start_y: i32,
    pub last_x: i32,
    pub last_y: i32,
}

impl GestureSession {
    pub fn start(sample: &PointerSample) -> Self {
        Self {
            start_x: sample.x,
            start_y: sample.y,
            last_x: sample.x,
            last_y: sample.y,
        }
    }

    /// Displacement from the Down point.
    pub fn total_delta(&self, sample: &PointerSample) -> (i32, i32) {
        (
            sample.x.saturating_sub(self.start_x),
            sample.y.saturating_sub(self.start_y),
        )
    }

    /// Displacement from the previous sample.
    pub fn step_delta(&self, sample: &PointerSample) -> (i32, i32) {
        (
            sample.x.saturating_sub(self.last_x),
            sample.y.saturating_sub(self.last_y),
        )
    }

    pub fn track(&mut self, sample: &PointerSample) {
        self.last_x = sample.x;
        self.last_y = sample.y;
    }
}
