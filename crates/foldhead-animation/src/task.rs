use std::time::Duration;

use foldhead_core::NANOS_PER_MILLI;

/// Height writes per second of requested duration.
pub const FRAMES_PER_SECOND: u64 = 30;

/// Tick between frame writes when the cadence is fixed.
pub const DEFAULT_TICK: Duration = Duration::from_millis(10);

/// Number of height writes for an animation of `duration_millis`.
///
/// `floor(duration / 1000 * 30) + 1`: thirty writes per second plus the
/// settling frame. A zero duration is a single jump to the target.
pub fn frame_count(duration_millis: u64) -> usize {
    let frames = duration_millis.saturating_mul(FRAMES_PER_SECOND) / 1000;
    usize::try_from(frames).map_or(usize::MAX, |frames| frames.saturating_add(1))
}

/// A linear move of the header height.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationTask {
    pub from: i32,
    pub to: i32,
    pub duration_millis: u64,
    /// Also rewrite the header's original height to `to`.
    pub modify_original: bool,
}

impl AnimationTask {
    pub fn new(from: i32, to: i32, duration_millis: u64) -> Self {
        Self {
            from,
            to,
            duration_millis,
            modify_original: false,
        }
    }

    pub fn with_modify_original(mut self, modify_original: bool) -> Self {
        self.modify_original = modify_original;
        self
    }

    pub fn frame_count(&self) -> usize {
        frame_count(self.duration_millis)
    }

    /// Height written on frame `index`. The last frame is exactly `to`.
    pub fn frame_height(&self, index: usize) -> i32 {
        let count = self.frame_count();
        if index + 1 >= count {
            return self.to;
        }
        let step = (f64::from(self.to) - f64::from(self.from)) / count as f64;
        (f64::from(self.from) + step * index as f64).round() as i32
    }

    /// Every height the task will write, in order.
    pub fn frames(&self) -> impl Iterator<Item = i32> + '_ {
        (0..self.frame_count()).map(move |index| self.frame_height(index))
    }
}

/// Spacing between consecutive frame writes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickCadence {
    /// Same tick whatever the duration. With the default 10 ms tick a
    /// 500 ms task finishes after roughly 160 ms.
    Fixed(Duration),
    /// `duration / frame_count`, so the wall-clock length matches the
    /// requested duration.
    DurationDerived,
}

impl TickCadence {
    pub fn tick_nanos(&self, task: &AnimationTask) -> u64 {
        match self {
            TickCadence::Fixed(tick) => u64::try_from(tick.as_nanos()).unwrap_or(u64::MAX),
            TickCadence::DurationDerived => {
                let count = task.frame_count() as u64;
                task.duration_millis.saturating_mul(NANOS_PER_MILLI) / count.max(1)
            }
        }
    }
}

/// When a task with `modify_original` rewrites the original height.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModifyOriginalPolicy {
    /// After every frame write, including intermediate ones.
    ///
    /// Intermediate frames that move past the new bound get clamped to it,
    /// so a shrinking task jumps to `to` on its second frame. Kept because
    /// callers may rely on the bound changing immediately.
    EveryFrame,
    /// Only on the settling frame, before its height is written.
    FinalFrame,
}

/// What happens to in-flight tasks when a new one starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlapPolicy {
    /// The new task cancels everything still running.
    Supersede,
    /// Tasks run side by side; their writes interleave and the last write
    /// in a frame wins.
    Concurrent,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationConfig {
    pub cadence: TickCadence,
    pub modify_policy: ModifyOriginalPolicy,
    pub overlap: OverlapPolicy,
}

impl AnimationConfig {
    pub fn with_cadence(mut self, cadence: TickCadence) -> Self {
        self.cadence = cadence;
        self
    }

    pub fn with_modify_policy(mut self, modify_policy: ModifyOriginalPolicy) -> Self {
        self.modify_policy = modify_policy;
        self
    }

    pub fn with_overlap(mut self, overlap: OverlapPolicy) -> Self {
        self.overlap = overlap;
        self
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            cadence: TickCadence::DurationDerived,
            modify_policy: ModifyOriginalPolicy::EveryFrame,
            overlap: OverlapPolicy::Supersede,
        }
    }
}

#[cfg(test)]
#[path = "tests/task_tests.rs"]
mod tests;
