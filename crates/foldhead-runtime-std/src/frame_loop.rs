use std::time::Duration;

use foldhead_core::Clock;
use web_time::Instant;

use crate::{StdClock, StdRuntime};

/// Spacing between frames when the host has no display-driven clock.
pub const DEFAULT_FRAME_TICK: Duration = Duration::from_millis(10);

/// Frames [`FrameLoop::run_until_idle`] drains before giving up.
pub const MAX_LOOP_FRAMES: usize = 10_000;

/// Blocking frame pump for headless hosts.
///
/// Sleeps one tick between frames and stamps each frame with the time
/// elapsed since the loop was created. Must run on the runtime's thread.
#[derive(Debug)]
pub struct FrameLoop {
    runtime: StdRuntime,
    tick: Duration,
    origin: Instant,
}

impl FrameLoop {
    pub fn new(runtime: StdRuntime) -> Self {
        Self::with_tick(runtime, DEFAULT_FRAME_TICK)
    }

    pub fn with_tick(runtime: StdRuntime, tick: Duration) -> Self {
        Self {
            runtime,
            tick,
            origin: StdClock.now(),
        }
    }

    pub fn runtime(&self) -> &StdRuntime {
        &self.runtime
    }

    pub fn tick(&self) -> Duration {
        self.tick
    }

    /// Nanoseconds since the loop started.
    pub fn frame_time_nanos(&self) -> u64 {
        StdClock.elapsed_nanos(self.origin)
    }

    /// Drain one frame now, without sleeping. Returns the frame time used.
    pub fn pump_once(&self) -> u64 {
        self.runtime.take_frame_request();
        let frame_time_nanos = self.frame_time_nanos();
        self.runtime.drain_frame_callbacks(frame_time_nanos);
        frame_time_nanos
    }

    /// Pump frames until nothing asks for another one, or `max_frames` have
    /// run. Returns the number of frames drained.
    pub fn run_until_idle(&self, max_frames: usize) -> usize {
        let mut frames = 0;
        while self.runtime.needs_frame() {
            if frames >= max_frames {
                log::warn!("frame loop stopped after {frames} frames with work pending");
                break;
            }
            std::thread::sleep(self.tick);
            self.pump_once();
            frames += 1;
        }
        log::trace!("frame loop idle after {frames} frames");
        frames
    }
}
