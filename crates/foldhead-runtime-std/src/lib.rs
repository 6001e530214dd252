//! `std`-backed runtime for headless hosts.
//!
//! [`StdRuntime`] pairs a [`Runtime`] with a scheduler that only records
//! frame requests; [`FrameLoop`] turns those requests into timed frames.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use foldhead_core::{Clock, Runtime, RuntimeHandle, RuntimeScheduler};
use web_time::Instant;

mod frame_loop;

pub use frame_loop::{FrameLoop, DEFAULT_FRAME_TICK, MAX_LOOP_FRAMES};

/// Records frame requests until the frame loop picks them up.
#[derive(Debug, Default)]
pub struct StdScheduler {
    frame_requested: AtomicBool,
}

impl StdScheduler {
    pub fn take_frame_request(&self) -> bool {
        self.frame_requested.swap(false, Ordering::SeqCst)
    }
}

impl RuntimeScheduler for StdScheduler {
    fn schedule_frame(&self) {
        self.frame_requested.store(true, Ordering::SeqCst);
    }
}

/// Monotonic wall clock; `web-time` keeps it usable on `wasm32`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdClock;

impl Clock for StdClock {
    type Instant = Instant;

    fn now(&self) -> Instant {
        Instant::now()
    }

    fn elapsed_nanos(&self, since: Instant) -> u64 {
        u64::try_from(since.elapsed().as_nanos()).unwrap_or(u64::MAX)
    }
}

#[derive(Clone)]
pub struct StdRuntime {
    scheduler: Arc<StdScheduler>,
    runtime: Runtime,
}

impl StdRuntime {
    pub fn new() -> Self {
        let scheduler = Arc::new(StdScheduler::default());
        let runtime = Runtime::new(Arc::clone(&scheduler) as Arc<dyn RuntimeScheduler>);
        Self { scheduler, runtime }
    }

    pub fn runtime_handle(&self) -> RuntimeHandle {
        self.runtime.handle()
    }

    /// Whether a frame was requested since the last call.
    pub fn take_frame_request(&self) -> bool {
        self.scheduler.take_frame_request()
    }

    pub fn drain_frame_callbacks(&self, frame_time_nanos: u64) {
        self.runtime.drain_frame_callbacks(frame_time_nanos);
    }

    pub fn needs_frame(&self) -> bool {
        self.runtime.needs_frame()
    }
}

impl fmt::Debug for StdRuntime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StdRuntime")
            .field("needs_frame", &self.needs_frame())
            .finish_non_exhaustive()
    }
}

impl Default for StdRuntime {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/std_runtime_tests.rs"]
mod tests;
