//! Platform abstraction traits for the foldhead runtime.
//!
//! The runtime never sleeps or spawns threads by itself. A host implements
//! these traits to learn when a frame is wanted and to supply wall-clock
//! time for the frame timestamps it feeds back into the runtime.

/// Receives frame requests from the runtime.
///
/// Called whenever a frame callback is registered. Implementations must be
/// cheap; the usual implementation flips a flag that the host event loop
/// polls.
pub trait RuntimeScheduler: Send + Sync {
    /// Request that the host produce a new frame.
    fn schedule_frame(&self);
}

/// Provides timing information for a host frame loop.
pub trait Clock: Send + Sync {
    /// Instant type produced by this clock implementation.
    type Instant: Copy + Send + Sync;

    /// Returns the current instant.
    fn now(&self) -> Self::Instant;

    /// Returns the number of nanoseconds elapsed since `since`.
    fn elapsed_nanos(&self, since: Self::Instant) -> u64;
}

/// Scheduler that ignores frame requests.
///
/// Useful when the host drives frames unconditionally (tests, fixed-rate
/// loops) and only needs [`crate::Runtime::needs_frame`] to know when to stop.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultScheduler;

impl RuntimeScheduler for DefaultScheduler {
    fn schedule_frame(&self) {}
}
