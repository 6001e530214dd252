//! Core runtime for the foldhead collapsible header.
//!
//! Everything in foldhead runs on one logical UI thread. Gesture handling and
//! animation frames meet in the same [`Runtime`]: animations register frame
//! callbacks on a [`FrameClock`], and the host drains those callbacks with a
//! frame timestamp whenever it produces a frame. There is no background
//! thread and no locking.

mod frame_clock;
mod platform;
mod runtime;

pub use frame_clock::{FrameCallbackRegistration, FrameClock};
pub use platform::{Clock, DefaultScheduler, RuntimeScheduler};
pub use runtime::{Runtime, RuntimeHandle};

/// Identifier handed out for every registered frame callback.
pub type FrameCallbackId = u64;

/// Nanoseconds in one millisecond, used when converting frame timestamps.
pub const NANOS_PER_MILLI: u64 = 1_000_000;

pub mod prelude {
    pub use crate::frame_clock::{FrameCallbackRegistration, FrameClock};
    pub use crate::runtime::{Runtime, RuntimeHandle};
}
