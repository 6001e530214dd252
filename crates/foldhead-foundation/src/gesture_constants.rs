//! Shared gesture constants for the header arbiter.
//!
//! Values are in physical pixels, the unit pointer samples arrive in. Hosts
//! on dense screens usually pass their platform touch slop through
//! [`crate::ArbiterConfig::with_touch_slop`] instead of relying on the default.

/// Minimum accumulated vertical displacement, in pixels, before a drag is
/// treated as intentional.
///
/// Matches the common platform convention of roughly 8 logical pixels at
/// baseline density.
pub const DEFAULT_TOUCH_SLOP: i32 = 8;

/// Duration of the animation that settles a released drag, in milliseconds.
pub const SETTLE_DURATION_MILLIS: u64 = 500;
