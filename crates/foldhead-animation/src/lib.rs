//! Frame-stepped height animation for foldhead.
//!
//! An [`AnimationTask`] describes a linear move from one header height to
//! another. The [`AnimationScheduler`] turns it into a fixed sequence of
//! integer height writes delivered on the runtime's frame clock, always
//! ending exactly on the target.

mod scheduler;
mod task;

pub use scheduler::{AnimationId, AnimationScheduler, HeightFrame, OriginalWrite};
pub use task::{
    frame_count, AnimationConfig, AnimationTask, ModifyOriginalPolicy, OverlapPolicy, TickCadence,
    DEFAULT_TICK, FRAMES_PER_SECOND,
};
