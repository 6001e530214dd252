//! Pointer input and gesture arbitration for foldhead.
//!
//! The [`GestureArbiter`] decides, one pointer sample at a time, whether a
//! vertical drag belongs to the collapsible header or to the scrolling content
//! below it. It never touches layout itself: it reads a [`HeaderMetrics`]
//! snapshot and reports what the header should do.

pub mod gesture_constants;
mod header_status;
pub mod input;

pub use header_status::{HeaderMetrics, HeaderStatus};
pub use input::gestures::{
    settle_target, ArbiterConfig, DelegationHook, DragUpdate, GestureArbiter, GestureSession,
    GestureSource, InterceptCheck, SettleTarget,
};
pub use input::types::{PointerId, PointerPhase, PointerSample};

pub mod prelude {
    pub use crate::header_status::{HeaderMetrics, HeaderStatus};
    pub use crate::input::gestures::{ArbiterConfig, DelegationHook, GestureSource};
    pub use crate::input::types::{PointerPhase, PointerSample};
}
