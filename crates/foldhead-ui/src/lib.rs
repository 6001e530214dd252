//! Collapsible header controller.
//!
//! [`HeaderLayout`] owns a two-region container: a `"header"` region that
//! shrinks and grows with vertical drags and a `"content"` region that
//! scrolls underneath it. The host feeds it pointer samples and frames; the
//! layout decides who owns each drag, resizes the header, and animates a
//! released drag to fully expanded or fully collapsed.

mod error;
mod header_layout;
mod header_state;
mod region;

pub use error::{MissingRegion, RegionNotFoundError};
pub use header_layout::HeaderLayout;
pub use header_state::HeaderState;
pub use region::{Region, RegionHost, CONTENT_REGION, HEADER_REGION};

pub use foldhead_animation::{
    AnimationConfig, AnimationId, ModifyOriginalPolicy, OverlapPolicy, TickCadence,
};
pub use foldhead_foundation::{
    ArbiterConfig, DelegationHook, GestureSession, GestureSource, HeaderMetrics, HeaderStatus,
    PointerPhase, PointerSample,
};

pub mod prelude {
    pub use crate::header_layout::HeaderLayout;
    pub use crate::region::{Region, RegionHost};
    pub use foldhead_foundation::prelude::*;
}
