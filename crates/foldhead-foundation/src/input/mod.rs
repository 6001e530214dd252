pub mod gestures;
pub mod types;

pub use types::{PointerId, PointerPhase, PointerSample};
