//! Testing utilities and harness for foldhead

pub mod regions;
pub mod testing;

pub use regions::{FakeRegion, FakeRegionHost};
pub use testing::*;

pub mod prelude {
    pub use crate::regions::{FakeRegion, FakeRegionHost};
    pub use crate::testing::*;
    pub use foldhead_ui::prelude::*;
}
