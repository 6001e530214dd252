use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use foldhead_core::{DefaultScheduler, Runtime, RuntimeHandle};
use foldhead_foundation::GestureSource;
use foldhead_ui::{
    AnimationConfig, ArbiterConfig, HeaderLayout, PointerSample, RegionHost, RegionNotFoundError,
    CONTENT_REGION, HEADER_REGION,
};

use crate::regions::{FakeRegion, FakeRegionHost};

/// Upper bound for [`HeaderTestRule::advance_until_idle`].
pub const MAX_IDLE_FRAMES: usize = 1_000;

/// Headless harness around a [`HeaderLayout`].
///
/// Owns its own [`Runtime`] and a virtual frame clock that only moves when
/// the test advances it, so animations are stepped deterministically.
pub struct HeaderTestRule {
    runtime: Runtime,
    host: Rc<FakeRegionHost>,
    layout: HeaderLayout,
    frame_time_nanos: u64,
}

impl HeaderTestRule {
    /// Layout over a header measured at `header_height`, default settings.
    pub fn new(header_height: i32) -> Self {
        Self::with_config(
            header_height,
            ArbiterConfig::default(),
            AnimationConfig::default(),
        )
    }

    pub fn with_config(
        header_height: i32,
        arbiter_config: ArbiterConfig,
        animation_config: AnimationConfig,
    ) -> Self {
        Self::with_host(
            FakeRegionHost::with_header(header_height),
            arbiter_config,
            animation_config,
        )
    }

    pub fn with_host(
        host: Rc<FakeRegionHost>,
        arbiter_config: ArbiterConfig,
        animation_config: AnimationConfig,
    ) -> Self {
        let runtime = Runtime::new(Arc::new(DefaultScheduler));
        let layout = HeaderLayout::with_config(
            Rc::clone(&host) as Rc<dyn RegionHost>,
            runtime.handle(),
            arbiter_config,
            animation_config,
        );
        Self {
            runtime,
            host,
            layout,
            frame_time_nanos: 0,
        }
    }

    pub fn layout(&self) -> &HeaderLayout {
        &self.layout
    }

    pub fn layout_mut(&mut self) -> &mut HeaderLayout {
        &mut self.layout
    }

    pub fn host(&self) -> &Rc<FakeRegionHost> {
        &self.host
    }

    pub fn runtime_handle(&self) -> RuntimeHandle {
        self.runtime.handle()
    }

    /// The `"header"` region. Panics if the test removed it.
    pub fn header(&self) -> Rc<FakeRegion> {
        self.host
            .region(HEADER_REGION)
            .expect("header region was removed from the host")
    }

    pub fn content(&self) -> Option<Rc<FakeRegion>> {
        self.host.region(CONTENT_REGION)
    }

    /// Current virtual frame time.
    pub fn frame_time_nanos(&self) -> u64 {
        self.frame_time_nanos
    }

    /// Drain one frame at the current virtual time.
    pub fn advance_frame(&mut self) {
        self.runtime.drain_frame_callbacks(self.frame_time_nanos);
    }

    /// Move the virtual clock forward by `delta` and drain one frame.
    pub fn advance_frame_by(&mut self, delta: Duration) {
        let delta = u64::try_from(delta.as_nanos()).unwrap_or(u64::MAX);
        self.frame_time_nanos = self.frame_time_nanos.saturating_add(delta);
        self.advance_frame();
    }

    /// Step `tick` at a time until no frame is wanted. Returns the number of
    /// frames drained; panics after [`MAX_IDLE_FRAMES`].
    pub fn advance_until_idle(&mut self, tick: Duration) -> usize {
        let mut frames = 0;
        while self.runtime.needs_frame() {
            assert!(
                frames < MAX_IDLE_FRAMES,
                "animation did not settle within {MAX_IDLE_FRAMES} frames"
            );
            self.advance_frame_by(tick);
            frames += 1;
        }
        frames
    }

    pub fn is_idle(&self) -> bool {
        !self.runtime.needs_frame()
    }

    /// Route a sample through [`GestureSource::dispatch`].
    pub fn dispatch(&mut self, sample: PointerSample) -> Result<bool, RegionNotFoundError> {
        self.layout.dispatch(sample)
    }

    pub fn down(&mut self, x: i32, y: i32) -> Result<bool, RegionNotFoundError> {
        self.dispatch(PointerSample::down(x, y))
    }

    pub fn move_to(&mut self, x: i32, y: i32) -> Result<bool, RegionNotFoundError> {
        self.dispatch(PointerSample::moved(x, y))
    }

    pub fn up(&mut self, x: i32, y: i32) -> Result<bool, RegionNotFoundError> {
        self.dispatch(PointerSample::up(x, y))
    }

    /// Vertical drag at `x` through every point of `ys`, then release at the
    /// last one. Returns whether the header owned the gesture at release.
    pub fn drag(&mut self, x: i32, ys: &[i32]) -> Result<bool, RegionNotFoundError> {
        let Some((&first, rest)) = ys.split_first() else {
            return Ok(false);
        };
        self.down(x, first)?;
        let mut last = first;
        for &y in rest {
            self.move_to(x, y)?;
            last = y;
        }
        let owned = self.layout.is_intercepting();
        self.up(x, last)?;
        Ok(owned)
    }
}

#[cfg(test)]
#[path = "tests/testing_tests.rs"]
mod tests;
