//! The collapsible-header container.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use foldhead_animation::{
    AnimationConfig, AnimationId, AnimationScheduler, AnimationTask, HeightFrame, OriginalWrite,
};
use foldhead_core::RuntimeHandle;
use foldhead_foundation::{
    ArbiterConfig, DelegationHook, DragUpdate, GestureArbiter, GestureSource, HeaderMetrics,
    HeaderStatus, PointerSample,
};

use crate::error::{MissingRegion, RegionNotFoundError};
use crate::header_state::HeaderState;
use crate::region::{Region, RegionHost, CONTENT_REGION, HEADER_REGION};

struct LayoutInner {
    host: Rc<dyn RegionHost>,
    /// Resolved header region. The content region is only checked for.
    header: Option<Rc<dyn Region>>,
    state: Option<HeaderState>,
    /// Set once the header has been measured with a positive height.
    header_shown: bool,
}

/// Write `update` into the header state and push the result to the header
/// region. No-op until the regions are resolved.
fn update_header(inner: &RefCell<LayoutInner>, update: impl FnOnce(&mut HeaderState) -> i32) {
    let applied = {
        let mut inner = inner.borrow_mut();
        let LayoutInner { state, header, .. } = &mut *inner;
        match (state.as_mut(), header.as_ref()) {
            (Some(state), Some(header)) => Some((update(state), Rc::clone(header))),
            _ => None,
        }
    };
    // Outside the borrow: the host may call back into the layout.
    if let Some((height, header)) = applied {
        header.set_layout_height(height);
    }
}

fn apply_frame(inner: &RefCell<LayoutInner>, frame: HeightFrame) {
    update_header(inner, |state| match frame.original {
        OriginalWrite::Keep => state.set_height(frame.height, false),
        OriginalWrite::AfterHeight(original) => {
            state.set_height(frame.height, false);
            state.set_original_height(original)
        }
        OriginalWrite::BeforeHeight(original) => {
            state.set_original_height(original);
            state.set_height(frame.height, false)
        }
    });
}

/// Collapsible header over a scrolling content region.
///
/// Everything happens on the runtime's UI thread: pointer samples arrive
/// through [`GestureSource`] (or the two raw callbacks), animation frames
/// arrive through the runtime's frame clock. Drags and animations write the
/// same state; whichever writes last wins.
pub struct HeaderLayout {
    inner: Rc<RefCell<LayoutInner>>,
    arbiter: RefCell<GestureArbiter>,
    animations: AnimationScheduler,
    runtime: RuntimeHandle,
}

impl HeaderLayout {
    pub fn new(host: Rc<dyn RegionHost>, runtime: RuntimeHandle) -> Self {
        Self::with_config(
            host,
            runtime,
            ArbiterConfig::default(),
            AnimationConfig::default(),
        )
    }

    pub fn with_config(
        host: Rc<dyn RegionHost>,
        runtime: RuntimeHandle,
        arbiter_config: ArbiterConfig,
        animation_config: AnimationConfig,
    ) -> Self {
        Self {
            inner: Rc::new(RefCell::new(LayoutInner {
                host,
                header: None,
                state: None,
                header_shown: false,
            })),
            arbiter: RefCell::new(GestureArbiter::new(arbiter_config)),
            animations: AnimationScheduler::new(runtime.clone(), animation_config),
            runtime,
        }
    }

    // ---------------------------------------------------------------------
    // Lifecycle
    // ---------------------------------------------------------------------

    /// Resolve the regions when focus arrives and they are not known yet.
    pub fn on_window_focus_changed(&self, has_focus: bool) -> Result<(), RegionNotFoundError> {
        if has_focus && self.inner.borrow().header.is_none() {
            self.initialize()?;
        }
        Ok(())
    }

    /// Forget resolved regions and measurements; the next access re-measures.
    ///
    /// Running animations are cancelled since their heights refer to the old
    /// geometry.
    pub fn on_geometry_changed(&self) {
        let cancelled = self.animations.cancel_all();
        if cancelled > 0 {
            log::debug!("geometry changed; cancelled {cancelled} animation(s)");
        }
        let mut inner = self.inner.borrow_mut();
        inner.header = None;
        inner.state = None;
        inner.header_shown = false;
    }

    /// Resolve the regions if that has not happened yet.
    pub fn ensure_initialized(&self) -> Result<(), RegionNotFoundError> {
        self.metrics().map(|_| ())
    }

    fn initialize(&self) -> Result<HeaderMetrics, RegionNotFoundError> {
        let host = Rc::clone(&self.inner.borrow().host);
        let header = host.find_region(HEADER_REGION);
        let content_found = host.find_region(CONTENT_REGION).is_some();

        let header = match header {
            Some(header) if content_found => header,
            header => {
                let missing = MissingRegion::from_lookup(header.is_some(), content_found)
                    .unwrap_or(MissingRegion::Both);
                let err = RegionNotFoundError::new(missing);
                log::error!("header layout initialisation failed: {err}");
                return Err(err);
            }
        };

        let measured = header.measured_height();
        let touch_slop = self.arbiter.borrow().config().touch_slop;
        let state = HeaderState::new(measured, touch_slop);
        log::debug!("header layout initialised; header measured at {measured}px");

        let mut inner = self.inner.borrow_mut();
        inner.header = Some(header);
        inner.state = Some(state);
        inner.header_shown = measured > 0;
        Ok(state.metrics())
    }

    fn metrics(&self) -> Result<HeaderMetrics, RegionNotFoundError> {
        let metrics = self.inner.borrow().state.map(|state| state.metrics());
        match metrics {
            Some(metrics) => Ok(metrics),
            None => self.initialize(),
        }
    }

    /// Like [`HeaderLayout::metrics`], but re-measures while the header has
    /// never been seen with a positive height.
    fn metrics_for_write(&self) -> Result<HeaderMetrics, RegionNotFoundError> {
        if self.inner.borrow().header_shown {
            self.metrics()
        } else {
            self.initialize()
        }
    }

    // ---------------------------------------------------------------------
    // Height
    // ---------------------------------------------------------------------

    pub fn set_header_height(&self, height: i32) -> Result<(), RegionNotFoundError> {
        self.set_header_height_with(height, false)
    }

    /// Write a height directly, without animation. With `modify_original`
    /// the original height becomes `height` as well.
    pub fn set_header_height_with(
        &self,
        height: i32,
        modify_original: bool,
    ) -> Result<(), RegionNotFoundError> {
        self.metrics_for_write()?;
        self.runtime.assert_ui_thread();
        update_header(&self.inner, |state| state.set_height(height, modify_original));
        Ok(())
    }

    pub fn set_original_header_height(&self, height: i32) -> Result<(), RegionNotFoundError> {
        self.metrics()?;
        self.runtime.assert_ui_thread();
        update_header(&self.inner, |state| state.set_original_height(height));
        Ok(())
    }

    pub fn smooth_set_header_height(
        &self,
        from: i32,
        to: i32,
        duration_millis: u64,
    ) -> Result<AnimationId, RegionNotFoundError> {
        self.smooth_set_header_height_with(from, to, duration_millis, false)
    }

    /// Animate the header from `from` to `to`. See [`AnimationConfig`] for
    /// how `modify_original` and overlapping animations behave.
    pub fn smooth_set_header_height_with(
        &self,
        from: i32,
        to: i32,
        duration_millis: u64,
        modify_original: bool,
    ) -> Result<AnimationId, RegionNotFoundError> {
        self.metrics()?;
        let task =
            AnimationTask::new(from, to, duration_millis).with_modify_original(modify_original);
        Ok(self.start_animation(task))
    }

    fn start_animation(&self, task: AnimationTask) -> AnimationId {
        let inner: Weak<RefCell<LayoutInner>> = Rc::downgrade(&self.inner);
        let runtime = self.runtime.clone();
        self.animations.start(task, move |frame| {
            if let Some(inner) = inner.upgrade() {
                runtime.assert_ui_thread();
                apply_frame(&inner, frame);
            }
        })
    }

    pub fn is_animating(&self) -> bool {
        self.animations.is_running()
    }

    // ---------------------------------------------------------------------
    // Configuration
    // ---------------------------------------------------------------------

    pub fn arbiter_config(&self) -> ArbiterConfig {
        self.arbiter.borrow().config()
    }

    pub fn set_arbiter_config(&self, config: ArbiterConfig) {
        self.arbiter.borrow_mut().set_config(config);
        if let Some(state) = self.inner.borrow_mut().state.as_mut() {
            state.set_touch_slop(config.touch_slop);
        }
    }

    pub fn set_sticky(&self, sticky: bool) {
        self.set_arbiter_config(self.arbiter_config().with_sticky(sticky));
    }

    pub fn set_disallow_intercept_on_header(&self, disallow: bool) {
        self.set_arbiter_config(self.arbiter_config().with_disallow_intercept_on_header(disallow));
    }

    pub fn animation_config(&self) -> AnimationConfig {
        self.animations.config()
    }

    pub fn set_animation_config(&self, config: AnimationConfig) {
        self.animations.set_config(config);
    }

    /// Install (or remove) the hook consulted on downward drags.
    pub fn set_delegation_hook(&self, hook: Option<Rc<dyn DelegationHook>>) {
        self.arbiter.borrow_mut().set_delegation_hook(hook);
    }

    // ---------------------------------------------------------------------
    // Read access
    // ---------------------------------------------------------------------

    /// Expanded until the header has been measured.
    pub fn status(&self) -> HeaderStatus {
        self.inner
            .borrow()
            .state
            .map(|state| state.status())
            .unwrap_or_default()
    }

    pub fn header_height(&self) -> Option<i32> {
        self.inner.borrow().state.map(|state| state.current_height())
    }

    pub fn original_header_height(&self) -> Option<i32> {
        self.inner.borrow().state.map(|state| state.original_height())
    }

    pub fn header_state(&self) -> Option<HeaderState> {
        self.inner.borrow().state
    }

    /// Whether the header owns the gesture in progress.
    pub fn is_intercepting(&self) -> bool {
        self.arbiter.borrow().is_intercepting()
    }

    // ---------------------------------------------------------------------
    // Raw host callbacks
    // ---------------------------------------------------------------------

    /// Decision path: called for every sample while children own the
    /// gesture. Returns whether the header takes it over.
    pub fn on_intercept_touch_event(
        &self,
        sample: PointerSample,
    ) -> Result<bool, RegionNotFoundError> {
        let metrics = self.metrics()?;
        let (check, hook) = {
            let mut arbiter = self.arbiter.borrow_mut();
            (arbiter.check_intercept(&sample, metrics), arbiter.delegation_hook())
        };
        // Polled unborrowed: the hook may read the layout back.
        let wanted = check.resolve(&sample, hook.as_deref());
        Ok(self.arbiter.borrow_mut().commit_intercept(&sample, wanted))
    }

    /// Drag path: called for samples the header owns, including whole
    /// gestures no child claimed. Always consumes the sample.
    pub fn on_touch_event(&self, sample: PointerSample) -> Result<bool, RegionNotFoundError> {
        let metrics = self.metrics()?;
        let update = self.arbiter.borrow_mut().on_touch_event(&sample, metrics);
        match update {
            DragUpdate::Idle => {}
            DragUpdate::Height(height) => {
                self.runtime.assert_ui_thread();
                update_header(&self.inner, |state| state.set_height(height, false));
            }
            DragUpdate::Settle(target) => {
                self.start_animation(AnimationTask::new(
                    target.from,
                    target.to,
                    target.duration_millis,
                ));
            }
        }
        Ok(true)
    }
}

impl GestureSource for HeaderLayout {
    type Error = RegionNotFoundError;

    fn on_down(&mut self, sample: PointerSample) -> Result<bool, Self::Error> {
        self.on_intercept_touch_event(sample)
    }

    fn on_move(&mut self, sample: PointerSample) -> Result<bool, Self::Error> {
        if self.is_intercepting() {
            self.on_touch_event(sample)
        } else {
            self.on_intercept_touch_event(sample)
        }
    }

    fn on_up(&mut self, sample: PointerSample) -> Result<bool, Self::Error> {
        if self.is_intercepting() {
            self.on_touch_event(sample)
        } else {
            self.on_intercept_touch_event(sample)
        }
    }
}
