//! Decides who owns a vertical drag: the header or the content below it.
//!
//! The arbiter mirrors the two callbacks a container receives from its host
//! toolkit. [`GestureArbiter::on_intercept_touch_event`] sees every sample
//! while children still own the gesture and answers "should the header take
//! over?". [`GestureArbiter::on_touch_event`] sees samples once the header
//! owns the gesture and turns them into height updates and, on release, a
//! settle target.

use std::rc::Rc;

use crate::gesture_constants::SETTLE_DURATION_MILLIS;
use crate::header_status::{HeaderMetrics, HeaderStatus};
use crate::input::gestures::config::ArbiterConfig;
use crate::input::gestures::delegation::DelegationHook;
use crate::input::gestures::session::GestureSession;
use crate::input::types::{PointerPhase, PointerSample};

/// Where a released drag should come to rest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SettleTarget {
    pub from: i32,
    pub to: i32,
    pub status: HeaderStatus,
    pub duration_millis: u64,
}

/// Collapse when at most half of the original height is showing, else expand.
pub fn settle_target(current_height: i32, original_height: i32) -> SettleTarget {
    let collapse = 2 * i64::from(current_height) <= i64::from(original_height);
    let (to, status) = if collapse {
        (0, HeaderStatus::Collapsed)
    } else {
        (original_height, HeaderStatus::Expanded)
    };
    SettleTarget {
        from: current_height,
        to,
        status,
        duration_millis: SETTLE_DURATION_MILLIS,
    }
}

/// Result of feeding a sample to the drag path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragUpdate {
    /// Nothing for the header to do.
    Idle,
    /// Write this (unclamped) height to the header.
    Height(i32),
    /// The drag ended; animate toward the target.
    Settle(SettleTarget),
}

/// Outcome of [`GestureArbiter::check_intercept`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InterceptCheck {
    Decided(bool),
    /// Only the delegation hook can still release the gesture.
    AskHook {
        session: GestureSession,
        past_slop: bool,
    },
}

impl InterceptCheck {
    /// Final decision, polling `hook` when the rules left it open. The hook
    /// is polled even below the slop.
    pub fn resolve(self, sample: &PointerSample, hook: Option<&dyn DelegationHook>) -> bool {
        match self {
            InterceptCheck::Decided(wanted) => wanted,
            InterceptCheck::AskHook { session, past_slop } => {
                let gave_up = hook.is_some_and(|hook| hook.give_up_touch_event(sample, &session));
                gave_up && past_slop
            }
        }
    }
}

pub struct GestureArbiter {
    config: ArbiterConfig,
    hook: Option<Rc<dyn DelegationHook>>,
    session: Option<GestureSession>,
    intercepting: bool,
}

impl GestureArbiter {
    pub fn new(config: ArbiterConfig) -> Self {
        Self {
            config,
            hook: None,
            session: None,
            intercepting: false,
        }
    }

    pub fn config(&self) -> ArbiterConfig {
        self.config
    }

    pub fn set_config(&mut self, config: ArbiterConfig) {
        self.config = config;
    }

    pub fn set_delegation_hook(&mut self, hook: Option<Rc<dyn DelegationHook>>) {
        self.hook = hook;
    }

    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    /// True from the intercepting Move until the gesture ends.
    pub fn is_intercepting(&self) -> bool {
        self.intercepting
    }

    /// The installed hook, for callers that poll it themselves through
    /// [`InterceptCheck::resolve`].
    pub fn delegation_hook(&self) -> Option<Rc<dyn DelegationHook>> {
        self.hook.clone()
    }

    /// Decision path. Returns whether the header takes over the gesture.
    pub fn on_intercept_touch_event(
        &mut self,
        sample: &PointerSample,
        metrics: HeaderMetrics,
    ) -> bool {
        let check = self.check_intercept(sample, metrics);
        let hook = self.hook.clone();
        let wanted = check.resolve(sample, hook.as_deref());
        self.commit_intercept(sample, wanted)
    }

    /// First half of the decision path: updates the session and applies
    /// every rule that does not need the delegation hook.
    pub fn check_intercept(
        &mut self,
        sample: &PointerSample,
        metrics: HeaderMetrics,
    ) -> InterceptCheck {
        match sample.phase {
            PointerPhase::Down => {
                self.begin(sample);
                InterceptCheck::Decided(false)
            }
            PointerPhase::Move => {
                let session = *self.session.get_or_insert_with(|| {
                    log::debug!("move without a preceding down; starting session here");
                    GestureSession::start(sample)
                });
                let check = self.evaluate(&session, sample, metrics);
                self.track(sample);
                check
            }
            PointerPhase::Up | PointerPhase::Cancel => {
                self.end();
                InterceptCheck::Decided(false)
            }
        }
    }

    /// Second half of the decision path. `wanted` is still subject to
    /// `sticky`.
    pub fn commit_intercept(&mut self, sample: &PointerSample, wanted: bool) -> bool {
        log::trace!(
            "intercept {:?} at ({}, {}): {}",
            sample.phase,
            sample.x,
            sample.y,
            wanted
        );

        let intercepted = wanted && self.config.sticky;
        if intercepted {
            self.intercepting = true;
        }
        intercepted
    }

    /// Drag path. Also reached directly when no child claimed the Down.
    pub fn on_touch_event(&mut self, sample: &PointerSample, metrics: HeaderMetrics) -> DragUpdate {
        if !self.config.sticky {
            if sample.phase.is_terminal() {
                self.end();
            }
            return DragUpdate::Idle;
        }

        match sample.phase {
            PointerPhase::Down => {
                self.begin(sample);
                DragUpdate::Idle
            }
            PointerPhase::Move => {
                let session = self
                    .session
                    .get_or_insert_with(|| GestureSession::start(sample));
                let (_, dy) = session.step_delta(sample);
                session.track(sample);
                DragUpdate::Height(metrics.current_height.saturating_add(dy))
            }
            PointerPhase::Up | PointerPhase::Cancel => {
                self.end();
                let target = settle_target(metrics.current_height, metrics.original_height);
                log::debug!(
                    "drag released at {} of {}; settling to {} ({:?})",
                    target.from,
                    metrics.original_height,
                    target.to,
                    target.status
                );
                DragUpdate::Settle(target)
            }
        }
    }

    /// Intercept rules, first match wins. `sticky` is applied on commit.
    fn evaluate(
        &self,
        session: &GestureSession,
        sample: &PointerSample,
        metrics: HeaderMetrics,
    ) -> InterceptCheck {
        let (dx, dy) = session.total_delta(sample);
        let slop = self.config.touch_slop;

        if self.config.disallow_intercept_on_header && session.start_y <= metrics.current_height {
            return InterceptCheck::Decided(false);
        }
        if dy.unsigned_abs() <= dx.unsigned_abs() {
            return InterceptCheck::Decided(false);
        }
        if metrics.status().is_expanded() && dy <= slop.saturating_neg() {
            return InterceptCheck::Decided(true);
        }
        if self.hook.is_none() {
            return InterceptCheck::Decided(false);
        }
        InterceptCheck::AskHook {
            session: *session,
            past_slop: dy >= slop,
        }
    }

    fn begin(&mut self, sample: &PointerSample) {
        self.session = Some(GestureSession::start(sample));
        self.intercepting = false;
    }

    fn track(&mut self, sample: &PointerSample) {
        if let Some(session) = self.session.as_mut() {
            session.track(sample);
        }
    }

    fn end(&mut self) {
        self.session = None;
        self.intercepting = false;
    }
}

impl Default for GestureArbiter {
    fn default() -> Self {
        Self::new(ArbiterConfig::default())
    }
}

#[cfg(test)]
#[path = "../../tests/arbiter_tests.rs"]
mod tests;
