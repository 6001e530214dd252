use crate::input::gestures::session::GestureSession;
use crate::input::types::PointerSample;

/// Lets the content owner release a downward drag to the header.
///
/// Polled on every downward move the arbiter evaluates, possibly many times
/// per gesture, so implementations should be cheap and free of side effects.
/// Returning `true` means "the content has nothing left to scroll".
pub trait DelegationHook {
    fn give_up_touch_event(&self, sample: &PointerSample, session: &GestureSession) -> bool;
}

impl<F> DelegationHook for F
where
    F: Fn(&PointerSample, &GestureSession) -> bool,
{
    fn give_up_touch_event(&self, sample: &PointerSample, session: &GestureSession) -> bool {
        self(sample, session)
    }
}
