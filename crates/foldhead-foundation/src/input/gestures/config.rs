use crate::gesture_constants::DEFAULT_TOUCH_SLOP;

/// Immutable arbiter settings, replaced wholesale by the owning container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArbiterConfig {
    /// When false the header never intercepts a gesture.
    pub sticky: bool,
    /// When true, gestures that start inside the visible header are left to
    /// the header's own children.
    pub disallow_intercept_on_header: bool,
    pub touch_slop: i32,
}

impl ArbiterConfig {
    pub fn with_sticky(mut self, sticky: bool) -> Self {
        self.sticky = sticky;
        self
    }

    pub fn with_disallow_intercept_on_header(mut self, disallow: bool) -> Self {
        self.disallow_intercept_on_header = disallow;
        self
    }

    /// Negative values are treated as zero.
    pub fn with_touch_slop(mut self, touch_slop: i32) -> Self {
        self.touch_slop = touch_slop.max(0);
        self
    }
}

impl Default for ArbiterConfig {
    fn default() -> Self {
        Self {
            sticky: true,
            disallow_intercept_on_header: true,
            touch_slop: DEFAULT_TOUCH_SLOP,
        }
    }
}
