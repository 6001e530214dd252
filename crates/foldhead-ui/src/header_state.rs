use foldhead_foundation::{HeaderMetrics, HeaderStatus};

/// Current and original header height.
///
/// Every write is clamped into `[0, original_height]`; out-of-range values
/// are corrected, never rejected. Status always follows the height.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeaderState {
    current_height: i32,
    original_height: i32,
    status: HeaderStatus,
    touch_slop: i32,
}

impl HeaderState {
    /// Starts fully expanded at the measured height.
    pub fn new(measured_height: i32, touch_slop: i32) -> Self {
        let original_height = measured_height.max(0);
        Self {
            current_height: original_height,
            original_height,
            status: HeaderStatus::from_height(original_height),
            touch_slop,
        }
    }

    pub fn current_height(&self) -> i32 {
        self.current_height
    }

    pub fn original_height(&self) -> i32 {
        self.original_height
    }

    pub fn status(&self) -> HeaderStatus {
        self.status
    }

    pub fn touch_slop(&self) -> i32 {
        self.touch_slop
    }

    pub fn set_touch_slop(&mut self, touch_slop: i32) {
        self.touch_slop = touch_slop;
    }

    pub fn metrics(&self) -> HeaderMetrics {
        HeaderMetrics::new(self.current_height, self.original_height)
    }

    /// Write a height and return the clamped value that was stored.
    ///
    /// The clamp uses the original height as it was before this call, even
    /// when `modify_original` replaces it.
    pub fn set_height(&mut self, height: i32, modify_original: bool) -> i32 {
        let clamped = height.clamp(0, self.original_height);
        self.current_height = clamped;
        self.status = HeaderStatus::from_height(clamped);
        if modify_original {
            self.original_height = height.max(0);
        }
        clamped
    }

    /// Replace the original height, shrinking the current height if it no
    /// longer fits. Returns the current height.
    pub fn set_original_height(&mut self, original_height: i32) -> i32 {
        self.original_height = original_height.max(0);
        if self.current_height > self.original_height {
            self.current_height = self.original_height;
            self.status = HeaderStatus::from_height(self.current_height);
        }
        self.current_height
    }
}

#[cfg(test)]
#[path = "tests/header_state_tests.rs"]
mod tests;
