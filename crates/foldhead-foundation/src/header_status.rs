/// Whether the header currently shows any of itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HeaderStatus {
    #[default]
    Expanded,
    Collapsed,
}

impl HeaderStatus {
    /// Status is never stored independently of the height it describes.
    pub fn from_height(height: i32) -> Self {
        if height == 0 {
            HeaderStatus::Collapsed
        } else {
            HeaderStatus::Expanded
        }
    }

    pub fn is_expanded(self) -> bool {
        self == HeaderStatus::Expanded
    }
}

/// Read-only snapshot of header geometry handed to the arbiter per sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeaderMetrics {
    pub current_height: i32,
    pub original_height: i32,
}

impl HeaderMetrics {
    pub fn new(current_height: i32, original_height: i32) -> Self {
        Self {
            current_height,
            original_height,
        }
    }

    pub fn status(&self) -> HeaderStatus {
        HeaderStatus::from_height(self.current_height)
    }
}
