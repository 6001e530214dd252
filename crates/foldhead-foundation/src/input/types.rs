pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    /// The host aborted the gesture; handled like [`PointerPhase::Up`].
    Cancel,
}

impl PointerPhase {
    /// Whether this phase ends the gesture.
    pub fn is_terminal(self) -> bool {
        matches!(self, PointerPhase::Up | PointerPhase::Cancel)
    }
}

/// One pointer input event, in the container's coordinate space.
///
/// Coordinates are whole pixels; hosts truncate fractional positions before
/// handing samples over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointerSample {
    pub id: PointerId,
    pub x: i32,
    pub y: i32,
    pub phase: PointerPhase,
}

impl PointerSample {
    pub fn new(phase: PointerPhase, x: i32, y: i32) -> Self {
        Self { id: 0, x, y, phase }
    }

    pub fn down(x: i32, y: i32) -> Self {
        Self::new(PointerPhase::Down, x, y)
    }

    pub fn moved(x: i32, y: i32) -> Self {
        Self::new(PointerPhase::Move, x, y)
    }

    pub fn up(x: i32, y: i32) -> Self {
        Self::new(PointerPhase::Up, x, y)
    }

    pub fn cancel(x: i32, y: i32) -> Self {
        Self::new(PointerPhase::Cancel, x, y)
    }

    pub fn with_id(mut self, id: PointerId) -> Self {
        self.id = id;
        self
    }
}
