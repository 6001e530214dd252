use crate::input::types::{PointerPhase, PointerSample};

/// Receiver of raw pointer samples, implemented by whatever owns the header.
///
/// A host adapter translates its toolkit's touch callbacks into these calls.
/// Each method returns `true` when the header owns the gesture from this
/// sample on, meaning the content region must not see it.
pub trait GestureSource {
    type Error;

    fn on_down(&mut self, sample: PointerSample) -> Result<bool, Self::Error>;

    fn on_move(&mut self, sample: PointerSample) -> Result<bool, Self::Error>;

    fn on_up(&mut self, sample: PointerSample) -> Result<bool, Self::Error>;

    fn on_cancel(&mut self, sample: PointerSample) -> Result<bool, Self::Error> {
        self.on_up(sample)
    }

    /// Route a sample to the callback matching its phase.
    fn dispatch(&mut self, sample: PointerSample) -> Result<bool, Self::Error> {
        match sample.phase {
            PointerPhase::Down => self.on_down(sample),
            PointerPhase::Move => self.on_move(sample),
            PointerPhase::Up => self.on_up(sample),
            PointerPhase::Cancel => self.on_cancel(sample),
        }
    }
}
