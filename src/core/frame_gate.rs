/// Coalesces bursts of events into at most one animation-frame callback.
///
/// `request` returns `true` only for the first call since the last `fire`;
/// that caller schedules the frame, everyone else piggybacks on it.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    #[inline]
    pub fn request(&mut self) -> bool {
        !std::mem::replace(&mut self.pending, true)
    }

    #[inline]
    pub fn fire(&mut self) {
        self.pending = false;
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
