/// Clock and deferral primitives a list needs from its environment.
///
/// A list never calls back into itself: it *requests* a frame or a wakeup, and the host event
/// loop later calls [`crate::VirtualList::on_frame`] / [`crate::VirtualList::on_wakeup`]. In a
/// browser these map to `requestAnimationFrame` and `setTimeout`; in a terminal UI, to the render
/// loop and its poll timeout.
///
/// Repeated requests before the callback fires must coalesce into one.
pub trait FrameScheduler {
    /// Monotonic time in milliseconds.
    fn now_ms(&self) -> u64;

    /// Asks for [`crate::VirtualList::on_frame`] on the next display refresh.
    fn request_frame(&mut self);

    /// Withdraws a pending frame request.
    fn cancel_frame(&mut self);

    /// Asks for [`crate::VirtualList::on_wakeup`] at `at_ms`, replacing any earlier wakeup.
    fn schedule_wakeup(&mut self, at_ms: u64);

    /// Withdraws the pending wakeup.
    fn cancel_wakeup(&mut self);
}

/// A manually advanced virtual clock.
///
/// Nothing happens on its own: the driver advances time, then asks whether a frame or wakeup is
/// due ([`ManualScheduler::take_frame`], [`ManualScheduler::take_due_wakeup`]) and forwards it
/// to the list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ManualScheduler {
    now_ms: u64,
    frame_requested: bool,
    wakeup_at: Option<u64>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(now_ms: u64) -> Self {
        Self {
            now_ms,
            ..Self::default()
        }
    }

    pub fn advance(&mut self, ms: u64) {
        self.now_ms = self.now_ms.saturating_add(ms);
    }

    pub fn frame_requested(&self) -> bool {
        self.frame_requested
    }

    pub fn wakeup_at(&self) -> Option<u64> {
        self.wakeup_at
    }

    /// Consumes the pending frame request, if any.
    pub fn take_frame(&mut self) -> bool {
        core::mem::take(&mut self.frame_requested)
    }

    /// Consumes the pending wakeup if its deadline has passed.
    pub fn take_due_wakeup(&mut self) -> bool {
        match self.wakeup_at {
            Some(at) if at <= self.now_ms => {
                self.wakeup_at = None;
                true
            }
            _ => false,
        }
    }
}

impl FrameScheduler for ManualScheduler {
    fn now_ms(&self) -> u64 {
        self.now_ms
    }

    fn request_frame(&mut self) {
        self.frame_requested = true;
    }

    fn cancel_frame(&mut self) {
        self.frame_requested = false;
    }

    fn schedule_wakeup(&mut self, at_ms: u64) {
        self.wakeup_at = Some(at_ms);
    }

    fn cancel_wakeup(&mut self) {
        self.wakeup_at = None;
    }
}
