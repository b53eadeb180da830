/// Handle for one requested frame callback.
///
/// Tickets carry the engine's generation at request time. Pausing bumps the generation, so a
/// callback that fires after a pause is recognized as stale and ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameTicket {
    generation: u64,
}

impl FrameTicket {
    pub(crate) fn new(generation: u64) -> Self {
        Self { generation }
    }

    pub fn generation(self) -> u64 {
        self.generation
    }
}

/// Host hook that calls [`crate::Engine::on_frame`] back once per display frame.
pub trait FrameScheduler {
    /// Ask for one callback carrying `ticket`.
    fn request_frame(&mut self, ticket: FrameTicket);
    /// Withdraw a request made with `ticket`, if it has not fired yet.
    fn cancel_frame(&mut self, ticket: FrameTicket);
}

/// Scheduler that parks at most one pending ticket for a host loop to drain.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    pending: Option<FrameTicket>,
    requested: u64,
    cancelled: u64,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// The parked ticket, if any, without consuming it.
    pub fn pending(&self) -> Option<FrameTicket> {
        self.pending
    }

    /// Take the parked ticket so the host can deliver it.
    pub fn take_pending(&mut self) -> Option<FrameTicket> {
        self.pending.take()
    }

    /// Total requests seen.
    pub fn requested(&self) -> u64 {
        self.requested
    }

    /// Total cancellations that removed a parked ticket.
    pub fn cancelled(&self) -> u64 {
        self.cancelled
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self, ticket: FrameTicket) {
        self.requested += 1;
        if let Some(prev) = self.pending.replace(ticket) {
            tracing::trace!(generation = prev.generation(), "replaced pending frame request");
        }
    }

    fn cancel_frame(&mut self, ticket: FrameTicket) {
        if self.pending == Some(ticket) {
            self.pending = None;
            self.cancelled += 1;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/scheduler.rs"]
mod tests;
