//! Request bookkeeping for the interactive viewer.
//!
//! Every submitted search gets a ticket. Only the newest ticket may update
//! the screen; results carrying an older ticket are dropped on arrival.

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

#[derive(Debug, Default)]
pub struct SearchTracker {
    latest: u64,
    pending: bool,
}

impl SearchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new search, superseding any in flight.
    pub fn begin(&mut self) -> Ticket {
        self.latest += 1;
        self.pending = true;
        Ticket(self.latest)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }

    /// Mark `ticket` as settled. Returns false (and changes nothing) when the
    /// ticket has been superseded.
    pub fn finish(&mut self, ticket: Ticket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.pending = false;
        true
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tickets_increase() {
        let mut tracker = SearchTracker::new();
        let first = tracker.begin();
        let second = tracker.begin();
        assert!(second > first);
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
    }

    #[test]
    fn test_stale_finish_is_ignored() {
        let mut tracker = SearchTracker::new();
        let first = tracker.begin();
        let second = tracker.begin();

        assert!(!tracker.finish(first));
        assert!(tracker.is_pending());

        assert!(tracker.finish(second));
        assert!(!tracker.is_pending());
    }

    #[test]
    fn test_idle_tracker_is_not_pending() {
        assert!(!SearchTracker::new().is_pending());
    }
}
