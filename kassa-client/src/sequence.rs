//! Per-resource request sequencing
//!
//! Every fetch of a resource takes a [`Ticket`] when it is issued. When the
//! response arrives it is applied only if its ticket is still the newest
//! one, so a slow response can never overwrite state that a later request
//! (or a local edit) already produced.

/// Issue order of a fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Default)]
pub struct RequestSequence {
    issued: u64,
    applied: u64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket for a new fetch
    pub fn issue(&mut self) -> Ticket {
        self.issued += 1;
        Ticket(self.issued)
    }

    /// Mark every outstanding ticket stale
    ///
    /// Called when the owner edits its state locally.
    pub fn invalidate(&mut self) {
        self.issued += 1;
        self.applied = self.issued;
    }

    /// Accept `ticket` for application if it is the newest issued and has
    /// not been applied yet.
    pub fn try_accept(&mut self, ticket: Ticket) -> bool {
        if ticket.0 == self.issued && ticket.0 > self.applied {
            self.applied = ticket.0;
            true
        } else {
            false
        }
    }

    /// Whether a fetch is outstanding
    pub fn in_flight(&self) -> bool {
        self.issued > self.applied
    }
}
