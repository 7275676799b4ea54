/// Identifies the panel generation a request was issued under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Per-panel counter. Advancing it invalidates every outstanding ticket.
#[derive(Debug, Default)]
pub struct Generation(u64);

impl Generation {
    pub fn issue(&self) -> Ticket {
        Ticket(self.0)
    }

    pub fn advance(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.0 == ticket.0
    }
}

/// A request that has been started but not yet settled.
#[derive(Debug)]
pub struct Pending<R> {
    pub ticket: Ticket,
    pub request: R,
}
