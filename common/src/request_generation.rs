//! Generation counter used to drop responses of superseded requests.

/// Identifies the request a response answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Hands out increasing tickets; only the most recent one is current.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestGeneration {
    latest: u64,
}

impl RequestGeneration {
    pub const fn new() -> Self {
        Self { latest: 0 }
    }

    pub fn begin(&mut self) -> RequestTicket {
        self.latest += 1;
        RequestTicket(self.latest)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.latest
    }

    /// Makes every outstanding ticket stale without starting a new request.
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }
}
