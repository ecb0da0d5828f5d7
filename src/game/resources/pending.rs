//! In-flight request bookkeeping
//!
//! Every request to the remote service gets a [`RequestTicket`]. A reply is
//! applied only if its ticket is still the one on record; replies for
//! anything superseded (by a reset, or by a newer session-initiation request)
//! are stale and get dropped.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestTicket(u64);

impl fmt::Display for RequestTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// At most one opponent-move request and one session-initiation request are
/// on record at any time.
#[derive(Debug, Default)]
pub struct RequestState {
    issued: u64,
    opponent: Option<RequestTicket>,
    new_game: Option<RequestTicket>,
}

impl RequestState {
    fn issue(&mut self) -> RequestTicket {
        self.issued += 1;
        RequestTicket(self.issued)
    }

    /// Start an opponent-move request. Returns `None` while one is pending.
    pub fn begin_opponent(&mut self) -> Option<RequestTicket> {
        if self.opponent.is_some() {
            return None;
        }
        let ticket = self.issue();
        self.opponent = Some(ticket);
        Some(ticket)
    }

    /// Close the opponent request carrying `ticket`.
    ///
    /// Returns `false` (and changes nothing) if `ticket` is stale.
    pub fn finish_opponent(&mut self, ticket: RequestTicket) -> bool {
        if self.opponent == Some(ticket) {
            self.opponent = None;
            true
        } else {
            false
        }
    }

    /// Forget the pending opponent request so its reply will be stale
    pub fn abandon_opponent(&mut self) -> Option<RequestTicket> {
        self.opponent.take()
    }

    /// Start a session-initiation request, superseding any earlier one
    pub fn begin_new_game(&mut self) -> RequestTicket {
        let ticket = self.issue();
        self.new_game = Some(ticket);
        ticket
    }

    pub fn finish_new_game(&mut self, ticket: RequestTicket) -> bool {
        if self.new_game == Some(ticket) {
            self.new_game = None;
            true
        } else {
            false
        }
    }

    pub fn is_pending(&self) -> bool {
        self.opponent.is_some()
    }

    pub fn opponent_ticket(&self) -> Option<RequestTicket> {
        self.opponent
    }

    pub fn any_in_flight(&self) -> bool {
        self.opponent.is_some() || self.new_game.is_some()
    }
}
