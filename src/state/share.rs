//! "Copiado!" feedback on a card's share control.
//!
//! Every confirmed copy starts a new showing with its own sequence number;
//! only the timer of the latest showing may hide it again.

#[cfg(test)]
#[path = "share_test.rs"]
mod share_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShareFeedback {
    pub shown: bool,
    pub seq: u64,
}

impl ShareFeedback {
    /// Show the confirmation and return the showing's sequence number.
    pub fn show(&mut self) -> u64 {
        self.seq += 1;
        self.shown = true;
        self.seq
    }

    /// Hide the confirmation if `seq` is still the latest showing.
    pub fn expire(&mut self, seq: u64) {
        if seq == self.seq {
            self.shown = false;
        }
    }
}
