//! Compose-modal state machine.
//!
//! Closed → Open → Reading → Closed, with Reading → Failed when the selected
//! image cannot be read in time. The modal cannot be dismissed while a read is
//! in flight. Each read gets a sequence number so a result that arrives after
//! the read was abandoned is dropped.

#[cfg(test)]
#[path = "compose_test.rs"]
mod compose_test;

/// Where the compose flow currently is.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ComposePhase {
    #[default]
    Closed,
    Open,
    /// Waiting for the selected image to be read.
    Reading,
    /// The last read failed; the message is shown and submit is re-enabled.
    Failed(String),
}

/// Modal phase plus the caption draft.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComposeState {
    pub phase: ComposePhase,
    pub caption: String,
    pub read_seq: u64,
}

impl ComposeState {
    pub fn open(&mut self) {
        if self.phase == ComposePhase::Closed {
            self.phase = ComposePhase::Open;
        }
    }

    /// Close and reset the form. Ignored while a read is in flight.
    pub fn close(&mut self) {
        if self.is_reading() {
            return;
        }
        *self = Self {
            read_seq: self.read_seq,
            ..Self::default()
        };
    }

    /// Start reading the selected image.
    ///
    /// Returns the read's sequence number, or `None` when no file is selected
    /// or the modal is not accepting submissions.
    pub fn begin_read(&mut self, has_file: bool) -> Option<u64> {
        if !has_file {
            return None;
        }
        match self.phase {
            ComposePhase::Open | ComposePhase::Failed(_) => {
                self.read_seq += 1;
                self.phase = ComposePhase::Reading;
                Some(self.read_seq)
            }
            ComposePhase::Closed | ComposePhase::Reading => None,
        }
    }

    /// Trimmed caption for read `seq` while it is still the read in flight.
    ///
    /// Returns `None` for a stale or unexpected completion. The state is left
    /// untouched so a failed save can still report through [`Self::fail_read`].
    #[must_use]
    pub fn pending_caption(&self, seq: u64) -> Option<String> {
        (self.is_reading() && seq == self.read_seq).then(|| self.caption.trim().to_owned())
    }

    /// Complete read `seq`: close and reset, handing back the trimmed caption.
    ///
    /// Returns `None` for a stale or unexpected completion.
    pub fn finish_read(&mut self, seq: u64) -> Option<String> {
        let caption = self.pending_caption(seq)?;
        self.phase = ComposePhase::Closed;
        self.close();
        Some(caption)
    }

    /// Record that read `seq` failed, or that its post could not be saved. The
    /// modal stays open.
    pub fn fail_read(&mut self, seq: u64, message: &str) {
        if self.is_reading() && seq == self.read_seq {
            self.phase = ComposePhase::Failed(message.to_owned());
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.phase != ComposePhase::Closed
    }

    #[must_use]
    pub fn is_reading(&self) -> bool {
        self.phase == ComposePhase::Reading
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            ComposePhase::Failed(message) => Some(message),
            _ => None,
        }
    }
}
