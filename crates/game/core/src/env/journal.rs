/// Sink for the in-game log collaborator.
///
/// The core only appends text; storage, eviction and persistence belong to
/// the implementor.
pub trait Journal {
    /// Appends an entry to the durable log.
    fn record(&mut self, entry: String);

    /// Appends a line to the player-facing message scrollback.
    fn announce(&mut self, message: String);

    /// Replaces the transient notice shown until the next turn.
    fn notify(&mut self, notice: String);
}

/// Journal that keeps everything in plain vectors.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryJournal {
    pub records: Vec<String>,
    pub messages: Vec<String>,
    pub notice: Option<String>,
}

impl Journal for MemoryJournal {
    fn record(&mut self, entry: String) {
        self.records.push(entry);
    }

    fn announce(&mut self, message: String) {
        self.messages.push(message);
    }

    fn notify(&mut self, notice: String) {
        self.notice = Some(notice);
    }
}
