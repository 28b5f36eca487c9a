//! In-game log store.
//!
//! Three channels with different lifetimes: the durable log (dumped to disk
//! at shutdown), the player-facing message scrollback, and a single notice
//! that lasts until the next input.
use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use game_core::Journal;

/// Longest entry kept, in characters. Longer text is cut.
pub const MESSAGE_LENGTH: usize = 150;

/// Bounded FIFO of text lines; the oldest line is evicted when full.
#[derive(Clone, Debug)]
pub struct LineBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl LineBuffer {
    pub fn new(capacity: usize) -> Self {
        let bounded_capacity = capacity.max(1);
        Self {
            lines: VecDeque::with_capacity(bounded_capacity),
            capacity: bounded_capacity,
        }
    }

    pub fn push(&mut self, line: String) {
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(clip(line));
    }

    /// Newest first.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &str> {
        self.lines.iter().rev().take(limit).map(String::as_str)
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// [`Journal`] implementation backing a session.
#[derive(Clone, Debug)]
pub struct GameLog {
    entries: LineBuffer,
    messages: LineBuffer,
    notice: Option<String>,
}

impl GameLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: LineBuffer::new(capacity),
            messages: LineBuffer::new(capacity),
            notice: None,
        }
    }

    pub fn entries(&self) -> &LineBuffer {
        &self.entries
    }

    pub fn messages(&self) -> &LineBuffer {
        &self.messages
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    /// Writes the durable log, oldest entry first, one entry per line.
    pub fn dump(&self, path: &Path) -> io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        for entry in self.entries.iter() {
            writeln!(writer, "{entry}")?;
        }
        writer.flush()
    }
}

impl Journal for GameLog {
    fn record(&mut self, entry: String) {
        self.entries.push(entry);
    }

    fn announce(&mut self, message: String) {
        self.messages.push(message);
    }

    fn notify(&mut self, notice: String) {
        self.notice = Some(clip(notice));
    }
}

fn clip(mut text: String) -> String {
    if let Some((cut, _)) = text.char_indices().nth(MESSAGE_LENGTH) {
        text.truncate(cut);
    }
    text
}
