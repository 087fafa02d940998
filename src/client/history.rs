use std::collections::VecDeque;

pub const HISTORY_CAPACITY: usize = 8;

/// Entries needed before the history panel is shown.
const VISIBLE_AFTER: usize = 2;

/// Most-recent-first record of generated posts for the current session.
#[derive(Debug, Clone, PartialEq)]
pub struct History {
    entries: VecDeque<String>,
    visible: bool,
}

impl History {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(HISTORY_CAPACITY + 1),
            visible: false,
        }
    }

    /// Prepend `text`, dropping the oldest entry past capacity.
    ///
    /// Once two entries have been seen the history stays visible.
    pub fn record(&mut self, text: impl Into<String>) {
        self.entries.push_front(text.into());
        self.entries.truncate(HISTORY_CAPACITY);
        if self.entries.len() >= VISIBLE_AFTER {
            self.visible = true;
        }
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }

    /// Everything except the newest entry, which is already on screen as the
    /// current result.
    pub fn previous(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().skip(1).map(String::as_str)
    }

    pub fn latest(&self) -> Option<&str> {
        self.entries.front().map(String::as_str)
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
