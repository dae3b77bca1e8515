/// Sink for state snapshots taken around user gestures.
///
/// `internal` entries are undoable like any other but are skipped over by undo/redo so the user
/// lands on the nearest visible state.
pub trait HistoryRecorder<T> {
    fn record(&mut self, snapshot: T, description: &str, internal: bool);
}

/// One recorded snapshot.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HistoryEntry<T> {
    pub snapshot: T,
    pub description: String,
    pub internal: bool,
}

/// Linear undo stack with a cursor at the current state.
#[derive(Clone, Debug)]
pub struct UndoHistory<T> {
    entries: Vec<HistoryEntry<T>>,
    cursor: Option<usize>,
    limit: usize,
}

impl<T> Default for UndoHistory<T> {
    fn default() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }
}

const DEFAULT_HISTORY_LIMIT: usize = 200;

impl<T> UndoHistory<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// History that keeps at most `limit` entries (minimum 1), dropping the oldest first.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            cursor: None,
            limit: limit.max(1),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[HistoryEntry<T>] {
        &self.entries
    }

    /// Entry the cursor points at.
    pub fn current(&self) -> Option<&HistoryEntry<T>> {
        self.cursor.and_then(|c| self.entries.get(c))
    }

    pub fn can_undo(&self) -> bool {
        self.cursor.is_some_and(|c| c > 0)
    }

    pub fn can_redo(&self) -> bool {
        match self.cursor {
            Some(c) => c + 1 < self.entries.len(),
            None => !self.entries.is_empty(),
        }
    }

    /// Step back, skipping consecutive internal entries.
    pub fn undo(&mut self) -> Option<&T> {
        let mut c = self.cursor?;
        if c == 0 {
            return None;
        }
        c -= 1;
        while c > 0 && self.entries[c].internal {
            c -= 1;
        }
        self.cursor = Some(c);
        Some(&self.entries[c].snapshot)
    }

    /// Step forward, skipping consecutive internal entries.
    pub fn redo(&mut self) -> Option<&T> {
        let mut c = match self.cursor {
            Some(c) => c + 1,
            None => 0,
        };
        if c >= self.entries.len() {
            return None;
        }
        while c + 1 < self.entries.len() && self.entries[c].internal {
            c += 1;
        }
        self.cursor = Some(c);
        Some(&self.entries[c].snapshot)
    }
}

impl<T> HistoryRecorder<T> for UndoHistory<T> {
    fn record(&mut self, snapshot: T, description: &str, internal: bool) {
        let keep = self.cursor.map_or(0, |c| c + 1);
        self.entries.truncate(keep);
        self.entries.push(HistoryEntry {
            snapshot,
            description: description.to_string(),
            internal,
        });
        if self.entries.len() > self.limit {
            let excess = self.entries.len() - self.limit;
            self.entries.drain(..excess);
        }
        self.cursor = Some(self.entries.len() - 1);
    }
}

/// Recorder that drops everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoHistory;

impl<T> HistoryRecorder<T> for NoHistory {
    fn record(&mut self, _snapshot: T, _description: &str, _internal: bool) {}
}

#[cfg(test)]
#[path = "../../tests/unit/history/undo.rs"]
mod tests;
