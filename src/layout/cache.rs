use std::collections::HashMap;

use crate::foundation::core::{Dir, LinkedArea};
use crate::layout::adjacency::linked_borders;
use crate::layout::state::LayoutState;

/// Memo of linked-border sets keyed by `(area_id, dir, eps)`.
///
/// Entries are only valid for one [`LayoutState::version`]; consulting the cache with a different
/// version clears it first.
#[derive(Debug, Default)]
pub struct LinkedBorderCache {
    version: Option<u64>,
    entries: HashMap<(String, Dir, u64), Vec<LinkedArea>>,
    misses: u64,
}

impl LinkedBorderCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Linked borders of `area_id`'s `dir` border in `layout`.
    pub fn get(&mut self, layout: &LayoutState, area_id: &str, dir: Dir, eps: f64) -> &[LinkedArea] {
        if self.version != Some(layout.version()) {
            self.entries.clear();
            self.version = Some(layout.version());
        }
        let key = (area_id.to_string(), dir, eps.to_bits());
        if !self.entries.contains_key(&key) {
            self.misses += 1;
            tracing::debug!(area_id, ?dir, version = layout.version(), "linked border cache miss");
            let linked = linked_borders(layout.areas(), area_id, dir, eps);
            self.entries.insert(key.clone(), linked);
        }
        self.entries.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Drop every entry.
    pub fn invalidate(&mut self) {
        self.entries.clear();
        self.version = None;
    }

    /// Number of recomputations so far.
    pub fn misses(&self) -> u64 {
        self.misses
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/cache.rs"]
mod tests;
