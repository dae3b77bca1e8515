use std::sync::atomic::{AtomicU64, Ordering};

use crate::foundation::core::Area;
use crate::foundation::error::SubframeResult;
use crate::layout::tiling::validate_tiling;

static NEXT_VERSION: AtomicU64 = AtomicU64::new(1);

/// Process-wide unique version stamp.
fn next_version() -> u64 {
    NEXT_VERSION.fetch_add(1, Ordering::Relaxed)
}

/// Owned layout snapshot plus a structural version stamp.
///
/// Versions are unique across every state in the process: building, loading or committing a
/// layout draws a fresh one, so derived caches keyed on it never mistake one layout for another.
/// The stamp is not persisted.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayoutState {
    areas: Vec<Area>,
    #[serde(skip, default = "next_version")]
    version: u64,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self {
            areas: Vec::new(),
            version: next_version(),
        }
    }
}

impl LayoutState {
    /// Adopt `areas` after checking the tiling invariant.
    pub fn new(areas: Vec<Area>) -> SubframeResult<Self> {
        validate_tiling(&areas)?;
        Ok(Self {
            areas,
            version: next_version(),
        })
    }

    /// Single area covering the whole container.
    pub fn single(id: impl Into<String>) -> Self {
        Self {
            areas: vec![Area::full(id)],
            version: next_version(),
        }
    }

    pub fn areas(&self) -> &[Area] {
        &self.areas
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn get(&self, id: &str) -> Option<&Area> {
        self.areas.iter().find(|a| a.id == id)
    }

    /// Replace the snapshot and move to a fresh version.
    pub fn commit(&mut self, areas: Vec<Area>) {
        self.areas = areas;
        self.version = next_version();
    }

    pub fn into_areas(self) -> Vec<Area> {
        self.areas
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/state.rs"]
mod tests;
