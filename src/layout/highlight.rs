use crate::foundation::core::{BorderRef, LinkedArea};
use crate::layout::cache::LinkedBorderCache;
use crate::layout::state::LayoutState;

/// Read model for hover feedback: the hovered border plus every border linked to it.
///
/// Recomputed only when the hover target or the layout version changes, so pointer moves over
/// the same border cost nothing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HoverHighlight {
    target: Option<BorderRef>,
    version: Option<u64>,
    borders: Vec<LinkedArea>,
}

impl HoverHighlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the highlight at `target`; returns `true` when the highlighted set was recomputed.
    pub fn update(
        &mut self,
        layout: &LayoutState,
        target: Option<&BorderRef>,
        cache: &mut LinkedBorderCache,
        eps: f64,
    ) -> bool {
        if self.target.as_ref() == target && self.version == Some(layout.version()) {
            return false;
        }
        self.target = target.cloned();
        self.version = Some(layout.version());
        self.borders = match target {
            Some(t) if layout.get(&t.area_id).is_some() => {
                let mut borders = vec![LinkedArea::from(t)];
                borders.extend_from_slice(cache.get(layout, &t.area_id, t.dir, eps));
                borders
            }
            _ => Vec::new(),
        };
        true
    }

    pub fn target(&self) -> Option<&BorderRef> {
        self.target.as_ref()
    }

    /// Highlighted borders, hovered border first.
    pub fn borders(&self) -> &[LinkedArea] {
        &self.borders
    }

    pub fn is_highlighted(&self, border: &LinkedArea) -> bool {
        self.borders.contains(border)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/highlight.rs"]
mod tests;
