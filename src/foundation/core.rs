use crate::foundation::error::{SubframeError, SubframeResult};

pub use kurbo::Rect;

/// Size of the percentage coordinate space on each axis.
pub const CONTAINER_EXTENT: f64 = 100.0;

/// Minimum width/height (percent) applied when an area does not carry its own.
pub const DEFAULT_MIN_SIZE: f64 = 5.0;

/// Tolerance (percent) used when comparing shared edges.
pub const EDGE_EPSILON: f64 = 0.01;

/// One edge of an area.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Dir {
    /// Left edge (`x`).
    Left,
    /// Right edge (`x + width`).
    Right,
    /// Top edge (`y`).
    Top,
    /// Bottom edge (`y + height`).
    Bottom,
}

impl Dir {
    /// All four directions in a stable order.
    pub const ALL: [Dir; 4] = [Dir::Left, Dir::Right, Dir::Top, Dir::Bottom];

    /// The axis a border on this side moves along.
    pub fn axis(self) -> Axis {
        match self {
            Self::Left | Self::Right => Axis::Horizontal,
            Self::Top | Self::Bottom => Axis::Vertical,
        }
    }

    /// `true` for `left`/`top`: moving such a border in the positive direction shrinks the area.
    pub fn is_leading(self) -> bool {
        matches!(self, Self::Left | Self::Top)
    }
}

/// Movement axis of a border drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// `x`/`width` changes (left/right borders).
    Horizontal,
    /// `y`/`height` changes (top/bottom borders).
    Vertical,
}

/// Rectangular region of a tiling layout, in percentage coordinates.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Area {
    /// Unique identifier within one layout.
    pub id: String,
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
    /// Minimum width; [`DEFAULT_MIN_SIZE`] when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_width: Option<f64>,
    /// Minimum height; [`DEFAULT_MIN_SIZE`] when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_height: Option<f64>,
}

impl Area {
    /// Create an area without explicit minimum sizes.
    pub fn new(id: impl Into<String>, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            width,
            height,
            min_width: None,
            min_height: None,
        }
    }

    /// Create an area covering the whole container.
    pub fn full(id: impl Into<String>) -> Self {
        Self::new(id, 0.0, 0.0, CONTAINER_EXTENT, CONTAINER_EXTENT)
    }

    /// Builder-style minimum size override.
    pub fn with_min_size(mut self, min_width: f64, min_height: f64) -> Self {
        self.min_width = Some(min_width);
        self.min_height = Some(min_height);
        self
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn effective_min_width(&self) -> f64 {
        self.min_width.unwrap_or(DEFAULT_MIN_SIZE)
    }

    pub fn effective_min_height(&self) -> f64 {
        self.min_height.unwrap_or(DEFAULT_MIN_SIZE)
    }

    /// Current size along `axis`.
    pub fn size(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Minimum size along `axis`.
    pub fn min_size(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.effective_min_width(),
            Axis::Vertical => self.effective_min_height(),
        }
    }

    /// Coordinate of the edge on `dir`.
    pub fn edge(&self, dir: Dir) -> f64 {
        match dir {
            Dir::Left => self.x,
            Dir::Right => self.right(),
            Dir::Top => self.y,
            Dir::Bottom => self.bottom(),
        }
    }

    /// `(start, end)` extent perpendicular to the axis of `dir`.
    pub fn cross_extent(&self, dir: Dir) -> (f64, f64) {
        match dir.axis() {
            Axis::Horizontal => (self.y, self.bottom()),
            Axis::Vertical => (self.x, self.right()),
        }
    }

    /// Shift the border on `dir` by `delta` along its axis, keeping the opposite edge fixed.
    pub fn move_border(&mut self, dir: Dir, delta: f64) {
        match dir {
            Dir::Left => {
                self.x += delta;
                self.width -= delta;
            }
            Dir::Right => self.width += delta,
            Dir::Top => {
                self.y += delta;
                self.height -= delta;
            }
            Dir::Bottom => self.height += delta,
        }
    }

    /// Geometry as a `kurbo` rectangle.
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.right(), self.bottom())
    }

    /// Check that the geometry is finite and inside the container.
    pub fn validate(&self) -> SubframeResult<()> {
        let fields = [self.x, self.y, self.width, self.height];
        if fields.iter().any(|v| !v.is_finite()) {
            return Err(SubframeError::validation(format!(
                "area '{}' has non-finite geometry",
                self.id
            )));
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(SubframeError::validation(format!(
                "area '{}' must have a positive size",
                self.id
            )));
        }
        let tol = EDGE_EPSILON;
        if self.x < -tol
            || self.y < -tol
            || self.right() > CONTAINER_EXTENT + tol
            || self.bottom() > CONTAINER_EXTENT + tol
        {
            return Err(SubframeError::validation(format!(
                "area '{}' lies outside the container",
                self.id
            )));
        }
        Ok(())
    }
}

/// One edge of one area; the unit of hover and drag targeting.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BorderRef {
    pub area_id: String,
    pub dir: Dir,
}

impl BorderRef {
    pub fn new(area_id: impl Into<String>, dir: Dir) -> Self {
        Self {
            area_id: area_id.into(),
            dir,
        }
    }
}

/// A border discovered to move in lockstep with a dragged border.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct LinkedArea {
    pub id: String,
    pub dir: Dir,
}

impl LinkedArea {
    pub fn new(id: impl Into<String>, dir: Dir) -> Self {
        Self { id: id.into(), dir }
    }
}

impl From<&BorderRef> for LinkedArea {
    fn from(value: &BorderRef) -> Self {
        Self::new(value.area_id.clone(), value.dir)
    }
}

/// `min(max(val, min), max)` without panicking on inverted bounds.
pub fn clamp(val: f64, min: f64, max: f64) -> f64 {
    val.max(min).min(max)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
