//! Tiled area layout: adjacency, linked borders and drag resizing.
//!
//! Areas are percentage rectangles that exactly cover a 100x100 container. A border drag moves
//! every border that shares the dragged edge so the tiling never opens gaps or overlaps.

pub mod adjacency;
pub mod cache;
pub mod drag;
pub mod highlight;
pub mod ops;
pub mod state;
pub mod tiling;
