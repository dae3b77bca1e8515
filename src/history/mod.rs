//! Snapshot undo history.

pub mod undo;
