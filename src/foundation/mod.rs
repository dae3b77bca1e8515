//! Shared geometry, errors and small numeric helpers.

pub mod core;
pub mod error;
pub(crate) mod math;
