//! Keyframe animation: easing curves, value interpolation and the frame expansion pass.

pub mod ease;
pub mod expand;
pub mod fingerprint;
pub mod interp;
pub mod keyframe;
pub mod value;
