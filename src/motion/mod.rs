//! Motion module: frame-driven approach sequences and scalar tweens.
pub mod sequence;
pub mod tween;

pub use sequence::{ApproachPhase, ApproachSequence};
pub use tween::ScalarTween;
