//! Hand-gesture control pipeline.
//!
//! Turns per-frame hand landmarks (produced by an external tracker) into a
//! debounced gesture plus a smoothed screen-space cursor. The pipeline is
//! pure state-machine code: it never blocks, never fails, and degrades to
//! `Gesture::None` / a frozen cursor whenever hands disappear.

pub mod classifier;
pub mod debounce;
pub mod engine;
pub mod landmarks;
pub mod smoothing;

pub use classifier::*;
pub use debounce::*;
pub use engine::*;
pub use landmarks::*;
pub use smoothing::*;
