//! Per-draw color parameters.
//!
//! Hosts supply integer tint channels and an integer alpha percentage; both
//! are normalized to `[0, 1]` before any program arithmetic uses them.

mod tint;

pub use tint::{AlphaPercent, Tint};
