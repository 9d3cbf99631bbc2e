//! Fragment shading stage.
//!
//! A draw binds exactly one [`ShadingMode`]. Every mode is a pure function
//! of the fragment's interpolated inputs, the per-draw color parameters and
//! a read-only [`SampledSurface`].

mod mode;
mod surface;

pub use mode::{BLEND_WEIGHT, FragCoordOrigin, FragmentInput, MASK_GRAY, ShadingMode};
pub use surface::{coverage_to_mask, SampledSurface, Surface};
