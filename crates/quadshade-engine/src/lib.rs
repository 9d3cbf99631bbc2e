//! quadshade engine crate.
//!
//! Stateless vertex and fragment programs for textured, tinted and
//! alpha-blended 2D quads, in a CPU reference form (`transform`, `shading`)
//! and a GPU form (`render`).

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod shading;
pub mod transform;
