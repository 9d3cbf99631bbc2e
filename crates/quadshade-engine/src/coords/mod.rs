//! Coordinate and color value types shared by both program stages.
//!
//! Canonical CPU space:
//! - Pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! The vertex stage converts to clip space; see `transform`.

mod clip;
mod color;
mod ivec2;
mod rect;
mod vec2;

pub use clip::ClipPosition;
pub use color::ColorRgba;
pub use ivec2::IVec2;
pub use rect::Rect;
pub use vec2::Vec2;
