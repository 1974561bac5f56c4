//! Common geometry and color primitives used by the rasterizer and its frontends

mod bitmap;
mod color;
mod vec2d;

pub use bitmap::Bitmap;
pub use color::Color;
pub use vec2d::{Point, Vec2D};
