//! Incremental line rasterization
//!
//! ## Design
//! Every algorithm turns a line segment between two integer endpoints into a
//! sequence of pixels. The pixels are produced lazily by an iterator
//! ([Algorithm::pixels]), [draw_line] writes them into any [Surface].
//!
//! Rasterization is a pure computation, the only state that survives a call is
//! whatever the caller explicitly records in a [LineStore].
//!
//! ## Related
//! * [Bresenham's line algorithm](https://en.wikipedia.org/wiki/Bresenham%27s_line_algorithm)
//! * [A Rasterizing Algorithm for Drawing Curves](http://members.chello.at/~easyfilter/bresenham.html)
//! * [Digital differential analyzer](https://en.wikipedia.org/wiki/Digital_differential_analyzer_(graphics_algorithm))

mod line;
mod marker;
mod store;
mod surface;

pub use line::{
    draw_line, Algorithm, IncrementalErrorLine, LineSegment, MidpointLine, ParametricLine, Pixels,
    UnknownAlgorithm,
};
pub use marker::{draw_marker, DEFAULT_MARKER_SIZE, MAX_MARKER_SIZE};
pub use store::LineStore;
pub use surface::Surface;
