//! Line segments and the algorithms that rasterize them

mod incremental_error;
mod midpoint;
mod parametric;

pub use incremental_error::IncrementalErrorLine;
pub use midpoint::MidpointLine;
pub use parametric::ParametricLine;

use std::{error, fmt, str::FromStr};

use math::{Color, Point};

use crate::Surface;

/// The strategies available for turning a line segment into pixels.
///
/// All of them produce a visually identical line, they only differ in the
/// arithmetic used to get there (and, for ties, in which of two equally close
/// pixels is picked).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Bresenham's algorithm, see [IncrementalErrorLine]
    #[default]
    IncrementalError,

    /// See [MidpointLine]
    Midpoint,

    /// See [ParametricLine]
    Parametric,
}

impl Algorithm {
    pub const ALL: [Self; 3] = [Self::IncrementalError, Self::Midpoint, Self::Parametric];

    /// The pixels of the line between `from` and `to`, in the order they are visited
    #[must_use]
    pub fn pixels(self, from: Point, to: Point) -> Pixels {
        match self {
            Self::IncrementalError => Pixels::IncrementalError(IncrementalErrorLine::new(from, to)),
            Self::Midpoint => Pixels::Midpoint(MidpointLine::new(from, to)),
            Self::Parametric => Pixels::Parametric(ParametricLine::new(from, to)),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::IncrementalError => "incremental-error",
            Self::Midpoint => "midpoint",
            Self::Parametric => "parametric",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownAlgorithm(String);

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown line algorithm {:?}, expected one of \"incremental-error\", \"bresenham\", \"midpoint\" or \"parametric\"",
            self.0
        )
    }
}

impl error::Error for UnknownAlgorithm {}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "incremental-error" | "bresenham" => Ok(Self::IncrementalError),
            "midpoint" => Ok(Self::Midpoint),
            "parametric" => Ok(Self::Parametric),
            other => Err(UnknownAlgorithm(other.to_string())),
        }
    }
}

/// Iterator over the pixels of a line, produced by [Algorithm::pixels]
#[derive(Clone, Debug)]
pub enum Pixels {
    IncrementalError(IncrementalErrorLine),
    Midpoint(MidpointLine),
    Parametric(ParametricLine),
}

impl Iterator for Pixels {
    type Item = Point;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::IncrementalError(line) => line.next(),
            Self::Midpoint(line) => line.next(),
            Self::Parametric(line) => line.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::IncrementalError(line) => line.size_hint(),
            Self::Midpoint(line) => line.size_hint(),
            Self::Parametric(line) => line.size_hint(),
        }
    }
}

/// A colored line between two pixels.
///
/// `from` and `to` may be equal, in which case the line covers a single pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineSegment {
    from: Point,
    to: Point,
    color: Color,
    algorithm: Algorithm,
}

impl LineSegment {
    /// Create a line that is drawn using the [IncrementalError](Algorithm::IncrementalError) algorithm
    #[must_use]
    pub const fn new(from: Point, to: Point, color: Color) -> Self {
        Self {
            from,
            to,
            color,
            algorithm: Algorithm::IncrementalError,
        }
    }

    #[must_use]
    pub const fn with_algorithm(self, algorithm: Algorithm) -> Self {
        Self { algorithm, ..self }
    }

    #[must_use]
    pub const fn from(&self) -> Point {
        self.from
    }

    #[must_use]
    pub const fn to(&self) -> Point {
        self.to
    }

    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// The algorithm that originally drew this line
    #[must_use]
    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    #[must_use]
    pub fn pixels(&self) -> Pixels {
        self.algorithm.pixels(self.from, self.to)
    }

    /// Draw the line using the algorithm it was created with
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        draw_line(surface, self.algorithm, self.from, self.to, self.color);
    }
}

/// Rasterize the line between `from` and `to` and write every pixel to `surface`
pub fn draw_line<S: Surface + ?Sized>(
    surface: &mut S,
    algorithm: Algorithm,
    from: Point,
    to: Point,
    color: Color,
) {
    log::trace!("Drawing {algorithm} line from {from:?} to {to:?} in {color:?}");

    for pixel in algorithm.pixels(from, to) {
        surface.set_pixel(pixel.x, pixel.y, color);
    }
}
