use math::{Point, Vec2D};

/// Parametric line rasterization, also known as the DDA algorithm.
///
/// The line is sampled at `steps + 1` equally spaced positions, where `steps` is the
/// larger of the two coordinate deltas, and every sample is rounded to the nearest
/// pixel. A line whose endpoints coincide produces a single pixel.
///
/// Sampling happens in `f64`, which represents every `i32` coordinate exactly.
#[derive(Clone, Debug)]
pub struct ParametricLine {
    from: Vec2D<f64>,
    increment: Vec2D<f64>,
    step: u64,
    steps: u64,
}

impl ParametricLine {
    #[must_use]
    pub fn new(from: Point, to: Point) -> Self {
        let delta = Vec2D::new(
            i64::from(to.x) - i64::from(from.x),
            i64::from(to.y) - i64::from(from.y),
        );
        let steps = delta.x.unsigned_abs().max(delta.y.unsigned_abs());

        // Dividing by zero steps would produce NaN coordinates
        let increment = if steps == 0 {
            Vec2D::default()
        } else {
            Vec2D::new(
                delta.x as f64 / steps as f64,
                delta.y as f64 / steps as f64,
            )
        };

        Self {
            from: from.to_float(),
            increment,
            step: 0,
            steps,
        }
    }

    fn remaining(&self) -> usize {
        (self.steps + 1).saturating_sub(self.step) as usize
    }
}

impl Iterator for ParametricLine {
    type Item = Point;

    fn next(&mut self) -> Option<Self::Item> {
        if self.step > self.steps {
            return None;
        }

        let position = self.from + self.increment * self.step as f64;
        self.step += 1;

        Some(position.round_to_grid())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ParametricLine {}
