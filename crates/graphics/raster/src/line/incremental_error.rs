use math::Point;

/// Bresenham's line algorithm.
///
/// Both axes share a single error accumulator, so the line is walked from `from` to
/// `to` without special cases for vertical, horizontal or diagonal lines.
/// Every pixel on the path, including both endpoints, is visited exactly once.
///
/// <http://members.chello.at/~easyfilter/bresenham.html>
#[derive(Clone, Debug)]
pub struct IncrementalErrorLine {
    current: Point,
    to: Point,
    // Widened so that doubling the error can not overflow
    delta_x: i64,
    delta_y: i64,
    step_x: i32,
    step_y: i32,
    error: i64,
    done: bool,
}

impl IncrementalErrorLine {
    #[must_use]
    pub fn new(from: Point, to: Point) -> Self {
        let delta_x = (i64::from(to.x) - i64::from(from.x)).abs();
        let step_x = if from.x < to.x { 1 } else { -1 };

        let delta_y = (i64::from(to.y) - i64::from(from.y)).abs();
        let step_y = if from.y < to.y { 1 } else { -1 };

        Self {
            current: from,
            to,
            delta_x,
            delta_y,
            step_x,
            step_y,
            error: delta_x - delta_y,
            done: false,
        }
    }
}

impl Iterator for IncrementalErrorLine {
    type Item = Point;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let pixel = self.current;
        if pixel == self.to {
            self.done = true;
            return Some(pixel);
        }

        let e2 = 2 * self.error;
        if e2 > -self.delta_y {
            self.error -= self.delta_y;
            self.current.x += self.step_x;
        }
        if e2 < self.delta_x {
            self.error += self.delta_x;
            self.current.y += self.step_y;
        }

        Some(pixel)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }

        // Each step moves at least one pixel closer along the driving axis
        // and at most one pixel along either axis
        let remaining_x = (i64::from(self.to.x) - i64::from(self.current.x)).unsigned_abs();
        let remaining_y = (i64::from(self.to.y) - i64::from(self.current.y)).unsigned_abs();
        let longest = remaining_x.max(remaining_y) as usize;
        let manhattan = (remaining_x + remaining_y) as usize;
        (longest.saturating_add(1), manhattan.checked_add(1))
    }
}
