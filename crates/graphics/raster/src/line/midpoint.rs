use math::Point;

/// The midpoint line algorithm.
///
/// Steep lines (`|dy| > |dx|`) are transposed so that the loop always advances the
/// axis with the larger delta (the driving axis) by one pixel per step. The line is
/// always walked in increasing order along that axis, so the first pixel is the
/// endpoint with the smaller driving coordinate, regardless of argument order.
///
/// A decision variable tracks on which side of the midpoint between the two
/// candidate pixels the ideal line passes. The same integer-only update is used for
/// steep and shallow lines, so no division is ever performed.
#[derive(Clone, Debug)]
pub struct MidpointLine {
    /// Whether `current` is stored with its coordinates swapped
    steep: bool,

    /// Position in (driving axis, minor axis) space
    current: Point,
    delta_driving: i64,
    delta_minor: i64,
    minor_step: i32,
    decision: i64,
    remaining: usize,
}

impl MidpointLine {
    #[must_use]
    pub fn new(from: Point, to: Point) -> Self {
        let steep = (i64::from(to.y) - i64::from(from.y)).abs()
            > (i64::from(to.x) - i64::from(from.x)).abs();

        let (mut start, mut end) = if steep {
            (from.transposed(), to.transposed())
        } else {
            (from, to)
        };

        if end.x < start.x {
            std::mem::swap(&mut start, &mut end);
        }

        let delta_driving = i64::from(end.x) - i64::from(start.x);
        let delta_minor = (i64::from(end.y) - i64::from(start.y)).abs();
        let minor_step = if start.y <= end.y { 1 } else { -1 };

        Self {
            steep,
            current: start,
            delta_driving,
            delta_minor,
            minor_step,
            decision: 2 * delta_minor - delta_driving,
            remaining: delta_driving as usize + 1,
        }
    }
}

impl Iterator for MidpointLine {
    type Item = Point;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let pixel = if self.steep {
            self.current.transposed()
        } else {
            self.current
        };

        // The last pixel may sit on the edge of the coordinate space
        if self.remaining == 0 {
            return Some(pixel);
        }

        if self.decision > 0 {
            self.current.y += self.minor_step;
            self.decision -= 2 * self.delta_driving;
        }
        self.decision += 2 * self.delta_minor;
        self.current.x += 1;

        Some(pixel)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for MidpointLine {}
