use math::{Color, Point};

use crate::Surface;

/// Half-width of the square used to highlight line endpoints
pub const DEFAULT_MARKER_SIZE: i32 = 2;

/// Largest accepted marker half-width. At this size a marker already spans the whole
/// canvas height.
pub const MAX_MARKER_SIZE: i32 = 300;

/// Fill the square of pixels within `size` pixels of `center` on both axes.
///
/// The square is `2 * size + 1` pixels wide. A negative size draws nothing.
/// Pixels that would fall outside the `i32` coordinate space are skipped.
pub fn draw_marker<S: Surface + ?Sized>(surface: &mut S, center: Point, size: i32, color: Color) {
    if size < 0 {
        return;
    }

    for dx in -size..=size {
        let Some(x) = center.x.checked_add(dx) else {
            continue;
        };
        for dy in -size..=size {
            if let Some(y) = center.y.checked_add(dy) {
                surface.set_pixel(x, y, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{draw_marker, DEFAULT_MARKER_SIZE};
    use crate::Surface;
    use math::{Bitmap, Color, Point};

    /// Counts writes, wherever they land
    #[derive(Default)]
    struct WriteCounter(Vec<(i32, i32)>);

    impl Surface for WriteCounter {
        fn set_pixel(&mut self, x: i32, y: i32, _color: Color) {
            self.0.push((x, y));
        }

        fn clear(&mut self, _color: Color) {
            self.0.clear();
        }
    }

    fn count(bitmap: &Bitmap<Color>, color: Color) -> usize {
        bitmap.data().iter().filter(|&&pixel| pixel == color).count()
    }

    #[test]
    fn fills_a_square_around_the_center() {
        let mut bitmap: Bitmap<Color> = Bitmap::new(10, 10);
        draw_marker(&mut bitmap, Point::new(5, 5), DEFAULT_MARKER_SIZE, Color::YELLOW);

        assert_eq!(count(&bitmap, Color::YELLOW), 25);
        for x in 3..=7 {
            for y in 3..=7 {
                assert_eq!(bitmap.get_pixel(x, y), Color::YELLOW);
            }
        }
        assert_eq!(bitmap.get_pixel(2, 5), Color::BLACK);
        assert_eq!(bitmap.get_pixel(5, 8), Color::BLACK);
    }

    #[test]
    fn clipped_at_the_surface_edge() {
        let mut bitmap: Bitmap<Color> = Bitmap::new(10, 10);
        draw_marker(&mut bitmap, Point::new(0, 0), DEFAULT_MARKER_SIZE, Color::YELLOW);

        // Only the quadrant with non-negative coordinates is visible
        assert_eq!(count(&bitmap, Color::YELLOW), 9);
    }

    #[test]
    fn zero_size_is_a_single_pixel() {
        let mut bitmap: Bitmap<Color> = Bitmap::new(4, 4);
        draw_marker(&mut bitmap, Point::new(1, 2), 0, Color::RED);
        assert_eq!(count(&bitmap, Color::RED), 1);
        assert_eq!(bitmap.get_pixel(1, 2), Color::RED);

        draw_marker(&mut bitmap, Point::new(3, 3), -1, Color::GREEN);
        assert_eq!(count(&bitmap, Color::GREEN), 0);
    }

    #[test]
    fn markers_at_the_edge_of_the_coordinate_space() {
        let mut writes = WriteCounter::default();
        draw_marker(&mut writes, Point::new(i32::MAX, i32::MAX), 2, Color::YELLOW);
        assert_eq!(writes.0.len(), 9);
        assert!(writes
            .0
            .iter()
            .all(|&(x, y)| x >= i32::MAX - 2 && y >= i32::MAX - 2));

        let mut writes = WriteCounter::default();
        draw_marker(&mut writes, Point::new(i32::MIN, 0), 1, Color::YELLOW);
        assert_eq!(writes.0.len(), 6);

        let mut writes = WriteCounter::default();
        draw_marker(&mut writes, Point::new(0, 0), i32::MIN, Color::YELLOW);
        assert!(writes.0.is_empty());
    }
}
