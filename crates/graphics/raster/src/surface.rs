use math::{Bitmap, Color};

/// Something that pixels can be drawn onto.
///
/// Coordinates are signed and may lie outside of the surface. Implementations
/// must silently ignore such writes instead of panicking.
pub trait Surface {
    fn set_pixel(&mut self, x: i32, y: i32, color: Color);

    /// Fill the entire surface with a single color
    fn clear(&mut self, color: Color);
}

impl Surface for Bitmap<Color> {
    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if self.contains_point(x, y) {
            Bitmap::set_pixel(self, x as usize, y as usize, color);
        }
    }

    fn clear(&mut self, color: Color) {
        Bitmap::clear(self, color);
    }
}

#[cfg(test)]
mod tests {
    use super::Surface;
    use math::{Bitmap, Color};

    #[test]
    fn out_of_bounds_writes_are_ignored() {
        let mut bitmap: Bitmap<Color> = Bitmap::new(3, 3);
        Surface::clear(&mut bitmap, Color::BLACK);

        for (x, y) in [(-1, 0), (0, -1), (3, 0), (0, 3), (i32::MIN, i32::MAX)] {
            Surface::set_pixel(&mut bitmap, x, y, Color::WHITE);
        }

        assert!(bitmap.data().iter().all(|&pixel| pixel == Color::BLACK));
    }

    #[test]
    fn writes_land_in_row_major_order() {
        let mut bitmap: Bitmap<Color> = Bitmap::new(3, 2);
        Surface::set_pixel(&mut bitmap, 2, 1, Color::RED);

        assert_eq!(bitmap.get_pixel(2, 1), Color::RED);
        assert_eq!(bitmap.data()[5], Color::RED);
    }
}
