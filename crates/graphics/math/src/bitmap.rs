/// A rectangular, row-major grid of pixels
#[derive(Clone, Debug)]
pub struct Bitmap<T: Copy> {
    width: usize,
    height: usize,
    data: Vec<T>,
}

impl<T: Default + Copy> Bitmap<T> {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![T::default(); width * height],
        }
    }
}

impl<T: Copy> Bitmap<T> {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether or not the given coordinates lie inside the bitmap.
    ///
    /// Accepts signed coordinates so callers can test points left of or above the origin.
    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        usize::try_from(x).is_ok_and(|x| x < self.width)
            && usize::try_from(y).is_ok_and(|y| y < self.height)
    }

    /// Set the pixel at the given coordinates to the specified value.
    ///
    /// # Panics
    /// This function panics if the coordinates are outside of the bitmap
    pub fn set_pixel(&mut self, x: usize, y: usize, pixel: T) {
        let index = self.index_of_pixel(x, y);
        self.data[index] = pixel;
    }

    /// Get the pixel value at the given coordinates
    ///
    /// # Panics
    /// This function panics if the coordinates are outside of the bitmap
    pub fn get_pixel(&self, x: usize, y: usize) -> T {
        self.data[self.index_of_pixel(x, y)]
    }

    /// Calculate the index of the pixel data for a given set of coordinates
    fn index_of_pixel(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width);
        debug_assert!(y < self.height);

        y * self.width + x
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn clear(&mut self, clear_color: T) {
        self.data.fill(clear_color);
    }
}

#[cfg(test)]
mod tests {
    use super::Bitmap;

    #[test]
    fn contains_point() {
        let bitmap: Bitmap<u8> = Bitmap::new(4, 3);

        assert!(bitmap.contains_point(0, 0));
        assert!(bitmap.contains_point(3, 2));
        assert!(!bitmap.contains_point(4, 2));
        assert!(!bitmap.contains_point(3, 3));
        assert!(!bitmap.contains_point(-1, 0));
        assert!(!bitmap.contains_point(0, -1));
    }

    #[test]
    fn set_and_clear() {
        let mut bitmap: Bitmap<u8> = Bitmap::new(4, 3);
        bitmap.set_pixel(1, 2, 7);
        assert_eq!(bitmap.get_pixel(1, 2), 7);
        assert_eq!(bitmap.data()[2 * 4 + 1], 7);

        bitmap.clear(3);
        assert!(bitmap.data().iter().all(|&pixel| pixel == 3));
    }
}
