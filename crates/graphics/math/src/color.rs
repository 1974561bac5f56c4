use std::fmt;

/// A color with four 8-bit channels.
///
/// Two colors are equal if all of their channels are equal.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    red: u8,
    green: u8,
    blue: u8,
    alpha: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    pub const YELLOW: Self = Self::rgb(255, 255, 0);

    #[inline]
    #[must_use]
    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Create a fully opaque color
    #[inline]
    #[must_use]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba(red, green, blue, u8::MAX)
    }

    #[inline]
    #[must_use]
    pub const fn red(&self) -> u8 {
        self.red
    }

    #[inline]
    #[must_use]
    pub const fn green(&self) -> u8 {
        self.green
    }

    #[inline]
    #[must_use]
    pub const fn blue(&self) -> u8 {
        self.blue
    }

    #[inline]
    #[must_use]
    pub const fn alpha(&self) -> u8 {
        self.alpha
    }

    /// Pack the color into a `u32`:
    ///
    /// AAAAAAAARRRRRRRRGGGGGGGGBBBBBBBB
    ///
    /// This is the layout of `ARGB8888` textures.
    #[inline]
    #[must_use]
    pub const fn to_argb(&self) -> u32 {
        (self.alpha as u32) << 24
            | (self.red as u32) << 16
            | (self.green as u32) << 8
            | (self.blue as u32)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<Color> for u32 {
    fn from(value: Color) -> Self {
        value.to_argb()
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {})",
            self.red, self.green, self.blue, self.alpha
        )
    }
}
