mod heat_map;
mod wheel;

pub use heat_map::heat_map;
use smart_leds::RGB8;
pub use wheel::hue_wheel;

use crate::math8::attenuate8;

pub type Rgb = RGB8;

/// Four-channel strip color
///
/// The packed scalar form is `r << 24 | g << 16 | b << 8 | w`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rgbw {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub w: u8,
}

impl Rgbw {
    pub const BLACK: Self = Self::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, w: u8) -> Self {
        Self { r, g, b, w }
    }

    /// Equal red, green and blue, no white
    pub const fn gray(level: u8) -> Self {
        Self::new(level, level, level, 0)
    }

    pub const fn from_rgb(rgb: Rgb) -> Self {
        Self::new(rgb.r, rgb.g, rgb.b, 0)
    }

    /// Create a color from a packed `0xRRGGBBWW` value
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_packed(color: u32) -> Self {
        Self {
            r: (color >> 24) as u8,
            g: (color >> 16) as u8,
            b: (color >> 8) as u8,
            w: color as u8,
        }
    }

    /// Pack the color into `0xRRGGBBWW`
    #[allow(clippy::cast_lossless)]
    pub const fn packed(self) -> u32 {
        (self.r as u32) << 24 | (self.g as u32) << 16 | (self.b as u32) << 8 | self.w as u32
    }

    /// Drop the white channel
    pub const fn rgb(self) -> Rgb {
        Rgb {
            r: self.r,
            g: self.g,
            b: self.b,
        }
    }

    /// Attenuate every channel by `level` (see [`attenuate8`])
    #[must_use]
    pub const fn scaled(self, level: u8) -> Self {
        Self {
            r: attenuate8(self.r, level),
            g: attenuate8(self.g, level),
            b: attenuate8(self.b, level),
            w: attenuate8(self.w, level),
        }
    }

    /// Integer-divide every channel, truncating
    #[must_use]
    pub const fn divided(self, divisor: u8) -> Self {
        Self {
            r: self.r / divisor,
            g: self.g / divisor,
            b: self.b / divisor,
            w: self.w / divisor,
        }
    }

    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self {
            r: self.r.saturating_add(other.r),
            g: self.g.saturating_add(other.g),
            b: self.b.saturating_add(other.b),
            w: self.w.saturating_add(other.w),
        }
    }

    pub const fn is_black(self) -> bool {
        self.packed() == 0
    }
}

impl From<u32> for Rgbw {
    fn from(color: u32) -> Self {
        Self::from_packed(color)
    }
}

impl From<Rgbw> for u32 {
    fn from(color: Rgbw) -> Self {
        color.packed()
    }
}

impl From<Rgb> for Rgbw {
    fn from(rgb: Rgb) -> Self {
        Self::from_rgb(rgb)
    }
}
