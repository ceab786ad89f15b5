/// Color layout of a strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripLayout {
    /// Three channels per pixel
    Rgb,
    /// Three color channels plus a dedicated white channel
    Rgbw,
}

impl StripLayout {
    /// Size of one pixel record in a flat framebuffer
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            Self::Rgb => 3,
            Self::Rgbw => 4,
        }
    }
}

/// Describes the pixel buffer a driver works with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferDescriptor {
    pub count: usize,
    pub layout: StripLayout,
}

impl BufferDescriptor {
    pub const fn new(count: usize, layout: StripLayout) -> Self {
        Self { count, layout }
    }

    pub const fn rgb(count: usize) -> Self {
        Self::new(count, StripLayout::Rgb)
    }

    pub const fn rgbw(count: usize) -> Self {
        Self::new(count, StripLayout::Rgbw)
    }

    /// Get the number of bytes a full framebuffer occupies
    pub const fn byte_len(self) -> usize {
        self.count * self.layout.bytes_per_pixel()
    }

    pub const fn has_white(self) -> bool {
        matches!(self.layout, StripLayout::Rgbw)
    }
}
