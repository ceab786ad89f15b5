//! Pixel surface
//!
//! Thin layer over a [`StripDriver`] that applies global brightness to
//! everything written through it. Pixel storage stays in the driver.

use crate::StripDriver;
use crate::buffer::{BufferDescriptor, StripLayout};
use crate::color::Rgbw;

/// Brightness value that bypasses attenuation
pub const FULL_BRIGHTNESS: u8 = 255;

/// Error returned when a framebuffer does not fit the strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramebufferOverflow {
    /// Length of the rejected payload
    pub len: usize,
    /// Number of bytes the strip can hold
    pub capacity: usize,
}

/// Brightness-aware access to a strip driver
pub struct PixelSurface<D: StripDriver> {
    driver: D,
    buffer: BufferDescriptor,
    brightness: u8,
}

impl<D: StripDriver> PixelSurface<D> {
    /// Create a new surface and initialize the driver for `buffer`
    pub fn new(mut driver: D, buffer: BufferDescriptor) -> Self {
        driver.init(&buffer);
        Self {
            driver,
            buffer,
            brightness: FULL_BRIGHTNESS,
        }
    }

    pub const fn buffer(&self) -> BufferDescriptor {
        self.buffer
    }

    pub const fn pixel_count(&self) -> usize {
        self.buffer.count
    }

    pub const fn layout(&self) -> StripLayout {
        self.buffer.layout
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Set global brightness
    ///
    /// Applies to subsequent writes only; pixels already staged in the
    /// driver keep their value.
    pub fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    /// Set a pixel, attenuated by the global brightness
    ///
    /// At full brightness the packed color goes to the driver untouched.
    pub fn set_pixel(&mut self, position: usize, color: Rgbw) {
        if self.brightness == FULL_BRIGHTNESS {
            self.driver.set_pixel(position, color.packed());
        } else {
            self.set_pixel_rgbw(position, color);
        }
    }

    /// Set a pixel through the driver's per-channel path
    pub fn set_pixel_rgbw(&mut self, position: usize, color: Rgbw) {
        let color = if self.brightness == FULL_BRIGHTNESS {
            color
        } else {
            color.scaled(self.brightness)
        };
        self.driver.set_pixel_rgbw(position, color);
    }

    /// Set every pixel to `color`
    pub fn fill(&mut self, color: Rgbw) {
        for position in 0..self.buffer.count {
            self.set_pixel(position, color);
        }
    }

    /// Load a flat framebuffer into the driver
    ///
    /// Records are 3 bytes on RGB strips (white forced to 0) and 4 bytes on
    /// RGBW strips, starting at position 0. The payload is checked before
    /// anything is written. Brightness is not applied.
    pub fn load_framebuffer(&mut self, bytes: &[u8]) -> Result<(), FramebufferOverflow> {
        let capacity = self.buffer.byte_len();
        if bytes.len() > capacity {
            return Err(FramebufferOverflow {
                len: bytes.len(),
                capacity,
            });
        }

        let stride = self.buffer.layout.bytes_per_pixel();
        for (position, record) in bytes.chunks_exact(stride).enumerate() {
            let color = match self.buffer.layout {
                StripLayout::Rgb => Rgbw::new(record[0], record[1], record[2], 0),
                StripLayout::Rgbw => Rgbw::new(record[0], record[1], record[2], record[3]),
            };
            self.driver.set_pixel_rgbw(position, color);
        }

        Ok(())
    }

    /// Commit the staged pixels
    ///
    /// Returns the driver's success flag.
    pub fn write(&mut self) -> bool {
        self.driver.write()
    }

    /// Check if the transport can take a new frame
    pub fn is_ready(&self) -> bool {
        self.driver.is_ready()
    }

    /// Get the driver, bypassing brightness
    pub const fn driver(&self) -> &D {
        &self.driver
    }

    /// Get the driver mutably, bypassing brightness
    pub const fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Release the driver
    pub fn into_driver(self) -> D {
        self.driver
    }
}
