//! One-shot thermometer gauge
//!
//! Renders a temperature as a heat-map bar. The rest of the strip is
//! dimly lit and an optional set point is marked. Nothing is scheduled: the
//! gauge is drawn and committed once per call.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::StripDriver;
use crate::color::{Rgbw, heat_map};
use crate::surface::PixelSurface;

/// Thermometer gauge configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thermometer {
    /// Temperature at the start of the strip
    pub min: f32,
    /// Temperature at the end of the strip
    pub max: f32,
    /// Level of the unfilled part of the strip
    pub white_dots: u8,
    /// Temperature to mark, shown only strictly between `min` and `max`
    pub set_point: Option<f32>,
    /// Color of the set point marker
    pub marker: Rgbw,
}

impl Thermometer {
    pub const fn new(min: f32, max: f32) -> Self {
        Self {
            min,
            max,
            white_dots: 0,
            set_point: None,
            marker: Rgbw::BLACK,
        }
    }

    #[must_use]
    pub const fn with_white_dots(mut self, white_dots: u8) -> Self {
        self.white_dots = white_dots;
        self
    }

    #[must_use]
    pub const fn with_set_point(mut self, set_point: f32, marker: Rgbw) -> Self {
        self.set_point = Some(set_point);
        self.marker = marker;
        self
    }

    /// Pixels per degree
    ///
    /// The span is `|max| + |min|`, which equals `max - min` only when the
    /// range straddles zero.
    #[allow(clippy::cast_precision_loss)]
    fn pixels_per_degree(&self, count: usize) -> f32 {
        count as f32 / (libm::fabsf(self.max) + libm::fabsf(self.min))
    }

    /// Get the number of pixels the bar covers for `temperature`
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_possible_wrap
    )]
    pub fn filled(&self, count: usize, temperature: f32) -> usize {
        let filled = (self.pixels_per_degree(count) * (temperature - self.min)) as i64;
        filled.clamp(0, count as i64) as usize
    }

    /// Position of the set point marker, if it is in range
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn marker_position(&self, count: usize) -> Option<usize> {
        let set_point = self.set_point?;
        let in_range = self.min < set_point && set_point < self.max;
        if count == 0 || !in_range {
            return None;
        }
        let position = (self.pixels_per_degree(count) * (set_point - self.min)) as usize;
        Some(position.min(count - 1))
    }

    /// Render the gauge and commit it
    ///
    /// Returns the driver's write result.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn render<D: StripDriver>(&self, surface: &mut PixelSurface<D>, temperature: f32) -> bool {
        let count = surface.pixel_count();
        let filled = self.filled(count, temperature);
        let brightness = f32::from(surface.brightness());
        let empty = if surface.buffer().has_white() {
            Rgbw::new(0, 0, 0, self.white_dots)
        } else {
            Rgbw::gray(self.white_dots)
        };

        #[cfg(feature = "esp32-log")]
        println!("[Thermometer.render] {} of {} pixels filled", filled, count);

        let driver = surface.driver_mut();
        for i in 0..filled {
            let [red, green, blue] = heat_map(i as f32 / count as f32);
            let color = Rgbw::new(
                (brightness * red) as u8,
                (brightness * green) as u8,
                (brightness * blue) as u8,
                0,
            );
            driver.set_pixel_rgbw(i, color);
        }
        for i in filled..count {
            driver.set_pixel_rgbw(i, empty);
        }

        if let Some(position) = self.marker_position(count) {
            driver.set_pixel(position, self.marker.packed());
        }

        surface.write()
    }
}
