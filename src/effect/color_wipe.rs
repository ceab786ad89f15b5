//! Color wipe effect
//!
//! Lights one more pixel per frame with the configured color and finishes
//! once the whole strip is covered.

use embassy_time::Duration;

use super::{Effect, FrameOutcome};
use crate::{StripDriver, color::Rgbw, surface::PixelSurface};

pub(crate) const DEFAULT_WAIT: Duration = Duration::from_millis(50);

#[derive(Debug, Clone)]
pub struct ColorWipeEffect {
    color: Rgbw,
    wait: Duration,
    led: usize,
}

impl ColorWipeEffect {
    pub const fn new(color: Rgbw, wait: Duration) -> Self {
        Self {
            color,
            wait,
            led: 0,
        }
    }
}

impl Effect for ColorWipeEffect {
    fn render<D: StripDriver>(&mut self, surface: &mut PixelSurface<D>) -> FrameOutcome {
        if self.led >= surface.pixel_count() {
            return FrameOutcome::Finished;
        }

        surface.set_pixel(self.led, self.color);
        self.led += 1;

        if self.led == surface.pixel_count() {
            FrameOutcome::Finished
        } else {
            FrameOutcome::Continue
        }
    }

    fn wait(&self) -> Duration {
        self.wait
    }
}
