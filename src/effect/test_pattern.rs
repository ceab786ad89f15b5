//! Wiring test pattern
//!
//! Sweeps the strip once per channel: red, green, blue, then white (gray on
//! RGB strips), and a final pass switching everything off. Intensity rises
//! with the position so reversed wiring is easy to spot. Brightness is not
//! applied.

use embassy_time::Duration;

use super::{Effect, FrameOutcome};
use crate::{StripDriver, color::Rgbw, surface::PixelSurface};

/// Time one full pass takes, whatever the strip length
pub(crate) const SWEEP_DURATION: Duration = Duration::from_millis(2_000);

const PASSES: u8 = 5;

#[derive(Debug, Clone)]
pub struct TestPatternEffect {
    led: usize,
    round: u8,
    wait: Duration,
}

impl Default for TestPatternEffect {
    fn default() -> Self {
        Self::new()
    }
}

impl TestPatternEffect {
    pub const fn new() -> Self {
        Self {
            led: 0,
            round: 0,
            wait: SWEEP_DURATION,
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn color(&self, count: usize, has_white: bool) -> Rgbw {
        // Always below 255 since led < count
        let intensity = (255 * (self.led + 1) / (count + 1)) as u8;
        match self.round {
            0 => Rgbw::new(intensity, 0, 0, 0),
            1 => Rgbw::new(0, intensity, 0, 0),
            2 => Rgbw::new(0, 0, intensity, 0),
            3 if has_white => Rgbw::new(0, 0, 0, intensity),
            3 => Rgbw::gray(intensity),
            _ => Rgbw::BLACK,
        }
    }
}

impl Effect for TestPatternEffect {
    fn prepare<D: StripDriver>(&mut self, surface: &mut PixelSurface<D>) {
        let count = surface.pixel_count().max(1) as u64;
        self.wait = Duration::from_millis(SWEEP_DURATION.as_millis() / count);
        surface.fill(Rgbw::BLACK);
    }

    fn render<D: StripDriver>(&mut self, surface: &mut PixelSurface<D>) -> FrameOutcome {
        let count = surface.pixel_count();
        if count == 0 {
            return FrameOutcome::Finished;
        }

        let color = self.color(count, surface.buffer().has_white());
        surface.driver_mut().set_pixel_rgbw(self.led, color);

        self.led += 1;
        if self.led == count {
            self.led = 0;
            self.round += 1;
        }

        if self.round == PASSES {
            FrameOutcome::Finished
        } else {
            FrameOutcome::Continue
        }
    }

    fn wait(&self) -> Duration {
        self.wait
    }
}
