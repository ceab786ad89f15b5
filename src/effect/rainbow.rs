//! Rainbow effects
//!
//! Provides two color wheel variants:
//! - `RainbowEffect`: every pixel one step apart on the wheel, whole strip
//!   rotating together
//! - `RainbowCycleEffect`: the full wheel stretched over the strip

use embassy_time::Duration;

use super::{Effect, FrameOutcome};
use crate::{StripDriver, color::hue_wheel, math8::proportion, surface::PixelSurface};

pub(crate) const DEFAULT_WAIT: Duration = Duration::from_millis(50);
pub(crate) const DEFAULT_CYCLE_WAIT: Duration = Duration::from_millis(20);

const WHEEL_STEPS: usize = 256;

#[allow(clippy::cast_possible_truncation)]
const fn wheel_position(offset: usize, round: u8) -> u8 {
    ((offset + round as usize) & 0xFF) as u8
}

#[derive(Debug, Clone)]
pub struct RainbowEffect {
    wait: Duration,
    round: u8,
}

impl Default for RainbowEffect {
    fn default() -> Self {
        Self::new(DEFAULT_WAIT)
    }
}

impl RainbowEffect {
    pub const fn new(wait: Duration) -> Self {
        Self { wait, round: 0 }
    }
}

impl Effect for RainbowEffect {
    fn render<D: StripDriver>(&mut self, surface: &mut PixelSurface<D>) -> FrameOutcome {
        for i in 0..surface.pixel_count() {
            surface.set_pixel(i, hue_wheel(wheel_position(i, self.round)));
        }
        self.round = self.round.wrapping_add(1);

        FrameOutcome::Continue
    }

    fn wait(&self) -> Duration {
        self.wait
    }
}

#[derive(Debug, Clone)]
pub struct RainbowCycleEffect {
    wait: Duration,
    round: u8,
}

impl Default for RainbowCycleEffect {
    fn default() -> Self {
        Self::new(DEFAULT_CYCLE_WAIT)
    }
}

impl RainbowCycleEffect {
    pub const fn new(wait: Duration) -> Self {
        Self { wait, round: 0 }
    }
}

impl Effect for RainbowCycleEffect {
    fn render<D: StripDriver>(&mut self, surface: &mut PixelSurface<D>) -> FrameOutcome {
        let count = surface.pixel_count();
        for i in 0..count {
            let offset = proportion(i, count, WHEEL_STEPS);
            surface.set_pixel(i, hue_wheel(wheel_position(offset, self.round)));
        }
        self.round = self.round.wrapping_add(1);

        FrameOutcome::Continue
    }

    fn wait(&self) -> Duration {
        self.wait
    }
}
