//! Pulse effect
//!
//! The whole strip breathes in the configured color along a triangular wave.

use embassy_time::Duration;

use super::{Effect, FrameOutcome};
use crate::{StripDriver, color::Rgbw, surface::PixelSurface};

pub(crate) const DEFAULT_WAIT: Duration = Duration::from_millis(50);

/// Frames in one full breath
const CYCLE: u8 = 38;
/// Frame at which the wave bottoms out
const TROUGH: u8 = 19;
const LEVEL_STEP: u8 = 255 / 20;

/// Get the wave level for a frame of the cycle
///
/// Peaks at 240 on frame 0 and bottoms out at 12 on frame 19.
pub const fn pulse_level(round: u8) -> u8 {
    (TROUGH.abs_diff(round) + 1) * LEVEL_STEP
}

#[derive(Debug, Clone)]
pub struct PulseColorEffect {
    color: Rgbw,
    wait: Duration,
    round: u8,
}

impl PulseColorEffect {
    pub const fn new(color: Rgbw, wait: Duration) -> Self {
        Self {
            color,
            wait,
            round: 0,
        }
    }
}

impl Effect for PulseColorEffect {
    fn render<D: StripDriver>(&mut self, surface: &mut PixelSurface<D>) -> FrameOutcome {
        let color = self.color.scaled(pulse_level(self.round));
        self.round = (self.round + 1) % CYCLE;

        for i in 0..surface.pixel_count() {
            surface.set_pixel_rgbw(i, color);
        }

        FrameOutcome::Continue
    }

    fn wait(&self) -> Duration {
        self.wait
    }
}
