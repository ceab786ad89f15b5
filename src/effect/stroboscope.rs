use embassy_time::Duration;

use super::{Effect, FrameOutcome};
use crate::{StripDriver, color::Rgbw, surface::PixelSurface};

pub(crate) const DEFAULT_WAIT: Duration = Duration::from_millis(100);

/// Flashes the whole strip, one frame on and one frame off
#[derive(Debug, Clone)]
pub struct StroboscopeEffect {
    color: Rgbw,
    wait: Duration,
    round: u8,
}

impl StroboscopeEffect {
    pub const fn new(color: Rgbw, wait: Duration) -> Self {
        Self {
            color,
            wait,
            round: 0,
        }
    }
}

impl Effect for StroboscopeEffect {
    fn render<D: StripDriver>(&mut self, surface: &mut PixelSurface<D>) -> FrameOutcome {
        let color = if self.round & 1 == 0 {
            self.color
        } else {
            Rgbw::BLACK
        };
        surface.fill(color);
        self.round = self.round.wrapping_add(1);

        FrameOutcome::Continue
    }

    fn wait(&self) -> Duration {
        self.wait
    }
}
