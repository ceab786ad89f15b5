//! Theater marquee chase effects
//!
//! Every third pixel is lit; each frame switches the lit set off and moves
//! it one pixel forward.

use embassy_time::Duration;

use super::{Effect, FrameOutcome};
use crate::{
    StripDriver,
    color::{Rgbw, hue_wheel},
    surface::PixelSurface,
};

pub(crate) const DEFAULT_WAIT: Duration = Duration::from_millis(100);

const SPACING: usize = 3;

/// Starting at the last phase makes the first frame light phase 0
const FIRST_PHASE: usize = SPACING - 1;

/// Move the lit set one step forward, returning the new phase
///
/// Pixels going dark are written raw; `paint` colors the new set.
fn chase_step<D, F>(surface: &mut PixelSurface<D>, phase: usize, mut paint: F) -> usize
where
    D: StripDriver,
    F: FnMut(usize) -> Rgbw,
{
    let count = surface.pixel_count();
    for i in (phase..count).step_by(SPACING) {
        surface.driver_mut().set_pixel(i, 0);
    }

    let phase = (phase + 1) % SPACING;
    for i in (phase..count).step_by(SPACING) {
        surface.set_pixel(i, paint(i));
    }

    phase
}

#[derive(Debug, Clone)]
pub struct TheaterChaseEffect {
    color: Rgbw,
    wait: Duration,
    phase: usize,
}

impl TheaterChaseEffect {
    pub const fn new(color: Rgbw, wait: Duration) -> Self {
        Self {
            color,
            wait,
            phase: FIRST_PHASE,
        }
    }
}

impl Effect for TheaterChaseEffect {
    fn render<D: StripDriver>(&mut self, surface: &mut PixelSurface<D>) -> FrameOutcome {
        let color = self.color;
        self.phase = chase_step(surface, self.phase, |_| color);

        FrameOutcome::Continue
    }

    fn wait(&self) -> Duration {
        self.wait
    }
}

#[derive(Debug, Clone)]
pub struct TheaterChaseRainbowEffect {
    wait: Duration,
    phase: usize,
    round: usize,
}

impl TheaterChaseRainbowEffect {
    pub const fn new(wait: Duration) -> Self {
        Self {
            wait,
            phase: FIRST_PHASE,
            round: 0,
        }
    }
}

impl Effect for TheaterChaseRainbowEffect {
    #[allow(clippy::cast_possible_truncation)]
    fn render<D: StripDriver>(&mut self, surface: &mut PixelSurface<D>) -> FrameOutcome {
        let round = self.round;
        // Modulo 255, not 256: the wheel drifts by one step per lap
        self.phase = chase_step(surface, self.phase, |i| {
            hue_wheel(((i + round) % 255) as u8)
        });
        self.round = self.round.wrapping_add(1);

        FrameOutcome::Continue
    }

    fn wait(&self) -> Duration {
        self.wait
    }
}
