//! Icicle effect
//!
//! A 10-pixel gradient window slides from before the strip start to its end,
//! then starts over. The window brightens toward its head, in steps of
//! one tenth of the configured color.

use core::ops::Range;

use embassy_time::Duration;

use super::{Effect, FrameOutcome};
use crate::{StripDriver, color::Rgbw, surface::PixelSurface};

pub(crate) const DEFAULT_WAIT: Duration = Duration::from_millis(30);

const LENGTH: isize = 10;

#[derive(Debug, Clone)]
pub struct IcicleEffect {
    color: Rgbw,
    wait: Duration,
    /// Tail position, negative while entering the strip
    head: isize,
}

impl IcicleEffect {
    pub const fn new(color: Rgbw, wait: Duration) -> Self {
        Self {
            color,
            wait,
            head: -LENGTH,
        }
    }

    /// On-strip part of the window
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_wrap)]
    fn window(&self, count: usize) -> Range<usize> {
        let start = self.head.max(0);
        let end = (self.head + LENGTH).min(count as isize);
        if end <= start {
            return 0..0;
        }
        start as usize..end as usize
    }
}

impl Effect for IcicleEffect {
    #[allow(
        clippy::cast_possible_wrap,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    fn render<D: StripDriver>(&mut self, surface: &mut PixelSurface<D>) -> FrameOutcome {
        let count = surface.pixel_count();

        for i in self.window(count) {
            surface.set_pixel(i, Rgbw::BLACK);
        }

        self.head += 1;
        if self.head == count as isize {
            self.head = -LENGTH;
        }

        // Truncating division: channels below 10 never light up
        let step = self.color.divided(LENGTH as u8);
        let mut shade = step;
        for i in self.window(count) {
            surface.set_pixel_rgbw(i, shade);
            shade = shade.saturating_add(step);
        }

        FrameOutcome::Continue
    }

    fn wait(&self) -> Duration {
        self.wait
    }
}
