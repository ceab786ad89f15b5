//! Effect system with compile-time known effect variants
//!
//! All effects are stored in an enum to avoid heap allocations.
//! Each effect implements the `Effect` trait and renders one frame per step.

mod color_wipe;
mod icicle;
mod pulse;
mod rainbow;
mod stroboscope;
mod test_pattern;
mod theater_chase;

pub use color_wipe::ColorWipeEffect;
use embassy_time::Duration;
pub use icicle::IcicleEffect;
pub use pulse::{PulseColorEffect, pulse_level};
pub use rainbow::{RainbowCycleEffect, RainbowEffect};
pub use stroboscope::StroboscopeEffect;
pub use test_pattern::TestPatternEffect;
pub use theater_chase::{TheaterChaseEffect, TheaterChaseRainbowEffect};

use crate::{StripDriver, color::Rgbw, surface::PixelSurface};

const EFFECT_NAME_TEST: &str = "test";
const EFFECT_NAME_RAINBOW: &str = "rainbow";
const EFFECT_NAME_RAINBOW_CYCLE: &str = "rainbow_cycle";
const EFFECT_NAME_COLOR_WIPE: &str = "color_wipe";
const EFFECT_NAME_THEATER_CHASE: &str = "theater_chase";
const EFFECT_NAME_THEATER_CHASE_RAINBOW: &str = "theater_chase_rainbow";
const EFFECT_NAME_STROBOSCOPE: &str = "stroboscope";
const EFFECT_NAME_ICICLE: &str = "icicle";
const EFFECT_NAME_PULSE_COLOR: &str = "pulse_color";

const EFFECT_ID_TEST: u8 = 0;
const EFFECT_ID_RAINBOW: u8 = 1;
const EFFECT_ID_RAINBOW_CYCLE: u8 = 2;
const EFFECT_ID_COLOR_WIPE: u8 = 3;
const EFFECT_ID_THEATER_CHASE: u8 = 4;
const EFFECT_ID_THEATER_CHASE_RAINBOW: u8 = 5;
const EFFECT_ID_STROBOSCOPE: u8 = 6;
const EFFECT_ID_ICICLE: u8 = 7;
const EFFECT_ID_PULSE_COLOR: u8 = 8;

/// What a rendered frame means for the effect's lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Render another frame after the effect's wait
    Continue,
    /// Terminal condition reached, this was the last frame
    Finished,
}

pub trait Effect {
    /// Render a single frame and advance the phase
    ///
    /// The caller checks driver readiness before and commits after.
    fn render<D: StripDriver>(&mut self, surface: &mut PixelSurface<D>) -> FrameOutcome;

    /// Delay between frames
    fn wait(&self) -> Duration;

    /// Prepare the strip before the first frame
    fn prepare<D: StripDriver>(&mut self, _surface: &mut PixelSurface<D>) {}
}

/// Effect slot - enum containing all task-based effects
#[derive(Debug, Clone)]
pub enum EffectSlot {
    /// Per-channel sweep used to check wiring
    TestPattern(TestPatternEffect),
    /// Whole strip walking the color wheel together
    Rainbow(RainbowEffect),
    /// Full color wheel spread over the strip, rotating
    RainbowCycle(RainbowCycleEffect),
    /// Fill the strip one pixel at a time
    ColorWipe(ColorWipeEffect),
    /// Every third pixel lit, marching along
    TheaterChase(TheaterChaseEffect),
    /// Theater chase colored by the color wheel
    TheaterChaseRainbow(TheaterChaseRainbowEffect),
    /// Whole strip flashing on and off
    Stroboscope(StroboscopeEffect),
    /// Gradient window sliding along the strip
    Icicle(IcicleEffect),
    /// Whole strip breathing in a single color
    PulseColor(PulseColorEffect),
}

/// Known effect ids that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum EffectId {
    TestPattern = EFFECT_ID_TEST,
    Rainbow = EFFECT_ID_RAINBOW,
    RainbowCycle = EFFECT_ID_RAINBOW_CYCLE,
    ColorWipe = EFFECT_ID_COLOR_WIPE,
    TheaterChase = EFFECT_ID_THEATER_CHASE,
    TheaterChaseRainbow = EFFECT_ID_THEATER_CHASE_RAINBOW,
    Stroboscope = EFFECT_ID_STROBOSCOPE,
    Icicle = EFFECT_ID_ICICLE,
    PulseColor = EFFECT_ID_PULSE_COLOR,
}

impl EffectId {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            EFFECT_ID_TEST => Self::TestPattern,
            EFFECT_ID_RAINBOW => Self::Rainbow,
            EFFECT_ID_RAINBOW_CYCLE => Self::RainbowCycle,
            EFFECT_ID_COLOR_WIPE => Self::ColorWipe,
            EFFECT_ID_THEATER_CHASE => Self::TheaterChase,
            EFFECT_ID_THEATER_CHASE_RAINBOW => Self::TheaterChaseRainbow,
            EFFECT_ID_STROBOSCOPE => Self::Stroboscope,
            EFFECT_ID_ICICLE => Self::Icicle,
            EFFECT_ID_PULSE_COLOR => Self::PulseColor,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TestPattern => EFFECT_NAME_TEST,
            Self::Rainbow => EFFECT_NAME_RAINBOW,
            Self::RainbowCycle => EFFECT_NAME_RAINBOW_CYCLE,
            Self::ColorWipe => EFFECT_NAME_COLOR_WIPE,
            Self::TheaterChase => EFFECT_NAME_THEATER_CHASE,
            Self::TheaterChaseRainbow => EFFECT_NAME_THEATER_CHASE_RAINBOW,
            Self::Stroboscope => EFFECT_NAME_STROBOSCOPE,
            Self::Icicle => EFFECT_NAME_ICICLE,
            Self::PulseColor => EFFECT_NAME_PULSE_COLOR,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            EFFECT_NAME_TEST => Some(Self::TestPattern),
            EFFECT_NAME_RAINBOW => Some(Self::Rainbow),
            EFFECT_NAME_RAINBOW_CYCLE => Some(Self::RainbowCycle),
            EFFECT_NAME_COLOR_WIPE => Some(Self::ColorWipe),
            EFFECT_NAME_THEATER_CHASE => Some(Self::TheaterChase),
            EFFECT_NAME_THEATER_CHASE_RAINBOW => Some(Self::TheaterChaseRainbow),
            EFFECT_NAME_STROBOSCOPE => Some(Self::Stroboscope),
            EFFECT_NAME_ICICLE => Some(Self::Icicle),
            EFFECT_NAME_PULSE_COLOR => Some(Self::PulseColor),
            _ => None,
        }
    }

    /// Frame wait used when a request does not carry one
    ///
    /// The test pattern derives its wait from the strip length instead.
    pub const fn default_wait(self) -> Duration {
        match self {
            Self::TestPattern => test_pattern::SWEEP_DURATION,
            Self::Rainbow => rainbow::DEFAULT_WAIT,
            Self::RainbowCycle => rainbow::DEFAULT_CYCLE_WAIT,
            Self::ColorWipe => color_wipe::DEFAULT_WAIT,
            Self::TheaterChase | Self::TheaterChaseRainbow => theater_chase::DEFAULT_WAIT,
            Self::Stroboscope => stroboscope::DEFAULT_WAIT,
            Self::Icicle => icicle::DEFAULT_WAIT,
            Self::PulseColor => pulse::DEFAULT_WAIT,
        }
    }

    /// Build a fresh effect state
    ///
    /// Effects that do not use a color or a wait ignore them.
    pub fn to_slot(self, color: Rgbw, wait: Duration) -> EffectSlot {
        match self {
            Self::TestPattern => EffectSlot::TestPattern(TestPatternEffect::new()),
            Self::Rainbow => EffectSlot::Rainbow(RainbowEffect::new(wait)),
            Self::RainbowCycle => EffectSlot::RainbowCycle(RainbowCycleEffect::new(wait)),
            Self::ColorWipe => EffectSlot::ColorWipe(ColorWipeEffect::new(color, wait)),
            Self::TheaterChase => {
                EffectSlot::TheaterChase(TheaterChaseEffect::new(color, wait))
            }
            Self::TheaterChaseRainbow => {
                EffectSlot::TheaterChaseRainbow(TheaterChaseRainbowEffect::new(wait))
            }
            Self::Stroboscope => EffectSlot::Stroboscope(StroboscopeEffect::new(color, wait)),
            Self::Icicle => EffectSlot::Icicle(IcicleEffect::new(color, wait)),
            Self::PulseColor => EffectSlot::PulseColor(PulseColorEffect::new(color, wait)),
        }
    }
}

impl EffectSlot {
    /// Render the current effect
    pub fn render<D: StripDriver>(&mut self, surface: &mut PixelSurface<D>) -> FrameOutcome {
        match self {
            Self::TestPattern(effect) => effect.render(surface),
            Self::Rainbow(effect) => effect.render(surface),
            Self::RainbowCycle(effect) => effect.render(surface),
            Self::ColorWipe(effect) => effect.render(surface),
            Self::TheaterChase(effect) => effect.render(surface),
            Self::TheaterChaseRainbow(effect) => effect.render(surface),
            Self::Stroboscope(effect) => effect.render(surface),
            Self::Icicle(effect) => effect.render(surface),
            Self::PulseColor(effect) => effect.render(surface),
        }
    }

    /// Prepare the strip before the first frame
    pub fn prepare<D: StripDriver>(&mut self, surface: &mut PixelSurface<D>) {
        match self {
            Self::TestPattern(effect) => effect.prepare(surface),
            Self::Rainbow(effect) => effect.prepare(surface),
            Self::RainbowCycle(effect) => effect.prepare(surface),
            Self::ColorWipe(effect) => effect.prepare(surface),
            Self::TheaterChase(effect) => effect.prepare(surface),
            Self::TheaterChaseRainbow(effect) => effect.prepare(surface),
            Self::Stroboscope(effect) => effect.prepare(surface),
            Self::Icicle(effect) => effect.prepare(surface),
            Self::PulseColor(effect) => effect.prepare(surface),
        }
    }

    /// Delay between frames of the current effect
    pub fn wait(&self) -> Duration {
        match self {
            Self::TestPattern(effect) => effect.wait(),
            Self::Rainbow(effect) => effect.wait(),
            Self::RainbowCycle(effect) => effect.wait(),
            Self::ColorWipe(effect) => effect.wait(),
            Self::TheaterChase(effect) => effect.wait(),
            Self::TheaterChaseRainbow(effect) => effect.wait(),
            Self::Stroboscope(effect) => effect.wait(),
            Self::Icicle(effect) => effect.wait(),
            Self::PulseColor(effect) => effect.wait(),
        }
    }

    /// Get the effect ID for external observation
    pub fn id(&self) -> EffectId {
        match self {
            Self::TestPattern(_) => EffectId::TestPattern,
            Self::Rainbow(_) => EffectId::Rainbow,
            Self::RainbowCycle(_) => EffectId::RainbowCycle,
            Self::ColorWipe(_) => EffectId::ColorWipe,
            Self::TheaterChase(_) => EffectId::TheaterChase,
            Self::TheaterChaseRainbow(_) => EffectId::TheaterChaseRainbow,
            Self::Stroboscope(_) => EffectId::Stroboscope,
            Self::Icicle(_) => EffectId::Icicle,
            Self::PulseColor(_) => EffectId::PulseColor,
        }
    }

    /// Check if the effect stops by itself
    pub const fn is_one_shot(&self) -> bool {
        matches!(self, Self::TestPattern(_) | Self::ColorWipe(_))
    }
}
