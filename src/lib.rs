#![no_std]

pub mod buffer;
pub mod color;
pub mod command;
pub mod driver;
pub mod effect;
pub mod math8;
pub mod runner;
pub mod scheduler;
pub mod surface;
pub mod thermometer;

pub use buffer::{BufferDescriptor, StripLayout};
pub use command::{
    CommandChannel, CommandReceiver, CommandSender, EffectRequest, StripCommand, TrySendError,
};
pub use driver::{FrameBufferDriver, SmartLedsDriver};
pub use effect::{EffectId, EffectSlot, FrameOutcome};
pub use runner::{EffectRunner, NoEvents, Plan, StripEvent, StripEventHandler, TaskId};
pub use scheduler::{TaskScheduler, TickResult};
pub use surface::{FramebufferOverflow, PixelSurface};
pub use thermometer::Thermometer;

pub use color::{Rgb, Rgbw, heat_map, hue_wheel};
pub use math8::attenuate8;
pub use embassy_time::{Duration, Instant};

/// Abstract LED strip driver
///
/// Implement this trait to support different transports. Pixel storage
/// lives in the driver; the surface and effects only address it.
pub trait StripDriver {
    /// Prepare the transport for the given buffer
    fn init(&mut self, buffer: &BufferDescriptor);

    /// Set a pixel from a packed `0xRRGGBBWW` color
    fn set_pixel(&mut self, position: usize, color: u32);

    /// Set a pixel from separate channels
    ///
    /// RGB-only transports ignore the white channel.
    fn set_pixel_rgbw(&mut self, position: usize, color: Rgbw);

    /// Commit staged pixels to the strip
    fn write(&mut self) -> bool;

    /// Check if the transport can accept a new frame
    fn is_ready(&self) -> bool;
}
