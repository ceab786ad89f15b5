//! Bundled transports
//!
//! - [`FrameBufferDriver`]: keeps pixels in memory, for host previews and tests
//! - [`SmartLedsDriver`]: commits frames through any `smart-leds` writer

use smart_leds::SmartLedsWrite;

use crate::StripDriver;
use crate::buffer::BufferDescriptor;
use crate::color::{Rgb, Rgbw};

/// In-memory driver with up to `N` pixels
///
/// Staged pixels are copied into the committed frame on every accepted
/// write. Readiness and write acceptance can be toggled to emulate a busy
/// or failing transport.
#[derive(Debug, Clone)]
pub struct FrameBufferDriver<const N: usize> {
    staged: [Rgbw; N],
    committed: [Rgbw; N],
    count: usize,
    ready: bool,
    accept_writes: bool,
    writes: usize,
}

impl<const N: usize> Default for FrameBufferDriver<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> FrameBufferDriver<N> {
    pub const fn new() -> Self {
        Self {
            staged: [Rgbw::BLACK; N],
            committed: [Rgbw::BLACK; N],
            count: N,
            ready: true,
            accept_writes: true,
            writes: 0,
        }
    }

    /// Pixels set since the last reset, committed or not
    pub fn staged(&self) -> &[Rgbw] {
        &self.staged[..self.count]
    }

    /// Pixels as of the last accepted write
    pub fn committed(&self) -> &[Rgbw] {
        &self.committed[..self.count]
    }

    pub fn pixel(&self, position: usize) -> Option<Rgbw> {
        self.staged().get(position).copied()
    }

    /// Number of write attempts, accepted or not
    pub const fn writes(&self) -> usize {
        self.writes
    }

    pub fn set_ready(&mut self, ready: bool) {
        self.ready = ready;
    }

    /// Make subsequent writes succeed or fail
    pub fn set_accept_writes(&mut self, accept: bool) {
        self.accept_writes = accept;
    }
}

impl<const N: usize> StripDriver for FrameBufferDriver<N> {
    fn init(&mut self, buffer: &BufferDescriptor) {
        self.count = buffer.count.min(N);
        self.staged = [Rgbw::BLACK; N];
        self.committed = [Rgbw::BLACK; N];
        self.writes = 0;
    }

    fn set_pixel(&mut self, position: usize, color: u32) {
        self.set_pixel_rgbw(position, Rgbw::from_packed(color));
    }

    fn set_pixel_rgbw(&mut self, position: usize, color: Rgbw) {
        if position < self.count {
            self.staged[position] = color;
        }
    }

    fn write(&mut self) -> bool {
        self.writes += 1;
        if !self.accept_writes {
            return false;
        }
        self.committed = self.staged;
        true
    }

    fn is_ready(&self) -> bool {
        self.ready
    }
}

/// Adapter over a `smart-leds` writer with up to `N` pixels
///
/// The white channel is dropped; the writer receives plain RGB.
pub struct SmartLedsDriver<W, const N: usize> {
    writer: W,
    pixels: [Rgb; N],
    count: usize,
}

impl<W, const N: usize> SmartLedsDriver<W, N>
where
    W: SmartLedsWrite<Color = Rgb>,
{
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pixels: [Rgb::default(); N],
            count: N,
        }
    }

    /// Get the underlying writer
    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }
}

impl<W, const N: usize> StripDriver for SmartLedsDriver<W, N>
where
    W: SmartLedsWrite<Color = Rgb>,
{
    fn init(&mut self, buffer: &BufferDescriptor) {
        self.count = buffer.count.min(N);
        self.pixels = [Rgb::default(); N];
    }

    fn set_pixel(&mut self, position: usize, color: u32) {
        self.set_pixel_rgbw(position, Rgbw::from_packed(color));
    }

    fn set_pixel_rgbw(&mut self, position: usize, color: Rgbw) {
        if let Some(pixel) = self.pixels[..self.count].get_mut(position) {
            *pixel = color.rgb();
        }
    }

    fn write(&mut self) -> bool {
        self.writer
            .write(self.pixels[..self.count].iter().copied())
            .is_ok()
    }

    // Blocking writers finish inside `write`
    fn is_ready(&self) -> bool {
        true
    }
}
