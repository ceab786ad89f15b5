//! Strip commands and the channel that carries them
//!
//! Button handlers, radio callbacks and interrupts push commands here; the
//! scheduler drains them on its next tick. The queue is a fixed-size
//! `heapless::Deque` guarded by a critical section, so it works in `no_std`
//! and from interrupt context.

use core::cell::RefCell;

use critical_section::Mutex;
use embassy_time::Duration;
use heapless::Deque;

use crate::color::Rgbw;
use crate::effect::{EffectId, EffectSlot};
use crate::thermometer::Thermometer;

/// Request to start an effect by id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectRequest {
    pub id: EffectId,
    /// Color for effects that take one
    pub color: Rgbw,
    /// Frame wait, `None` for the effect's default
    pub wait: Option<Duration>,
}

impl EffectRequest {
    pub const fn new(id: EffectId) -> Self {
        Self {
            id,
            color: Rgbw::BLACK,
            wait: None,
        }
    }

    #[must_use]
    pub const fn with_color(mut self, color: Rgbw) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub const fn with_wait(mut self, wait: Duration) -> Self {
        self.wait = Some(wait);
        self
    }

    /// Build the effect state for this request
    pub fn to_slot(self) -> EffectSlot {
        let wait = match self.wait {
            Some(wait) => wait,
            None => self.id.default_wait(),
        };
        self.id.to_slot(self.color, wait)
    }
}

/// Commands that can be sent to the strip
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StripCommand {
    /// Replace the running effect
    Start(EffectRequest),
    /// Stop the running effect, leaving the strip as it is
    Stop,
    /// Set global brightness for subsequent frames
    SetBrightness(u8),
    /// Stop the running effect and draw a thermometer gauge once
    Thermometer {
        gauge: Thermometer,
        temperature: f32,
    },
}

/// Error returned when trying to send to a full channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrySendError(pub StripCommand);

/// A bounded, interrupt-safe command queue.
pub struct CommandChannel<const SIZE: usize> {
    queue: Mutex<RefCell<Deque<StripCommand, SIZE>>>,
}

impl<const SIZE: usize> CommandChannel<SIZE> {
    pub const fn new() -> Self {
        Self {
            queue: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a sender handle for this channel.
    pub const fn sender(&self) -> CommandSender<'_, SIZE> {
        CommandSender { channel: self }
    }

    /// Get a receiver handle for this channel.
    pub const fn receiver(&self) -> CommandReceiver<'_, SIZE> {
        CommandReceiver { channel: self }
    }

    /// Queue a command
    ///
    /// Returns the command back if the queue is full.
    pub fn try_send(&self, command: StripCommand) -> Result<(), TrySendError> {
        critical_section::with(|cs| {
            self.queue
                .borrow(cs)
                .borrow_mut()
                .push_back(command)
                .map_err(TrySendError)
        })
    }

    /// Take the oldest queued command, if any
    pub fn try_receive(&self) -> Option<StripCommand> {
        critical_section::with(|cs| self.queue.borrow(cs).borrow_mut().pop_front())
    }

    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.queue.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<const SIZE: usize> Default for CommandChannel<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Sending half of a [`CommandChannel`]
#[derive(Clone, Copy)]
pub struct CommandSender<'a, const SIZE: usize> {
    channel: &'a CommandChannel<SIZE>,
}

impl<const SIZE: usize> CommandSender<'_, SIZE> {
    pub fn try_send(&self, command: StripCommand) -> Result<(), TrySendError> {
        self.channel.try_send(command)
    }

    /// Queue a request to start an effect
    pub fn start(&self, request: EffectRequest) -> Result<(), TrySendError> {
        self.try_send(StripCommand::Start(request))
    }

    pub fn stop(&self) -> Result<(), TrySendError> {
        self.try_send(StripCommand::Stop)
    }

    pub fn set_brightness(&self, brightness: u8) -> Result<(), TrySendError> {
        self.try_send(StripCommand::SetBrightness(brightness))
    }
}

/// Receiving half of a [`CommandChannel`]
#[derive(Clone, Copy)]
pub struct CommandReceiver<'a, const SIZE: usize> {
    channel: &'a CommandChannel<SIZE>,
}

impl<const SIZE: usize> CommandReceiver<'_, SIZE> {
    pub fn try_receive(&self) -> Option<StripCommand> {
        self.channel.try_receive()
    }
}
