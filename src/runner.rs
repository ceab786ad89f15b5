//! Effect runner - binds the single active effect to a scheduler task
//!
//! Every effect step follows the same protocol: if the driver is busy, ask
//! to run again right away; otherwise render one frame, commit it and ask to
//! run again after the effect's wait. Effects with a terminal condition stop
//! their task and notify the event handler.

use embassy_time::Duration;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::StripDriver;
use crate::command::StripCommand;
use crate::effect::{EffectId, EffectSlot, FrameOutcome};
use crate::surface::PixelSurface;
use crate::thermometer::Thermometer;

/// Handle of a registered effect task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(u32);

/// When the task wants to run next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plan {
    /// Driver was busy, run again at the next opportunity
    Now,
    /// Frame rendered, run again after the delay
    After(Duration),
    /// Task is not registered (finished, stopped or replaced)
    Idle,
}

/// Notifications sent by the runner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripEvent {
    /// An effect with a terminal condition has finished
    EffectDone,
}

/// Receives runner notifications
///
/// The handler value doubles as the caller's context. It is called while
/// the runner is borrowed, so it only gets the surface. To start a follow-up
/// effect when one finishes, keep a [`CommandSender`](crate::CommandSender)
/// in the handler and queue the request; the scheduler applies it on its
/// next tick.
///
/// ```ignore
/// struct Chain<'a> {
///     next: CommandSender<'a, 4>,
/// }
///
/// impl<D: StripDriver> StripEventHandler<D> for Chain<'_> {
///     fn on_event(&mut self, _surface: &mut PixelSurface<D>, event: StripEvent) {
///         if event == StripEvent::EffectDone {
///             let _ = self.next.start(EffectRequest::new(EffectId::Rainbow));
///         }
///     }
/// }
/// ```
pub trait StripEventHandler<D: StripDriver> {
    fn on_event(&mut self, surface: &mut PixelSurface<D>, event: StripEvent);
}

/// Handler that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoEvents;

impl<D: StripDriver> StripEventHandler<D> for NoEvents {
    fn on_event(&mut self, _surface: &mut PixelSurface<D>, _event: StripEvent) {}
}

#[derive(Debug)]
struct ActiveEffect {
    task: TaskId,
    effect: EffectSlot,
}

/// Owns the surface and the one effect allowed to draw on it
pub struct EffectRunner<D: StripDriver, H: StripEventHandler<D> = NoEvents> {
    surface: PixelSurface<D>,
    handler: H,
    active: Option<ActiveEffect>,
    next_task: u32,
}

impl<D: StripDriver> EffectRunner<D, NoEvents> {
    pub fn new(surface: PixelSurface<D>) -> Self {
        Self::with_handler(surface, NoEvents)
    }
}

impl<D: StripDriver, H: StripEventHandler<D>> EffectRunner<D, H> {
    /// Create a runner that reports to `handler`
    pub fn with_handler(surface: PixelSurface<D>, handler: H) -> Self {
        Self {
            surface,
            handler,
            active: None,
            next_task: 0,
        }
    }

    pub const fn surface(&self) -> &PixelSurface<D> {
        &self.surface
    }

    pub const fn surface_mut(&mut self) -> &mut PixelSurface<D> {
        &mut self.surface
    }

    pub const fn handler(&self) -> &H {
        &self.handler
    }

    pub const fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    /// Handle of the registered task, if any
    pub fn active_task(&self) -> Option<TaskId> {
        self.active.as_ref().map(|active| active.task)
    }

    /// Id of the running effect, if any
    pub fn active_effect(&self) -> Option<EffectId> {
        self.active.as_ref().map(|active| active.effect.id())
    }

    /// Deregister the running effect
    ///
    /// Returns the handle that was removed. Calling it with nothing running
    /// is a no-op.
    pub fn stop(&mut self) -> Option<TaskId> {
        let active = self.active.take()?;
        #[cfg(feature = "esp32-log")]
        println!("[EffectRunner.stop] stopped {}", active.effect.id().as_str());
        Some(active.task)
    }

    /// Replace the running effect with `effect`
    ///
    /// The previous task is deregistered before the new one exists, so it
    /// can never render again. The returned task should run immediately.
    pub fn start(&mut self, mut effect: EffectSlot) -> TaskId {
        self.stop();

        effect.prepare(&mut self.surface);
        let task = TaskId(self.next_task);
        self.next_task = self.next_task.wrapping_add(1);

        #[cfg(feature = "esp32-log")]
        println!(
            "[EffectRunner.start] {} as task {}",
            effect.id().as_str(),
            task.0
        );
        self.active = Some(ActiveEffect { task, effect });
        task
    }

    /// Run one step of `task`
    ///
    /// Tasks that are no longer registered do nothing and report
    /// [`Plan::Idle`].
    pub fn run(&mut self, task: TaskId) -> Plan {
        let Some(active) = self.active.as_mut().filter(|active| active.task == task) else {
            return Plan::Idle;
        };

        if !self.surface.is_ready() {
            return Plan::Now;
        }

        let outcome = active.effect.render(&mut self.surface);
        let wait = active.effect.wait();

        // Transport failures are the driver's concern; keep animating
        if !self.surface.write() {
            #[cfg(feature = "esp32-log")]
            println!("[EffectRunner.run] write failed");
        }

        match outcome {
            FrameOutcome::Continue => Plan::After(wait),
            FrameOutcome::Finished => {
                self.finish();
                Plan::Idle
            }
        }
    }

    /// Stop any running effect and draw a thermometer gauge once
    pub fn show_thermometer(&mut self, gauge: &Thermometer, temperature: f32) -> bool {
        self.stop();
        gauge.render(&mut self.surface, temperature)
    }

    /// Execute a queued command
    pub fn apply(&mut self, command: StripCommand) {
        #[cfg(feature = "esp32-log")]
        println!("[EffectRunner.apply] {:?}", command);
        match command {
            StripCommand::Start(request) => {
                self.start(request.to_slot());
            }
            StripCommand::Stop => {
                self.stop();
            }
            StripCommand::SetBrightness(brightness) => {
                self.surface.set_brightness(brightness);
            }
            StripCommand::Thermometer { gauge, temperature } => {
                self.show_thermometer(&gauge, temperature);
            }
        }
    }

    fn finish(&mut self) {
        #[cfg(feature = "esp32-log")]
        if let Some(active) = &self.active {
            println!("[EffectRunner.finish] {} done", active.effect.id().as_str());
        }
        self.stop();
        self.handler
            .on_event(&mut self.surface, StripEvent::EffectDone);
    }
}
