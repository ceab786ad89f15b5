//! Cooperative task scheduling for the effect runner.
//!
//! Provides portable step pacing without async/await or platform-specific timers.
//! The caller is responsible for sleeping/waiting between ticks.

use embassy_time::{Duration, Instant};

use crate::StripDriver;
use crate::command::CommandReceiver;
use crate::effect::EffectSlot;
use crate::runner::{EffectRunner, Plan, StripEventHandler, TaskId};

/// Result of a scheduler tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickResult {
    /// When the task wants to run next, `None` if nothing is registered.
    pub next_deadline: Option<Instant>,
    /// How long to wait until then (zero if the task is due or busy-retrying).
    pub sleep_duration: Option<Duration>,
}

impl TickResult {
    const IDLE: Self = Self {
        next_deadline: None,
        sleep_duration: None,
    };

    /// Check if no task is registered
    pub const fn is_idle(&self) -> bool {
        self.next_deadline.is_none()
    }
}

#[derive(Debug, Clone, Copy)]
struct Planned {
    task: TaskId,
    at: Instant,
}

/// Portable scheduler that runs the active effect task.
///
/// This scheduler:
/// - Drains pending commands into the runner
/// - Runs the registered task at most once per tick, when it is due
/// - Returns timing info so the caller can sleep appropriately
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = TaskScheduler::new(runner, channel.receiver());
///
/// loop {
///     let now = get_current_time_ms();
///     let result = scheduler.tick(Instant::from_millis(now));
///
///     // Platform-specific sleep, or wait for the next command when idle
///     if let Some(sleep) = result.sleep_duration {
///         sleep_ms(sleep.as_millis());
///     }
/// }
/// ```
pub struct TaskScheduler<'a, D, H, const COMMANDS: usize>
where
    D: StripDriver,
    H: StripEventHandler<D>,
{
    runner: EffectRunner<D, H>,
    commands: CommandReceiver<'a, COMMANDS>,
    planned: Option<Planned>,
}

impl<'a, D, H, const COMMANDS: usize> TaskScheduler<'a, D, H, COMMANDS>
where
    D: StripDriver,
    H: StripEventHandler<D>,
{
    /// Create a new scheduler.
    pub fn new(runner: EffectRunner<D, H>, commands: CommandReceiver<'a, COMMANDS>) -> Self {
        Self {
            runner,
            commands,
            planned: None,
        }
    }

    /// Start an effect; its first frame is due at `now`.
    pub fn start(&mut self, effect: EffectSlot, now: Instant) -> TaskId {
        let task = self.runner.start(effect);
        self.planned = Some(Planned { task, at: now });
        task
    }

    /// Stop the running effect.
    pub fn stop(&mut self) {
        self.runner.stop();
        self.planned = None;
    }

    /// Process commands and run the task if it is due.
    ///
    /// This method:
    /// 1. Applies every queued command to the runner
    /// 2. Picks up tasks started or stopped directly on the runner
    /// 3. Runs the task once if its deadline has passed
    /// 4. Returns the deadline for the next run
    pub fn tick(&mut self, now: Instant) -> TickResult {
        while let Some(command) = self.commands.try_receive() {
            self.runner.apply(command);
        }
        self.sync(now);

        let Some(planned) = self.planned else {
            return TickResult::IDLE;
        };

        if planned.at <= now {
            self.planned = match self.runner.run(planned.task) {
                Plan::Now => Some(Planned { at: now, ..planned }),
                Plan::After(wait) => Some(Planned {
                    at: now + wait,
                    ..planned
                }),
                Plan::Idle => None,
            };
        }

        match self.planned {
            Some(planned) => TickResult {
                next_deadline: Some(planned.at),
                sleep_duration: Some(if planned.at > now {
                    planned.at - now
                } else {
                    Duration::from_millis(0)
                }),
            },
            None => TickResult::IDLE,
        }
    }

    /// Align the plan with the runner's registered task
    fn sync(&mut self, now: Instant) {
        let active = self.runner.active_task();
        let planned = self.planned.map(|planned| planned.task);
        if active == planned {
            return;
        }
        self.planned = active.map(|task| Planned { task, at: now });
    }

    /// Get a reference to the runner.
    pub fn runner(&self) -> &EffectRunner<D, H> {
        &self.runner
    }

    /// Get a mutable reference to the runner.
    pub fn runner_mut(&mut self) -> &mut EffectRunner<D, H> {
        &mut self.runner
    }
}
