//! Watch face engine tying power state, redraw timing and rendering together.
//!
//! Provides [`WatchFace`], which receives host lifecycle notifications, keeps
//! the redraw timer armed exactly while the face is visible and interactive,
//! and renders frames on demand. Also defines the [`RedrawSink`] trait for the
//! host's invalidate call.

use crate::command::HostEvent;
use crate::config::FaceConfig;
use crate::plan::RenderPlan;
use crate::power::{PowerPhase, PowerStateMachine};
use crate::renderer::ClockRenderer;
use crate::scheduler::{ScheduleError, Scheduler, TickTimer, next_tick_delay};
use crate::time::{TimeDuration, TimeSource};
use crate::types::{RenderDetail, RenderError, Viewport};

/// Trait for abstracting the host's display invalidation.
///
/// Implement this for your platform so the watch face can ask for a new frame.
/// The host should respond by calling [`WatchFace::draw`] on its next frame.
pub trait RedrawSink {
    /// Requests that the face be redrawn.
    fn request_redraw(&mut self);
}

/// Errors that can occur during watch face operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EngineError {
    /// Rendering failed.
    Render(RenderError),
    /// The redraw timer could not be armed.
    Schedule(ScheduleError),
}

impl core::fmt::Display for EngineError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            EngineError::Render(err) => write!(f, "render error: {}", err),
            EngineError::Schedule(err) => write!(f, "schedule error: {}", err),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EngineError {}

impl From<RenderError> for EngineError {
    fn from(err: RenderError) -> Self {
        EngineError::Render(err)
    }
}

impl From<ScheduleError> for EngineError {
    fn from(err: ScheduleError) -> Self {
        EngineError::Schedule(err)
    }
}

/// An analog watch face driven by host lifecycle notifications.
///
/// Owns the scheduler and redraw sink, borrows the time source. All methods
/// must be called from the host's event loop; a multi-threaded host must
/// serialize them.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `T` - Time source implementation type
/// * `S` - Scheduler implementation type
/// * `R` - Redraw sink implementation type
pub struct WatchFace<'t, T: TimeSource, S: Scheduler, R: RedrawSink> {
    time_source: &'t T,
    scheduler: S,
    host: R,
    power: PowerStateMachine,
    timer: TickTimer<S::Handle>,
    renderer: ClockRenderer,
}

impl<'t, T: TimeSource, S: Scheduler, R: RedrawSink> WatchFace<'t, T, S, R> {
    /// Creates a hidden, interactive face with no timer armed.
    pub fn new(config: FaceConfig, time_source: &'t T, scheduler: S, host: R) -> Self {
        Self {
            time_source,
            scheduler,
            host,
            power: PowerStateMachine::new(),
            timer: TickTimer::new(),
            renderer: ClockRenderer::new(config),
        }
    }

    /// Handles a host event by dispatching to the appropriate method.
    pub fn handle_event(&mut self, event: HostEvent<S::Handle>) -> Result<(), EngineError> {
        match event {
            HostEvent::AmbientModeChanged(ambient) => self.on_ambient_mode_changed(ambient)?,
            HostEvent::VisibilityChanged(visible) => self.on_visibility_changed(visible)?,
            HostEvent::PropertiesDiscovered { low_bit_ambient } => {
                self.on_properties_discovered(low_bit_ambient)
            }
            HostEvent::TimerFired(handle) => self.on_timer_fired(handle)?,
            HostEvent::TimeTick => self.on_time_tick(),
            HostEvent::TimeZoneChanged => self.on_time_zone_changed(),
            HostEvent::Destroy => self.on_destroy(),
        }
        Ok(())
    }

    /// Applies an ambient mode change.
    ///
    /// Requests a redraw only if the mode actually changed, and re-evaluates
    /// the timer either way.
    pub fn on_ambient_mode_changed(&mut self, ambient: bool) -> Result<(), ScheduleError> {
        let transition = self.power.set_ambient_mode(ambient);
        if transition.restyle {
            debug!("anti-aliasing now {}", self.power.render_detail().anti_alias());
        }
        if transition.changed {
            self.host.request_redraw();
        }
        self.update_timer()
    }

    /// Applies a visibility change and re-evaluates the timer.
    pub fn on_visibility_changed(&mut self, visible: bool) -> Result<(), ScheduleError> {
        self.power.set_visible(visible);
        self.update_timer()
    }

    /// Records display properties. Does not redraw.
    pub fn on_properties_discovered(&mut self, low_bit_ambient: bool) {
        self.power.set_low_bit_ambient(low_bit_ambient);
    }

    /// Handles a fired redraw callback.
    ///
    /// Stale handles (cancelled callbacks the host delivered anyway) are
    /// ignored. Otherwise requests a redraw and, while the face should run,
    /// schedules the next tick on the following second boundary.
    pub fn on_timer_fired(&mut self, handle: S::Handle) -> Result<(), ScheduleError> {
        if !self.timer.fire(handle) {
            trace!("ignoring stale timer callback");
            return Ok(());
        }

        self.host.request_redraw();

        if self.power.should_run() {
            let delay: S::Duration = next_tick_delay(self.time_source.epoch_millis());
            trace!("next tick in {} ms", delay.as_millis());
            self.timer.arm(&mut self.scheduler, delay)?;
        }
        Ok(())
    }

    /// Host's periodic coarse tick (once a minute in ambient mode).
    pub fn on_time_tick(&mut self) {
        self.host.request_redraw();
    }

    /// Time zone changed; the next frame samples the time source afresh.
    pub fn on_time_zone_changed(&mut self) {
        self.host.request_redraw();
    }

    /// Cancels any pending timer.
    pub fn on_destroy(&mut self) {
        self.timer.disarm(&mut self.scheduler);
    }

    /// Cancels the pending timer and, if the face should run, arms it to fire
    /// immediately.
    ///
    /// Call again to retry after a scheduling failure; the power state is
    /// unaffected by failures.
    pub fn update_timer(&mut self) -> Result<(), ScheduleError> {
        self.timer.disarm(&mut self.scheduler);
        if self.power.should_run() {
            if let Err(err) = self.timer.arm(&mut self.scheduler, <S::Duration as TimeDuration>::ZERO) {
                warn!("failed to arm redraw timer: {}", err);
                return Err(err);
            }
        }
        Ok(())
    }

    /// Renders a frame for `viewport` from a fresh time sample.
    pub fn draw(&mut self, viewport: Viewport) -> Result<RenderPlan, RenderError> {
        let time = self.time_source.now();
        self.renderer.render(time, viewport, self.power.render_detail())
    }

    /// Returns true if the redraw timer should be armed.
    pub fn should_run(&self) -> bool {
        self.power.should_run()
    }

    /// Returns true if a redraw callback is pending.
    pub fn timer_pending(&self) -> bool {
        self.timer.is_pending()
    }

    pub fn render_detail(&self) -> RenderDetail {
        self.power.render_detail()
    }

    pub fn phase(&self) -> PowerPhase {
        self.power.phase()
    }

    pub fn power(&self) -> &PowerStateMachine {
        &self.power
    }

    pub fn renderer(&self) -> &ClockRenderer {
        &self.renderer
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn host(&self) -> &R {
        &self.host
    }
}
