//! Power state machine.
//!
//! Tracks ambient mode, low-bit-ambient capability and visibility, and derives
//! whether the periodic redraw timer should run and how much detail to draw.
//! It never touches the timer or the drawing surface itself.

use crate::types::RenderDetail;

/// Snapshot of the power flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PowerState {
    pub ambient: bool,
    pub low_bit_ambient: bool,
    pub visible: bool,
}

/// The four combinations of ambient mode and visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerPhase {
    InteractiveVisible,
    InteractiveHidden,
    AmbientVisible,
    AmbientHidden,
}

/// Outcome of an ambient mode notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AmbientTransition {
    /// Ambient mode actually changed; the face needs a redraw.
    pub changed: bool,

    /// Hand styles need recomputing (anti-aliasing toggles on low-bit displays).
    pub restyle: bool,
}

/// Ambient/visibility state machine.
///
/// Starts `InteractiveHidden` with all flags false.
#[derive(Debug, Clone, Default)]
pub struct PowerStateMachine {
    state: PowerState,
    low_bit_discovered: bool,
}

impl PowerStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies an ambient mode notification.
    ///
    /// Duplicate notifications are no-ops and report `changed: false`.
    pub fn set_ambient_mode(&mut self, in_ambient: bool) -> AmbientTransition {
        if self.state.ambient == in_ambient {
            return AmbientTransition {
                changed: false,
                restyle: false,
            };
        }

        self.state.ambient = in_ambient;
        debug!("ambient mode -> {}", in_ambient);

        AmbientTransition {
            changed: true,
            restyle: self.state.low_bit_ambient,
        }
    }

    /// Records the low-bit-ambient capability.
    ///
    /// Only the first discovery is recorded; returns true if this call
    /// recorded it.
    pub fn set_low_bit_ambient(&mut self, low_bit_ambient: bool) -> bool {
        if self.low_bit_discovered {
            if low_bit_ambient != self.state.low_bit_ambient {
                warn!(
                    "ignoring low-bit-ambient {}, already discovered as {}",
                    low_bit_ambient, self.state.low_bit_ambient
                );
            }
            return false;
        }

        self.low_bit_discovered = true;
        self.state.low_bit_ambient = low_bit_ambient;
        debug!("low-bit ambient discovered: {}", low_bit_ambient);
        true
    }

    /// Applies a visibility notification. Returns true if visibility changed.
    pub fn set_visible(&mut self, visible: bool) -> bool {
        let changed = self.state.visible != visible;
        self.state.visible = visible;
        if changed {
            debug!("visible -> {}", visible);
        }
        changed
    }

    /// Returns true if the periodic redraw timer should be armed.
    #[inline]
    pub fn should_run(&self) -> bool {
        self.state.visible && !self.state.ambient
    }

    /// Detail level the renderer should use for the current state.
    pub fn render_detail(&self) -> RenderDetail {
        if self.state.ambient {
            RenderDetail::Reduced {
                anti_alias: !self.state.low_bit_ambient,
            }
        } else {
            RenderDetail::Full
        }
    }

    pub fn phase(&self) -> PowerPhase {
        match (self.state.ambient, self.state.visible) {
            (false, true) => PowerPhase::InteractiveVisible,
            (false, false) => PowerPhase::InteractiveHidden,
            (true, true) => PowerPhase::AmbientVisible,
            (true, false) => PowerPhase::AmbientHidden,
        }
    }

    pub fn state(&self) -> PowerState {
        self.state
    }
}
