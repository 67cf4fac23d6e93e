//! Event-based control for watch faces.

/// Inbound host notifications.
///
/// `H` is the host scheduler's handle type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HostEvent<H> {
    /// Ambient mode entered (`true`) or left (`false`).
    AmbientModeChanged(bool),
    /// Face shown or hidden.
    VisibilityChanged(bool),
    /// Display properties reported.
    PropertiesDiscovered { low_bit_ambient: bool },
    /// A scheduled redraw callback fired.
    TimerFired(H),
    /// Once-per-minute tick in ambient mode.
    TimeTick,
    /// Time zone changed.
    TimeZoneChanged,
    /// Face torn down.
    Destroy,
}
