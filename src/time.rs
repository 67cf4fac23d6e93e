//! Time abstraction traits and the wall-clock sample consumed by the renderer.

const MILLIS_PER_SECOND: u64 = 1_000;
const SECONDS_PER_DAY: i64 = 86_400;

/// Trait for abstracting the host's clock.
///
/// Both readings are taken fresh on every call; implementations must not cache
/// a sample across renders.
pub trait TimeSource {
    /// Returns the current local wall-clock time.
    fn now(&self) -> WallClockSample;

    /// Returns the current time as milliseconds since the Unix epoch.
    fn epoch_millis(&self) -> u64;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;
}

impl TimeDuration for core::time::Duration {
    const ZERO: Self = core::time::Duration::ZERO;

    fn as_millis(&self) -> u64 {
        core::time::Duration::as_millis(self) as u64
    }

    fn from_millis(millis: u64) -> Self {
        core::time::Duration::from_millis(millis)
    }
}

/// Wall-clock construction errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimeError {
    /// Hour, minute or second outside its range.
    OutOfRange,
}

impl core::fmt::Display for TimeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TimeError::OutOfRange => {
                write!(f, "wall-clock field out of range (hour 0-23, minute 0-59, second 0-59)")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TimeError {}

/// Local time of day with one-second resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WallClockSample {
    hour: u8,
    minute: u8,
    second: u8,
}

impl WallClockSample {
    /// Creates a sample, rejecting out-of-range fields.
    pub fn new(hour: u8, minute: u8, second: u8) -> Result<Self, TimeError> {
        if hour > 23 || minute > 59 || second > 59 {
            return Err(TimeError::OutOfRange);
        }
        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    /// Derives local time from epoch milliseconds and a fixed UTC offset.
    ///
    /// Negative offsets wrap into the previous day.
    pub fn from_epoch_millis(epoch_millis: u64, utc_offset_seconds: i32) -> Self {
        let utc_seconds = (epoch_millis / MILLIS_PER_SECOND) % SECONDS_PER_DAY as u64;
        let local = (utc_seconds as i64 + utc_offset_seconds as i64).rem_euclid(SECONDS_PER_DAY);

        Self {
            hour: (local / 3_600) as u8,
            minute: ((local / 60) % 60) as u8,
            second: (local % 60) as u8,
        }
    }

    /// Hour of day, 0-23.
    #[inline]
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Minute of hour, 0-59.
    #[inline]
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Second of minute, 0-59.
    #[inline]
    pub fn second(&self) -> u8 {
        self.second
    }
}
