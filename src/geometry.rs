//! Clock geometry: hand angles, rotations about the face center, tick marks.
//!
//! Angles are in degrees clockwise from 12 o'clock. Screen coordinates grow
//! rightwards and downwards, so 0° points towards negative y.

use crate::time::WallClockSample;

/// Number of tick marks around the face.
pub const TICK_COUNT: usize = 60;

/// Every n-th tick is a major (longer) tick.
pub const MAJOR_TICK_EVERY: usize = 5;

/// A point in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: Point) -> f32 {
        libm::hypotf(self.x - other.x, self.y - other.y)
    }
}

/// Rotation of the second hand in degrees.
#[inline]
pub fn seconds_rotation(time: &WallClockSample) -> f32 {
    time.second() as f32 * 6.0
}

/// Rotation of the minute hand in degrees.
#[inline]
pub fn minutes_rotation(time: &WallClockSample) -> f32 {
    time.minute() as f32 * 6.0
}

/// Rotation of the hour hand in degrees.
///
/// The minute contributes half a degree per minute so the hand creeps between
/// hour marks. The result is not reduced modulo 360: 13:00 yields 390°.
#[inline]
pub fn hours_rotation(time: &WallClockSample) -> f32 {
    time.hour() as f32 * 30.0 + time.minute() as f32 / 2.0
}

/// Rotations of all three hands for one time sample.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HandRotations {
    pub hours: f32,
    pub minutes: f32,
    pub seconds: f32,
}

impl HandRotations {
    pub fn at(time: &WallClockSample) -> Self {
        Self {
            hours: hours_rotation(time),
            minutes: minutes_rotation(time),
            seconds: seconds_rotation(time),
        }
    }
}

/// Rotation by a number of degrees about a pivot.
///
/// Works like a canvas transform: [`Rotation::rotate`] composes a further
/// rotation onto the current one, so nested hand frames can be built
/// incrementally.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rotation {
    pivot: Point,
    degrees: f32,
    cos: f32,
    sin: f32,
}

impl Rotation {
    /// Identity rotation about `pivot`.
    pub const fn identity(pivot: Point) -> Self {
        Self {
            pivot,
            degrees: 0.0,
            cos: 1.0,
            sin: 0.0,
        }
    }

    /// Absolute rotation about `pivot`.
    pub fn about(pivot: Point, degrees: f32) -> Self {
        let (sin, cos) = sin_cos_degrees(degrees);
        Self {
            pivot,
            degrees,
            cos,
            sin,
        }
    }

    /// Composes an additional rotation about the same pivot.
    pub fn rotate(self, degrees: f32) -> Self {
        let (sin, cos) = sin_cos_degrees(degrees);
        Self {
            pivot: self.pivot,
            degrees: self.degrees + degrees,
            cos: self.cos * cos - self.sin * sin,
            sin: self.sin * cos + self.cos * sin,
        }
    }

    /// Cumulative rotation in degrees.
    #[inline]
    pub fn degrees(&self) -> f32 {
        self.degrees
    }

    #[inline]
    pub fn pivot(&self) -> Point {
        self.pivot
    }

    /// Maps a point from the rotated frame to screen coordinates.
    pub fn apply(&self, point: Point) -> Point {
        let dx = point.x - self.pivot.x;
        let dy = point.y - self.pivot.y;
        Point::new(
            self.pivot.x + dx * self.cos - dy * self.sin,
            self.pivot.y + dx * self.sin + dy * self.cos,
        )
    }
}

fn sin_cos_degrees(degrees: f32) -> (f32, f32) {
    let radians = (degrees as f64).to_radians();
    (libm::sin(radians) as f32, libm::cos(radians) as f32)
}

/// A radial tick mark.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tick {
    /// Position around the face, 0-59.
    pub index: u8,
    pub major: bool,
    /// Inner endpoint.
    pub start: Point,
    /// Outer endpoint, on the face radius.
    pub end: Point,
}

/// Computes the tick mark at `index`.
///
/// Major ticks start `major_inset` inside the face radius, minor ticks
/// `minor_inset` inside it. Inner radii are clamped at zero.
pub fn tick(index: usize, center: Point, radius: f32, major_inset: f32, minor_inset: f32) -> Tick {
    let angle = index as f64 * core::f64::consts::PI * 2.0 / TICK_COUNT as f64;
    let sin = libm::sin(angle);
    let cos = libm::cos(angle);

    let major = index % MAJOR_TICK_EVERY == 0;
    let inset = if major { major_inset } else { minor_inset };
    let inner = (radius - inset).max(0.0);

    let at = |len: f32| {
        Point::new(
            (center.x as f64 + sin * len as f64) as f32,
            (center.y as f64 - cos * len as f64) as f32,
        )
    };

    Tick {
        index: index as u8,
        major,
        start: at(inner),
        end: at(radius),
    }
}
