//! Core types shared by the renderer and its surfaces.

use crate::geometry::Point;
use palette::Srgb;

/// Drawing surface dimensions in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Viewport {
    /// Creates a viewport.
    ///
    /// # Errors
    /// * `InvalidViewport` - Width or height is zero
    pub fn new(width: u32, height: u32) -> Result<Self, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidViewport { width, height });
        }
        Ok(Self { width, height })
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Center of the viewport.
    pub fn center(&self) -> Point {
        Point::new(self.width as f32 / 2.0, self.height as f32 / 2.0)
    }

    /// Radius of the largest circle centered in the viewport.
    pub fn face_radius(&self) -> f32 {
        self.width.min(self.height) as f32 / 2.0
    }
}

/// How much detail the current power state allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderDetail {
    /// Interactive mode: anti-aliased, second hand, full-color background.
    Full,

    /// Ambient mode: no second hand, low-power background.
    Reduced {
        /// False on low-bit-ambient displays.
        anti_alias: bool,
    },
}

impl RenderDetail {
    /// Returns true when primitives should be anti-aliased.
    pub fn anti_alias(&self) -> bool {
        match self {
            RenderDetail::Full => true,
            RenderDetail::Reduced { anti_alias } => *anti_alias,
        }
    }

    /// Returns true for `Reduced` detail.
    pub fn is_reduced(&self) -> bool {
        matches!(self, RenderDetail::Reduced { .. })
    }
}

/// Identifies a clock hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Hand {
    Hour,
    Minute,
    Second,
}

/// Whether a primitive is filled or outlined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PaintStyle {
    Fill,
    Stroke,
}

/// Soft shadow drawn behind a primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    pub radius: f32,
    pub color: Srgb,
}

/// How a primitive is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    /// Color components in the range 0.0-1.0.
    pub color: Srgb,

    pub stroke_width: f32,

    pub style: PaintStyle,

    pub anti_alias: bool,

    /// Round line caps.
    pub round_cap: bool,

    pub shadow: Option<Shadow>,
}

impl Paint {
    /// Creates an anti-aliased, filled paint with square caps and no shadow.
    pub const fn new(color: Srgb, stroke_width: f32) -> Self {
        Self {
            color,
            stroke_width,
            style: PaintStyle::Fill,
            anti_alias: true,
            round_cap: false,
            shadow: None,
        }
    }

    pub const fn with_style(mut self, style: PaintStyle) -> Self {
        self.style = style;
        self
    }

    pub const fn with_round_cap(mut self) -> Self {
        self.round_cap = true;
        self
    }

    pub const fn with_shadow(mut self, shadow: Shadow) -> Self {
        self.shadow = Some(shadow);
        self
    }

    pub const fn with_anti_alias(mut self, anti_alias: bool) -> Self {
        self.anti_alias = anti_alias;
        self
    }
}

/// Errors that can occur while building a render plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderError {
    /// Width or height is zero.
    InvalidViewport { width: u32, height: u32 },

    /// Render plan capacity exceeded.
    CapacityExceeded,
}

impl core::fmt::Display for RenderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RenderError::InvalidViewport { width, height } => {
                write!(
                    f,
                    "invalid viewport {}x{}: width and height must be non-zero",
                    width, height
                )
            }
            RenderError::CapacityExceeded => {
                write!(f, "render plan capacity exceeded")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RenderError {}
