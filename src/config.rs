//! Face configuration: the resolved colors, dimensions and bitmap sizes the
//! host would otherwise load from its resources.

use crate::colors::{ACCENT_COLOR, BLACK, HAND_COLOR};
use palette::Srgb;

/// Radius of the hand end caps and the center dot.
pub const HAND_END_CAP_RADIUS: f32 = 4.0;

/// Blur radius of the hand shadow.
pub const SHADOW_RADIUS: f32 = 6.0;

/// Stroke width of tick marks.
pub const TICK_STROKE_WIDTH: f32 = 2.0;

/// Stroke width of the hands.
pub const HAND_STROKE_WIDTH: f32 = 3.0;

pub const HOUR_HAND_INSET: f32 = 80.0;
pub const MINUTE_HAND_INSET: f32 = 40.0;
pub const SECOND_HAND_INSET: f32 = 20.0;

pub const MAJOR_TICK_INSET: f32 = 25.0;
pub const MINOR_TICK_INSET: f32 = 10.0;

/// Intrinsic size of a background bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BitmapSize {
    pub width: u32,
    pub height: u32,
}

impl BitmapSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A hand or tick inset is negative or not finite.
    NegativeInset,

    /// A stroke width is zero, negative or not finite.
    NonPositiveStroke,

    /// The end-cap radius is zero, negative or not finite.
    NonPositiveCapRadius,

    /// A background bitmap has zero width or height.
    EmptyBackground,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::NegativeInset => {
                write!(f, "hand and tick insets must be finite and non-negative")
            }
            ConfigError::NonPositiveStroke => {
                write!(f, "stroke widths must be finite and positive")
            }
            ConfigError::NonPositiveCapRadius => {
                write!(f, "end-cap radius must be finite and positive")
            }
            ConfigError::EmptyBackground => {
                write!(f, "background bitmaps must have non-zero width and height")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Validated face configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceConfig {
    pub(crate) hand_color: Srgb,
    pub(crate) accent_color: Srgb,
    pub(crate) shadow_color: Srgb,
    pub(crate) hand_stroke_width: f32,
    pub(crate) tick_stroke_width: f32,
    pub(crate) cap_radius: f32,
    pub(crate) shadow_radius: f32,
    pub(crate) hour_inset: f32,
    pub(crate) minute_inset: f32,
    pub(crate) second_inset: f32,
    pub(crate) major_tick_inset: f32,
    pub(crate) minor_tick_inset: f32,
    pub(crate) background: Option<BitmapSize>,
    pub(crate) ambient_background: Option<BitmapSize>,
}

impl FaceConfig {
    /// Creates a new configuration builder seeded with the default face.
    pub fn builder() -> FaceConfigBuilder {
        FaceConfigBuilder::new()
    }

    pub fn cap_radius(&self) -> f32 {
        self.cap_radius
    }

    /// Distance from the face edge to the tip of the hour, minute and second hands.
    pub fn hand_insets(&self) -> (f32, f32, f32) {
        (self.hour_inset, self.minute_inset, self.second_inset)
    }

    /// Intrinsic size of the interactive background, if any.
    pub fn background(&self) -> Option<BitmapSize> {
        self.background
    }

    /// Intrinsic size of the ambient background, if any.
    pub fn ambient_background(&self) -> Option<BitmapSize> {
        self.ambient_background
    }
}

impl Default for FaceConfig {
    fn default() -> Self {
        FaceConfigBuilder::new().config
    }
}

/// Builder for constructing validated face configurations.
#[derive(Debug, Clone)]
pub struct FaceConfigBuilder {
    config: FaceConfig,
}

impl FaceConfigBuilder {
    /// Creates a builder with the default face: light hour and minute hands,
    /// a red second hand, no background bitmaps.
    pub fn new() -> Self {
        Self {
            config: FaceConfig {
                hand_color: HAND_COLOR,
                accent_color: ACCENT_COLOR,
                shadow_color: BLACK,
                hand_stroke_width: HAND_STROKE_WIDTH,
                tick_stroke_width: TICK_STROKE_WIDTH,
                cap_radius: HAND_END_CAP_RADIUS,
                shadow_radius: SHADOW_RADIUS,
                hour_inset: HOUR_HAND_INSET,
                minute_inset: MINUTE_HAND_INSET,
                second_inset: SECOND_HAND_INSET,
                major_tick_inset: MAJOR_TICK_INSET,
                minor_tick_inset: MINOR_TICK_INSET,
                background: None,
                ambient_background: None,
            },
        }
    }

    /// Sets the second hand and center dot color.
    pub fn hand_color(mut self, color: Srgb) -> Self {
        self.config.hand_color = color;
        self
    }

    /// Sets the hour hand, minute hand and tick color.
    pub fn accent_color(mut self, color: Srgb) -> Self {
        self.config.accent_color = color;
        self
    }

    pub fn shadow_color(mut self, color: Srgb) -> Self {
        self.config.shadow_color = color;
        self
    }

    pub fn hand_stroke_width(mut self, width: f32) -> Self {
        self.config.hand_stroke_width = width;
        self
    }

    pub fn tick_stroke_width(mut self, width: f32) -> Self {
        self.config.tick_stroke_width = width;
        self
    }

    /// Sets the end-cap radius shared by the hands and the center dot.
    pub fn cap_radius(mut self, radius: f32) -> Self {
        self.config.cap_radius = radius;
        self
    }

    pub fn shadow_radius(mut self, radius: f32) -> Self {
        self.config.shadow_radius = radius;
        self
    }

    /// Sets how far inside the face radius each hand ends.
    pub fn hand_insets(mut self, hour: f32, minute: f32, second: f32) -> Self {
        self.config.hour_inset = hour;
        self.config.minute_inset = minute;
        self.config.second_inset = second;
        self
    }

    /// Sets how far inside the face radius major and minor ticks start.
    pub fn tick_insets(mut self, major: f32, minor: f32) -> Self {
        self.config.major_tick_inset = major;
        self.config.minor_tick_inset = minor;
        self
    }

    /// Sets the intrinsic size of the interactive background bitmap.
    pub fn background(mut self, size: BitmapSize) -> Self {
        self.config.background = Some(size);
        self
    }

    /// Sets the intrinsic size of the ambient background bitmap.
    pub fn ambient_background(mut self, size: BitmapSize) -> Self {
        self.config.ambient_background = Some(size);
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    /// * `NegativeInset` - An inset is negative or not finite
    /// * `NonPositiveStroke` - A stroke width is not positive
    /// * `NonPositiveCapRadius` - The cap radius is not positive
    /// * `EmptyBackground` - A background bitmap has a zero dimension
    pub fn build(self) -> Result<FaceConfig, ConfigError> {
        let c = &self.config;

        let insets = [
            c.hour_inset,
            c.minute_inset,
            c.second_inset,
            c.major_tick_inset,
            c.minor_tick_inset,
            c.shadow_radius,
        ];
        if insets.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(ConfigError::NegativeInset);
        }

        if [c.hand_stroke_width, c.tick_stroke_width]
            .iter()
            .any(|v| !v.is_finite() || *v <= 0.0)
        {
            return Err(ConfigError::NonPositiveStroke);
        }

        if !c.cap_radius.is_finite() || c.cap_radius <= 0.0 {
            return Err(ConfigError::NonPositiveCapRadius);
        }

        for size in [c.background, c.ambient_background].into_iter().flatten() {
            if size.width == 0 || size.height == 0 {
                return Err(ConfigError::EmptyBackground);
            }
        }

        Ok(self.config)
    }
}

impl Default for FaceConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
