//! Background bitmap sizing and the viewport-keyed scaled bitmap cache.

use crate::config::{BitmapSize, ConfigError, FaceConfig};
use crate::plan::BackgroundKind;
use crate::types::Viewport;

/// Scales `bitmap` to the viewport width, preserving aspect ratio.
///
/// The width always equals the viewport width; the height is truncated to
/// whole pixels. A zero-width source yields zero height.
pub fn scale_to_width(bitmap: BitmapSize, viewport: Viewport) -> BitmapSize {
    let width = viewport.width();
    let height = (bitmap.height as u64 * width as u64)
        .checked_div(bitmap.width as u64)
        .unwrap_or(0)
        .min(u32::MAX as u64) as u32;
    BitmapSize::new(width, height)
}

/// Trait for host bitmap resampling.
///
/// Implement this for your image type so [`ScaledBackgrounds`] can produce
/// viewport-sized copies of the face backgrounds.
pub trait BitmapScaler {
    /// Bitmap type produced by the scaler.
    type Bitmap;

    /// Resamples the source bitmap of `kind` to `size`.
    fn scale(&mut self, kind: BackgroundKind, size: BitmapSize) -> Self::Bitmap;
}

/// Scaled copies of both backgrounds for the most recent viewport.
///
/// Bitmaps are resampled lazily and only again after the viewport size changes.
pub struct ScaledBackgrounds<S: BitmapScaler> {
    scaler: S,
    interactive_source: Option<BitmapSize>,
    ambient_source: Option<BitmapSize>,
    viewport: Option<Viewport>,
    interactive: Option<S::Bitmap>,
    ambient: Option<S::Bitmap>,
}

impl<S: BitmapScaler> ScaledBackgrounds<S> {
    /// Creates an empty cache for sources of the given intrinsic sizes.
    ///
    /// # Errors
    /// * `EmptyBackground` - A source has zero width or height
    pub fn new(
        scaler: S,
        interactive_source: Option<BitmapSize>,
        ambient_source: Option<BitmapSize>,
    ) -> Result<Self, ConfigError> {
        for size in [interactive_source, ambient_source].into_iter().flatten() {
            if size.width == 0 || size.height == 0 {
                return Err(ConfigError::EmptyBackground);
            }
        }

        Ok(Self {
            scaler,
            interactive_source,
            ambient_source,
            viewport: None,
            interactive: None,
            ambient: None,
        })
    }

    /// Creates an empty cache for the backgrounds of a validated config.
    pub fn from_config(scaler: S, config: &FaceConfig) -> Self {
        Self {
            scaler,
            interactive_source: config.background(),
            ambient_source: config.ambient_background(),
            viewport: None,
            interactive: None,
            ambient: None,
        }
    }

    /// Returns the scaled bitmap of `kind` for `viewport`.
    ///
    /// Returns `None` when no source bitmap of that kind exists.
    pub fn get(&mut self, kind: BackgroundKind, viewport: Viewport) -> Option<&S::Bitmap> {
        if self.viewport != Some(viewport) {
            debug!(
                "viewport now {}x{}, dropping scaled backgrounds",
                viewport.width(),
                viewport.height()
            );
            self.interactive = None;
            self.ambient = None;
            self.viewport = Some(viewport);
        }

        let (source, slot) = match kind {
            BackgroundKind::Interactive => (self.interactive_source, &mut self.interactive),
            BackgroundKind::Ambient => (self.ambient_source, &mut self.ambient),
        };
        let source = source?;

        if slot.is_none() {
            let size = scale_to_width(source, viewport);
            trace!("scaling background to {}x{}", size.width, size.height);
            *slot = Some(self.scaler.scale(kind, size));
        }

        slot.as_ref()
    }

    /// Viewport the cached bitmaps were scaled for.
    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    /// Returns a reference to the scaler.
    pub fn scaler(&self) -> &S {
        &self.scaler
    }
}
