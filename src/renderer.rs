//! Clock face renderer.
//!
//! Provides [`ClockRenderer`], which turns a wall-clock sample, a viewport and a
//! detail level into a [`RenderPlan`]. Rendering is a pure function of those
//! inputs and the renderer's immutable [`FaceConfig`].

use crate::background::scale_to_width;
use crate::colors::desaturate;
use crate::config::FaceConfig;
use crate::geometry::{self, HandRotations, Point, Rotation, TICK_COUNT};
use crate::plan::{BackgroundKind, BitmapBlit, DrawCommand, HandShape, HandStroke, RenderPlan};
use crate::time::WallClockSample;
use crate::types::{Hand, Paint, PaintStyle, RenderDetail, RenderError, Shadow, Viewport};
use palette::Srgb;

/// Builds render plans for an analog face.
#[derive(Debug, Clone, Default)]
pub struct ClockRenderer {
    config: FaceConfig,
}

/// Paints for one frame, resolved from the config and detail level.
struct FramePaints {
    tick: Paint,
    hour: Paint,
    minute: Paint,
    second: Paint,
    dot: Paint,
}

impl ClockRenderer {
    pub fn new(config: FaceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FaceConfig {
        &self.config
    }

    /// Renders one frame.
    ///
    /// Hands are drawn in nested frames: the minute hand's frame is the hour
    /// hand's frame rotated further by the difference of their angles, and
    /// likewise for the second hand.
    ///
    /// # Errors
    /// * `InvalidViewport` - Never for a `Viewport` built through `Viewport::new`
    /// * `CapacityExceeded` - Plan capacity exceeded
    pub fn render(
        &self,
        time: WallClockSample,
        viewport: Viewport,
        detail: RenderDetail,
    ) -> Result<RenderPlan, RenderError> {
        let rotations = HandRotations::at(&time);
        let center = viewport.center();

        let hour_frame = Rotation::about(center, rotations.hours);
        let minute_frame = hour_frame.rotate(rotations.minutes - rotations.hours);
        let second_frame = minute_frame.rotate(rotations.seconds - rotations.minutes);

        self.render_with_frames(viewport, detail, [hour_frame, minute_frame, second_frame])
    }

    /// Renders one frame, rotating each hand by its absolute angle.
    ///
    /// Produces the same hand positions as [`ClockRenderer::render`] up to
    /// floating-point rounding.
    pub fn render_absolute(
        &self,
        time: WallClockSample,
        viewport: Viewport,
        detail: RenderDetail,
    ) -> Result<RenderPlan, RenderError> {
        let rotations = HandRotations::at(&time);
        let center = viewport.center();

        self.render_with_frames(
            viewport,
            detail,
            [
                Rotation::about(center, rotations.hours),
                Rotation::about(center, rotations.minutes),
                Rotation::about(center, rotations.seconds),
            ],
        )
    }

    fn render_with_frames(
        &self,
        viewport: Viewport,
        detail: RenderDetail,
        [hour_frame, minute_frame, second_frame]: [Rotation; 3],
    ) -> Result<RenderPlan, RenderError> {
        if viewport.width() == 0 || viewport.height() == 0 {
            return Err(RenderError::InvalidViewport {
                width: viewport.width(),
                height: viewport.height(),
            });
        }

        let c = &self.config;
        let center = viewport.center();
        let radius = viewport.face_radius();
        let paints = self.paints(detail);
        let mut plan = RenderPlan::new(viewport);

        if let Some(blit) = self.background_blit(viewport, detail) {
            plan.push(DrawCommand::Background(blit))?;
        }

        for i in 0..TICK_COUNT {
            let tick = geometry::tick(i, center, radius, c.major_tick_inset, c.minor_tick_inset);
            plan.push(DrawCommand::Tick {
                tick,
                paint: paints.tick,
            })?;
        }

        plan.push(DrawCommand::Hand(HandStroke {
            hand: Hand::Hour,
            shape: self.round_rect_hand(center, radius - c.hour_inset),
            transform: hour_frame,
            paint: paints.hour,
        }))?;

        plan.push(DrawCommand::Hand(HandStroke {
            hand: Hand::Minute,
            shape: self.round_rect_hand(center, radius - c.minute_inset),
            transform: minute_frame,
            paint: paints.minute,
        }))?;

        // Skipped when the face is too small for the hand to clear the dot.
        let second_length = radius - c.second_inset;
        if !detail.is_reduced() && second_length > c.cap_radius {
            plan.push(DrawCommand::Hand(HandStroke {
                hand: Hand::Second,
                shape: HandShape::Line {
                    start: Point::new(center.x, center.y - c.cap_radius),
                    end: Point::new(center.x, center.y - second_length),
                },
                transform: second_frame,
                paint: paints.second,
            }))?;
        }

        plan.push(DrawCommand::Circle {
            center,
            radius: c.cap_radius,
            paint: paints.dot,
        })?;

        trace!("rendered {} commands", plan.len());
        Ok(plan)
    }

    /// Hand from `cap_radius` behind the center to `length` in front of it.
    fn round_rect_hand(&self, center: Point, length: f32) -> HandShape {
        let r = self.config.cap_radius;
        let length = length.max(0.0);
        HandShape::RoundRect {
            left: center.x - r,
            top: center.y - length,
            right: center.x + r,
            bottom: center.y + r,
            corner_radius: r,
        }
    }

    fn background_blit(&self, viewport: Viewport, detail: RenderDetail) -> Option<BitmapBlit> {
        let (kind, source) = if detail.is_reduced() {
            (BackgroundKind::Ambient, self.config.ambient_background?)
        } else {
            (BackgroundKind::Interactive, self.config.background?)
        };
        let size = scale_to_width(source, viewport);
        Some(BitmapBlit {
            kind,
            width: size.width,
            height: size.height,
        })
    }

    fn paints(&self, detail: RenderDetail) -> FramePaints {
        let c = &self.config;
        let anti_alias = detail.anti_alias();
        let ambient = detail.is_reduced();

        let tone = |color: Srgb| if ambient { desaturate(color) } else { color };
        let shadow = if ambient {
            None
        } else {
            Some(Shadow {
                radius: c.cap_radius,
                color: c.shadow_color,
            })
        };

        let outlined = Paint::new(tone(c.accent_color), c.hand_stroke_width)
            .with_style(PaintStyle::Stroke)
            .with_round_cap()
            .with_anti_alias(anti_alias);
        let outlined = match shadow {
            Some(s) => outlined.with_shadow(s),
            None => outlined,
        };

        let mut dot = Paint::new(tone(c.hand_color), c.hand_stroke_width)
            .with_round_cap()
            .with_anti_alias(anti_alias);
        if !ambient {
            dot = dot.with_shadow(Shadow {
                radius: c.shadow_radius,
                color: c.shadow_color,
            });
        }

        FramePaints {
            tick: Paint::new(tone(c.accent_color), c.tick_stroke_width).with_anti_alias(anti_alias),
            hour: outlined,
            minute: outlined,
            second: Paint::new(tone(c.hand_color), c.hand_stroke_width).with_anti_alias(anti_alias),
            dot,
        }
    }
}
