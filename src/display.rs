//! Render plan execution on `embedded-graphics` draw targets.
//!
//! embedded-graphics has no anti-aliasing, shadows or rotated rectangles, so
//! paints are reduced to color, stroke width and fill/stroke style, and
//! rounded-rectangle hands are drawn as stadiums along their rotated axis.

use embedded_graphics::geometry::{AngleUnit, Point as EgPoint, Size};
use embedded_graphics::image::{Image, ImageDrawable};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Arc, Circle, Line, PrimitiveStyle, Rectangle};
use palette::Srgb;

use crate::background::{BitmapScaler, ScaledBackgrounds};
use crate::colors::to_rgb8;
use crate::geometry::Point;
use crate::plan::{BackgroundKind, BitmapBlit, DrawCommand, HandShape, HandStroke, RenderPlan};
use crate::types::{Paint, PaintStyle, Viewport};

/// Trait for drawing background blits.
pub trait BackgroundPainter<D: DrawTarget> {
    /// Draws the background described by `blit` at the origin.
    fn paint(
        &mut self,
        target: &mut D,
        blit: &BitmapBlit,
        viewport: Viewport,
    ) -> Result<(), D::Error>;
}

/// Fills the background area with a flat color per background kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolidBackground {
    pub interactive: Srgb,
    pub ambient: Srgb,
}

impl<D> BackgroundPainter<D> for SolidBackground
where
    D: DrawTarget,
    D::Color: From<Rgb888>,
{
    fn paint(&mut self, target: &mut D, blit: &BitmapBlit, _viewport: Viewport) -> Result<(), D::Error> {
        let color = match blit.kind {
            BackgroundKind::Interactive => self.interactive,
            BackgroundKind::Ambient => self.ambient,
        };
        Rectangle::new(EgPoint::new(0, 0), Size::new(blit.width, blit.height))
            .into_styled(PrimitiveStyle::with_fill(eg_color::<D::Color>(color)))
            .draw(target)
    }
}

impl<D, S> BackgroundPainter<D> for ScaledBackgrounds<S>
where
    D: DrawTarget,
    S: BitmapScaler,
    S::Bitmap: ImageDrawable<Color = D::Color>,
{
    fn paint(&mut self, target: &mut D, blit: &BitmapBlit, viewport: Viewport) -> Result<(), D::Error> {
        match self.get(blit.kind, viewport) {
            Some(bitmap) => Image::new(bitmap, EgPoint::new(0, 0)).draw(target),
            None => Ok(()),
        }
    }
}

/// Draws every command of `plan` onto `target`, in order.
pub fn draw_plan<D, B>(plan: &RenderPlan, target: &mut D, background: &mut B) -> Result<(), D::Error>
where
    D: DrawTarget,
    D::Color: From<Rgb888>,
    B: BackgroundPainter<D>,
{
    for command in plan {
        match command {
            DrawCommand::Background(blit) => background.paint(target, blit, plan.viewport())?,
            DrawCommand::Tick { tick, paint } => {
                Line::new(eg_point(tick.start), eg_point(tick.end))
                    .into_styled(PrimitiveStyle::with_stroke(eg_color(paint.color), stroke(paint)))
                    .draw(target)?;
            }
            DrawCommand::Hand(hand) => draw_hand(hand, target)?,
            DrawCommand::Circle {
                center,
                radius,
                paint,
            } => {
                Circle::with_center(eg_point(*center), diameter(*radius))
                    .into_styled(primitive_style(paint))
                    .draw(target)?;
            }
        }
    }
    Ok(())
}

fn draw_hand<D>(hand: &HandStroke, target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget,
    D::Color: From<Rgb888>,
{
    let paint = &hand.paint;
    let color = eg_color::<D::Color>(paint.color);
    let base = hand.base();
    let tip = hand.tip();

    match hand.shape {
        HandShape::Line { .. } => Line::new(eg_point(base), eg_point(tip))
            .into_styled(PrimitiveStyle::with_stroke(color, stroke(paint)))
            .draw(target),
        HandShape::RoundRect { corner_radius, .. } => {
            // Cap centers sit `corner_radius` inside the rect's ends.
            let dx = tip.x - base.x;
            let dy = tip.y - base.y;
            let len = libm::hypotf(dx, dy);
            if len <= 2.0 * corner_radius {
                let mid = Point::new((base.x + tip.x) / 2.0, (base.y + tip.y) / 2.0);
                return Circle::with_center(eg_point(mid), diameter(corner_radius))
                    .into_styled(primitive_style(paint))
                    .draw(target);
            }

            let ux = dx / len;
            let uy = dy / len;
            let near = Point::new(base.x + ux * corner_radius, base.y + uy * corner_radius);
            let far = Point::new(tip.x - ux * corner_radius, tip.y - uy * corner_radius);

            match paint.style {
                PaintStyle::Fill => {
                    let width = diameter(corner_radius);
                    Line::new(eg_point(near), eg_point(far))
                        .into_styled(PrimitiveStyle::with_stroke(color, width))
                        .draw(target)?;
                    for end in [near, far] {
                        Circle::with_center(eg_point(end), width)
                            .into_styled(PrimitiveStyle::with_fill(color))
                            .draw(target)?;
                    }
                    Ok(())
                }
                PaintStyle::Stroke => {
                    let style = PrimitiveStyle::with_stroke(color, stroke(paint));
                    let nx = -uy * corner_radius;
                    let ny = ux * corner_radius;
                    for side in [1.0, -1.0] {
                        Line::new(
                            eg_point(Point::new(near.x + nx * side, near.y + ny * side)),
                            eg_point(Point::new(far.x + nx * side, far.y + ny * side)),
                        )
                        .into_styled(style)
                        .draw(target)?;
                    }

                    // embedded-graphics angles run clockwise from +x in screen space.
                    let axis = libm::atan2f(uy, ux).to_degrees();
                    Arc::with_center(eg_point(far), diameter(corner_radius), (axis - 90.0).deg(), 180.0_f32.deg())
                        .into_styled(style)
                        .draw(target)?;
                    Arc::with_center(eg_point(near), diameter(corner_radius), (axis + 90.0).deg(), 180.0_f32.deg())
                        .into_styled(style)
                        .draw(target)
                }
            }
        }
    }
}

fn primitive_style<C: PixelColor + From<Rgb888>>(paint: &Paint) -> PrimitiveStyle<C> {
    match paint.style {
        PaintStyle::Fill => PrimitiveStyle::with_fill(eg_color(paint.color)),
        PaintStyle::Stroke => PrimitiveStyle::with_stroke(eg_color(paint.color), stroke(paint)),
    }
}

fn eg_color<C: From<Rgb888>>(color: Srgb) -> C {
    let (r, g, b) = to_rgb8(color);
    Rgb888::new(r, g, b).into()
}

fn eg_point(point: Point) -> EgPoint {
    EgPoint::new(libm::roundf(point.x) as i32, libm::roundf(point.y) as i32)
}

fn stroke(paint: &Paint) -> u32 {
    libm::roundf(paint.stroke_width).max(1.0) as u32
}

fn diameter(radius: f32) -> u32 {
    libm::roundf(radius * 2.0).max(1.0) as u32
}
