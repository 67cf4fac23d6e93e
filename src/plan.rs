//! Render plans: the ordered draw commands produced for one frame.

use crate::geometry::{Point, Rotation, Tick};
use crate::types::{Hand, Paint, RenderError, Viewport};
use heapless::Vec;

/// Maximum number of commands in a plan.
///
/// One background, 60 ticks, three hands and the center dot, with headroom.
pub const PLAN_CAPACITY: usize = 72;

/// Which background bitmap a blit refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BackgroundKind {
    /// Full-color interactive background.
    Interactive,
    /// Reduced-power ambient background.
    Ambient,
}

/// A background blit at the viewport origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BitmapBlit {
    pub kind: BackgroundKind,
    /// Scaled width in pixels.
    pub width: u32,
    /// Scaled height in pixels.
    pub height: u32,
}

/// Geometry of a hand in its unrotated (12 o'clock) frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HandShape {
    /// Axis-aligned rounded rectangle before rotation.
    RoundRect {
        left: f32,
        top: f32,
        right: f32,
        bottom: f32,
        corner_radius: f32,
    },
    /// Straight segment before rotation.
    Line { start: Point, end: Point },
}

/// A hand drawn inside a rotated frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandStroke {
    pub hand: Hand,
    pub shape: HandShape,
    /// Cumulative rotation of the frame the shape is drawn in.
    pub transform: Rotation,
    pub paint: Paint,
}

impl HandStroke {
    /// Center-line endpoints in the unrotated frame: (base, tip).
    fn local_axis(&self) -> (Point, Point) {
        match self.shape {
            HandShape::RoundRect {
                left,
                top,
                right,
                bottom,
                ..
            } => {
                let x = (left + right) / 2.0;
                (Point::new(x, bottom), Point::new(x, top))
            }
            HandShape::Line { start, end } => (start, end),
        }
    }

    /// Screen-space end nearest the center.
    pub fn base(&self) -> Point {
        self.transform.apply(self.local_axis().0)
    }

    /// Screen-space far end of the hand.
    pub fn tip(&self) -> Point {
        self.transform.apply(self.local_axis().1)
    }

    /// Rotation in degrees clockwise from 12 o'clock.
    pub fn rotation(&self) -> f32 {
        self.transform.degrees()
    }
}

/// One draw primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Background(BitmapBlit),
    Tick { tick: Tick, paint: Paint },
    Hand(HandStroke),
    Circle {
        center: Point,
        radius: f32,
        paint: Paint,
    },
}

/// Ordered draw commands for a single frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPlan {
    viewport: Viewport,
    commands: Vec<DrawCommand, PLAN_CAPACITY>,
}

impl RenderPlan {
    pub(crate) fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            commands: Vec::new(),
        }
    }

    /// Viewport the plan was rendered for.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub(crate) fn push(&mut self, command: DrawCommand) -> Result<(), RenderError> {
        self.commands
            .push(command)
            .map_err(|_| RenderError::CapacityExceeded)
    }

    /// All commands, in drawing order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn iter(&self) -> core::slice::Iter<'_, DrawCommand> {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// The background blit, if the plan has one.
    pub fn background(&self) -> Option<&BitmapBlit> {
        self.commands.iter().find_map(|c| match c {
            DrawCommand::Background(blit) => Some(blit),
            _ => None,
        })
    }

    /// Tick marks in drawing order.
    pub fn ticks(&self) -> impl Iterator<Item = &Tick> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Tick { tick, .. } => Some(tick),
            _ => None,
        })
    }

    /// Hands in drawing order.
    pub fn hands(&self) -> impl Iterator<Item = &HandStroke> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Hand(stroke) => Some(stroke),
            _ => None,
        })
    }

    /// The stroke for `hand`, if the plan draws it.
    pub fn hand(&self, hand: Hand) -> Option<&HandStroke> {
        self.hands().find(|s| s.hand == hand)
    }
}

impl<'a> IntoIterator for &'a RenderPlan {
    type Item = &'a DrawCommand;
    type IntoIter = core::slice::Iter<'a, DrawCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}
