#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`PowerStateMachine`**: Tracks ambient mode, low-bit-ambient capability and visibility
//! - **`RenderDetail`**: How much detail the power state allows (`Full` or `Reduced`)
//! - **`ClockRenderer`**: Turns a time sample and viewport into a `RenderPlan`
//! - **`RenderPlan`**: Ordered draw commands (background, 60 ticks, hands, center dot)
//! - **`TickTimer`**: Keeps at most one redraw callback pending, aligned to second boundaries
//! - **`WatchFace`**: Engine that receives host notifications and drives all of the above
//! - **`TimeSource`**, **`Scheduler`**, **`RedrawSink`**: Traits to implement for your host
//! - **`FaceConfig`**: Colors, dimensions and background sizes, built and validated up front
//!
//! Colors are `Srgb<f32>` (0.0-1.0 range). Angles are degrees clockwise from 12 o'clock.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

mod fmt;

pub mod background;
pub mod colors;
pub mod command;
pub mod config;
#[cfg(feature = "embedded-graphics")]
pub mod display;
pub mod geometry;
pub mod plan;
pub mod power;
pub mod renderer;
pub mod scheduler;
pub mod time;
pub mod types;
pub mod watchface;

pub use background::{BitmapScaler, ScaledBackgrounds};
pub use command::HostEvent;
pub use config::{BitmapSize, ConfigError, FaceConfig, FaceConfigBuilder};
pub use geometry::{HandRotations, Point, Rotation, Tick};
pub use plan::{BackgroundKind, BitmapBlit, DrawCommand, HandShape, HandStroke, RenderPlan};
pub use power::{AmbientTransition, PowerPhase, PowerState, PowerStateMachine};
pub use renderer::ClockRenderer;
pub use scheduler::{ScheduleError, Scheduler, TickTimer, next_tick_delay};
pub use time::{TimeDuration, TimeError, TimeSource, WallClockSample};
pub use types::{Hand, Paint, PaintStyle, RenderDetail, RenderError, Shadow, Viewport};
pub use watchface::{EngineError, RedrawSink, WatchFace};
