//! Easel Core: control-point editing for curves and colour ramps.
//!
//! This crate contains the curve and gradient models, their sampling, and the
//! pointer interaction engine that edits them. Drawing and event delivery are
//! left to the host through the [`RenderSurface`] and [`InputSurface`] seams.
//! No windowing or GPU dependencies.

pub mod color;
pub mod config;
pub mod curve;
pub mod error;
pub mod gradient;
pub mod input;
pub mod interaction;
pub mod lut;
pub mod sampler;
pub mod sequence;
pub mod surface;

// Re-exports for convenience.
pub use color::HexColor;
pub use config::EditorConfig;
pub use curve::{ControlPoint, CurveModel};
pub use error::EaselError;
pub use gradient::{ColorStop, GradientModel};
pub use input::{CursorHint, PointerButton, PointerEvent, Viewport};
pub use interaction::{
    ChangeListener, CurveEditor, EditTarget, Editor, GradientEditor, InteractionState,
    RenderSurface, WidgetView,
};
pub use lut::{CurveLut, GradientLut};
pub use surface::{InputSurface, PointerTarget, SharedTarget};
