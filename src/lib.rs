//! Blackbody emission curves: sample Planck's law for a set of temperatures
//! over a frequency window and assemble a renderer-agnostic render plan.

pub mod curves;
mod error;
pub mod planck;
#[cfg(feature = "plot")]
mod plot;
pub mod render;

pub use curves::{Color, Curve, CurveError, CurveSet};
pub use error::Error;
pub use render::{Label, PlotBuilder, RenderError, RenderPlan, Series, ViewConfig};
