//! Render plan builder
//!
//! Turns a [`CurveSet`] and a [`ViewConfig`] into a [`RenderPlan`]: per-curve
//! sampled series, axis ranges and labels, and peak annotations. The plan is
//! a plain value rebuilt from scratch on every call; whatever sink draws it
//! only needs series of `(x, y)` points, per-series colors, axis ranges and
//! text annotations.

use crate::curves::{Color, CurveSet};
use crate::planck::{peak_frequency, radiance};
use std::path::Path;

#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("cannot sample the frequency window: {0}")]
    InvalidConfiguration(String),
    #[error("failed to write the render plan to CSV")]
    Csv(#[from] csv::Error),
    #[error("failed to flush the CSV file")]
    Io(#[from] std::io::Error),
    #[error("unknown image format `{0}`, expected `svg` or `png`")]
    UnknownImageFormat(String),
    #[error("failed to draw the render plan: {0}")]
    Draw(String),
}
type Result<T> = std::result::Result<T, RenderError>;

pub const X_LABEL: &str = "Frequency [Hz]";
pub const Y_LABEL: &str = "Planck function [W·sr⁻¹·m⁻²·Hz⁻¹]";
pub const Y_LABEL_NORMALIZED: &str = "Normalized Planck function [1]";

/// Frequency window and sampling resolution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewConfig {
    /// Window start [Hz]
    pub freq_start: f64,
    /// Window end [Hz]; an inverted window is tolerated and swapped
    pub freq_end: f64,
    /// Samples per curve
    pub steps: usize,
    /// Rescale all curves to a common unit peak and label each peak
    pub normalize: bool,
}
impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            freq_start: 1e11,
            freq_end: 1e15,
            steps: 100,
            normalize: false,
        }
    }
}

/// One sampled curve; x-values are offsets from the window start [Hz]
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub points: Vec<(f64, f64)>,
    pub color: Color,
}

/// A text annotation at the given data coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub position: (f64, f64),
    pub text: String,
    pub color: Color,
}

/// Renderer-agnostic description of one redraw
///
/// `x_range` is in absolute frequency while series x-values are offsets
/// from the window start; label x-positions are absolute peak frequencies.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPlan {
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub series: Vec<Series>,
    pub labels: Vec<Label>,
}
impl RenderPlan {
    /// Saves the sampled series to a CSV file
    ///
    /// One `Frequency offset [Hz]` column plus one column per curve, one row
    /// per sample. An empty plan writes just the header row.
    pub fn to_csv<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut wtr = csv::Writer::from_path(path.as_ref())?;
        let mut keys = vec![String::from("Frequency offset [Hz]")];
        keys.extend(self.series.iter().map(|series| series.name.clone()));
        wtr.write_record(&keys)?;
        let samples = self.series.first().map_or(0, |series| series.points.len());
        for k in 0..samples {
            let mut record = vec![format!("{}", self.series[0].points[k].0)];
            record.extend(
                self.series
                    .iter()
                    .map(|series| format!("{}", series.points[k].1)),
            );
            wtr.write_record(&record)?;
        }
        wtr.flush()?;
        Ok(())
    }
}

/// Builds [`RenderPlan`]s from a view configuration
pub struct PlotBuilder {
    config: ViewConfig,
    surface_height: u32,
}
impl Default for PlotBuilder {
    fn default() -> Self {
        Self {
            config: ViewConfig::default(),
            surface_height: 512,
        }
    }
}
impl PlotBuilder {
    pub fn new(config: ViewConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }
    /// Sets the rendering surface height [pixel] used to scale the label
    /// offset above each peak
    pub fn surface_height(self, pixels: u32) -> Self {
        Self {
            surface_height: pixels,
            ..self
        }
    }
    /// Recomputes the full render plan for the given curves
    pub fn build(&self, curves: &CurveSet) -> Result<RenderPlan> {
        let ViewConfig {
            freq_start,
            freq_end,
            steps,
            normalize,
        } = self.config;
        if steps == 0 {
            return Err(RenderError::InvalidConfiguration(
                "steps must be at least 1".into(),
            ));
        }
        if self.surface_height == 0 {
            return Err(RenderError::InvalidConfiguration(
                "surface height must be at least 1 pixel".into(),
            ));
        }
        if !freq_start.is_finite() || !freq_end.is_finite() {
            return Err(RenderError::InvalidConfiguration(format!(
                "frequency window [{},{}] is not finite",
                freq_start, freq_end
            )));
        }
        let (lo, hi) = if freq_start > freq_end {
            (freq_end, freq_start)
        } else {
            (freq_start, freq_end)
        };

        // Tallest peak across the whole set; a set without a positive peak
        // (including the empty set) is left unscaled.
        let factor = if normalize {
            let tallest = curves
                .iter()
                .map(|curve| radiance(curve.temperature, peak_frequency(curve.temperature)))
                .fold(f64::NEG_INFINITY, f64::max);
            if tallest > 0f64 {
                tallest.recip()
            } else {
                1f64
            }
        } else {
            1f64
        };

        let increase = (hi - lo) / steps as f64;
        // The y-axis always includes zero.
        let mut y_bounds = (0f64, 0f64);
        let mut dropped = 0;
        let mut series = Vec::with_capacity(curves.len());
        for curve in curves.iter() {
            let mut points = Vec::with_capacity(steps);
            // The right endpoint at i = steps is never sampled.
            for i in 0..steps {
                let offset = increase * i as f64;
                let value = radiance(curve.temperature, lo + offset) * factor;
                if value.is_finite() {
                    if value < y_bounds.0 {
                        y_bounds.0 = value;
                    }
                    if value > y_bounds.1 {
                        y_bounds.1 = value;
                    }
                } else {
                    dropped += 1;
                }
                points.push((offset, value));
            }
            series.push(Series {
                name: format!("{} K", curve.temperature),
                points,
                color: curve.color,
            });
        }
        if dropped > 0 {
            log::warn!(
                "{} non-finite sample(s) excluded from the y range",
                dropped
            );
        }

        let labels: Vec<Label> = if normalize {
            // Fixed 25-pixel margin above the peak, converted to data units.
            let offset = (y_bounds.1 - y_bounds.0) * 25f64 / self.surface_height as f64;
            curves
                .iter()
                .map(|curve| {
                    let f_peak = peak_frequency(curve.temperature);
                    Label {
                        position: (f_peak, radiance(curve.temperature, f_peak) * factor + offset),
                        text: format!("{} K", curve.temperature),
                        color: curve.color,
                    }
                })
                .collect()
        } else {
            vec![]
        };

        log::info!(
            "render plan: {} series x {} sample(s), {} label(s)",
            series.len(),
            steps,
            labels.len()
        );
        Ok(RenderPlan {
            x_range: (lo, hi),
            // 10% headroom above the tallest curve for the labels
            y_range: if normalize {
                (y_bounds.0, y_bounds.1 * 1.1)
            } else {
                y_bounds
            },
            x_label: X_LABEL,
            y_label: if normalize {
                Y_LABEL_NORMALIZED
            } else {
                Y_LABEL
            },
            series,
            labels,
        })
    }
}
