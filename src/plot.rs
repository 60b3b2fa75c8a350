//! Reference render sink
//!
//! Draws a [`RenderPlan`] to an SVG or PNG file with `plotters`. The plan is
//! renderer-agnostic; this sink is just the crate's own consumer of it.

use crate::render::{RenderError, RenderPlan};
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use std::path::Path;

type Result<T> = std::result::Result<T, RenderError>;

impl RenderPlan {
    /// Draws the plan to the given file, picking the backend from the
    /// extension (`.svg` or `.png`)
    pub fn plot<P: AsRef<Path>>(&self, path: P, width: u32, height: u32) -> Result<()> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("svg") => self.draw(SVGBackend::new(path, (width, height)).into_drawing_area()),
            Some("png") => self.draw(BitMapBackend::new(path, (width, height)).into_drawing_area()),
            ext => Err(RenderError::UnknownImageFormat(
                ext.unwrap_or_default().to_string(),
            )),
        }
    }

    fn draw<DB: DrawingBackend>(&self, area: DrawingArea<DB, Shift>) -> Result<()> {
        let draw_error = |e: DrawingAreaErrorKind<DB::ErrorType>| RenderError::Draw(e.to_string());

        // series x-values are offsets from the window start
        let x_span = self.x_range.1 - self.x_range.0;
        let (mut y_lo, mut y_hi) = self.y_range;
        // plotters cannot build a chart over an empty range
        let x_hi = if x_span > 0f64 { x_span } else { 1f64 };
        if y_hi <= y_lo {
            y_hi = y_lo + 1f64;
        }

        area.fill(&WHITE).map_err(draw_error)?;
        let mut chart = ChartBuilder::on(&area)
            .set_label_area_size(LabelAreaPosition::Left, 60)
            .set_label_area_size(LabelAreaPosition::Bottom, 40)
            .margin(10)
            .build_cartesian_2d(0f64..x_hi, y_lo..y_hi)
            .map_err(draw_error)?;
        chart
            .configure_mesh()
            .x_desc(self.x_label)
            .y_desc(self.y_label)
            .draw()
            .map_err(draw_error)?;

        for series in &self.series {
            let rgb = RGBColor(series.color.r, series.color.g, series.color.b);
            chart
                .draw_series(LineSeries::new(series.points.iter().copied(), &rgb))
                .map_err(draw_error)?
                .label(&series.name)
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], rgb));
        }
        for label in &self.labels {
            let rgb = RGBColor(label.color.r, label.color.g, label.color.b);
            // labels carry absolute peak frequencies; shift them into the
            // offset axis and keep them inside the window
            let x = (label.position.0 - self.x_range.0).clamp(0f64, x_hi);
            chart
                .draw_series(std::iter::once(Text::new(
                    label.text.clone(),
                    (x, label.position.1),
                    ("sans-serif", 15).into_font().color(&rgb),
                )))
                .map_err(draw_error)?;
        }
        if !self.series.is_empty() {
            chart
                .configure_series_labels()
                .border_style(&BLACK)
                .background_style(&WHITE.mix(0.8))
                .position(SeriesLabelPosition::UpperRight)
                .draw()
                .map_err(draw_error)?;
        }
        area.present().map_err(draw_error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::curves::{Color, CurveSet};
    use crate::render::{PlotBuilder, RenderError, ViewConfig};

    #[test]
    fn unknown_extension_is_rejected() {
        let plan = PlotBuilder::default().build(&CurveSet::default()).unwrap();
        assert!(matches!(
            plan.plot("plan.pdf", 768, 512),
            Err(RenderError::UnknownImageFormat(_))
        ));
    }

    #[test]
    fn svg_sink_draws_a_normalized_plan() {
        let dir = std::env::temp_dir().join("planck-curves-plot-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("plan.svg");
        let mut curves = CurveSet::default();
        curves.add(100f64, Color::new(255, 0, 0)).unwrap();
        curves.add(300f64, Color::new(0, 0, 255)).unwrap();
        let plan = PlotBuilder::new(ViewConfig {
            normalize: true,
            ..Default::default()
        })
        .build(&curves)
        .unwrap();
        plan.plot(&path, 768, 512).unwrap();
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn svg_sink_draws_an_empty_plan() {
        let dir = std::env::temp_dir().join("planck-curves-plot-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("empty.svg");
        let plan = PlotBuilder::default().build(&CurveSet::default()).unwrap();
        plan.plot(&path, 768, 512).unwrap();
    }
}
