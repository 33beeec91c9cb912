use anyhow::{bail, Context, Result};
use plotters::prelude::*;
use std::ops::RangeInclusive;
use std::path::Path;
use tracing::info;

pub struct Series {
    pub label: String,
    pub color: RGBColor,
    pub points: Vec<(i32, f64)>,
    /// Drawn wide and opaque; everything else is thin and translucent.
    pub emphasis: bool,
}

/// A year-on-x line chart written as SVG.
pub struct LineChart {
    pub title: Option<String>,
    pub x_desc: Option<String>,
    pub y_desc: String,
    pub size: (u32, u32),
    pub years: RangeInclusive<i32>,
    pub series: Vec<Series>,
}

impl LineChart {
    pub fn new(y_desc: impl Into<String>, years: RangeInclusive<i32>) -> Self {
        Self {
            title: None,
            x_desc: None,
            y_desc: y_desc.into(),
            size: (1000, 600),
            years,
            series: Vec::new(),
        }
    }

    fn y_max(&self) -> f64 {
        let max = self
            .series
            .iter()
            .flat_map(|s| s.points.iter().map(|&(_, y)| y))
            .filter(|y| y.is_finite())
            .fold(0.0f64, f64::max);
        if max > 0.0 {
            max * 1.1
        } else {
            1.0
        }
    }

    pub fn render(&self, path: &Path) -> Result<()> {
        let x_start = *self.years.start();
        let x_end = (*self.years.end()).max(x_start + 1);
        let y_max = self.y_max();

        let root = SVGBackend::new(path, self.size).into_drawing_area();
        root.fill(&WHITE)?;

        let mut builder = ChartBuilder::on(&root);
        builder.margin(12).x_label_area_size(46).y_label_area_size(68);
        if let Some(title) = &self.title {
            builder.caption(title, ("serif", 32));
        }
        let mut chart = builder.build_cartesian_2d(x_start..x_end, 0.0f64..y_max)?;

        let mut mesh = chart.configure_mesh();
        mesh.disable_mesh().y_desc(self.y_desc.as_str());
        if let Some(x_desc) = &self.x_desc {
            mesh.x_desc(x_desc.as_str());
        }
        mesh.draw()?;

        for series in &self.series {
            let (alpha, width, marker): (f64, u32, u32) = if series.emphasis {
                (1.0, 4, 5)
            } else {
                (0.5, 2, 3)
            };
            let style = series.color.mix(alpha).stroke_width(width);

            chart
                .draw_series(LineSeries::new(series.points.iter().copied(), style))?
                .label(series.label.as_str())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
            chart.draw_series(
                series
                    .points
                    .iter()
                    .map(|&point| Circle::new(point, marker, style.filled())),
            )?;
        }

        if !self.series.is_empty() {
            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::UpperLeft)
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK)
                .draw()?;
        }

        root.present()
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Wrote chart {}", path.display());
        Ok(())
    }
}

/// Parses a `#rrggbb` color.
pub fn parse_color(hex: &str) -> Result<RGBColor> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.is_ascii() {
        bail!("Invalid color {}", hex);
    }
    let channel = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16).with_context(|| format!("Invalid color {}", hex))
    };
    Ok(RGBColor(channel(0)?, channel(2)?, channel(4)?))
}
