use std::ops::Range;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::utils::WingError;

pub(crate) const CAPTION_FONT: (&'static str, u32) = ("sans-serif", 24);
pub(crate) const PANEL_FONT: (&'static str, u32) = ("sans-serif", 18);

/// One labelled curve of a chart.
#[derive(Debug, Clone)]
pub(crate) struct Curve {
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

impl Curve {
    pub fn new(label: impl Into<String>, points: Vec<(f64, f64)>) -> Self {
        Self {
            label: label.into(),
            points,
        }
    }
}

/// Point read off a chart, marked with dashed help lines to both axes.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Marker {
    pub x: f64,
    pub y: f64,
}

/// Axis descriptions and caption of one panel.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Axes<'a> {
    pub caption: &'a str,
    pub x_desc: &'a str,
    pub y_desc: &'a str,
}

/// Padded plotting ranges enclosing every point.
pub(crate) fn bounds<'a, I>(points: I) -> Result<(Range<f64>, Range<f64>), WingError>
where
    I: IntoIterator<Item = &'a (f64, f64)>,
{
    let mut x = (f64::INFINITY, f64::NEG_INFINITY);
    let mut y = (f64::INFINITY, f64::NEG_INFINITY);
    for &(px, py) in points {
        if !px.is_finite() || !py.is_finite() {
            continue;
        }
        x = (x.0.min(px), x.1.max(px));
        y = (y.0.min(py), y.1.max(py));
    }
    if x.0 > x.1 || y.0 > y.1 {
        return Err(WingError::Plot("nothing to plot".to_string()));
    }
    Ok((padded(x.0, x.1), padded(y.0, y.1)))
}

fn padded(min: f64, max: f64) -> Range<f64> {
    let width = max - min;
    let pad = if width > 0.0 {
        0.05 * width
    } else {
        0.5 * min.abs().max(1.0)
    };
    (min - pad)..(max + pad)
}

/// Dashed line from `from` to `to`, as `dashes` separate strokes.
pub(crate) fn dashed(
    from: (f64, f64),
    to: (f64, f64),
    dashes: usize,
) -> Vec<Vec<(f64, f64)>> {
    let pieces = (2 * dashes.max(1) - 1) as f64;
    let at = |k: f64| {
        let t = k / pieces;
        (from.0 + (to.0 - from.0) * t, from.1 + (to.1 - from.1) * t)
    };
    (0..dashes.max(1))
        .map(|i| {
            let start = 2.0 * i as f64;
            vec![at(start), at(start + 1.0)]
        })
        .collect()
}

/// Draws a family of curves on `area`, with an optional interpolated point.
pub(crate) fn draw_curves<DB>(
    area: &DrawingArea<DB, Shift>,
    axes: Axes<'_>,
    font: (&'static str, u32),
    curves: &[Curve],
    marker: Option<Marker>,
) -> Result<(), WingError>
where
    DB: DrawingBackend,
{
    let mut all: Vec<(f64, f64)> = curves.iter().flat_map(|c| c.points.clone()).collect();
    if let Some(m) = marker {
        all.push((m.x, m.y));
    }
    let (x_range, y_range) = bounds(&all)?;
    let (x_min, y_min) = (x_range.start, y_range.start);

    let mut chart = ChartBuilder::on(area)
        .caption(axes.caption, font)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(55)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .x_desc(axes.x_desc)
        .y_desc(axes.y_desc)
        .draw()?;

    for (i, curve) in curves.iter().enumerate() {
        let color = Palette99::pick(i).mix(0.9);
        let series = chart.draw_series(LineSeries::new(
            curve.points.iter().copied(),
            color.stroke_width(2),
        ))?;
        if !curve.label.is_empty() {
            series.label(curve.label.clone()).legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });
        }
    }

    if let Some(m) = marker {
        let help = dashed((m.x, y_min), (m.x, m.y), 12)
            .into_iter()
            .chain(dashed((x_min, m.y), (m.x, m.y), 12));
        chart.draw_series(
            help.map(|dash| PathElement::new(dash, BLACK.mix(0.7).stroke_width(1))),
        )?;
        chart.draw_series(std::iter::once(Circle::new((m.x, m.y), 5, RED.filled())))?;
    }

    if curves.iter().any(|c| !c.label.is_empty()) {
        chart
            .configure_series_labels()
            .border_style(BLACK.mix(0.4))
            .background_style(WHITE.mix(0.8))
            .draw()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_bounds_pad_both_axes() {
        let (x, y) = bounds(&[(0.0, 1.0), (10.0, 3.0)]).unwrap();
        assert_relative_eq!(x.start, -0.5, epsilon = 1e-12);
        assert_relative_eq!(x.end, 10.5, epsilon = 1e-12);
        assert_relative_eq!(y.start, 0.9, epsilon = 1e-12);
        assert_relative_eq!(y.end, 3.1, epsilon = 1e-12);
    }

    #[test]
    fn test_bounds_widen_flat_curve() {
        let (_, y) = bounds(&[(0.0, 2.0), (1.0, 2.0)]).unwrap();
        assert!(y.start < 2.0 && y.end > 2.0);
    }

    #[test]
    fn test_bounds_reject_empty_input() {
        assert!(matches!(bounds(&Vec::<(f64, f64)>::new()), Err(WingError::Plot(_))));
        assert!(bounds(&[(f64::NAN, 1.0)]).is_err());
    }

    #[test]
    fn test_dashes_cover_the_line() {
        let dashes = dashed((0.0, 0.0), (0.0, 7.0), 4);
        assert_eq!(dashes.len(), 4);
        assert_relative_eq!(dashes[0][0].1, 0.0);
        assert_relative_eq!(dashes[0][1].1, 1.0);
        assert_relative_eq!(dashes[3][1].1, 7.0);
    }
}
