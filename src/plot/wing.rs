use std::path::Path;

use plotters::prelude::*;
use tracing::info;

use super::common::{bounds, draw_curves, Axes, Curve, CAPTION_FONT, PANEL_FONT};
use crate::config::WingConfig;
use crate::integrals::WingAnalysis;
use crate::utils::{rad_to_deg, WingError, DEFAULT_SAMPLES, PLOT_SIZE};

/// Half planform with its centre line, quarter-chord line, mean aerodynamic
/// chord and aerodynamic centre.
pub fn plot_planform(
    config: &WingConfig,
    analysis: &WingAnalysis,
    path: &Path,
) -> Result<(), WingError> {
    let planform = &config.planform;
    let leading_edge = planform.leading_edge_law()?.station_values();
    let trailing_edge = planform.trailing_edge_law()?.station_values();
    let quarter_chord = planform.quarter_chord_law()?.station_values();

    let mut outline = leading_edge.clone();
    outline.extend(trailing_edge.iter().rev().copied());
    outline.push(leading_edge[0]);

    let y_mac = analysis.y_mac.value;
    let x_le_mac = analysis.x_le_mac.value;
    let mac = [
        (y_mac, x_le_mac),
        (y_mac, x_le_mac + analysis.mean_aerodynamic_chord.value),
    ];

    let (y_range, x_range) = bounds(outline.iter().chain(mac.iter()))?;
    let centre_line = [(0.0, x_range.start), (0.0, x_range.end)];

    let root = SVGBackend::new(path, PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let caption = format!("{} planform", config.name);
    let mut chart = ChartBuilder::on(&root)
        .caption(caption, CAPTION_FONT)
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(55)
        .build_cartesian_2d(y_range, x_range)?;

    chart
        .configure_mesh()
        .x_desc("y (m)")
        .y_desc("X (m), aft of the root leading edge")
        .draw()?;

    chart
        .draw_series(LineSeries::new(outline, BLUE.stroke_width(2)))?
        .label("planform")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE.stroke_width(2)));
    chart.draw_series(std::iter::once(PathElement::new(
        centre_line.to_vec(),
        BLACK.mix(0.6).stroke_width(1),
    )))?;
    chart
        .draw_series(LineSeries::new(quarter_chord, GREEN.stroke_width(1)))?
        .label("c/4 line")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], GREEN.stroke_width(1)));
    chart
        .draw_series(LineSeries::new(mac, RED.stroke_width(3)))?
        .label("MAC")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.stroke_width(3)));
    chart.draw_series(std::iter::once(Circle::new(
        (y_mac, analysis.x_ac),
        5,
        RED.filled(),
    )))?;

    chart
        .configure_series_labels()
        .border_style(BLACK.mix(0.4))
        .background_style(WHITE.mix(0.8))
        .draw()?;
    root.present()?;
    info!("Planform plot written to {}", path.display());
    Ok(())
}

/// Chord, leading edge, twist and section zero-lift angle along the semispan.
pub fn plot_wing_functions(config: &WingConfig, path: &Path) -> Result<(), WingError> {
    let planform = &config.planform;
    let laws = &config.laws;
    let to_deg = |points: Vec<(f64, f64)>| -> Vec<(f64, f64)> {
        points.into_iter().map(|(y, v)| (y, rad_to_deg(v))).collect()
    };

    let panels = [
        (
            "Chord",
            "c (m)",
            planform.chord_law()?.sample(DEFAULT_SAMPLES),
        ),
        (
            "Leading edge",
            "X_le (m)",
            planform.leading_edge_law()?.sample(DEFAULT_SAMPLES),
        ),
        (
            "Geometric twist",
            "epsilon (deg)",
            to_deg(laws.twist_law(planform)?.sample(DEFAULT_SAMPLES)),
        ),
        (
            "Section zero-lift angle",
            "alpha_0l (deg)",
            to_deg(laws.zero_lift_law(planform)?.sample(DEFAULT_SAMPLES)),
        ),
    ];

    let root = SVGBackend::new(path, PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let areas = root.split_evenly((2, 2));
    for (area, (caption, y_desc, points)) in areas.iter().zip(panels) {
        let axes = Axes {
            caption,
            x_desc: "y (m)",
            y_desc,
        };
        draw_curves(area, axes, PANEL_FONT, &[Curve::new("", points)], None)?;
    }
    root.present()?;
    info!("Span-wise laws plot written to {}", path.display());
    Ok(())
}
