//! LaTeX renderings of the worked derivations.

mod latex;
mod workflows;

pub use latex::{fmt_plain, fmt_sig, linear_law_latex, polynomial_latex, Latex};
pub use workflows::{
    aerodynamic_center_workflow, analysis_report, aspect_ratio_workflow, coefficients_workflow,
    data_summary, integral_workflow, mean_chord_workflow, parameters_list, piecewise_system,
    taper_blend_workflow, x_le_mac_workflow, y_mac_workflow,
};
