//! Aggregate wing quantities from exact span integrals.

mod analysis;
mod result;
mod wing;

pub use analysis::WingAnalysis;
pub use result::{IntegralResult, Quantity, Unit};
pub use wing::{
    cm_ac_additional, cm_ac_basic, mean_aerodynamic_chord, mean_lift_slope, mean_thickness,
    mean_zero_lift_angle, reference_area, x_le_mac, y_mac, zero_lift_angle,
};
