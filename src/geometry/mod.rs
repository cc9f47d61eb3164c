mod equivalent;
mod planform;
mod sections;

pub use equivalent::EquivalentWing;
pub use planform::{
    aspect_ratio, mean_aerodynamic_chord_trapezoidal, x_le_mac_trapezoidal, y_mac_trapezoidal,
    WingPlanform,
};
pub use sections::{SpanwiseLaws, StationValues};
