//! SVG charts of the planform, the span-wise laws and the
//! aerodynamic-centre database.

mod charts;
mod common;
mod wing;

pub use charts::{
    multiplot_k2, multiplot_xac_cr, plot_interpolate_k1, plot_interpolate_k2,
    plot_interpolate_xac_cr, plot_k1, plot_k2, plot_xac_cr,
};
pub use wing::{plot_planform, plot_wing_functions};
