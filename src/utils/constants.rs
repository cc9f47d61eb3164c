pub const DEG_PER_RAD: f64 = 180.0 / std::f64::consts::PI;

/// Relative tolerance used when merging span stations of different laws.
pub const STATION_TOLERANCE: f64 = 1e-9;

// Sweep limits (radians), tan() blows up at +/- 90 deg
pub const MAX_SWEEP: f64 = 80.0 / DEG_PER_RAD;
pub const MIN_SWEEP: f64 = -80.0 / DEG_PER_RAD;

pub const DEFAULT_SAMPLES: usize = 101; // Samples per law when plotting

// Significant digits used in the LaTeX workflows
pub const SIG_DIGITS_COARSE: usize = 3;
pub const SIG_DIGITS_FINE: usize = 4;

pub const PLOT_SIZE: (u32, u32) = (1000, 600);
pub const MULTIPLOT_SIZE: (u32, u32) = (900, 1100);

/// Environment variable overriding the aerodynamic-centre database location.
pub const DATABASE_ENV_VAR: &str = "WING_AERO_DATABASE";
pub const DATABASE_FILE_NAME: &str = "wing_aerodynamic_center.json";
