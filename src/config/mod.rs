mod loader;
mod wing;

pub use loader::{ConfigError, RawWingConfig};
pub use wing::{WingConfig, WingSource, WingType};
