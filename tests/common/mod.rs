mod assertions;
mod fixtures;

// Re-export
pub use assertions::{assert_integral_consistent, assert_segments_contiguous};
pub use fixtures::*;
