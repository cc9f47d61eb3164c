use std::f64::consts::PI;

use super::constants::STATION_TOLERANCE;

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(start: f64, end: f64, factor: f64) -> f64 {
    start + (end - start) * factor.clamp(0.0, 1.0)
}

/// Prandtl-Glauert compressibility factor, `None` at or above M = 1.
pub fn prandtl_glauert_beta(mach: f64) -> Option<f64> {
    if !mach.is_finite() || mach.abs() >= 1.0 {
        return None;
    }
    Some((1.0 - mach * mach).sqrt())
}

/// `n` evenly spaced values from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

pub fn is_strictly_increasing(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[1] > w[0])
}

/// Locate `x` on an ascending grid.
///
/// Returns the index of the lower node and the fractional position inside
/// the cell, or `None` when `x` lies outside the grid.
pub fn bracket(grid: &[f64], x: f64) -> Option<(usize, f64)> {
    let (&first, &last) = (grid.first()?, grid.last()?);
    if x.is_nan() || x < first || x > last {
        return None;
    }
    if grid.len() == 1 {
        return Some((0, 0.0));
    }
    let upper = grid
        .iter()
        .position(|&g| g >= x)
        .unwrap_or(grid.len() - 1)
        .max(1);
    let lower = upper - 1;
    let width = grid[upper] - grid[lower];
    let fraction = if width > 0.0 {
        (x - grid[lower]) / width
    } else {
        0.0
    };
    Some((lower, fraction))
}

/// Like [`bracket`], but values outside the grid are pulled onto the nearest edge.
pub fn bracket_clamped(grid: &[f64], x: f64) -> Option<(usize, f64)> {
    let (&first, &last) = (grid.first()?, grid.last()?);
    if x.is_nan() {
        return None;
    }
    bracket(grid, x.clamp(first, last))
}

/// Approximate equality for span stations.
#[inline]
pub fn stations_coincide(a: f64, b: f64) -> bool {
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= STATION_TOLERANCE * scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_angle_conversion() {
        assert_relative_eq!(deg_to_rad(180.0), PI);
        assert_relative_eq!(rad_to_deg(deg_to_rad(27.5)), 27.5, epsilon = 1e-12);
    }

    #[test]
    fn test_linspace_includes_end_points() {
        let values = linspace(0.0, 2.0, 5);
        assert_eq!(values, vec![0.0, 0.5, 1.0, 1.5, 2.0]);
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 4.0, 1), vec![3.0]);
    }

    #[test]
    fn test_bracket_inside_and_outside() {
        let grid = [0.0, 1.0, 3.0];
        assert_eq!(bracket(&grid, 0.0), Some((0, 0.0)));
        assert_eq!(bracket(&grid, 2.0), Some((1, 0.5)));
        assert_eq!(bracket(&grid, 3.0), Some((1, 1.0)));
        assert_eq!(bracket(&grid, 3.5), None);
        assert_eq!(bracket(&grid, f64::NAN), None);
        assert_eq!(bracket_clamped(&grid, -1.0), Some((0, 0.0)));
        assert_eq!(bracket_clamped(&grid, 9.0), Some((1, 1.0)));
    }

    #[test]
    fn test_prandtl_glauert() {
        assert_relative_eq!(prandtl_glauert_beta(0.6).unwrap(), 0.8, epsilon = 1e-12);
        assert!(prandtl_glauert_beta(1.0).is_none());
    }
}
