use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

use super::DatabaseError;
use crate::utils::{bracket, bracket_clamped, is_strictly_increasing, lerp};

/// Curve `data[i]` tabulated against `var_0[i]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTable1D")]
pub struct Table1D {
    pub var_0: Vec<f64>,
    pub data: Vec<f64>,
}

/// Table as read from a file, before its shape is checked.
#[derive(Debug, Deserialize)]
pub(super) struct RawTable1D {
    var_0: Vec<f64>,
    data: Vec<f64>,
}

impl RawTable1D {
    pub(super) fn checked(self, table: &str) -> Result<Table1D, DatabaseError> {
        let checked = Table1D {
            var_0: self.var_0,
            data: self.data,
        };
        checked.validate(table)?;
        Ok(checked)
    }
}

impl TryFrom<RawTable1D> for Table1D {
    type Error = DatabaseError;

    fn try_from(raw: RawTable1D) -> Result<Self, Self::Error> {
        raw.checked("1-D table")
    }
}

impl Table1D {
    pub fn validate(&self, table: &str) -> Result<(), DatabaseError> {
        check_axis(table, "var_0", &self.var_0)?;
        if self.data.len() != self.var_0.len() {
            return Err(DatabaseError::Shape(format!(
                "{}: {} values for {} abscissae",
                table,
                self.data.len(),
                self.var_0.len()
            )));
        }
        if let Some(i) = self.data.iter().position(|v| !v.is_finite()) {
            return Err(DatabaseError::Shape(format!(
                "{}: non-finite value at index {}",
                table, i
            )));
        }
        Ok(())
    }

    /// Linear interpolation; abscissae outside the table are an error.
    pub fn interpolate(&self, table: &str, x: f64) -> Result<f64, DatabaseError> {
        let (i, t) = bracket(&self.var_0, x)
            .ok_or_else(|| out_of_range(table, "var_0", x, &self.var_0))?;
        Ok(lerp(self.data[i], self.data[i + 1], t))
    }
}

/// Family of curves tabulated on a `(var_2, var_1)` grid for each `var_0`.
///
/// `data[i2][i1][j0]` is the value at `var_2[i2]`, `var_1[i1]`, `var_0[j0]`.
/// `var_0` is the taper ratio for every table of the aerodynamic-centre
/// dataset, `var_2` the abscissa of the plotted curves and `var_1` the
/// parameter distinguishing them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTable3D")]
pub struct Table3D {
    pub var_0: Vec<f64>,
    pub var_1: Vec<f64>,
    pub var_2: Vec<f64>,
    pub data: Vec<Vec<Vec<f64>>>,
}

#[derive(Debug, Deserialize)]
pub(super) struct RawTable3D {
    var_0: Vec<f64>,
    var_1: Vec<f64>,
    var_2: Vec<f64>,
    data: Vec<Vec<Vec<f64>>>,
}

impl RawTable3D {
    pub(super) fn checked(self, table: &str) -> Result<Table3D, DatabaseError> {
        let checked = Table3D {
            var_0: self.var_0,
            var_1: self.var_1,
            var_2: self.var_2,
            data: self.data,
        };
        checked.validate(table)?;
        Ok(checked)
    }
}

impl TryFrom<RawTable3D> for Table3D {
    type Error = DatabaseError;

    fn try_from(raw: RawTable3D) -> Result<Self, Self::Error> {
        raw.checked("3-D table")
    }
}

impl Table3D {
    pub fn validate(&self, table: &str) -> Result<(), DatabaseError> {
        check_axis(table, "var_0", &self.var_0)?;
        check_axis(table, "var_1", &self.var_1)?;
        check_axis(table, "var_2", &self.var_2)?;

        if self.data.len() != self.var_2.len() {
            return Err(DatabaseError::Shape(format!(
                "{}: {} rows for {} var_2 values",
                table,
                self.data.len(),
                self.var_2.len()
            )));
        }
        for (i2, row) in self.data.iter().enumerate() {
            if row.len() != self.var_1.len() {
                return Err(DatabaseError::Shape(format!(
                    "{}: row {} has {} columns, expected {}",
                    table,
                    i2,
                    row.len(),
                    self.var_1.len()
                )));
            }
            for (i1, values) in row.iter().enumerate() {
                if values.len() != self.var_0.len() {
                    return Err(DatabaseError::Shape(format!(
                        "{}: cell ({}, {}) has {} slices, expected {}",
                        table,
                        i2,
                        i1,
                        values.len(),
                        self.var_0.len()
                    )));
                }
                if values.iter().any(|v| !v.is_finite()) {
                    return Err(DatabaseError::Shape(format!(
                        "{}: non-finite value in cell ({}, {})",
                        table, i2, i1
                    )));
                }
            }
        }
        Ok(())
    }

    pub fn shape(&self) -> (usize, usize, usize) {
        (self.var_2.len(), self.var_1.len(), self.var_0.len())
    }

    pub fn slice_count(&self) -> usize {
        self.var_0.len()
    }

    /// Grid of slice `j`, rows along `var_2` and columns along `var_1`.
    pub fn slice(&self, table: &str, j: usize) -> Result<DMatrix<f64>, DatabaseError> {
        if j >= self.var_0.len() {
            return Err(DatabaseError::InvalidIndex {
                table: table.to_string(),
                index: j,
                len: self.var_0.len(),
            });
        }
        Ok(DMatrix::from_fn(self.var_2.len(), self.var_1.len(), |r, c| {
            self.data[r][c][j]
        }))
    }

    /// Curve of slice `j` at `var_1[i1]`, as `(var_2, value)` points.
    pub fn curve(&self, table: &str, j: usize, i1: usize) -> Result<Vec<(f64, f64)>, DatabaseError> {
        let slice = self.slice(table, j)?;
        if i1 >= self.var_1.len() {
            return Err(DatabaseError::InvalidIndex {
                table: table.to_string(),
                index: i1,
                len: self.var_1.len(),
            });
        }
        Ok(self
            .var_2
            .iter()
            .zip(slice.column(i1).iter())
            .map(|(&x, &v)| (x, v))
            .collect())
    }

    /// Bilinear interpolation on slice `j`.
    ///
    /// Points outside the grid take the value on its nearest edge.
    pub fn interpolate_slice(
        &self,
        table: &str,
        j: usize,
        x2: f64,
        x1: f64,
    ) -> Result<f64, DatabaseError> {
        let slice = self.slice(table, j)?;
        let (r, tr) = bracket_clamped(&self.var_2, x2)
            .ok_or_else(|| out_of_range(table, "var_2", x2, &self.var_2))?;
        let (c, tc) = bracket_clamped(&self.var_1, x1)
            .ok_or_else(|| out_of_range(table, "var_1", x1, &self.var_1))?;

        let lower = lerp(slice[(r, c)], slice[(r, c + 1)], tc);
        let upper = lerp(slice[(r + 1, c)], slice[(r + 1, c + 1)], tc);
        Ok(lerp(lower, upper, tr))
    }
}

fn check_axis(table: &str, name: &str, axis: &[f64]) -> Result<(), DatabaseError> {
    if axis.len() < 2 {
        return Err(DatabaseError::Shape(format!(
            "{}: {} needs at least two values, got {}",
            table,
            name,
            axis.len()
        )));
    }
    if axis.iter().any(|v| !v.is_finite()) || !is_strictly_increasing(axis) {
        return Err(DatabaseError::Shape(format!(
            "{}: {} must be finite and strictly increasing",
            table, name
        )));
    }
    Ok(())
}

fn axis_range(axis: &[f64]) -> (f64, f64) {
    match (axis.first(), axis.last()) {
        (Some(&first), Some(&last)) => (first, last),
        _ => (f64::NAN, f64::NAN),
    }
}

fn out_of_range(table: &str, variable: &str, value: f64, axis: &[f64]) -> DatabaseError {
    let (min, max) = axis_range(axis);
    DatabaseError::OutOfRange {
        table: table.to_string(),
        variable: variable.to_string(),
        value,
        min,
        max,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn plane_table() -> Table3D {
        // value = var_2 + 10 var_1 + 100 var_0
        let var_0 = vec![0.0, 1.0];
        let var_1 = vec![0.0, 1.0, 2.0];
        let var_2 = vec![0.0, 5.0];
        let data: Vec<Vec<Vec<f64>>> = var_2
            .iter()
            .map(|x2| {
                var_1
                    .iter()
                    .map(|x1| var_0.iter().map(|x0| x2 + 10.0 * x1 + 100.0 * x0).collect())
                    .collect()
            })
            .collect();
        Table3D {
            var_0,
            var_1,
            var_2,
            data,
        }
    }

    #[test]
    fn test_1d_interpolation_and_bounds() {
        let table = Table1D {
            var_0: vec![0.0, 0.5, 1.0],
            data: vec![1.0, 1.2, 1.6],
        };
        table.validate("k1").unwrap();
        assert_relative_eq!(table.interpolate("k1", 0.75).unwrap(), 1.4, epsilon = 1e-12);
        assert!(matches!(
            table.interpolate("k1", 1.2),
            Err(DatabaseError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_1d_table_rejects_non_finite_values() {
        let table = Table1D {
            var_0: vec![0.0, 0.5, 1.0],
            data: vec![1.0, f64::NAN, 1.6],
        };
        assert!(matches!(table.validate("k1"), Err(DatabaseError::Shape(_))));
    }

    #[test]
    fn test_tables_are_checked_when_deserialized() {
        let empty = serde_json::from_str::<Table1D>(r#"{"var_0": [], "data": []}"#);
        assert!(empty.is_err());
        let short = serde_json::from_str::<Table1D>(r#"{"var_0": [0.0, 1.0], "data": [1.0]}"#);
        assert!(short.is_err());
        let table =
            serde_json::from_str::<Table1D>(r#"{"var_0": [0.0, 1.0], "data": [1.0, 2.0]}"#)
                .unwrap();
        assert_relative_eq!(table.interpolate("k1", 0.5).unwrap(), 1.5);

        let ragged = r#"{"var_0": [0.0, 1.0], "var_1": [0.0, 1.0], "var_2": [0.0, 1.0],
            "data": [[[1.0, 2.0], [1.0]], [[1.0, 2.0], [1.0, 2.0]]]}"#;
        assert!(serde_json::from_str::<Table3D>(ragged).is_err());
        let plane = serde_json::to_string(&plane_table()).unwrap();
        assert_eq!(serde_json::from_str::<Table3D>(&plane).unwrap().shape(), (2, 3, 2));
    }

    #[test]
    fn test_bilinear_is_exact_on_planes() {
        let table = plane_table();
        table.validate("plane").unwrap();
        assert_relative_eq!(
            table.interpolate_slice("plane", 1, 2.5, 1.5).unwrap(),
            2.5 + 15.0 + 100.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_slice_interpolation_clamps_to_edges() {
        let table = plane_table();
        assert_relative_eq!(
            table.interpolate_slice("plane", 0, 9.0, -3.0).unwrap(),
            5.0,
            epsilon = 1e-12
        );
        assert!(matches!(
            table.interpolate_slice("plane", 2, 1.0, 1.0),
            Err(DatabaseError::InvalidIndex { index: 2, len: 2, .. })
        ));
    }

    #[test]
    fn test_ragged_data_is_rejected() {
        let mut table = plane_table();
        table.data[1][2].pop();
        assert!(matches!(table.validate("plane"), Err(DatabaseError::Shape(_))));
    }

    #[test]
    fn test_curve_follows_var_2() {
        let table = plane_table();
        let curve = table.curve("plane", 0, 2).unwrap();
        assert_eq!(curve, vec![(0.0, 20.0), (5.0, 25.0)]);
    }
}
