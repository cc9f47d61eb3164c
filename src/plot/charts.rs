use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::info;

use super::common::{draw_curves, Axes, Curve, Marker, CAPTION_FONT, PANEL_FONT};
use crate::database::{
    AeroCenterDatabase, AeroCenterEstimate, Table3D, TaperBlend, K2_TABLE, XAC_CR_TABLE,
};
use crate::display::fmt_sig;
use crate::utils::{WingError, MULTIPLOT_SIZE, PLOT_SIZE, SIG_DIGITS_COARSE};

const K1_AXES: Axes<'static> = Axes {
    caption: "K1 vs taper ratio",
    x_desc: "lambda",
    y_desc: "K1",
};
const K2_X_DESC: &str = "Lambda_le (deg)";
const XAC_CR_X_DESC: &str = "tan(Lambda_le) / beta";

/// Which family of taper slices a chart shows.
#[derive(Debug, Clone, Copy)]
enum Family {
    K2,
    XacCr,
}

impl Family {
    fn table(self, database: &AeroCenterDatabase) -> &Table3D {
        match self {
            Family::K2 => &database.k2,
            Family::XacCr => &database.xac_cr,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Family::K2 => K2_TABLE,
            Family::XacCr => XAC_CR_TABLE,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            Family::K2 => "K2",
            Family::XacCr => "X'ac/cr",
        }
    }

    fn x_desc(self) -> &'static str {
        match self {
            Family::K2 => K2_X_DESC,
            Family::XacCr => XAC_CR_X_DESC,
        }
    }

    fn parameter(self) -> &'static str {
        match self {
            Family::K2 => "AR",
            Family::XacCr => "AR tan(Lambda_le)",
        }
    }

    /// One curve per tabulated `var_1` on taper slice `j_lambda`.
    fn curves(
        self,
        database: &AeroCenterDatabase,
        j_lambda: usize,
    ) -> Result<Vec<Curve>, WingError> {
        let table = self.table(database);
        table
            .var_1
            .iter()
            .enumerate()
            .map(|(i1, &v1)| -> Result<Curve, WingError> {
                let points = table.curve(self.name(), j_lambda, i1)?;
                let label = format!(
                    "{} = {}",
                    self.parameter(),
                    fmt_sig(v1, SIG_DIGITS_COARSE)
                );
                Ok(Curve::new(label, points))
            })
            .collect()
    }

    fn caption(self, database: &AeroCenterDatabase, j_lambda: usize) -> String {
        let lambda = self
            .table(database)
            .var_0
            .get(j_lambda)
            .copied()
            .unwrap_or(f64::NAN);
        format!(
            "{} at lambda = {}",
            self.symbol(),
            fmt_sig(lambda, SIG_DIGITS_COARSE)
        )
    }

    fn draw_slice<DB: DrawingBackend>(
        self,
        area: &DrawingArea<DB, Shift>,
        database: &AeroCenterDatabase,
        j_lambda: usize,
        font: (&'static str, u32),
        marker: Option<Marker>,
    ) -> Result<(), WingError> {
        let curves = self.curves(database, j_lambda)?;
        let caption = self.caption(database, j_lambda);
        let axes = Axes {
            caption: &caption,
            x_desc: self.x_desc(),
            y_desc: self.symbol(),
        };
        draw_curves(area, axes, font, &curves, marker)
    }

    fn plot(
        self,
        database: &AeroCenterDatabase,
        j_lambda: usize,
        path: &Path,
    ) -> Result<(), WingError> {
        let root = SVGBackend::new(path, PLOT_SIZE).into_drawing_area();
        root.fill(&WHITE)?;
        self.draw_slice(&root, database, j_lambda, CAPTION_FONT, None)?;
        root.present()?;
        info!("{} chart written to {}", self.symbol(), path.display());
        Ok(())
    }

    fn multiplot(self, database: &AeroCenterDatabase, path: &Path) -> Result<(), WingError> {
        let slices = self.table(database).slice_count();
        let rows = ((slices + 1) / 2).max(1);
        let root = SVGBackend::new(path, MULTIPLOT_SIZE).into_drawing_area();
        root.fill(&WHITE)?;
        for (j, area) in root.split_evenly((rows, 2)).iter().enumerate().take(slices) {
            self.draw_slice(area, database, j, PANEL_FONT, None)?;
        }
        root.present()?;
        info!(
            "{} charts of {} taper ratios written to {}",
            self.symbol(),
            slices,
            path.display()
        );
        Ok(())
    }

    /// The two bracketing slices, side by side, with the value read on each.
    fn plot_interpolation(
        self,
        database: &AeroCenterDatabase,
        blend: &TaperBlend,
        x: f64,
        path: &Path,
    ) -> Result<(), WingError> {
        let root = SVGBackend::new(path, PLOT_SIZE).into_drawing_area();
        root.fill(&WHITE)?;
        let readings = [
            (blend.j_lambda, blend.value_a),
            (blend.j_lambda + 1, blend.value_b),
        ];
        for (area, (j, value)) in root.split_evenly((1, 2)).iter().zip(readings) {
            let marker = Marker { x, y: value };
            self.draw_slice(area, database, j, PANEL_FONT, Some(marker))?;
        }
        root.present()?;
        info!(
            "{} = {:.4} at lambda = {:.3}, interpolation chart written to {}",
            self.symbol(),
            blend.value,
            blend.taper_ratio,
            path.display()
        );
        Ok(())
    }
}

/// `K_1` against the taper ratio.
pub fn plot_k1(database: &AeroCenterDatabase, path: &Path) -> Result<(), WingError> {
    let root = SVGBackend::new(path, PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    draw_curves(&root, K1_AXES, CAPTION_FONT, &[k1_curve(database)], None)?;
    root.present()?;
    info!("K1 chart written to {}", path.display());
    Ok(())
}

pub fn plot_k2(
    database: &AeroCenterDatabase,
    j_lambda: usize,
    path: &Path,
) -> Result<(), WingError> {
    Family::K2.plot(database, j_lambda, path)
}

pub fn plot_xac_cr(
    database: &AeroCenterDatabase,
    j_lambda: usize,
    path: &Path,
) -> Result<(), WingError> {
    Family::XacCr.plot(database, j_lambda, path)
}

/// Every taper slice of `K_2`, two per row.
pub fn multiplot_k2(database: &AeroCenterDatabase, path: &Path) -> Result<(), WingError> {
    Family::K2.multiplot(database, path)
}

pub fn multiplot_xac_cr(database: &AeroCenterDatabase, path: &Path) -> Result<(), WingError> {
    Family::XacCr.multiplot(database, path)
}

/// `K_1` with the value read at the estimate's taper ratio.
pub fn plot_interpolate_k1(
    database: &AeroCenterDatabase,
    estimate: &AeroCenterEstimate,
    path: &Path,
) -> Result<(), WingError> {
    let root = SVGBackend::new(path, PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let marker = Marker {
        x: estimate.taper_ratio,
        y: estimate.k1,
    };
    draw_curves(&root, K1_AXES, CAPTION_FONT, &[k1_curve(database)], Some(marker))?;
    root.present()?;
    info!(
        "K1 = {:.4} at lambda = {:.3}, interpolation chart written to {}",
        estimate.k1,
        estimate.taper_ratio,
        path.display()
    );
    Ok(())
}

pub fn plot_interpolate_k2(
    database: &AeroCenterDatabase,
    estimate: &AeroCenterEstimate,
    path: &Path,
) -> Result<(), WingError> {
    Family::K2.plot_interpolation(database, &estimate.k2, estimate.sweep_le_deg, path)
}

pub fn plot_interpolate_xac_cr(
    database: &AeroCenterDatabase,
    estimate: &AeroCenterEstimate,
    path: &Path,
) -> Result<(), WingError> {
    Family::XacCr.plot_interpolation(database, &estimate.xac_cr, estimate.x_compressible, path)
}

fn k1_curve(database: &AeroCenterDatabase) -> Curve {
    let points = database
        .k1
        .var_0
        .iter()
        .copied()
        .zip(database.k1.data.iter().copied())
        .collect();
    Curve::new("", points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::Table1D;

    fn database() -> AeroCenterDatabase {
        let lambdas = vec![0.0, 0.5, 1.0];
        let grid = |n2: usize, n1: usize, f: &dyn Fn(usize, usize, f64) -> f64| {
            (0..n2)
                .map(|r| {
                    (0..n1)
                        .map(|c| lambdas.iter().map(|&l| f(r, c, l)).collect())
                        .collect()
                })
                .collect::<Vec<Vec<Vec<f64>>>>()
        };
        AeroCenterDatabase {
            k1: Table1D {
                var_0: lambdas.clone(),
                data: vec![1.0, 1.2, 1.4],
            },
            k2: Table3D {
                var_0: lambdas.clone(),
                var_1: vec![2.0, 6.0],
                var_2: vec![0.0, 20.0, 40.0],
                data: grid(3, 2, &|r, c, l| 0.1 * r as f64 + 0.05 * c as f64 + l),
            },
            xac_cr: Table3D {
                var_0: lambdas.clone(),
                var_1: vec![0.0, 4.0],
                var_2: vec![0.0, 1.0, 2.0],
                data: grid(3, 2, &|r, c, l| 0.5 + 0.2 * r as f64 + 0.1 * c as f64 + l),
            },
        }
    }

    #[test]
    fn test_family_has_one_curve_per_parameter() {
        let db = database();
        let curves = Family::K2.curves(&db, 1).unwrap();
        assert_eq!(curves.len(), 2);
        assert_eq!(curves[1].label, "AR = 6.0");
        assert_eq!(curves[0].points.len(), 3);
        assert_eq!(Family::XacCr.caption(&db, 2), "X'ac/cr at lambda = 1.0");
    }

    #[test]
    fn test_slice_outside_table_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = plot_k2(&database(), 3, &dir.path().join("k2.svg"));
        assert!(matches!(result, Err(WingError::Database(_))));
    }

    #[test]
    fn test_charts_are_written() {
        let db = database();
        let dir = tempfile::tempdir().unwrap();
        let files = ["k1.svg", "k2.svg", "xac.svg", "k2_all.svg", "xac_all.svg"];
        plot_k1(&db, &dir.path().join(files[0])).unwrap();
        plot_k2(&db, 0, &dir.path().join(files[1])).unwrap();
        plot_xac_cr(&db, 2, &dir.path().join(files[2])).unwrap();
        multiplot_k2(&db, &dir.path().join(files[3])).unwrap();
        multiplot_xac_cr(&db, &dir.path().join(files[4])).unwrap();
        for file in files {
            let svg = std::fs::read_to_string(dir.path().join(file)).unwrap();
            assert!(svg.contains("<svg"), "{} is not an SVG", file);
        }
    }

    #[test]
    fn test_interpolation_charts_are_written() {
        let db = database();
        let estimate = db.aerodynamic_center(0.25, 30.0, 4.0, 0.3).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let k1 = dir.path().join("k1_interp.svg");
        let k2 = dir.path().join("k2_interp.svg");
        let xac = dir.path().join("xac_interp.svg");
        plot_interpolate_k1(&db, &estimate, &k1).unwrap();
        plot_interpolate_k2(&db, &estimate, &k2).unwrap();
        plot_interpolate_xac_cr(&db, &estimate, &xac).unwrap();
        assert!(std::fs::read_to_string(k2).unwrap().contains("lambda = 0.5"));
        assert!(xac.exists());
        assert!(k1.exists());
    }
}
