use std::{
    env,
    path::{Path, PathBuf},
};

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use wing_aero::{
    config::{WingConfig, WingSource},
    database::{AeroCenterDatabase, AeroCenterEstimate},
    display::analysis_report,
    integrals::WingAnalysis,
    plot, WingError,
};

const USAGE: &str =
    "usage: wing_report <wing.yaml|generic_transport|trainer> [--database file] [--out dir]";

struct Args {
    source: WingSource,
    database: Option<PathBuf>,
    out: PathBuf,
}

impl Args {
    fn parse() -> Result<Self, String> {
        let mut source = None;
        let mut database = None;
        let mut out = PathBuf::from("plots");
        let mut args = env::args().skip(1);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--database" => {
                    database = Some(PathBuf::from(args.next().ok_or("--database needs a file")?))
                }
                "--out" => out = PathBuf::from(args.next().ok_or("--out needs a directory")?),
                "-h" | "--help" => return Err(USAGE.to_string()),
                _ if source.is_none() => source = Some(WingSource::parse(&arg)),
                _ => return Err(format!("unexpected argument {}\n{}", arg, USAGE)),
            }
        }
        let source = source.ok_or_else(|| USAGE.to_string())?;
        Ok(Self {
            source,
            database,
            out,
        })
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr, stdout carries the LaTeX report
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse()?;
    let config = WingConfig::new(args.source)?;

    let database = match &args.database {
        Some(path) => Some(AeroCenterDatabase::from_file(path)?),
        None => match AeroCenterDatabase::load_default() {
            Ok(database) => Some(database),
            Err(e) => {
                warn!("No aerodynamic-centre database, using the quarter chord: {}", e);
                None
            }
        },
    };

    let (analysis, estimate) = match &database {
        Some(database) => {
            let (analysis, estimate) = WingAnalysis::run_with_database(&config, database)?;
            (analysis, Some(estimate))
        }
        None => (WingAnalysis::from_config(&config)?, None),
    };

    println!("{}", analysis_report(&config, &analysis, estimate.as_ref())?);

    std::fs::create_dir_all(&args.out)?;
    write_plots(&args.out, &config, &analysis, database.as_ref().zip(estimate.as_ref()))?;
    info!("Plots written to {}", args.out.display());
    Ok(())
}

fn write_plots(
    out: &Path,
    config: &WingConfig,
    analysis: &WingAnalysis,
    charts: Option<(&AeroCenterDatabase, &AeroCenterEstimate)>,
) -> Result<(), WingError> {
    plot::plot_planform(config, analysis, &out.join("planform.svg"))?;
    plot::plot_wing_functions(config, &out.join("wing_functions.svg"))?;

    if let Some((database, estimate)) = charts {
        plot::plot_k1(database, &out.join("k1.svg"))?;
        plot::plot_k2(database, estimate.k2.j_lambda, &out.join("k2.svg"))?;
        plot::plot_xac_cr(database, estimate.xac_cr.j_lambda, &out.join("xac_cr.svg"))?;
        plot::multiplot_k2(database, &out.join("k2_multiplot.svg"))?;
        plot::multiplot_xac_cr(database, &out.join("xac_cr_multiplot.svg"))?;
        plot::plot_interpolate_k1(database, estimate, &out.join("k1_interpolation.svg"))?;
        plot::plot_interpolate_k2(database, estimate, &out.join("k2_interpolation.svg"))?;
        plot::plot_interpolate_xac_cr(database, estimate, &out.join("xac_cr_interpolation.svg"))?;
    }
    Ok(())
}
