//! Scenario input: JSON scenario files and CSV point lists.
//!
//! JSON files either spell the routes out (`routes`) or carry a mooring layout
//! (`mooring`) applied to `sources`. CSV files hold `x`/`y` columns and always
//! need a mooring layout from the command line.

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

use planar::api::{build_problem, MooringCfg, Point, Problem};

/// Explicit partition, via pool and target.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExplicitRoutes {
    pub above: Vec<usize>,
    pub below: Vec<usize>,
    pub vias: Vec<[f64; 2]>,
    pub target: [f64; 2],
}

/// On-disk scenario.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScenarioFile {
    pub sources: Vec<[f64; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routes: Option<ExplicitRoutes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mooring: Option<MooringCfg>,
}

impl ScenarioFile {
    /// Resolve into a validated problem.
    ///
    /// `layout` overrides the file's mooring block. Explicit `routes` cannot be
    /// combined with any mooring layout (file or flags).
    pub fn into_problem(self, layout: Option<MooringCfg>) -> Result<Problem> {
        let sources: Vec<Point> = self.sources.iter().map(|&p| to_point(p)).collect();
        let layout = layout.or(self.mooring);
        match (self.routes, layout) {
            (Some(_), Some(_)) => {
                bail!("scenario has explicit `routes`; drop the mooring layout or the routes")
            }
            (None, Some(cfg)) => Ok(build_problem(&sources, cfg)?),
            (None, None) => bail!(
                "scenario has neither `routes` nor `mooring`; \
                 pass --midship and --mooring-offset"
            ),
            (Some(routes), None) => Ok(Problem::new(
                sources,
                routes.above,
                routes.below,
                routes.vias.into_iter().map(to_point).collect(),
                to_point(routes.target),
            )?),
        }
    }
}

fn to_point(p: [f64; 2]) -> Point {
    Point::new(p[0], p[1])
}

/// Load a problem from `.json` or `.csv`.
pub fn load_problem(path: &Path, layout: Option<MooringCfg>) -> Result<Problem> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => {
            let bytes =
                std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
            let file: ScenarioFile = serde_json::from_slice(&bytes)
                .with_context(|| format!("parsing scenario {}", path.display()))?;
            file.into_problem(layout)
        }
        Some("csv") => {
            let Some(cfg) = layout else {
                bail!("CSV input needs --midship and --mooring-offset");
            };
            let sources = read_csv_points(path)?;
            Ok(build_problem(&sources, cfg)?)
        }
        _ => bail!("unsupported input {} (expected .json or .csv)", path.display()),
    }
}

/// Read `x`, `y` columns as `f64` points.
pub fn read_csv_points(path: &Path) -> Result<Vec<Point>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .collect()?;
    tracing::info!(rows = df.height(), cols = df.width(), "input_csv_shape");
    let xs = f64_column(&df, "x")?;
    let ys = f64_column(&df, "y")?;
    Ok(xs.into_iter().zip(ys).map(|(x, y)| Point::new(x, y)).collect())
}

fn f64_column(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let series = df
        .column(name)
        .with_context(|| format!("missing column `{name}`"))?
        .cast(&DataType::Float64)?;
    series
        .f64()?
        .into_iter()
        .enumerate()
        .map(|(row, v)| v.with_context(|| format!("null `{name}` in row {row}")))
        .collect()
}
