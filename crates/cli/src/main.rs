use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

use planar::api::{random_sources, search, GeomCfg, MooringCfg, ScenarioCfg, SearchCfg};

mod input;
mod output;
mod provenance;

use input::{load_problem, ScenarioFile};
use output::SolveReport;
use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "planar-cli")]
#[command(about = "Non-crossing via assignment for routes to a shared target")]
struct Cmd {
    /// Optional run tag; propagated to provenance sidecars and logs
    #[arg(long)]
    run_id: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Search for a crossing-free assignment and write the result JSON
    Solve {
        /// Scenario `.json` or point list `.csv` (columns x, y)
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Midship line; with --mooring-offset, derives groups and vias from the sources
        #[arg(long, requires = "mooring_offset")]
        midship: Option<f64>,
        #[arg(long, requires = "midship")]
        mooring_offset: Option<f64>,
        #[arg(long, default_value_t = 50.0)]
        spacing: f64,
        /// Attempt cap; 0 or negative means unlimited
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        max_iterations: i64,
        /// Split the permutation space across threads
        #[arg(long)]
        parallel: bool,
        /// Endpoint tolerance
        #[arg(long, default_value_t = 1e-9)]
        eps: f64,
    },
    /// Write a random mooring scenario
    Generate {
        #[arg(long, default_value_t = 6)]
        n: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Solve {
            input,
            out,
            midship,
            mooring_offset,
            spacing,
            max_iterations,
            parallel,
            eps,
        } => {
            let layout = midship.zip(mooring_offset).map(|(m, d)| MooringCfg {
                spacing,
                ..MooringCfg::new(m, d)
            });
            let scfg = SearchCfg::with_max_iterations(max_iterations).parallel(parallel);
            solve(&input, &out, layout, scfg, GeomCfg { eps }, cmd.run_id)
        }
        Action::Generate { n, seed, out } => generate(n, seed, &out, cmd.run_id),
        Action::Report => report(cmd.run_id),
    }
}

fn solve(
    input: &Path,
    out: &Path,
    layout: Option<MooringCfg>,
    scfg: SearchCfg,
    cfg: GeomCfg,
    run_id: Option<String>,
) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), run_id = ?run_id, "solve");
    let problem = load_problem(input, layout)?;
    tracing::info!(
        n_above = problem.n_above(),
        n_below = problem.n_below(),
        parallel = scfg.parallel,
        "problem_loaded"
    );
    let solution = search(&problem, cfg, scfg);
    tracing::info!(
        outcome = ?solution.outcome(),
        attempts = solution.attempts(),
        "search_finished"
    );
    let report = SolveReport::new(&problem, &solution);
    write_json(out, &report)?;
    let payload = Payload::new(
        "solve",
        json!({
            "input": input.to_string_lossy(),
            "layout": layout,
            "search": scfg,
            "geom": cfg,
        }),
    )
    .with_run_id(run_id);
    write_sidecar(out, &payload)?;
    Ok(())
}

fn generate(n: usize, seed: u64, out: &Path, run_id: Option<String>) -> Result<()> {
    tracing::info!(n, seed, out = %out.display(), "generate");
    let cfg = ScenarioCfg {
        n_points: n,
        ..ScenarioCfg::default()
    };
    let file = ScenarioFile {
        sources: random_sources(&cfg, seed)
            .context("sampling scenario")?
            .into_iter()
            .map(|p| [p.x, p.y])
            .collect(),
        routes: None,
        mooring: Some(cfg.mooring),
    };
    write_json(out, &file)?;
    let payload = Payload::new("generate", json!({ "scenario": cfg, "seed": seed }))
        .with_run_id(run_id);
    write_sidecar(out, &payload)?;
    Ok(())
}

fn report(run_id: Option<String>) -> Result<()> {
    let doc = provenance::document(None, &Payload::new("report", json!({})).with_run_id(run_id));
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

fn write_json<T: serde::Serialize>(out: &Path, value: &T) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", out.display()))
}
