use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use maxrect::brute::brute_force;
use maxrect::gen::uniform_obstacles;
use maxrect::{solve, solve_points, GridCfg, PointSet, SolveCfg, SweepCfg};
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod record;

use record::{RunParams, RunRecord};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Largest empty rectangle runner")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Solve the reference point set and print the report line
    Run {
        #[command(flatten)]
        grid: GridArgs,
        /// Disable the early-termination cutoff (same answer, slower)
        #[arg(long)]
        no_prune: bool,
        /// Split left edges across rayon workers
        #[arg(long)]
        parallel: bool,
        /// Write a JSON result (plus provenance sidecar) here
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Cross-check every sweep variant against the brute-force solver
    Verify {
        #[arg(long, default_value_t = 30)]
        max_size: usize,
        #[arg(long, default_value_t = 1)]
        step: usize,
        /// Extra uniform random point sets per size
        #[arg(long, default_value_t = 2)]
        seeds: u64,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args)]
struct GridArgs {
    /// Grid side N
    #[arg(long, default_value_t = GridCfg::default().size)]
    size: usize,
    /// Generator seed
    #[arg(long, default_value_t = GridCfg::default().seed)]
    seed: u64,
    /// Generator modulus
    #[arg(long, default_value_t = GridCfg::default().modulus)]
    modulus: u64,
}

impl From<GridArgs> for GridCfg {
    fn from(a: GridArgs) -> Self {
        Self {
            size: a.size,
            seed: a.seed,
            modulus: a.modulus,
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run {
            grid,
            no_prune,
            parallel,
            out,
        } => {
            let cfg = SolveCfg {
                grid: grid.into(),
                sweep: SweepCfg { prune: !no_prune },
                parallel,
            };
            run(cfg, out)
        }
        Action::Verify {
            max_size,
            step,
            seeds,
        } => verify(max_size, step, seeds),
        Action::Report => report(),
    }
}

fn run(cfg: SolveCfg, out: Option<PathBuf>) -> Result<()> {
    tracing::info!(
        size = cfg.grid.size,
        seed = cfg.grid.seed,
        prune = cfg.sweep.prune,
        parallel = cfg.parallel,
        "run"
    );
    let sol = solve(&cfg).context("solving reference point set")?;
    tracing::info!(area = sol.area, rect = ?sol.rect, "solved");
    println!("{sol}");

    if let Some(out) = out {
        provenance::ensure_parent(&out)?;
        let record = RunRecord::new(&cfg, &sol);
        std::fs::write(&out, serde_json::to_vec_pretty(&record)?)
            .with_context(|| format!("writing {}", out.display()))?;
        let prov = provenance::write_sidecar(&out, &RunParams::from(&cfg))?;
        tracing::info!(out = %out.display(), provenance = %prov.display(), "wrote result");
    }
    Ok(())
}

fn verify(max_size: usize, step: usize, seeds: u64) -> Result<()> {
    if max_size == 0 || step == 0 {
        bail!("--max-size and --step must be positive");
    }
    let variants = [(true, false), (false, false), (true, true)];
    let mut checked = 0usize;
    for size in (1..=max_size).step_by(step) {
        let mut sets = vec![(
            "squaring".to_string(),
            PointSet::generate(&GridCfg::with_size(size))?,
        )];
        for seed in 0..seeds {
            let obstacles = uniform_obstacles(size, size, seed);
            sets.push((format!("uniform:{seed}"), PointSet::with_obstacles(size, obstacles)?));
        }
        for (label, set) in &sets {
            let expected = brute_force(set).area;
            for (prune, parallel) in variants {
                let sol = solve_points(set, SweepCfg { prune }, parallel)
                    .with_context(|| format!("N={size} set={label}"))?;
                if sol.area != expected {
                    bail!(
                        "N={size} set={label} prune={prune} parallel={parallel}: sweep area {} != brute force {expected}",
                        sol.area
                    );
                }
                checked += 1;
            }
        }
        tracing::debug!(size, "verified");
    }
    tracing::info!(max_size, step, seeds, checked, "all sweeps match brute force");
    println!("verified {checked} sweeps up to N={max_size}");
    Ok(())
}

fn report() -> Result<()> {
    let defaults = SolveCfg::default();
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "maxrect_version": maxrect::VERSION,
        "params": RunParams::from(&defaults),
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
