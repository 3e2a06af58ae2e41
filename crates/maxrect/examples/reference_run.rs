//! Timing probe for the reference configuration (N = 10000).
//!
//! Prints the same report line as the CLI `run` command, once for each sweep
//! variant, so the pruning and rayon speedups can be read off directly.
//!
//!   cargo run --release -p maxrect --example reference_run [N]

use maxrect::{solve, GridCfg, SolveCfg, SweepCfg};

fn main() {
    let size = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(GridCfg::default().size);
    let variants = [
        ("pruned", SweepCfg { prune: true }, false),
        ("pruned+parallel", SweepCfg { prune: true }, true),
        ("unpruned", SweepCfg { prune: false }, false),
    ];
    for (label, sweep, parallel) in variants {
        let cfg = SolveCfg {
            grid: GridCfg::with_size(size),
            sweep,
            parallel,
        };
        let sol = solve(&cfg).expect("reference run");
        println!("{label:>16}: {sol}");
    }
}
