use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;

use sweepplan::{Cli, InMemoryPolygonStore, PipelineOptions, PolygonStore};

mod fs;

fn main() -> Result<()> {
    run()
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let store = InMemoryPolygonStore::with_scenarios();
    let valid_names = store.list_names();

    if cli.verbose > 0 {
        eprintln!("known polygons: {}", valid_names.join(", "));
    }

    let names = cli.resolve_names(&valid_names);
    let options = PipelineOptions {
        cell_size: cli.cell_size,
        tolerance: cli.tolerance,
        max_depth: cli.max_depth,
    };

    let mut report = String::new();
    for name in &names {
        if cli.verbose > 0 {
            eprintln!("processing {name}");
        }

        let polygon = store.get(name).with_context(|| format!("loading polygon {name}"))?;
        let output = sweepplan::run_pipeline(&polygon, options)
            .map_err(|e| anyhow::anyhow!("{e}"))
            .with_context(|| format!("running pipeline on {name}"))?;

        if cli.verbose > 1 {
            eprintln!(
                "  {} partitions, {} waypoints, best cost {:.3}",
                output.diagnostics.merged_partitions.len(),
                output.global_path.len(),
                output.best_cost,
            );
            for warning in &output.diagnostics.warnings {
                eprintln!("  warning: {warning}");
            }
        }

        report.push_str(&format!("# {name} cost={:.3}\n", output.best_cost));
        for point in &output.global_path {
            report.push_str(&format!("{} {}\n", point.x, point.y));
        }
    }

    match &cli.output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::ensure_dir_exists(parent)?;
                }
            }
            std::fs::write(path, &report).with_context(|| format!("writing output to {}", path.display()))?;
        }
        None => {
            std::io::stdout().write_all(report.as_bytes())?;
        }
    }

    Ok(())
}
