//! CLI argument schema (spec §6, added): a `clap`-derived `Cli` struct, in
//! the shape of `openmander`'s `cli.rs`/`cli/` split — this crate only
//! defines the schema, the `cli/` workspace member owns `main` and wires
//! it to [`crate::run_pipeline`].

use clap::Parser;

/// Run coverage path planning over one or more named polygons.
#[derive(Parser, Debug)]
#[command(name = "sweepplan", version, about, propagate_version = true)]
pub struct Cli {
    /// Polygon names, e.g. S1 S3 or "S1,S3". Unknown names are dropped;
    /// if none remain, every known polygon is run.
    #[arg(num_args = 0..)]
    pub polygons: Vec<String>,

    /// Grid spacing for rasterization.
    #[arg(long, default_value_t = 1.0)]
    pub cell_size: f64,

    /// Coordinate snapping tolerance.
    #[arg(long, default_value_t = 1.0)]
    pub tolerance: f64,

    /// Maximum greedy-partitioner recursion depth.
    #[arg(long, default_value_t = 40)]
    pub max_depth: u32,

    /// Write the resulting global path to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<std::path::PathBuf>,

    /// Increase output verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Expand comma-separated tokens and filter to `valid_names`, falling
    /// back to all of them when nothing matches (spec §6 "unknown names
    /// fall back to run all").
    pub fn resolve_names(&self, valid_names: &[String]) -> Vec<String> {
        let requested: Vec<String> = self
            .polygons
            .iter()
            .flat_map(|tok| tok.split(','))
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        if requested.is_empty() {
            return valid_names.to_vec();
        }

        let matched: Vec<String> = requested.into_iter().filter(|n| valid_names.contains(n)).collect();
        if matched.is_empty() {
            valid_names.to_vec()
        } else {
            matched
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli_with(polygons: Vec<&str>) -> Cli {
        Cli {
            polygons: polygons.into_iter().map(str::to_string).collect(),
            cell_size: 1.0,
            tolerance: 1.0,
            max_depth: 40,
            output: None,
            verbose: 0,
        }
    }

    #[test]
    fn no_names_runs_all() {
        let cli = cli_with(vec![]);
        let valid = vec!["S1".to_string(), "S2".to_string()];
        assert_eq!(cli.resolve_names(&valid), valid);
    }

    #[test]
    fn comma_separated_names_are_split() {
        let cli = cli_with(vec!["S1,S2"]);
        let valid = vec!["S1".to_string(), "S2".to_string(), "S3".to_string()];
        assert_eq!(cli.resolve_names(&valid), vec!["S1".to_string(), "S2".to_string()]);
    }

    #[test]
    fn unknown_names_fall_back_to_all() {
        let cli = cli_with(vec!["bogus"]);
        let valid = vec!["S1".to_string(), "S2".to_string()];
        assert_eq!(cli.resolve_names(&valid), valid);
    }
}
