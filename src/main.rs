#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use shipcount::{
    cases::load_cases, census_with, extract_coordinates, init_logging, report::CaseReport,
    size_histogram, CensusConfig, NeighborLookup, OversizePolicy, PairwiseScan, ShipMerger,
    SpatialIndex, SHIP_MAX_LENGTH,
};

#[cfg(feature = "std")]
use anyhow::Context;
#[cfg(feature = "std")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "std")]
use log::info;
#[cfg(feature = "std")]
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Count ships by size in grids of occupied cells", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// File of grids; cases separated by a blank line.
    file: PathBuf,
    #[arg(long, default_value_t = '#', help = "Character marking an occupied cell")]
    marker: char,
    #[arg(long, conflicts_with = "widen", help = "Count oversized ships in the last bucket")]
    clamp: bool,
    #[arg(long, help = "Grow the histogram to fit the largest ship instead of failing")]
    widen: bool,
    #[arg(long, value_enum, default_value_t = Strategy::Spatial)]
    strategy: Strategy,
    #[arg(long, help = "Emit one JSON object per case")]
    json: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum Strategy {
    /// Row/column index, linear time.
    Spatial,
    /// Check every known cell, quadratic time.
    Pairwise,
}

#[cfg(feature = "std")]
fn count_case<L: NeighborLookup>(
    rows: &[String],
    config: &CensusConfig,
    widen: bool,
) -> anyhow::Result<Vec<usize>> {
    if widen {
        let merger: ShipMerger<L> = extract_coordinates(rows, config.marker).into_iter().collect();
        let sizes = size_histogram(merger.fleet());
        let width = sizes.keys().next_back().copied().unwrap_or(0).max(SHIP_MAX_LENGTH);
        let mut counts = vec![0; width];
        for (size, n) in sizes {
            counts[size - 1] = n;
        }
        return Ok(counts);
    }
    let registry = census_with::<SHIP_MAX_LENGTH, L, _, _>(rows, config)?;
    Ok(registry.counts().to_vec())
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let policy = if cli.clamp {
        OversizePolicy::Clamp
    } else {
        OversizePolicy::Reject
    };
    let config = CensusConfig::new()
        .with_marker(cli.marker)
        .with_policy(policy);

    let cases = load_cases(&cli.file)?;
    info!(
        "counting {} cases from {} with {:?} lookup",
        cases.len(),
        cli.file.display(),
        cli.strategy
    );

    for (i, rows) in cases.iter().enumerate() {
        let counts = match cli.strategy {
            Strategy::Spatial => count_case::<SpatialIndex>(rows, &config, cli.widen),
            Strategy::Pairwise => count_case::<PairwiseScan>(rows, &config, cli.widen),
        }
        .with_context(|| format!("case {} failed", i + 1))?;
        let report = CaseReport::new(i + 1, counts);
        if cli.json {
            println!("{}", report.to_json_line()?);
        } else {
            println!("{}", report.to_human()?);
        }
    }
    Ok(())
}
