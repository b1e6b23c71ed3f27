//! Emit random grids in the format `shipcount` reads.

#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::{rngs::SmallRng, Rng, SeedableRng};

#[derive(Parser)]
#[command(about = "Generate random ship grids", long_about = None)]
#[cfg(feature = "std")]
struct Args {
    #[arg(long, help = "Fix RNG seed for reproducible grids (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = 3)]
    cases: usize,
    #[arg(long, default_value_t = 10)]
    rows: usize,
    #[arg(long, default_value_t = 10)]
    cols: usize,
    #[arg(long, default_value_t = 0.2, help = "Chance that a cell is occupied")]
    density: f64,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    if !(0.0..=1.0).contains(&args.density) {
        anyhow::bail!("density must be within 0.0..=1.0, got {}", args.density);
    }
    let mut rng = match args.seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    };

    let cases: Vec<String> = (0..args.cases)
        .map(|_| {
            (0..args.rows)
                .map(|_| {
                    (0..args.cols)
                        .map(|_| if rng.random_bool(args.density) { '#' } else { '.' })
                        .collect::<String>()
                })
                .collect::<Vec<_>>()
                .join("\n")
        })
        .collect();
    println!("{}", cases.join("\n\n"));
    Ok(())
}
