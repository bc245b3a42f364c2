#![warn(clippy::all)]

use anyhow::{Context, Result};
use clap::Parser;
use gridlife::{Cli, Engine, Grid, Life};
use tracing::info;

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let topology = cli.topology()?;
    let config = cli.config();
    config.validate()?;
    let rle = match &cli.rle {
        Some(path) => Some(
            std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?,
        ),
        None => None,
    };
    let cells = cli.initial_cells(topology, &config, rle.as_deref())?;
    let mut grid = Grid::new(topology)?;
    for cell in cells {
        grid.set(cell, true)
            .context("initial pattern does not fit the grid")?;
    }
    let engine = cli.build_engine(&config)?;
    info!(?topology, engine = engine.name(), population = grid.population(), "starting");

    let mut life = Life::with_engine(grid, engine);
    if !cli.quiet {
        print_generation(&life);
    }
    for _ in 0..cli.generations {
        life.step();
        if !cli.quiet {
            print_generation(&life);
        }
    }

    println!(
        "generation {}: {} live cells",
        life.generation(),
        life.population()
    );
    Ok(())
}

fn print_generation<E: Engine>(life: &Life<E>) {
    println!("generation {}:", life.generation());
    print!("{}", life.grid());
    println!();
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}
