use crate::{
    parse_rle, patterns, Config, Coord, Engine, LifeError, Pattern, Result, ScanEngine,
    TallyEngine, Topology,
};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum EngineKind {
    /// Visit every cell of the field (or of the live region plus margin).
    Scan,
    /// Count neighbours of live cells only.
    Tally,
}

#[derive(Parser, Debug)]
#[command(
    name = "gridlife",
    version,
    about = "Conway's Game of Life on bounded and unbounded grids"
)]
pub struct Cli {
    /// Grid size as `ROWS COLS`; defaults to a 30x30 board.
    #[arg(value_name = "ROWS COLS", allow_negative_numbers = true)]
    pub dimensions: Vec<String>,

    /// Use a grid without fixed extent.
    #[arg(long)]
    pub unbounded: bool,

    /// Number of generations to compute.
    #[arg(short, long, default_value_t = 10)]
    pub generations: u64,

    /// Named starting pattern.
    #[arg(short, long, conflicts_with_all = ["rle", "random"])]
    pub pattern: Option<String>,

    /// Read the starting pattern from an RLE file.
    #[arg(long, conflicts_with = "random")]
    pub rle: Option<PathBuf>,

    /// Start from a random soup.
    #[arg(long)]
    pub random: bool,

    /// Seed of the random soup.
    #[arg(long, default_value_t = Config::DEFAULT_SEED)]
    pub seed: u64,

    /// Probability of a cell being alive in the random soup.
    #[arg(long, default_value_t = Config::DEFAULT_FILL_RATE)]
    pub fill_rate: f64,

    /// Extra cells scanned around the live region of an unbounded grid.
    #[arg(long, default_value_t = ScanEngine::DEFAULT_MARGIN)]
    pub margin: i64,

    #[arg(long, value_enum, default_value_t = EngineKind::Scan)]
    pub engine: EngineKind,

    /// Only print the final summary.
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Interprets the positional arguments.
    ///
    /// Either nothing, two positive `ROWS COLS`, or `--unbounded` alone is accepted.
    pub fn topology(&self) -> Result<Topology> {
        match (self.dimensions.as_slice(), self.unbounded) {
            ([], false) => Ok(Topology::Bounded {
                rows: Config::DEFAULT_ROWS,
                cols: Config::DEFAULT_COLS,
            }),
            ([], true) => Ok(Topology::Unbounded),
            (_, true) => Err(LifeError::InvalidInput(
                "grid dimensions cannot be combined with --unbounded".to_string(),
            )),
            ([rows, cols], false) => Ok(Topology::Bounded {
                rows: parse_dimension(rows)?,
                cols: parse_dimension(cols)?,
            }),
            (args, false) => Err(LifeError::InvalidInput(format!(
                "expected ROWS COLS, got {} argument(s)",
                args.len()
            ))),
        }
    }

    pub fn config(&self) -> Config {
        Config::default()
            .with_scan_margin(self.margin)
            .with_fill_rate(self.fill_rate)
            .with_seed(Some(self.seed))
    }

    pub fn build_engine(&self, config: &Config) -> Result<Box<dyn Engine>> {
        Ok(match self.engine {
            EngineKind::Scan => Box::new(ScanEngine::from_config(config)?),
            EngineKind::Tally => Box::new(TallyEngine),
        })
    }

    /// Starting cells; `rle` holds the contents of the `--rle` file if one was given.
    ///
    /// Without a pattern, RLE or `--random` the three-cell starter pattern is used.
    pub fn initial_cells(
        &self,
        topology: Topology,
        config: &Config,
        rle: Option<&[u8]>,
    ) -> Result<Vec<Coord>> {
        if let Some(data) = rle {
            return parse_rle(data);
        }
        if self.random {
            let (rows, cols) = topology
                .dimensions()
                .unwrap_or((Config::DEFAULT_ROWS, Config::DEFAULT_COLS));
            return patterns::random_soup(rows, cols, config.fill_rate, config.seed);
        }
        let name = self.pattern.as_deref().unwrap_or("starter");
        Ok(Pattern::by_name(name)?.coords())
    }
}

fn parse_dimension(arg: &str) -> Result<i64> {
    let value: i64 = arg
        .trim()
        .parse()
        .map_err(|_| LifeError::InvalidInput(format!("`{}` is not a number", arg)))?;
    if value <= 0 {
        return Err(LifeError::InvalidInput(format!(
            "grid dimensions must be positive, got `{}`",
            arg
        )));
    }
    Ok(value)
}
