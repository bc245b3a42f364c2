use crate::{LifeError, Result, ScanEngine};

/// Tunables shared by the engines and the command line.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Cells added on every side of the live bounding box when scanning an unbounded grid.
    pub scan_margin: i64,
    /// Probability of a cell being alive in a random soup.
    pub fill_rate: f64,
    /// Seed of random soups; `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scan_margin: ScanEngine::DEFAULT_MARGIN,
            fill_rate: Self::DEFAULT_FILL_RATE,
            seed: Some(Self::DEFAULT_SEED),
        }
    }
}

impl Config {
    pub const DEFAULT_ROWS: i64 = 30;
    pub const DEFAULT_COLS: i64 = 30;
    pub const DEFAULT_FILL_RATE: f64 = 0.3;
    pub const DEFAULT_SEED: u64 = 42;

    pub fn with_scan_margin(mut self, scan_margin: i64) -> Self {
        self.scan_margin = scan_margin;
        self
    }

    pub fn with_fill_rate(mut self, fill_rate: f64) -> Self {
        self.fill_rate = fill_rate;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.scan_margin < 1 {
            return Err(LifeError::InvalidMargin(self.scan_margin));
        }
        if !(0.0..=1.0).contains(&self.fill_rate) {
            return Err(LifeError::InvalidInput(format!(
                "fill rate must be within [0, 1], got {}",
                self.fill_rate
            )));
        }
        Ok(())
    }
}
