use super::{next_state, Engine, Region};
use crate::{Config, Grid, LifeError, Result};

/// Visits every cell of the scan region and applies the rule to each one.
///
/// Bounded grids are scanned entirely. Unbounded grids are scanned over the
/// bounding box of the live cells grown by `margin`; a margin of 1 already
/// reaches every cell that can be born, larger margins only cost time.
///
/// # Example
///
/// ```rust
/// use gridlife::{Coord, Engine, Grid, ScanEngine, Topology};
///
/// let blinker = [(1, 0), (1, 1), (1, 2)].map(Coord::from);
/// let grid = Grid::with_cells(Topology::Unbounded, blinker).unwrap();
///
/// let next = ScanEngine::default().next_generation(&grid);
/// assert_eq!(
///     next.occupied_coordinates(),
///     [(0, 1), (1, 1), (2, 1)].map(Coord::from)
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanEngine {
    margin: i64,
}

impl ScanEngine {
    pub const DEFAULT_MARGIN: i64 = 1;

    pub fn with_margin(margin: i64) -> Result<Self> {
        if margin < 1 {
            return Err(LifeError::InvalidMargin(margin));
        }
        Ok(Self { margin })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::with_margin(config.scan_margin)
    }

    pub fn margin(&self) -> i64 {
        self.margin
    }
}

impl Default for ScanEngine {
    fn default() -> Self {
        Self {
            margin: Self::DEFAULT_MARGIN,
        }
    }
}

impl Engine for ScanEngine {
    fn next_generation(&self, grid: &Grid) -> Grid {
        let alive = Region::scan(grid, self.margin)
            .iter()
            .filter(|&coord| next_state(grid.is_alive(coord), grid.count_neighbors(coord)));
        grid.successor(alive)
    }

    fn name(&self) -> &'static str {
        "scan"
    }
}
