mod region;
mod scan;
mod tally;

pub use region::Region;
pub use scan::ScanEngine;
pub use tally::TallyEngine;

use crate::Grid;

/// Game engine for Game of Life
pub trait Engine {
    /// Computes the generation following `grid`.
    ///
    /// The returned grid has the same topology as `grid`, which is left untouched.
    /// Every cell of the result is derived from `grid` alone, so no cell ever
    /// observes a neighbour that already belongs to the next generation.
    fn next_generation(&self, grid: &Grid) -> Grid;

    /// Short name used in logs and on the command line.
    fn name(&self) -> &'static str;
}

impl<E: Engine + ?Sized> Engine for Box<E> {
    fn next_generation(&self, grid: &Grid) -> Grid {
        (**self).next_generation(grid)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Conway's B3/S23 rule.
pub fn next_state(alive: bool, neighbors: usize) -> bool {
    matches!((alive, neighbors), (true, 2) | (true, 3) | (false, 3))
}
