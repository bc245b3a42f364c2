use crate::{Coord, Engine, Grid, ScanEngine};
use tracing::debug;

/// Occupied cells of one generation, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generation {
    pub index: u64,
    pub cells: Vec<Coord>,
}

impl Generation {
    pub fn population(&self) -> usize {
        self.cells.len()
    }
}

/// A running game: the current grid plus the engine that advances it.
///
/// Each step replaces the grid wholesale; steps never overlap.
pub struct Life<E: Engine = ScanEngine> {
    grid: Grid,
    engine: E,
    generation: u64,
}

impl Life<ScanEngine> {
    pub fn new(grid: Grid) -> Self {
        Self::with_engine(grid, ScanEngine::default())
    }
}

impl<E: Engine> Life<E> {
    pub fn with_engine(grid: Grid, engine: E) -> Self {
        Self {
            grid,
            engine,
            generation: 0,
        }
    }

    /// Advances one generation and returns the new grid.
    pub fn step(&mut self) -> &Grid {
        let next = self.engine.next_generation(&self.grid);
        self.grid = next;
        self.generation += 1;
        debug!(
            engine = self.engine.name(),
            generation = self.generation,
            population = self.grid.population(),
            "step"
        );
        &self.grid
    }

    /// Advances `n` generations, one after another.
    pub fn advance(&mut self, n: u64) -> &Grid {
        for _ in 0..n {
            self.step();
        }
        &self.grid
    }

    /// Advances until the population dies out or `limit` generations have passed.
    ///
    /// Returns the number of generations performed.
    pub fn run_until_extinct(&mut self, limit: u64) -> u64 {
        let start = self.generation;
        while !self.grid.is_empty() && self.generation - start < limit {
            self.step();
        }
        self.generation - start
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn occupied_coordinates(&self) -> Vec<Coord> {
        self.grid.occupied_coordinates()
    }

    pub fn snapshot(&self) -> Generation {
        Generation {
            index: self.generation,
            cells: self.occupied_coordinates(),
        }
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    pub fn num_rows(&self) -> Option<i64> {
        self.grid.num_rows()
    }

    pub fn num_cols(&self) -> Option<i64> {
        self.grid.num_cols()
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }
}
