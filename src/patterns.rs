use crate::{Coord, LifeError, Result};

/// Named seed pattern, cells relative to its top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(i64, i64)],
}

pub const PATTERNS: &[Pattern] = &[
    // three cells of the classic classroom starter board
    Pattern {
        name: "starter",
        cells: &[(0, 2), (2, 0), (2, 1)],
    },
    Pattern {
        name: "block",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
    },
    Pattern {
        name: "blinker",
        cells: &[(1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "r-pentomino",
        cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
    },
];

impl Pattern {
    /// Looks a pattern up by name, ignoring case.
    pub fn by_name(name: &str) -> Result<&'static Pattern> {
        PATTERNS
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| LifeError::UnknownPattern(name.to_string()))
    }

    pub fn names() -> impl Iterator<Item = &'static str> {
        PATTERNS.iter().map(|p| p.name)
    }

    pub fn coords(&self) -> Vec<Coord> {
        self.translated(0, 0)
    }

    /// Cells shifted so that the pattern's corner lands on `(row, col)`.
    pub fn translated(&self, row: i64, col: i64) -> Vec<Coord> {
        self.cells
            .iter()
            .map(|&(r, c)| Coord::new(r + row, c + col))
            .collect()
    }
}

/// Random cells inside `[0, rows) x [0, cols)`, each alive with probability `fill_rate`.
///
/// `seed` - random seed (if `None`, then random seed is generated)
///
/// Fails with [`LifeError::InvalidInput`] if `fill_rate` is not a probability.
pub fn random_soup(rows: i64, cols: i64, fill_rate: f64, seed: Option<u64>) -> Result<Vec<Coord>> {
    use rand::{distributions::Bernoulli, Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    let alive = Bernoulli::new(fill_rate).map_err(|_| {
        LifeError::InvalidInput(format!(
            "fill rate must be within [0, 1], got {}",
            fill_rate
        ))
    })?;

    let mut rng = if let Some(x) = seed {
        ChaCha8Rng::seed_from_u64(x)
    } else {
        ChaCha8Rng::from_entropy()
    };
    let mut result = vec![];
    for row in 0..rows {
        for col in 0..cols {
            if rng.sample(alive) {
                result.push(Coord::new(row, col));
            }
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_name() {
        assert_eq!(Pattern::by_name("Glider").unwrap().cells.len(), 5);
        assert_eq!(Pattern::by_name("R-PENTOMINO").unwrap().name, "r-pentomino");
        assert_eq!(
            Pattern::by_name("gosper"),
            Err(LifeError::UnknownPattern("gosper".to_string()))
        );
        assert_eq!(Pattern::names().count(), PATTERNS.len());
        assert_eq!(
            LifeError::UnknownPattern("gosper".to_string()).to_string(),
            "unknown pattern `gosper`, expected one of: \
             starter, block, blinker, toad, beacon, glider, r-pentomino"
        );
    }

    #[test]
    fn test_translated() {
        let blinker = Pattern::by_name("blinker").unwrap();
        assert_eq!(
            blinker.translated(10, -3),
            [(11, -3), (11, -2), (11, -1)].map(Coord::from)
        );
    }

    #[test]
    fn test_random_soup_is_reproducible() {
        let a = random_soup(20, 30, 0.3, Some(7)).unwrap();
        let b = random_soup(20, 30, 0.3, Some(7)).unwrap();
        assert_eq!(a, b);
        assert!(!a.is_empty() && a.len() < 600);
        assert!(a.iter().all(|c| (0..20).contains(&c.row) && (0..30).contains(&c.col)));
        assert!(random_soup(5, 5, 0.0, None).unwrap().is_empty());
        assert_eq!(random_soup(5, 5, 1.0, None).unwrap().len(), 25);
    }

    #[test]
    fn test_random_soup_rejects_bad_fill_rate() {
        for fill_rate in [1.5, -0.1, f64::NAN] {
            assert!(matches!(
                random_soup(5, 5, fill_rate, Some(1)),
                Err(LifeError::InvalidInput(_))
            ));
        }
    }
}
