//! Generation-advance engine for Conway's Game of Life on a bounded grid

use super::{Cell, EngineError, GameOfLifeRules, Grid};
use itertools::iproduct;
use rand::Rng;
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, info};

/// Side length used when none is configured
pub const DEFAULT_SIDE_LENGTH: usize = 64;

/// Outcome of the most recent generation advance
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GenerationStats {
    pub generation: u64,
    pub births: usize,
    pub deaths: usize,
    pub population: usize,
}

/// Owns the alive set and its dense grid cache.
///
/// The alive set is authoritative. The grid is rebuilt from it after
/// every transition and is only used to answer [`SimulationEngine::is_alive`].
#[derive(Debug, Clone)]
pub struct SimulationEngine {
    side_length: usize,
    alive: HashSet<Cell>,
    grid: Grid,
    generation: u64,
    last_stats: GenerationStats,
}

impl SimulationEngine {
    /// Create an engine with no living cells
    ///
    /// Rejects a zero side length and one whose N×N grid cannot be allocated.
    pub fn new(side_length: usize) -> Result<Self, EngineError> {
        if side_length == 0 || side_length > Grid::max_side_length() {
            return Err(EngineError::InvalidSideLength(side_length));
        }

        Ok(Self {
            side_length,
            alive: HashSet::new(),
            grid: Grid::new(side_length),
            generation: 0,
            last_stats: GenerationStats::default(),
        })
    }

    /// Create an engine seeded with an explicit population
    pub fn with_alive_cells<I>(side_length: usize, cells: I) -> Result<Self, EngineError>
    where
        I: IntoIterator<Item = Cell>,
    {
        let mut engine = Self::new(side_length)?;
        engine.load_cells(cells)?;
        Ok(engine)
    }

    /// Randomly populate the whole grid, replacing any previous state.
    ///
    /// Each cell draws one uniform value from `rng` in row-major order and
    /// is alive when the draw is below `seed_probability`.
    pub fn initialize<R: Rng + ?Sized>(
        &mut self,
        seed_probability: f64,
        rng: &mut R,
    ) -> Result<(), EngineError> {
        if !(0.0..=1.0).contains(&seed_probability) {
            return Err(EngineError::InvalidSeedProbability(seed_probability));
        }

        let alive = iproduct!(0..self.side_length, 0..self.side_length)
            .filter(|_| rng.gen::<f64>() < seed_probability)
            .map(Cell::from)
            .collect();

        self.reset_to(alive);
        info!(
            side_length = self.side_length,
            seed_probability,
            population = self.alive.len(),
            "initialized grid"
        );
        Ok(())
    }

    /// Replace the state with an explicit population.
    ///
    /// Leaves the engine untouched if any cell is outside the grid.
    pub fn load_cells<I>(&mut self, cells: I) -> Result<(), EngineError>
    where
        I: IntoIterator<Item = Cell>,
    {
        let alive = cells
            .into_iter()
            .map(|cell| {
                if cell.is_within(self.side_length) {
                    Ok(cell)
                } else {
                    Err(EngineError::CellOutOfBounds {
                        cell,
                        side_length: self.side_length,
                    })
                }
            })
            .collect::<Result<HashSet<_>, _>>()?;

        self.reset_to(alive);
        debug!(population = self.alive.len(), "loaded cells");
        Ok(())
    }

    fn reset_to(&mut self, alive: HashSet<Cell>) {
        self.alive = alive;
        self.grid = Grid::from_alive(self.side_length, &self.alive);
        self.generation = 0;
        self.last_stats = GenerationStats {
            population: self.alive.len(),
            ..GenerationStats::default()
        };
    }

    /// Whether `cell` is alive.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is outside the grid. Coordinates produced by
    /// [`SimulationEngine::neighbors_of`] are always in range.
    pub fn is_alive(&self, cell: Cell) -> bool {
        self.grid.get(cell)
    }

    /// Moore neighbors of `cell` that lie inside the grid (no wraparound)
    pub fn neighbors_of(&self, cell: Cell) -> Vec<Cell> {
        GameOfLifeRules::neighbor_offsets()
            .filter_map(|(dx, dy)| cell.offset(dx, dy, self.side_length))
            .collect()
    }

    fn live_neighbor_count(&self, cell: Cell) -> usize {
        self.neighbors_of(cell)
            .into_iter()
            .filter(|&neighbor| self.is_alive(neighbor))
            .count()
    }

    /// Advance the simulation by exactly one generation.
    ///
    /// Deaths and births are both computed against the pre-step state;
    /// the alive set and grid are replaced only after both passes finish.
    pub fn step(&mut self) {
        let deaths: HashSet<Cell> = self
            .alive
            .iter()
            .copied()
            .filter(|&cell| GameOfLifeRules::should_die(self.live_neighbor_count(cell)))
            .collect();

        // Full-domain scan for births
        let births: HashSet<Cell> = iproduct!(0..self.side_length, 0..self.side_length)
            .map(Cell::from)
            .filter(|cell| !self.alive.contains(cell))
            .filter(|&cell| GameOfLifeRules::should_be_born(self.live_neighbor_count(cell)))
            .collect();

        let next: HashSet<Cell> = self
            .alive
            .difference(&deaths)
            .copied()
            .chain(births.iter().copied())
            .collect();

        self.alive = next;
        self.grid = Grid::from_alive(self.side_length, &self.alive);
        self.generation += 1;
        self.last_stats = GenerationStats {
            generation: self.generation,
            births: births.len(),
            deaths: deaths.len(),
            population: self.alive.len(),
        };

        debug!(
            generation = self.generation,
            births = births.len(),
            deaths = deaths.len(),
            population = self.alive.len(),
            "advanced generation"
        );
    }

    /// Advance the simulation by `generations` steps
    pub fn step_n(&mut self, generations: u64) {
        for _ in 0..generations {
            self.step();
        }
    }

    /// Living cells, in no particular order
    pub fn alive_cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.alive.iter()
    }

    pub fn alive_set(&self) -> &HashSet<Cell> {
        &self.alive
    }

    /// Dense view of the current generation
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn population(&self) -> usize {
        self.alive.len()
    }

    pub fn side_length(&self) -> usize {
        self.side_length
    }

    /// Number of generations advanced since the last (re)initialization
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn last_stats(&self) -> GenerationStats {
        self.last_stats
    }
}

impl Default for SimulationEngine {
    fn default() -> Self {
        Self {
            side_length: DEFAULT_SIDE_LENGTH,
            alive: HashSet::new(),
            grid: Grid::new(DEFAULT_SIDE_LENGTH),
            generation: 0,
            last_stats: GenerationStats::default(),
        }
    }
}
