//! Conway's Game of Life on a bounded square grid
//!
//! The [`game_of_life::SimulationEngine`] owns the population and advances it
//! one generation at a time; the [`driver`] paces those advances and hands
//! each generation to a renderer from [`utils`].

pub mod config;
pub mod driver;
pub mod game_of_life;
pub mod utils;

pub use config::Settings;
pub use game_of_life::{Cell, SimulationEngine};

use anyhow::{Context, Result};
use config::SimulationConfig;
use game_of_life::load_pattern_from_file;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

/// Build an engine seeded from a pattern file or, failing that, at random
pub fn build_engine(config: &SimulationConfig) -> Result<SimulationEngine> {
    let mut engine =
        SimulationEngine::new(config.side_length).context("Failed to create simulation engine")?;

    if let Some(ref path) = config.pattern_file {
        let pattern = load_pattern_from_file(path)?;
        let cells = pattern
            .centered_in(config.side_length)
            .with_context(|| format!("Cannot place pattern {}", path.display()))?;
        engine.load_cells(cells)?;
        info!(pattern = %path.display(), population = engine.population(), "seeded from pattern");
    } else {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        engine
            .initialize(config.seed_probability, &mut rng)
            .context("Failed to initialize grid")?;
    }

    Ok(engine)
}
