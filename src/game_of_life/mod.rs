//! Game of Life core functionality

pub mod cell;
pub mod engine;
pub mod error;
pub mod grid;
pub mod io;
pub mod rules;

pub use cell::Cell;
pub use engine::{GenerationStats, SimulationEngine, DEFAULT_SIDE_LENGTH};
pub use error::EngineError;
pub use grid::Grid;
pub use io::{
    create_example_patterns, grid_to_string, load_pattern_from_file, parse_pattern, save_grid_to_file, Pattern,
};
pub use rules::GameOfLifeRules;
