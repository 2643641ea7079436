//! Fixed-interval driver around the simulation engine

pub mod runner;
pub mod signal;
pub mod ticker;

pub use runner::{Driver, Renderer, RunSummary};
pub use signal::stop_on_ctrl_c;
pub use ticker::{FramePacer, Ticker};
