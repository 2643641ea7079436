//! Output utilities

pub mod display;

pub use display::{renderer_for, Color, ColorOutput, GridFormatter, JsonRenderer, TerminalRenderer};
