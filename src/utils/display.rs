//! Display and output formatting utilities

use crate::config::{OutputFormat, RenderConfig};
use crate::driver::Renderer;
use crate::game_of_life::{Cell, GenerationStats, SimulationEngine};
use anyhow::{Context, Result};
use itertools::Itertools;
use serde::Serialize;
use std::io::Write;

/// Text views of an engine's grid
pub struct GridFormatter;

impl GridFormatter {
    /// `# ` for alive and `. ` for dead cells, one row per line
    pub fn format_grid(engine: &SimulationEngine) -> String {
        engine.grid().to_string()
    }

    /// Format a grid with coordinates
    pub fn format_grid_with_coords(engine: &SimulationEngine) -> String {
        let n = engine.side_length();
        let mut output = String::new();

        // Header with column numbers
        output.push_str("   ");
        for y in 0..n {
            output.push_str(&format!("{:2}", y % 10));
        }
        output.push('\n');

        for x in 0..n {
            output.push_str(&format!("{:2} ", x));
            for y in 0..n {
                output.push_str(if engine.is_alive(Cell::new(x, y)) { "██" } else { "··" });
            }
            output.push('\n');
        }

        output
    }

    /// One-line population summary
    pub fn format_stats(engine: &SimulationEngine) -> String {
        let stats = engine.last_stats();
        format!(
            "Generation {} | population {} | +{} -{}",
            engine.generation(),
            engine.population(),
            stats.births,
            stats.deaths
        )
    }
}

/// Draws each generation as coloured text
pub struct TerminalRenderer<W: Write> {
    out: W,
    clear_screen: bool,
    show_stats: bool,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, config: &RenderConfig) -> Self {
        Self {
            out,
            clear_screen: config.clear_screen,
            show_stats: config.show_stats,
        }
    }

    fn frame(&self, engine: &SimulationEngine) -> String {
        let n = engine.side_length();
        let alive_glyph = ColorOutput::colored("■ ", Color::Blue);
        let mut rows = vec![vec!["  "; n]; n];
        for cell in engine.alive_cells() {
            rows[cell.x][cell.y] = alive_glyph.as_str();
        }

        let mut output = String::new();
        if self.show_stats {
            output.push_str(&GridFormatter::format_stats(engine));
            output.push('\n');
        }
        for row in rows {
            output.push_str(row.concat().trim_end());
            output.push('\n');
        }
        output
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render(&mut self, engine: &SimulationEngine) -> Result<()> {
        let frame = self.frame(engine);
        if self.clear_screen {
            // Clear and home the cursor
            write!(self.out, "\x1b[2J\x1b[H")?;
        }
        self.out
            .write_all(frame.as_bytes())
            .context("Failed to write frame")?;
        self.out.flush()?;
        Ok(())
    }
}

#[derive(Serialize)]
struct JsonFrame {
    #[serde(flatten)]
    stats: GenerationStats,
    cells: Vec<(usize, usize)>,
}

/// Emits one JSON object per generation (newline-delimited)
pub struct JsonRenderer<W: Write> {
    out: W,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn render(&mut self, engine: &SimulationEngine) -> Result<()> {
        let frame = JsonFrame {
            stats: engine.last_stats(),
            cells: engine.alive_cells().sorted().map(|c| (c.x, c.y)).collect(),
        };
        serde_json::to_writer(&mut self.out, &frame).context("Failed to serialize frame")?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Build the renderer selected by the configuration
pub fn renderer_for<'a, W: Write + 'a>(config: &RenderConfig, out: W) -> Box<dyn Renderer + 'a> {
    match config.format {
        OutputFormat::Text => Box::new(TerminalRenderer::new(out, config)),
        OutputFormat::Json => Box::new(JsonRenderer::new(out)),
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    fn glider_engine() -> SimulationEngine {
        let cells = [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)].map(Cell::from);
        SimulationEngine::with_alive_cells(4, cells).unwrap()
    }

    #[test]
    fn test_grid_formatting() {
        let engine = glider_engine();

        let dump = GridFormatter::format_grid(&engine);
        assert_eq!(dump.lines().next(), Some(". # . . "));
        assert_eq!(dump.matches('#').count(), 5);

        let with_coords = GridFormatter::format_grid_with_coords(&engine);
        assert!(with_coords.starts_with("    0 1 2 3\n"));
    }

    #[test]
    fn test_terminal_renderer() {
        let mut config = Settings::default().render;
        config.clear_screen = false;
        let mut buffer = Vec::new();

        TerminalRenderer::new(&mut buffer, &config)
            .render(&glider_engine())
            .unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.starts_with("Generation 0 | population 5"));
        assert_eq!(output.matches('■').count(), 5);
        assert!(!output.contains("\x1b[2J"));
    }

    #[test]
    fn test_json_renderer() {
        let mut buffer = Vec::new();
        let mut engine = glider_engine();
        {
            let mut renderer = JsonRenderer::new(&mut buffer);
            renderer.render(&engine).unwrap();
            engine.step();
            renderer.render(&engine).unwrap();
        }

        let output = String::from_utf8(buffer).unwrap();
        let frames: Vec<serde_json::Value> = output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0]["generation"], 0);
        assert_eq!(frames[0]["population"], 5);
        assert_eq!(frames[0]["cells"][0], serde_json::json!([0, 1]));
        assert_eq!(frames[0]["births"], 0);
        assert_eq!(frames[1]["generation"], 1);
        assert_eq!(frames[1]["population"], 5);
        assert_eq!(frames[1]["births"], 2);
        assert_eq!(frames[1]["deaths"], 2);
    }

    #[test]
    fn test_color_output() {
        let colored = ColorOutput::colored("test", Color::Yellow);
        // Should either be colored or plain text
        assert!(colored.contains("test"));
        assert!(ColorOutput::success("OK").contains("OK"));
    }
}
