//! File I/O operations for Game of Life patterns

use super::{Cell, EngineError, Grid};
use anyhow::{Context, Result};
use std::path::Path;

/// A finite arrangement of living cells, relative to its own origin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<Cell>,
}

impl Pattern {
    /// Place the pattern in the middle of an N×N grid
    pub fn centered_in(&self, side_length: usize) -> Result<Vec<Cell>, EngineError> {
        if self.width > side_length || self.height > side_length {
            return Err(EngineError::PatternTooLarge {
                width: self.width,
                height: self.height,
                side_length,
            });
        }

        let row_offset = (side_length - self.height) / 2;
        let col_offset = (side_length - self.width) / 2;
        Ok(self
            .cells
            .iter()
            .map(|cell| Cell::new(cell.x + row_offset, cell.y + col_offset))
            .collect())
    }
}

/// Load a pattern from a text file
/// Format: Each line represents a row, with '1' (or '#') for alive cells and '0' (or '.') for dead cells
pub fn load_pattern_from_file<P: AsRef<Path>>(path: P) -> Result<Pattern> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read pattern file: {}", path.as_ref().display()))?;

    parse_pattern(&content)
        .with_context(|| format!("Failed to parse pattern from file: {}", path.as_ref().display()))
}

/// Parse a pattern from a string representation
///
/// Whitespace inside a row is ignored, so the `# . #` dump format parses too.
pub fn parse_pattern(content: &str) -> Result<Pattern> {
    let rows: Vec<Vec<char>> = content
        .lines()
        .map(|line| line.chars().filter(|ch| !ch.is_whitespace()).collect::<Vec<_>>())
        .filter(|row| !row.is_empty())
        .collect();

    if rows.is_empty() {
        anyhow::bail!("Pattern is empty or contains no valid rows");
    }

    let height = rows.len();
    let width = rows[0].len();
    let mut cells = Vec::new();

    for (row_idx, row) in rows.iter().enumerate() {
        if row.len() != width {
            anyhow::bail!(
                "Row {} has length {}, expected {} (all rows must have the same length)",
                row_idx,
                row.len(),
                width
            );
        }

        for (col_idx, &ch) in row.iter().enumerate() {
            match ch {
                '1' | '#' => cells.push(Cell::new(row_idx, col_idx)),
                '0' | '.' => {}
                _ => anyhow::bail!(
                    "Invalid character '{}' at position ({}, {}). Only '0'/'1' or '.'/'#' are allowed",
                    ch,
                    row_idx,
                    col_idx
                ),
            }
        }
    }

    Ok(Pattern { width, height, cells })
}

/// Save a grid to a text file
pub fn save_grid_to_file<P: AsRef<Path>>(grid: &Grid, path: P) -> Result<()> {
    let content = grid_to_string(grid);

    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write grid to file: {}", path.as_ref().display()))?;

    Ok(())
}

/// Convert a grid to the `0`/`1` pattern representation
pub fn grid_to_string(grid: &Grid) -> String {
    let n = grid.side_length();
    let mut result = String::with_capacity(n * (n + 1));

    for x in 0..n {
        for y in 0..n {
            result.push(if grid.get(Cell::new(x, y)) { '1' } else { '0' });
        }
        result.push('\n');
    }

    result
}

/// Create example pattern files
pub fn create_example_patterns<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let patterns = [
        ("glider.txt", "010\n001\n111\n"),
        ("blinker.txt", "000\n111\n000\n"),
        ("block.txt", "0000\n0110\n0110\n0000\n"),
        ("beacon.txt", "1100\n1100\n0011\n0011\n"),
    ];

    for (name, content) in patterns {
        std::fs::write(dir.join(name), content)
            .with_context(|| format!("Failed to write {}", name))?;
    }

    Ok(())
}
