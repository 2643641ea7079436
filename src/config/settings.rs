//! Configuration settings for the Game of Life simulator

use crate::game_of_life::{Grid, DEFAULT_SIDE_LENGTH};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub simulation: SimulationConfig,
    pub driver: DriverConfig,
    pub render: RenderConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub side_length: usize,
    pub seed_probability: f64,
    /// Fixed RNG seed; `None` draws one from the OS
    #[serde(default)]
    pub seed: Option<u64>,
    /// Start from a pattern file instead of a random population
    #[serde(default)]
    pub pattern_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriverConfig {
    pub tick_interval_ms: u64,
    pub frame_rate: u32,
    /// Stop after this many generations; `None` runs until interrupted
    #[serde(default)]
    pub max_generations: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub clear_screen: bool,
    pub show_stats: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig {
                side_length: DEFAULT_SIDE_LENGTH,
                seed_probability: 0.5,
                seed: None,
                pattern_file: None,
            },
            driver: DriverConfig {
                tick_interval_ms: 200,
                frame_rate: 60,
                max_generations: None,
            },
            render: RenderConfig {
                format: OutputFormat::Text,
                clear_screen: true,
                show_stats: true,
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.simulation.side_length == 0 {
            anyhow::bail!("Grid side length must be positive");
        }
        if self.simulation.side_length > Grid::max_side_length() {
            anyhow::bail!(
                "Grid side length {} is too large (at most {})",
                self.simulation.side_length,
                Grid::max_side_length()
            );
        }

        let p = self.simulation.seed_probability;
        if !(0.0..=1.0).contains(&p) {
            anyhow::bail!("Seed probability must be within [0, 1], got {}", p);
        }

        if self.driver.frame_rate == 0 {
            anyhow::bail!("Frame rate must be positive");
        }

        if let Some(ref pattern) = self.simulation.pattern_file {
            if !pattern.exists() {
                anyhow::bail!("Pattern file does not exist: {}", pattern.display());
            }
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(side_length) = cli_overrides.side_length {
            self.simulation.side_length = side_length;
        }
        if let Some(probability) = cli_overrides.seed_probability {
            self.simulation.seed_probability = probability;
        }
        if let Some(seed) = cli_overrides.seed {
            self.simulation.seed = Some(seed);
        }
        if let Some(ref pattern) = cli_overrides.pattern_file {
            self.simulation.pattern_file = Some(pattern.clone());
        }
        if let Some(generations) = cli_overrides.max_generations {
            self.driver.max_generations = Some(generations);
        }
        if let Some(interval) = cli_overrides.tick_interval_ms {
            self.driver.tick_interval_ms = interval;
        }
        if let Some(format) = cli_overrides.format {
            self.render.format = format;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub side_length: Option<usize>,
    pub seed_probability: Option<f64>,
    pub seed: Option<u64>,
    pub pattern_file: Option<PathBuf>,
    pub max_generations: Option<u64>,
    pub tick_interval_ms: Option<u64>,
    pub format: Option<OutputFormat>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.simulation.side_length, 64);
        assert_eq!(settings.simulation.seed_probability, 0.5);
        assert_eq!(settings.driver.tick_interval_ms, 200);
        assert_eq!(settings.driver.frame_rate, 60);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_yaml_round_trip() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config/default.yaml");

        let mut settings = Settings::default();
        settings.simulation.seed = Some(99);
        settings.render.format = OutputFormat::Json;
        settings.to_file(&path).unwrap();

        let loaded = Settings::from_file(&path).unwrap();
        assert_eq!(loaded.simulation.seed, Some(99));
        assert_eq!(loaded.render.format, OutputFormat::Json);
    }

    #[test]
    fn test_optional_fields_default_to_none() {
        let yaml = "\
simulation:
  side_length: 16
  seed_probability: 0.25
driver:
  tick_interval_ms: 50
  frame_rate: 30
render:
  format: text
  clear_screen: false
  show_stats: true
";
        let settings: Settings = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(settings.simulation.seed, None);
        assert_eq!(settings.simulation.pattern_file, None);
        assert_eq!(settings.driver.max_generations, None);
    }

    #[test]
    fn test_validation_failures() {
        let mut settings = Settings::default();
        settings.simulation.seed_probability = 1.2;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.simulation.side_length = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.simulation.side_length = 1usize << 33;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.driver.frame_rate = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.simulation.pattern_file = Some(PathBuf::from("does/not/exist.txt"));
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_merge_with_cli() {
        let mut settings = Settings::default();
        settings.merge_with_cli(&CliOverrides {
            side_length: Some(32),
            seed: Some(5),
            max_generations: Some(10),
            format: Some(OutputFormat::Json),
            ..CliOverrides::default()
        });

        assert_eq!(settings.simulation.side_length, 32);
        assert_eq!(settings.simulation.seed, Some(5));
        assert_eq!(settings.simulation.seed_probability, 0.5);
        assert_eq!(settings.driver.max_generations, Some(10));
        assert_eq!(settings.render.format, OutputFormat::Json);
    }
}
