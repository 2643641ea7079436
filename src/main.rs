//! Main CLI application for the Game of Life simulator

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use game_of_life::{
    build_engine,
    config::{CliOverrides, OutputFormat, Settings},
    driver::{stop_on_ctrl_c, Driver},
    game_of_life::{create_example_patterns, save_grid_to_file},
    utils::{renderer_for, ColorOutput, GridFormatter},
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "game_of_life")]
#[command(about = "Conway's Game of Life on a bounded grid")]
#[command(version = "0.1.0")]
struct Cli {
    /// Log engine and driver events (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args, Debug, Default)]
struct SimulationArgs {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.yaml")]
    config: PathBuf,

    /// Grid side length (overrides config)
    #[arg(short, long)]
    side_length: Option<usize>,

    /// Probability that a cell starts alive (overrides config)
    #[arg(short, long)]
    probability: Option<f64>,

    /// RNG seed for a reproducible initial population
    #[arg(long)]
    seed: Option<u64>,

    /// Start from a pattern file instead of a random population
    #[arg(long)]
    pattern: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the simulation, rendering each generation
    Run {
        #[command(flatten)]
        sim: SimulationArgs,

        /// Stop after this many generations
        #[arg(short, long)]
        generations: Option<u64>,

        /// Milliseconds between generations (overrides config)
        #[arg(short, long)]
        interval_ms: Option<u64>,

        /// Output format (overrides config)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Print the grid as text, optionally after advancing it
    Dump {
        #[command(flatten)]
        sim: SimulationArgs,

        /// Generations to advance before printing
        #[arg(short, long, default_value_t = 0)]
        generations: u64,

        /// Label rows and columns
        #[arg(long)]
        coords: bool,

        /// Also save the grid as a `0`/`1` pattern file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Create example configuration and pattern files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Run { sim, generations, interval_ms, format } => {
            run_command(sim, generations, interval_ms, format)
        }
        Commands::Dump { sim, generations, coords, output } => {
            dump_command(sim, generations, coords, output.as_deref())
        }
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "info,game_of_life=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

/// Load the config file (or defaults) and apply command line overrides
fn load_settings(sim: &SimulationArgs, overrides: CliOverrides) -> Result<Settings> {
    let mut settings = if sim.config.exists() {
        Settings::from_file(&sim.config)
            .with_context(|| format!("Failed to load config from {}", sim.config.display()))?
    } else {
        eprintln!(
            "{}",
            ColorOutput::warning(&format!(
                "Config file {} not found, using defaults",
                sim.config.display()
            ))
        );
        Settings::default()
    };

    settings.merge_with_cli(&CliOverrides {
        side_length: sim.side_length,
        seed_probability: sim.probability,
        seed: sim.seed,
        pattern_file: sim.pattern.clone(),
        ..overrides
    });
    settings.validate().context("Configuration validation failed")?;
    Ok(settings)
}

fn run_command(
    sim: SimulationArgs,
    generations: Option<u64>,
    interval_ms: Option<u64>,
    format: Option<OutputFormat>,
) -> Result<()> {
    let settings = load_settings(
        &sim,
        CliOverrides {
            max_generations: generations,
            tick_interval_ms: interval_ms,
            format,
            ..CliOverrides::default()
        },
    )?;

    let engine = build_engine(&settings.simulation)?;
    let mut driver = Driver::new(engine, settings.driver.clone());
    stop_on_ctrl_c(driver.stop_handle())?;
    let stdout = std::io::stdout();
    let renderer = renderer_for(&settings.render, stdout.lock());

    let summary = driver.run(renderer).context("Simulation run failed")?;

    if settings.render.format == OutputFormat::Text {
        println!(
            "{}",
            ColorOutput::success(&format!(
                "Ran {} generation(s) in {:.3}s, final population {}",
                summary.generations,
                summary.elapsed.as_secs_f64(),
                summary.final_population
            ))
        );
    }

    Ok(())
}

fn dump_command(sim: SimulationArgs, generations: u64, coords: bool, output: Option<&Path>) -> Result<()> {
    let settings = load_settings(&sim, CliOverrides::default())?;
    let mut engine = build_engine(&settings.simulation)?;
    engine.step_n(generations);

    println!("{}", GridFormatter::format_stats(&engine));
    if coords {
        print!("{}", GridFormatter::format_grid_with_coords(&engine));
    } else {
        print!("{}", GridFormatter::format_grid(&engine));
    }

    if let Some(path) = output {
        save_grid_to_file(engine.grid(), path)?;
        println!("{}", ColorOutput::success(&format!("Saved grid to {}", path.display())));
    }

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    let pattern_dir = directory.join("patterns");

    for dir in [&config_dir, &pattern_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    write_config(&config_dir.join("default.yaml"), &Settings::default(), force)?;

    create_example_patterns(&pattern_dir).context("Failed to create example patterns")?;
    println!("Created example patterns in: {}", pattern_dir.display());

    let examples_dir = config_dir.join("examples");

    // Small blinker run that terminates on its own
    let mut blinker = Settings::default();
    blinker.simulation.side_length = 8;
    blinker.simulation.pattern_file = Some(pattern_dir.join("blinker.txt"));
    blinker.driver.max_generations = Some(10);
    write_config(&examples_dir.join("blinker.yaml"), &blinker, force)?;

    // Seeded random soup streamed as JSON
    let mut soup = Settings::default();
    soup.simulation.seed = Some(42);
    soup.driver.tick_interval_ms = 0;
    soup.driver.max_generations = Some(100);
    soup.render.format = OutputFormat::Json;
    write_config(&examples_dir.join("soup.yaml"), &soup, force)?;

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit configuration files in {}", config_dir.display());
    println!("2. Add your own patterns to {}", pattern_dir.display());
    println!("3. Run: cargo run -- run --config config/default.yaml");

    Ok(())
}

fn write_config(path: &Path, settings: &Settings, force: bool) -> Result<()> {
    if path.exists() && !force {
        println!("Skipped: {} (already exists)", path.display());
        return Ok(());
    }
    settings
        .to_file(&path.to_path_buf())
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Created: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "game_of_life",
            "run",
            "--config",
            "test.yaml",
            "--generations",
            "5",
            "--seed",
            "7",
            "--format",
            "json",
        ]);
        assert!(cli.is_ok());

        let cli = Cli::try_parse_from(["game_of_life", "-v", "dump", "--coords", "-g", "3"]);
        assert!(cli.is_ok());
    }

    #[test]
    fn test_setup_command() {
        let temp_dir = tempdir().unwrap();
        let result = setup_command(temp_dir.path().to_path_buf(), false);

        assert!(result.is_ok());
        assert!(temp_dir.path().join("config/default.yaml").exists());
        assert!(temp_dir.path().join("patterns/glider.txt").exists());

        let blinker = Settings::from_file(&temp_dir.path().join("config/examples/blinker.yaml")).unwrap();
        assert_eq!(blinker.driver.max_generations, Some(10));
    }

    #[test]
    fn test_load_settings_applies_overrides() {
        let temp_dir = tempdir().unwrap();
        let sim = SimulationArgs {
            config: temp_dir.path().join("missing.yaml"),
            side_length: Some(12),
            seed: Some(3),
            ..SimulationArgs::default()
        };

        let settings = load_settings(
            &sim,
            CliOverrides {
                max_generations: Some(4),
                ..CliOverrides::default()
            },
        )
        .unwrap();

        assert_eq!(settings.simulation.side_length, 12);
        assert_eq!(settings.simulation.seed, Some(3));
        assert_eq!(settings.driver.max_generations, Some(4));
    }

    #[test]
    fn test_dump_saves_pattern_that_reloads() {
        let temp_dir = tempdir().unwrap();
        let pattern = temp_dir.path().join("blinker.txt");
        std::fs::write(&pattern, "111\n").unwrap();
        let output = temp_dir.path().join("out/grid.txt");
        let sim = SimulationArgs {
            config: temp_dir.path().join("missing.yaml"),
            side_length: Some(5),
            pattern: Some(pattern),
            ..SimulationArgs::default()
        };

        dump_command(sim, 1, false, Some(&output)).unwrap();

        // One step turns the centred horizontal blinker vertical
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "00000\n00100\n00100\n00100\n00000\n");
    }

    #[test]
    fn test_dump_output_flag_parses() {
        let cli = Cli::try_parse_from(["game_of_life", "dump", "-g", "2", "--output", "grid.txt"]).unwrap();
        match cli.command {
            Commands::Dump { generations, output, .. } => {
                assert_eq!(generations, 2);
                assert_eq!(output, Some(PathBuf::from("grid.txt")));
            }
            _ => panic!("expected dump"),
        }
    }

    #[test]
    fn test_load_settings_rejects_bad_probability() {
        let temp_dir = tempdir().unwrap();
        let sim = SimulationArgs {
            config: temp_dir.path().join("missing.yaml"),
            probability: Some(2.0),
            ..SimulationArgs::default()
        };
        assert!(load_settings(&sim, CliOverrides::default()).is_err());
    }
}
