//! Run loop that advances the engine on a fixed interval and hands each
//! generation to a renderer

use super::{FramePacer, Ticker};
use crate::config::DriverConfig;
use crate::game_of_life::SimulationEngine;
use anyhow::{Context, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Draws the current generation.
///
/// Renderers only get a shared reference; they read
/// [`SimulationEngine::alive_cells`] and never mutate the engine.
pub trait Renderer {
    fn render(&mut self, engine: &SimulationEngine) -> Result<()>;
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn render(&mut self, engine: &SimulationEngine) -> Result<()> {
        (**self).render(engine)
    }
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn render(&mut self, engine: &SimulationEngine) -> Result<()> {
        (**self).render(engine)
    }
}

/// Summary of a finished run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub generations: u64,
    pub frames: u64,
    pub final_population: usize,
    pub elapsed: Duration,
}

/// Drives a [`SimulationEngine`]: render, then step, once per tick
pub struct Driver {
    engine: SimulationEngine,
    config: DriverConfig,
    stop: Arc<AtomicBool>,
}

impl Driver {
    pub fn new(engine: SimulationEngine, config: DriverConfig) -> Self {
        Self {
            engine,
            config,
            stop: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Flag that ends the loop at the next frame when set
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop)
    }

    pub fn engine(&self) -> &SimulationEngine {
        &self.engine
    }

    fn finished(&self, generations: u64) -> bool {
        self.stop.load(Ordering::Relaxed)
            || self
                .config
                .max_generations
                .is_some_and(|max| generations >= max)
    }

    /// Run until the stop flag is raised or `max_generations` is reached.
    ///
    /// Each tick renders the current generation and then steps. The
    /// generation left after the last step is rendered once more on exit,
    /// so the final frame matches [`RunSummary::final_population`].
    pub fn run<R: Renderer>(&mut self, mut renderer: R) -> Result<RunSummary> {
        let mut ticker = Ticker::new(Duration::from_millis(self.config.tick_interval_ms));
        let mut pacer = FramePacer::new(self.config.frame_rate);
        let start = Instant::now();
        let mut generations = 0;
        let mut frames = 0;

        info!(
            tick_interval_ms = self.config.tick_interval_ms,
            frame_rate = self.config.frame_rate,
            max_generations = ?self.config.max_generations,
            population = self.engine.population(),
            "starting run loop"
        );

        while !self.finished(generations) {
            if ticker.is_due(start.elapsed()) {
                renderer
                    .render(&self.engine)
                    .with_context(|| format!("Failed to render generation {}", self.engine.generation()))?;
                self.engine.step();
                generations += 1;
                debug!(generation = self.engine.generation(), "tick");
            }

            frames += 1;
            pacer.wait();
        }

        if generations > 0 {
            renderer
                .render(&self.engine)
                .with_context(|| format!("Failed to render generation {}", self.engine.generation()))?;
        }

        let summary = RunSummary {
            generations,
            frames,
            final_population: self.engine.population(),
            elapsed: start.elapsed(),
        };
        info!(
            generations = summary.generations,
            frames = summary.frames,
            population = summary.final_population,
            "run loop finished"
        );
        Ok(summary)
    }
}
