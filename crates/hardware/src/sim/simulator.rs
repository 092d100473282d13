//! Simulator: owns a core together with its configuration.
//!
//! Applies the configured reset policy at construction and offers bounded
//! runs on top of the core's single-edge `tick`.

use tracing::debug;

use crate::common::constants::Word;
use crate::common::error::SimError;
use crate::config::{Config, ResetPolicy};
use crate::core::Core;
use crate::sim::loader;
use crate::stats::CoreStats;

/// Top-level simulator: a core plus the configuration it was built from.
#[derive(Clone, Debug)]
pub struct Simulator {
    /// The core.
    pub core: Core,
    config: Config,
}

impl Simulator {
    /// Creates a simulator and runs the configured power-on reset sequence.
    pub fn new(config: &Config) -> Self {
        let mut sim = Self {
            core: Core::with_config(config),
            config: config.clone(),
        };
        sim.power_on();
        sim
    }

    /// Creates a simulator with `program` laid out at the program counter's
    /// fetch indices. The reset sequence runs after loading.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::ImageTooLarge`] if the program does not fit.
    pub fn with_program(config: &Config, program: &[Word]) -> Result<Self, SimError> {
        let mut core = Core::with_config(config);
        loader::load_program(&mut core, program)?;
        let mut sim = Self {
            core,
            config: config.clone(),
        };
        sim.power_on();
        Ok(sim)
    }

    fn power_on(&mut self) {
        match self.config.reset.policy {
            ResetPolicy::Immediate => {}
            ResetPolicy::PowerOn => {
                debug!(cycles = self.config.reset.hold_cycles, "power-on reset");
                self.core.reset(true);
                self.core.run(self.config.reset.hold_cycles);
                self.core.reset(false);
            }
        }
    }

    /// Configuration this simulator was built from.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Activity counters, reset ticks included.
    pub const fn stats(&self) -> &CoreStats {
        &self.core.stats
    }

    /// Advances the core by one clock edge.
    pub fn tick(&mut self) {
        self.core.tick();
    }

    /// Advances the core by `n` clock edges.
    pub fn run(&mut self, n: u64) {
        self.core.run(n);
    }

    /// Ticks until `stop` holds, checking before every edge.
    ///
    /// Returns the number of edges taken.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::TickLimit`] if `stop` still does not hold after
    /// `run.max_ticks` edges.
    pub fn run_until<F>(&mut self, mut stop: F) -> Result<u64, SimError>
    where
        F: FnMut(&Core) -> bool,
    {
        let limit = self.config.run.max_ticks;
        for taken in 0..=limit {
            if stop(&self.core) {
                return Ok(taken);
            }
            if taken < limit {
                self.core.tick();
            }
        }
        Err(SimError::TickLimit { limit })
    }
}
